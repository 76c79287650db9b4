#[derive(thiserror::Error, Debug)]
pub enum GroupRingError {
    /// Error when a piece of an input expression matches no monomial pattern.
    #[error("InvalidTerm: `{0}` is not a valid monomial")]
    InvalidTerm(String),
    /// Error when creating a ring with an invalid modulus (p <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, p) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),

    #[error("Input p = {0} must be a prime number")]
    NotPrime(u64),
    #[error("Input t = {t} must lie in 1..={max} for p = {p}")]
    RootOutOfRange { t: u64, p: u64, max: u64 },
    #[error("{t} is not a primitive root modulo {p}")]
    NotPrimitiveRoot { t: u64, p: u64 },
    #[error("Internal error: t*r - 1 = {0} is not a multiple of p = {1}")]
    DivisibilityCheckFailed(u64, u64),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
