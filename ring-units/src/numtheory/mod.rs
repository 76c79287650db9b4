//! Number theory kernel: primality, distinct prime factors, modular
//! exponentiation and the primitive-root test. Pure functions, no state.

use num_integer::Integer;

/// Computes the greatest common divisor of two numbers.
pub fn gcd(a: u64, b: u64) -> u64 {
    a.gcd(&b)
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        if b.is_negative() {
            return (-b, 0, -1);
        }

        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    let x = y1 - (b / a) * x1;
    let y = x1;
    (g, x, y)
}

/// Computes `base^exp mod modulus` by square-and-multiply.
///
/// Intermediate products are taken in `u128`, so any `u64` modulus is safe.
///
/// # Example
///
/// ```
/// # use ring_units::numtheory::pow_mod;
/// assert_eq!(pow_mod(2, 10, 1000), 24);
/// assert_eq!(pow_mod(3, 0, 7), 1);
/// assert_eq!(pow_mod(5, 3, 1), 0);
/// ```
pub fn pow_mod(base: u64, exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }

    let m = modulus as u128;
    let mut result = 1u128;
    let mut acc = base as u128 % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * acc % m;
        }
        acc = acc * acc % m;
        exp >>= 1;
    }

    result as u64
}

/// Deterministic primality test by trial division up to `⌊√n⌋`.
///
/// # Example
///
/// ```
/// # use ring_units::numtheory::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(13));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91)); // 7 * 13
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }

    true
}

/// Returns the distinct prime factors of `n` in ascending order, each once.
pub fn prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut x = n;
    let mut d = 2u64;
    while d * d <= x {
        if x % d == 0 {
            factors.push(d);
            while x % d == 0 {
                x /= d;
            }
        }
        d = if d == 2 { 3 } else { d + 2 };
    }
    if x > 1 {
        factors.push(x);
    }

    factors
}

/// Tests whether `a` is a primitive root modulo the prime `p`.
///
/// For `p = 2` only the residue 1 qualifies. Otherwise `a` must be coprime
/// to `p` and must satisfy `a^((p-1)/q) != 1 (mod p)` for every distinct
/// prime `q` dividing `p - 1`.
///
/// # Example
///
/// ```
/// # use ring_units::numtheory::is_primitive_root;
/// assert!(is_primitive_root(2, 5));
/// assert!(!is_primitive_root(4, 5)); // 4^2 = 16 = 1 (mod 5)
/// assert!(is_primitive_root(3, 7));
/// ```
pub fn is_primitive_root(a: u64, p: u64) -> bool {
    if p == 2 {
        return a % 2 == 1;
    }
    if gcd(a, p) != 1 {
        return false;
    }

    let phi = p - 1;
    prime_factors(phi)
        .into_iter()
        .all(|q| pow_mod(a, phi / q, p) != 1)
}
