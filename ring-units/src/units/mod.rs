//! Construction of the unit family `u_i` in the integer group ring of the
//! cyclic group of prime order `p`, from a primitive root `t` modulo `p`.
//!
//! With `r = t^-1 mod p` and `k = (t*r - 1) / p`, the construction forms the
//! exponent subsets `S1 = {0, t, 2t, ...}` (size `r`) and, for each index
//! `i`, `S2_i = {0, t^i, 2t^i, ...}` (size `t`), and expands
//! `u_i = S1 · S2_i - k·ĝ` where `ĝ` is the sum of all group elements.
//! The underlying number theory guarantees each `u_i` is a unit; the
//! formula is taken as given here and exercised against worked examples in
//! the tests.

use crate::element::GroupRingElement;
use crate::errors::GroupRingError;
use crate::numtheory::{is_prime, is_primitive_root};
use crate::ring::{Ring, multiply};

use serde::{Deserialize, Serialize};

use tracing::debug;

/// One constructed unit, with the data needed to display it both factored
/// and expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructedUnit {
    /// Index `i` in `1..=(p-3)/2`.
    pub index: u64,
    /// Exponent subset `S2_i`, size `t`.
    pub s2: Vec<u64>,
    /// Factored rendering `u{i} = (1 + g{e} + ...)(1 + g{e} + ...) − {k}ˆg`.
    pub factored: String,
    /// The expanded ring element.
    pub element: GroupRingElement,
}

/// The full outcome of a unit construction for a validated `(p, t)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitConstructionResult {
    /// The prime `p`.
    pub p: u64,
    /// The chosen primitive root `t` modulo `p`.
    pub t: u64,
    /// Group order, equal to `p`.
    pub n: u64,
    /// `t^-1 mod p`.
    pub r: u64,
    /// Correction constant `(t*r - 1) / p`.
    pub k: i64,
    /// Exponent subset `S1`, size `r`.
    pub s1: Vec<u64>,
    /// The unit family, one entry per index; empty for `p < 5`.
    pub units: Vec<ConstructedUnit>,
}

impl UnitConstructionResult {
    /// Serializes the result as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GroupRingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restores a result previously exported with [`Self::to_json`].
    pub fn from_json(data: &str) -> Result<Self, GroupRingError> {
        Ok(serde_json::from_str(data)?)
    }
}

/// Renders an exponent list as the factored display `(1 + g2 + g4)` used in
/// the unit tables. The leading 0 exponent renders as `1`; the compact form
/// omits the caret.
fn format_exponent_factor(exponents: &[u64]) -> String {
    let mut parts = vec!["1".to_string()];
    parts.extend(exponents.iter().skip(1).map(|exp| format!("g{}", exp)));

    format!("({})", parts.join(" + "))
}

/// Builds the unit family `u_i` for a prime `p` and a primitive root `t`.
///
/// # Errors
///
/// * `NotPrime` when `p` is not prime.
/// * `RootOutOfRange` when `t` is outside `1..=p-1`.
/// * `NotPrimitiveRoot` when `t` does not generate the nonzero residues.
/// * `DivisibilityCheckFailed` when `t*r - 1` is not an exact multiple of
///   `p`; this cannot happen for a true modular inverse and indicates a
///   kernel bug rather than bad input.
///
/// A failure aborts the whole construction; no partial output is returned.
///
/// # Example
///
/// ```
/// use ring_units::construct_units;
///
/// let result = construct_units(5, 2).unwrap();
/// assert_eq!(result.r, 3);
/// assert_eq!(result.k, 1);
/// assert_eq!(result.units.len(), 1);
/// assert_eq!(result.units[0].element.to_string(), "g^2 - g^3 + g^4");
/// ```
pub fn construct_units(p: u64, t: u64) -> Result<UnitConstructionResult, GroupRingError> {
    // Input validation
    if !is_prime(p) {
        return Err(GroupRingError::NotPrime(p));
    }
    let max_root = (p - 1).max(1);
    if t < 1 || t > max_root {
        return Err(GroupRingError::RootOutOfRange { t, p, max: max_root });
    }
    if !is_primitive_root(t, p) {
        return Err(GroupRingError::NotPrimitiveRoot { t, p });
    }

    let ring = Ring::try_with(p)?;

    // Step 1) r = t^-1 mod p; t is coprime to p, so the inverse exists.
    let r = ring.inv(t)?;

    // Step 2) k = (t*r - 1) / p, guarded by an exact-divisibility check.
    let tr1 = t * r - 1;
    if tr1 % p != 0 {
        return Err(GroupRingError::DivisibilityCheckFailed(tr1, p));
    }
    let k = (tr1 / p) as i64;
    debug!(p, t, r, k, "derived construction parameters");

    // Step 3) S1 = {0} ∪ {j*t mod p : j = 1..r-1}, size r.
    let s1: Vec<u64> = std::iter::once(0)
        .chain((1..r).map(|j| ring.mul(j, t)))
        .collect();
    let s1_element = GroupRingElement::from_exponents(s1.iter().copied());
    let s1_factor = format_exponent_factor(&s1);

    // ĝ has coefficient 1 at every exponent, so -k·ĝ subtracts k uniformly.
    let minus_k_ghat = GroupRingElement::from_exponents(0..p).scale(-k);

    // Step 4) one S2_i and one unit per index i; the range is empty for p < 5.
    let index_max = p.saturating_sub(3) / 2;
    let mut units = Vec::with_capacity(index_max as usize);
    for index in 1..=index_max {
        let base = ring.pow(t, index);
        let s2: Vec<u64> = std::iter::once(0)
            .chain((1..t).map(|j| ring.mul(j, base)))
            .collect();
        let s2_element = GroupRingElement::from_exponents(s2.iter().copied());

        // Step 5) u_i = S1·S2_i - k·ĝ.
        let (product, _) = multiply(&s1_element, &s2_element, &ring);
        let element = &product + &minus_k_ghat;
        let factored = format!(
            "u{} = {}{} \u{2212} {}\u{2C6}g",
            index,
            s1_factor,
            format_exponent_factor(&s2),
            k
        );
        debug!(index, terms = element.len(), "expanded unit");

        units.push(ConstructedUnit {
            index,
            s2,
            factored,
            element,
        });
    }

    Ok(UnitConstructionResult {
        p,
        t,
        n: p,
        r,
        k,
        s1,
        units,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_order() {
        assert!(matches!(
            construct_units(6, 5),
            Err(GroupRingError::NotPrime(6))
        ));
        assert!(matches!(
            construct_units(5, 0),
            Err(GroupRingError::RootOutOfRange { t: 0, p: 5, max: 4 })
        ));
        assert!(matches!(
            construct_units(5, 7),
            Err(GroupRingError::RootOutOfRange { t: 7, p: 5, max: 4 })
        ));
        // 4 has order 2 modulo 5
        assert!(matches!(
            construct_units(5, 4),
            Err(GroupRingError::NotPrimitiveRoot { t: 4, p: 5 })
        ));
    }

    #[test]
    fn test_empty_family_below_five() -> Result<(), GroupRingError> {
        let result = construct_units(2, 1)?;
        assert_eq!(result.r, 1);
        assert_eq!(result.k, 0);
        assert_eq!(result.s1, vec![0]);
        assert!(result.units.is_empty());

        let result = construct_units(3, 2)?;
        assert_eq!(result.r, 2);
        assert_eq!(result.k, 1);
        assert!(result.units.is_empty());
        Ok(())
    }

    #[test]
    fn test_subset_sizes() -> Result<(), GroupRingError> {
        let result = construct_units(7, 3)?;
        assert_eq!(result.s1.len(), result.r as usize);
        for unit in &result.units {
            assert_eq!(unit.s2.len(), result.t as usize);
        }
        Ok(())
    }

    #[test]
    fn test_factored_rendering() -> Result<(), GroupRingError> {
        let result = construct_units(5, 2)?;
        assert_eq!(
            result.units[0].factored,
            "u1 = (1 + g2 + g4)(1 + g2) \u{2212} 1\u{2C6}g"
        );
        Ok(())
    }

    #[test]
    fn test_json_round_trip() -> Result<(), GroupRingError> {
        let result = construct_units(7, 3)?;
        let restored = UnitConstructionResult::from_json(&result.to_json()?)?;
        assert_eq!(restored, result);
        Ok(())
    }
}
