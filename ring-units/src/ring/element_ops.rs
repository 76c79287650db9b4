//! Multiplication and powers of group-ring elements, with per-pair
//! contribution traces for step-by-step display.

use crate::element::GroupRingElement;
use crate::ring::Ring;

use itertools::Itertools;

use serde::{Deserialize, Serialize};

/// One pairwise term multiplication, retained for explanatory display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub coef_a: i64,
    pub exp_a: u64,
    pub coef_b: i64,
    pub exp_b: u64,
    /// Exponent sum before reduction.
    pub raw_exp: u64,
    /// Exponent sum reduced modulo the ring modulus.
    pub reduced_exp: u64,
    pub coef_product: i64,
}

/// One step of [`power_steps`]: the partial result after multiplying the
/// accumulator by the base once more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerStep {
    /// 1-based step number.
    pub step: u64,
    pub contributions: Vec<Contribution>,
    pub partial: GroupRingElement,
}

/// Multiplies two elements, reducing exponents modulo the ring modulus.
///
/// Every pair of non-zero terms contributes `coef_a * coef_b` at exponent
/// `(exp_a + exp_b) mod p`; sums accumulating to zero are dropped, so the
/// result is canonical. The second return value records one
/// [`Contribution`] per pair in iteration order.
///
/// # Example
///
/// ```
/// use ring_units::{GroupRingElement, Ring, multiply};
///
/// let ring = Ring::try_with(5).unwrap();
/// let a = GroupRingElement::from_terms([(1, 1), (2, 1)]);
/// let b = GroupRingElement::from_terms([(1, 1)]);
/// let (product, trace) = multiply(&a, &b, &ring);
/// assert_eq!(product, GroupRingElement::from_terms([(2, 1), (3, 1)]));
/// assert_eq!(trace.len(), 2);
/// ```
pub fn multiply(
    a: &GroupRingElement,
    b: &GroupRingElement,
    ring: &Ring,
) -> (GroupRingElement, Vec<Contribution>) {
    let contributions: Vec<Contribution> = a
        .terms()
        .cartesian_product(b.terms())
        .map(|((&exp_a, &coef_a), (&exp_b, &coef_b))| {
            let raw_exp = exp_a + exp_b;
            Contribution {
                coef_a,
                exp_a,
                coef_b,
                exp_b,
                raw_exp,
                reduced_exp: ring.reduce(raw_exp),
                coef_product: coef_a * coef_b,
            }
        })
        .collect();

    let product = GroupRingElement::from_terms(
        contributions
            .iter()
            .map(|contribution| (contribution.reduced_exp, contribution.coef_product)),
    );

    (product, contributions)
}

/// Raises `base` to the `exponent`-th power by repeated multiplication.
///
/// `exponent = 0` yields the multiplicative identity `g^0` for every base,
/// including the zero element. There is no fast-exponentiation shortcut;
/// operand sizes are bounded by the modulus and stay small in practice.
///
/// # Example
///
/// ```
/// use ring_units::{GroupRingElement, Ring, power};
///
/// let ring = Ring::try_with(5).unwrap();
/// let g = GroupRingElement::from_terms([(1, 1)]);
/// assert_eq!(power(&g, 3, &ring), GroupRingElement::from_terms([(3, 1)]));
/// assert_eq!(power(&g, 0, &ring), GroupRingElement::identity());
/// ```
pub fn power(base: &GroupRingElement, exponent: u64, ring: &Ring) -> GroupRingElement {
    let mut acc = GroupRingElement::identity();
    for _ in 0..exponent {
        acc = multiply(&acc, base, ring).0;
    }

    acc
}

/// As [`power`], but every multiplication step surfaces its contribution
/// trace and partial result.
pub fn power_steps(
    base: &GroupRingElement,
    exponent: u64,
    ring: &Ring,
) -> (GroupRingElement, Vec<PowerStep>) {
    let mut steps = Vec::with_capacity(exponent as usize);
    let mut acc = GroupRingElement::identity();
    for step in 1..=exponent {
        let (partial, contributions) = multiply(&acc, base, ring);
        steps.push(PowerStep {
            step,
            contributions,
            partial: partial.clone(),
        });
        acc = partial;
    }

    (acc, steps)
}
