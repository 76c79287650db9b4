//! Sparse group-ring elements and their textual codec.

pub mod format;
pub mod parse;

pub use format::{format_element, format_monomial};
pub use parse::parse_element;

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::ops::Add;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// A formal integer combination of powers of the generator `g`.
///
/// Stored as a map from exponent to coefficient. The representation is kept
/// canonical: a zero coefficient is never stored, and accumulating a term to
/// zero removes its key. Exponents are traversed in ascending order.
///
/// Every operation returns a fresh element; no caller-visible instance is
/// mutated in place.
///
/// # Example
///
/// ```
/// use ring_units::GroupRingElement;
///
/// let e = GroupRingElement::from_terms([(2, 1), (3, -1), (4, 1)]);
/// assert_eq!(e.coefficient(3), -1);
/// assert_eq!(e.coefficient(7), 0);
/// assert_eq!(e.to_string(), "g^2 - g^3 + g^4");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRingElement {
    terms: BTreeMap<u64, i64>,
}

impl GroupRingElement {
    /// The zero element (empty combination).
    pub fn zero() -> Self {
        Self::default()
    }

    /// The multiplicative identity `g^0`.
    pub fn identity() -> Self {
        Self {
            terms: BTreeMap::from([(0, 1)]),
        }
    }

    /// Builds an element from `(exponent, coefficient)` pairs.
    ///
    /// Coefficients of repeated exponents accumulate; terms summing to zero
    /// are dropped.
    pub fn from_terms(terms: impl IntoIterator<Item = (u64, i64)>) -> Self {
        let mut element = Self::default();
        for (exp, coef) in terms {
            element.accumulate(exp, coef);
        }
        element
    }

    /// Builds the element with coefficient 1 at every listed exponent.
    ///
    /// A duplicated exponent accumulates to a coefficient above 1.
    pub fn from_exponents(exponents: impl IntoIterator<Item = u64>) -> Self {
        Self::from_terms(exponents.into_iter().map(|exp| (exp, 1)))
    }

    /// The coefficient at `exponent`, 0 when the term is absent.
    pub fn coefficient(&self, exponent: u64) -> i64 {
        self.terms.get(&exponent).copied().unwrap_or(0)
    }

    /// Iterates terms as `(&exponent, &coefficient)` in ascending exponent
    /// order.
    pub fn terms(&self) -> btree_map::Iter<'_, u64, i64> {
        self.terms.iter()
    }

    /// Number of stored (non-zero) terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns a new element with every coefficient multiplied by `factor`.
    ///
    /// Scaling by 0 yields the zero element.
    pub fn scale(&self, factor: i64) -> Self {
        Self::from_terms(self.terms().map(|(&exp, &coef)| (exp, coef * factor)))
    }

    fn accumulate(&mut self, exponent: u64, coefficient: i64) {
        let entry = self.terms.entry(exponent).or_insert(0);
        *entry += coefficient;
        if *entry == 0 {
            self.terms.remove(&exponent);
        }
    }
}

/// Coefficient-wise addition; exponents are not reduced here.
impl Add for GroupRingElement {
    type Output = GroupRingElement;

    fn add(self, rhs: GroupRingElement) -> GroupRingElement {
        GroupRingElement::from_terms(self.terms.into_iter().chain(rhs.terms))
    }
}

impl Add for &GroupRingElement {
    type Output = GroupRingElement;

    fn add(self, rhs: &GroupRingElement) -> GroupRingElement {
        GroupRingElement::from_terms(
            self.terms()
                .chain(rhs.terms())
                .map(|(&exp, &coef)| (exp, coef)),
        )
    }
}

impl Zero for GroupRingElement {
    fn zero() -> Self {
        GroupRingElement::zero()
    }

    fn is_zero(&self) -> bool {
        GroupRingElement::is_zero(self)
    }
}

impl fmt::Display for GroupRingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_element(self))
    }
}
