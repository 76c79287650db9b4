//! Symbolic arithmetic in the integer group ring of a cyclic group of prime
//! order `p`, and the construction of a family of unit elements in that ring
//! from a primitive root `t` modulo `p`.
//!
//! Elements are finite integer combinations of powers of a generator `g`,
//! with exponents reduced modulo `p`. The crate parses textual expressions
//! such as `g^2 - g^3 + g^4` into a canonical sparse form, multiplies and
//! raises such elements to integer powers (with per-term traces for
//! step-by-step display), and derives the unit family `u_i = S1·S2_i - k·ĝ`
//! from a validated `(p, t)` pair.

pub mod element;
pub mod errors;
pub mod numtheory;
pub mod ring;
pub mod units;

pub use element::{GroupRingElement, format_element, format_monomial, parse_element};
pub use errors::GroupRingError;
pub use ring::{Contribution, PowerStep, Ring, multiply, power, power_steps};
pub use units::{ConstructedUnit, UnitConstructionResult, construct_units};
