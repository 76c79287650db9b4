//! Parser for textual group-ring expressions.
//!
//! Accepts a free-form sum of monomials in `g` with integer coefficients,
//! e.g. `g^2 - g^3 + g^4` or `1 + 2*g - g^4`. The `*` between coefficient
//! and `g` is optional, and Unicode minus variants are accepted.

use crate::element::GroupRingElement;
use crate::errors::GroupRingError;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `C*g^N` / `Cg^N` / `C*g` / `Cg` with a signed integer coefficient.
    static ref COEF_MONOMIAL_RE: Regex =
        Regex::new(r"^([+-]?\d+)\*?g(?:\^(\d+))?$").unwrap();
    /// `g^N` / `g` with an optional bare sign.
    static ref BARE_MONOMIAL_RE: Regex =
        Regex::new(r"^([+-]?)g(?:\^(\d+))?$").unwrap();
    /// A constant term.
    static ref CONSTANT_RE: Regex = Regex::new(r"^[+-]?\d+$").unwrap();
}

/// Parses `text` into a canonical [`GroupRingElement`].
///
/// Subtraction is rewritten as signed addition, the pieces are parsed
/// independently and accumulated, and terms summing to zero are dropped.
/// Input that is empty after normalization yields the zero element.
///
/// # Errors
///
/// Returns `GroupRingError::InvalidTerm` naming the offending piece when a
/// piece matches none of the monomial patterns.
///
/// # Example
///
/// ```
/// use ring_units::parse_element;
///
/// let e = parse_element("1 + 2*g - g^4").unwrap();
/// assert_eq!(e.coefficient(0), 1);
/// assert_eq!(e.coefficient(1), 2);
/// assert_eq!(e.coefficient(4), -1);
///
/// assert!(parse_element("2x").is_err());
/// ```
pub fn parse_element(text: &str) -> Result<GroupRingElement, GroupRingError> {
    let mut terms: Vec<(u64, i64)> = Vec::new();
    for piece in normalize(text).split('+').filter(|piece| !piece.is_empty()) {
        terms.push(parse_monomial(piece)?);
    }

    Ok(GroupRingElement::from_terms(terms))
}

/// Collapses whitespace, maps Unicode minus variants to `-`, strips the
/// remaining spaces and rewrites every `-` to `+-` so the input splits into
/// signed addends on `+`.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('\u{2212}', "-") // −
        .replace('\u{2013}', "-") // –
        .replace('\u{2014}', "-") // —
        .replace(' ', "")
        .replace('-', "+-")
}

fn parse_monomial(piece: &str) -> Result<(u64, i64), GroupRingError> {
    let invalid = || GroupRingError::InvalidTerm(piece.to_string());

    if let Some(caps) = COEF_MONOMIAL_RE.captures(piece) {
        let coef: i64 = caps[1].parse().map_err(|_| invalid())?;
        let exp = parse_exponent(caps.get(2), piece)?;
        return Ok((exp, coef));
    }

    if let Some(caps) = BARE_MONOMIAL_RE.captures(piece) {
        let coef = if &caps[1] == "-" { -1 } else { 1 };
        let exp = parse_exponent(caps.get(2), piece)?;
        return Ok((exp, coef));
    }

    if CONSTANT_RE.is_match(piece) {
        let coef: i64 = piece.parse().map_err(|_| invalid())?;
        return Ok((0, coef));
    }

    Err(invalid())
}

/// Exponent capture of a monomial; a missing `^N` means exponent 1.
fn parse_exponent(
    capture: Option<regex::Match<'_>>,
    piece: &str,
) -> Result<u64, GroupRingError> {
    match capture {
        Some(digits) => digits
            .as_str()
            .parse()
            .map_err(|_| GroupRingError::InvalidTerm(piece.to_string())),
        None => Ok(1),
    }
}
