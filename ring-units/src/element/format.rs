//! Rendering of elements and single monomials back to display text.

use crate::element::GroupRingElement;

fn monomial_base(exp: u64) -> String {
    match exp {
        0 => "1".to_string(),
        1 => "g".to_string(),
        _ => format!("g^{}", exp),
    }
}

/// Renders one `(coefficient, exponent)` pair.
///
/// Coefficient 1 elides the numeral except for the constant term, and -1
/// renders a sign only.
///
/// # Example
///
/// ```
/// use ring_units::format_monomial;
///
/// assert_eq!(format_monomial(1, 0), "1");
/// assert_eq!(format_monomial(-1, 2), "-g^2");
/// assert_eq!(format_monomial(3, 1), "3*g");
/// ```
pub fn format_monomial(coef: i64, exp: u64) -> String {
    if exp == 0 {
        return coef.to_string();
    }

    let base = monomial_base(exp);
    match coef {
        1 => base,
        -1 => format!("-{}", base),
        _ => format!("{}*{}", coef, base),
    }
}

/// Renders an element with terms in ascending exponent order, joined with
/// `" + "` or `" - "` by sign. The zero element renders as `"0"`.
///
/// The rendering is semantically exact: parsing it back yields the same
/// element, though it is not guaranteed byte-identical to the text the
/// element was parsed from.
///
/// # Example
///
/// ```
/// use ring_units::{format_element, parse_element};
///
/// let e = parse_element("+1 - g + 3g^2").unwrap();
/// assert_eq!(format_element(&e), "1 - g + 3*g^2");
/// ```
pub fn format_element(element: &GroupRingElement) -> String {
    if element.is_zero() {
        return "0".to_string();
    }

    let mut rendered = String::new();
    for (index, (&exp, &coef)) in element.terms().enumerate() {
        let term = format_monomial(coef, exp);
        if index == 0 {
            rendered.push_str(&term);
        } else if let Some(unsigned) = term.strip_prefix('-') {
            rendered.push_str(" - ");
            rendered.push_str(unsigned);
        } else {
            rendered.push_str(" + ");
            rendered.push_str(&term);
        }
    }

    rendered
}
