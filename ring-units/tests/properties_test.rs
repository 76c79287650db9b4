//! Property tests for the arithmetic engine and the textual codec.

use quickcheck_macros::quickcheck;

use ring_units::{GroupRingElement, Ring, format_element, multiply, parse_element, power};

const PRIMES: [u64; 6] = [2, 3, 5, 7, 11, 13];

fn prime_for(selector: u8) -> u64 {
    PRIMES[selector as usize % PRIMES.len()]
}

/// An element whose exponents are already reduced modulo `p`.
fn element_mod_p(terms: &[(u8, i8)], p: u64) -> GroupRingElement {
    GroupRingElement::from_terms(
        terms
            .iter()
            .map(|&(exp, coef)| (exp as u64 % p, coef as i64)),
    )
}

#[quickcheck]
fn prop_multiply_is_canonical(a: Vec<(u8, i8)>, b: Vec<(u8, i8)>, selector: u8) -> bool {
    let p = prime_for(selector);
    let ring = Ring::try_with(p).unwrap();
    let (product, _) = multiply(&element_mod_p(&a, p), &element_mod_p(&b, p), &ring);
    product
        .terms()
        .all(|(&exp, &coef)| exp < p && coef != 0)
}

#[quickcheck]
fn prop_multiply_commutes(a: Vec<(u8, i8)>, b: Vec<(u8, i8)>, selector: u8) -> bool {
    let p = prime_for(selector);
    let ring = Ring::try_with(p).unwrap();
    let a = element_mod_p(&a, p);
    let b = element_mod_p(&b, p);
    multiply(&a, &b, &ring).0 == multiply(&b, &a, &ring).0
}

#[quickcheck]
fn prop_identity_is_neutral(a: Vec<(u8, i8)>, selector: u8) -> bool {
    let p = prime_for(selector);
    let ring = Ring::try_with(p).unwrap();
    let a = element_mod_p(&a, p);
    let one = GroupRingElement::identity();
    multiply(&one, &a, &ring).0 == a
}

#[quickcheck]
fn prop_zeroth_power_is_identity(a: Vec<(u8, i8)>, selector: u8) -> bool {
    let p = prime_for(selector);
    let ring = Ring::try_with(p).unwrap();
    power(&element_mod_p(&a, p), 0, &ring) == GroupRingElement::identity()
}

#[quickcheck]
fn prop_trace_accounts_for_every_pair(a: Vec<(u8, i8)>, b: Vec<(u8, i8)>, selector: u8) -> bool {
    let p = prime_for(selector);
    let ring = Ring::try_with(p).unwrap();
    let a = element_mod_p(&a, p);
    let b = element_mod_p(&b, p);
    let (_, trace) = multiply(&a, &b, &ring);
    trace.len() == a.len() * b.len()
        && trace
            .iter()
            .all(|c| c.reduced_exp == c.raw_exp % p && c.coef_product == c.coef_a * c.coef_b)
}

#[quickcheck]
fn prop_format_parse_round_trip(terms: Vec<(u16, i8)>) -> bool {
    let element = GroupRingElement::from_terms(
        terms
            .iter()
            .map(|&(exp, coef)| (exp as u64, coef as i64)),
    );
    match parse_element(&format_element(&element)) {
        Ok(reparsed) => reparsed == element,
        Err(_) => false,
    }
}
