use ring_units::errors::GroupRingError;
use ring_units::{GroupRingElement, format_element, parse_element};

#[test]
fn parse_example_expression() -> Result<(), GroupRingError> {
    let element = parse_element("g^2 - g^3 + g^4")?;
    assert_eq!(
        element,
        GroupRingElement::from_terms([(2, 1), (3, -1), (4, 1)])
    );
    assert_eq!(format_element(&element), "g^2 - g^3 + g^4");
    Ok(())
}

#[test]
fn parse_mixed_expression() -> Result<(), GroupRingError> {
    let element = parse_element("1 + 2*g - g^4")?;
    assert_eq!(
        element,
        GroupRingElement::from_terms([(0, 1), (1, 2), (4, -1)])
    );
    assert_eq!(format_element(&element), "1 + 2*g - g^4");
    Ok(())
}

#[test]
fn optional_star_and_leading_plus() -> Result<(), GroupRingError> {
    assert_eq!(parse_element("2g^3")?, parse_element("2*g^3")?);
    assert_eq!(parse_element("+g - 1")?, parse_element("g - 1")?);
    Ok(())
}

#[test]
fn repeated_exponents_accumulate() -> Result<(), GroupRingError> {
    let element = parse_element("g + g + g^2 - 3*g^2")?;
    assert_eq!(
        element,
        GroupRingElement::from_terms([(1, 2), (2, -2)])
    );
    Ok(())
}

#[test]
fn cancellation_yields_zero() -> Result<(), GroupRingError> {
    let element = parse_element("g^3 - g^3")?;
    assert!(element.is_zero());
    assert_eq!(format_element(&element), "0");
    Ok(())
}

#[test]
fn empty_input_is_zero() -> Result<(), GroupRingError> {
    assert!(parse_element("")?.is_zero());
    assert!(parse_element(" \t ")?.is_zero());
    Ok(())
}

#[test]
fn unicode_minus_is_normalized() -> Result<(), GroupRingError> {
    assert_eq!(
        parse_element("g^2 \u{2212} g^3")?,
        parse_element("g^2 - g^3")?
    );
    Ok(())
}

#[test]
fn malformed_term_is_reported_with_its_text() {
    let err = parse_element("1 + 2y").unwrap_err();
    match err {
        GroupRingError::InvalidTerm(piece) => assert_eq!(piece, "2y"),
        other => panic!("expected InvalidTerm, got {other:?}"),
    }
}

#[test]
fn semantic_round_trip() -> Result<(), GroupRingError> {
    for text in [
        "g^2 - g^3 + g^4",
        "1 + 2*g - g^4",
        "-g",
        "-1 - g - 17*g^9",
        "0",
        "42",
    ] {
        let parsed = parse_element(text)?;
        let reparsed = parse_element(&format_element(&parsed))?;
        assert_eq!(parsed, reparsed, "round trip failed for {text}");
    }
    Ok(())
}
