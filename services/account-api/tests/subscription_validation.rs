//! Subscription input validation tests
//!
//! The PATCH body's `subscription` value is parsed with the same rule the
//! handler uses; anything outside the three plans must be rejected before
//! any record is touched.

use gatehouse_types::Subscription;

#[test]
fn test_accepts_the_three_plans() {
    assert_eq!(
        "starter".parse::<Subscription>().unwrap(),
        Subscription::Starter
    );
    assert_eq!("pro".parse::<Subscription>().unwrap(), Subscription::Pro);
    assert_eq!(
        "business".parse::<Subscription>().unwrap(),
        Subscription::Business
    );
}

#[test]
fn test_rejects_unknown_plans() {
    assert!("gold".parse::<Subscription>().is_err());
    assert!("premium".parse::<Subscription>().is_err());
    assert!("".parse::<Subscription>().is_err());
}

#[test]
fn test_rejects_case_variants() {
    assert!("Starter".parse::<Subscription>().is_err());
    assert!("PRO".parse::<Subscription>().is_err());
    assert!("Business".parse::<Subscription>().is_err());
}

#[test]
fn test_rejects_padded_input() {
    assert!(" pro".parse::<Subscription>().is_err());
    assert!("pro ".parse::<Subscription>().is_err());
    assert!("pro\n".parse::<Subscription>().is_err());
}

#[test]
fn test_error_message_names_the_value() {
    let err = "gold".parse::<Subscription>().unwrap_err();
    assert_eq!(err.to_string(), "invalid subscription: gold");
}
