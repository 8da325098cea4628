mod common;

use common::{Color, Suit};
use litenum::{DispatchArg, Dispatched, EnumError, EnumType, Value};

fn is(result: litenum::Result<Dispatched>) -> bool {
    result
        .expect("dispatch failed")
        .as_bool()
        .expect("expected a boolean result")
}

// ============================================================================
// Instance Predicates
// ============================================================================

#[test]
fn test_is_member_without_argument() {
    let hearts = Suit::make("Hearts").unwrap();
    assert!(is(hearts.call("isHearts", &[])));
    assert!(is(hearts.call("isHEARTS", &[])));
    assert!(!is(hearts.call("isClubs", &[])));
}

#[test]
fn test_is_member_with_argument_checks_the_argument() {
    let hearts = Suit::make("Hearts").unwrap();
    let clubs = Suit::make("Clubs").unwrap();

    assert!(is(hearts.call("isClubs", &[DispatchArg::from(&clubs)])));
    assert!(is(hearts.call("isClubs", &["clubs".into()])));
    assert!(!is(hearts.call("isClubs", &["Hearts".into()])));
}

#[test]
fn test_is_member_with_null_argument_checks_the_receiver() {
    let hearts = Suit::make("Hearts").unwrap();
    assert!(is(hearts.call("isHearts", &[Value::Null.into()])));
    assert!(!is(hearts.call("isSpades", &[Value::Null.into()])));
}

#[test]
fn test_null_value_construction_looks_up_member() {
    let green = Color::call("Green", &[Value::Null.into()])
        .unwrap()
        .into_instance()
        .unwrap();
    assert_eq!(green.value(), "#0f0");

    let err = Color::call("Purple", &[Value::Null.into()]).unwrap_err();
    assert!(err.is_unknown_member());
}

#[test]
fn test_is_member_on_ad_hoc_instance_fails() {
    let custom = Color::make_with("Custom", "#fff").unwrap();
    let err = custom.call("isRed", &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The given name [Custom] is not available in this enum Color"
    );
}

// ============================================================================
// Static Predicates
// ============================================================================

#[test]
fn test_static_is_requires_argument() {
    let err = Suit::call("isHearts", &[]).unwrap_err();
    assert!(matches!(err, EnumError::MissingArgument { .. }));
    assert_eq!(
        err.to_string(),
        "Calling Suit::isHearts() in static context requires one argument"
    );
}

#[test]
fn test_static_is_requires_exactly_one_argument() {
    let err = Suit::call("isHearts", &["Hearts".into(), "extra".into()]).unwrap_err();
    assert!(matches!(err, EnumError::MissingArgument { .. }));
}

#[test]
fn test_static_is_rejects_null_argument() {
    let err = Suit::call("isHearts", &[Value::Null.into()]).unwrap_err();
    assert!(matches!(err, EnumError::MissingArgument { .. }));
}

#[test]
fn test_static_is_compares_argument() {
    let spades = Suit::make("Spades").unwrap();
    assert!(is(Suit::call("isSpades", &[spades.clone().into()])));
    assert!(is(Suit::call("isSpades", &["SPADES".into()])));
    assert!(!is(Suit::call("isHearts", &[spades.into()])));
}

// ============================================================================
// Member Lookup and Construction
// ============================================================================

#[test]
fn test_static_lookup_by_method_name() {
    let red = Color::call("Red", &[]).unwrap().into_instance().unwrap();
    assert_eq!(red.name(), Some("Red"));
    assert_eq!(red.value(), "#f00");
    assert_eq!(red.meta(), Some(&Value::from("warm")));
}

#[test]
fn test_static_lookup_unknown_member() {
    let err = Color::call("Purple", &[]).unwrap_err();
    assert!(err.is_unknown_member());
    assert!(err.to_string().contains("Purple"));
}

#[test]
fn test_static_ad_hoc_member() {
    let custom = Color::call("Custom", &["#fff".into()])
        .unwrap()
        .into_instance()
        .unwrap();
    assert_eq!(custom.name(), Some("Custom"));
    assert_eq!(custom.value(), "#fff");
    assert!(custom.meta().is_none());
    assert_eq!(custom.try_to_string().unwrap(), "#fff");
}

#[test]
fn test_instance_lookup_ignores_receiver() {
    let red = Color::make("Red").unwrap();
    let blue = red.call("blue", &[]).unwrap().into_instance().unwrap();
    assert_eq!(blue.name(), Some("Blue"));
    assert_eq!(blue.value(), "#00f");
}

#[test]
fn test_short_names_are_not_predicates() {
    let err = Suit::call("is", &[]).unwrap_err();
    assert!(err.is_unknown_member());

    let ad_hoc = Suit::call("is", &[1i64.into()]).unwrap().into_instance().unwrap();
    assert_eq!(ad_hoc.name(), Some("is"));
    assert_eq!(ad_hoc.value(), &Value::Int(1));
}

#[test]
fn test_empty_method_is_undefined() {
    let hearts = Suit::make("Hearts").unwrap();
    let err = hearts.call("", &[]).unwrap_err();
    assert_eq!(err.to_string(), "Call to undefined method Suit->()");
}
