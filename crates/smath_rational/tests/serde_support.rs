//! Serde support (`--features serde`).
#![cfg(feature = "serde")]

use smath_rational::Rational;

#[test]
fn serializes_canonical_fields() {
    let x = Rational::new(6i32, -8).unwrap();
    let json = serde_json::to_string(&x).unwrap();
    assert_eq!(json, r#"{"numer":-3,"denom":4}"#);
}

#[test]
fn deserializing_normalizes() {
    let x: Rational<i64> = serde_json::from_str(r#"{"numer":10,"denom":-4}"#).unwrap();
    assert_eq!((x.numer(), x.denom()), (-5, 2));
}

#[test]
fn zero_denominator_is_rejected() {
    let err = serde_json::from_str::<Rational<i32>>(r#"{"numer":1,"denom":0}"#).unwrap_err();
    assert!(err.to_string().contains("division by zero"));
}
