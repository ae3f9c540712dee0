// tests/numeric_tests.rs
use asym_helper::{clamp, is_between, NumericError};

#[test]
fn test_is_between_is_inclusive() {
    assert!(is_between(5, 1, 10));
    assert!(is_between(1, 1, 10));
    assert!(is_between(10, 1, 10));
    assert!(!is_between(0, 1, 10));
    assert!(!is_between(11, 1, 10));
}

#[test]
fn test_is_between_floats_and_inverted_range() {
    assert!(is_between(0.5, 0.0, 1.0));
    assert!(!is_between(1.0001, 0.0, 1.0));
    // nothing is between an inverted range
    assert!(!is_between(5, 10, 1));
}

#[test]
fn test_clamp_inside_below_above() {
    assert_eq!(clamp(5, 1, 10), Ok(5));
    assert_eq!(clamp(-3, 1, 10), Ok(1));
    assert_eq!(clamp(42, 1, 10), Ok(10));
    assert_eq!(clamp(2.5, 0.0, 1.0), Ok(1.0));
}

#[test]
fn test_clamp_rejects_inverted_range() {
    let err = clamp(3, 5, 1).unwrap_err();
    assert_eq!(
        err,
        NumericError::InvalidRange {
            min: "5".into(),
            max: "1".into()
        }
    );
    assert_eq!(err.to_string(), "Minimum (5) is not less than maximum (1).");
}
