use elementary_rs::{abs, fabs, is_zero};

#[test]
fn test_is_zero_accepts_negligible_values() {
    assert!(is_zero(0.0_f64), "exact zero is negligible");
    assert!(is_zero(-0.0_f64), "negative zero is negligible");
    assert!(is_zero(1e-40_f64), "below the squared-epsilon threshold");
    assert!(is_zero(-1e-40_f64), "sign does not matter");
    // The squared tolerance rounds one ULP above the decimal 1e-34, so
    // the literal itself still falls under the cutoff.
    assert!(is_zero(1e-34_f64), "one ULP below the squared tolerance");
}

#[test]
fn test_is_zero_rejects_small_but_meaningful_values() {
    // The cutoff is eps^2 as rounded, 1.0000000000000001e-34; the strict
    // comparison keeps the cutoff value itself.
    assert!(
        !is_zero(1.0000000000000001e-34_f64),
        "the cutoff itself is kept"
    );
    assert!(!is_zero(2e-34_f64));
    assert!(!is_zero(1e-20_f64));
    assert!(!is_zero(1e-5_f64));
    assert!(!is_zero(-1e-5_f64));
    assert!(!is_zero(1.0_f64));
}

#[test]
fn test_is_zero_f32() {
    assert!(is_zero(0.0_f32));
    assert!(is_zero(1e-40_f32), "f32 subnormals are negligible");
    assert!(!is_zero(1e-20_f32));
    assert!(!is_zero(1.0_f32));
}

#[test]
fn test_fabs_strips_sign() {
    assert_eq!(fabs(3.5_f64), 3.5);
    assert_eq!(fabs(-3.5_f64), 3.5);
    assert_eq!(fabs(-1e300_f64), 1e300);
    assert_eq!(fabs(2.5_f32), 2.5_f32);
    assert_eq!(fabs(-2.5_f32), 2.5_f32);
}

#[test]
fn test_fabs_zero_signs() {
    // The sign test treats +0 as non-positive, so +0 comes back negated.
    // Numerically irrelevant (-0 == 0) but pinned here so a change is loud.
    assert_eq!(fabs(0.0_f64), 0.0);
    assert!(fabs(0.0_f64).is_sign_negative(), "positive zero negates");
    assert!(fabs(-0.0_f64).is_sign_positive(), "negative zero negates");
}

#[test]
fn test_fabs_infinities() {
    assert_eq!(fabs(f64::INFINITY), f64::INFINITY);
    assert_eq!(fabs(f64::NEG_INFINITY), f64::INFINITY);
}

#[test]
fn test_abs_integers() {
    assert_eq!(abs(5_i32), 5);
    assert_eq!(abs(-5_i32), 5);
    assert_eq!(abs(0_i32), 0);
    assert_eq!(abs(9_i64), 9);
    assert_eq!(abs(-9_i64), 9);
    assert_eq!(abs(-7_i16), 7);
}

#[test]
fn test_abs_minimum_wraps() {
    // Two's complement has no positive counterpart for MIN; the negation
    // wraps back to MIN instead of overflowing.
    assert_eq!(abs(i32::MIN), i32::MIN);
    assert_eq!(abs(i64::MIN), i64::MIN);
    assert_eq!(abs(i16::MIN), i16::MIN);
}
