use elementary_rs::{ceil, floor, fmod};

#[test]
fn test_ceil_basic() {
    assert_eq!(ceil(2.1_f64), 3.0);
    assert_eq!(ceil(2.3_f64), 3.0);
    assert_eq!(ceil(2.9_f64), 3.0);
    assert_eq!(ceil(-2.1_f64), -2.0);
    assert_eq!(ceil(-2.3_f64), -2.0);
    assert_eq!(ceil(-2.9_f64), -2.0);
    assert_eq!(ceil(0.2_f64), 1.0);
}

#[test]
fn test_ceil_integers_pass_through() {
    assert_eq!(ceil(5.0_f64), 5.0);
    assert_eq!(ceil(-5.0_f64), -5.0);
    assert_eq!(ceil(0.0_f64), 0.0);
    assert_eq!(ceil(-0.0_f64), 0.0);
}

#[test]
fn test_floor_basic() {
    assert_eq!(floor(2.1_f64), 2.0);
    assert_eq!(floor(2.3_f64), 2.0);
    assert_eq!(floor(2.9_f64), 2.0);
    assert_eq!(floor(-2.1_f64), -3.0);
    assert_eq!(floor(-2.3_f64), -3.0);
    assert_eq!(floor(-0.5_f64), -1.0);
    assert_eq!(floor(7.0_f64), 7.0);
}

#[test]
fn test_fmod_exact_binary_cases() {
    // All quotients and products here are exact in binary.
    assert_eq!(fmod(5.5_f64, 2.0), 1.5);
    assert_eq!(fmod(6.0_f64, 2.0), 0.0);
    assert_eq!(fmod(1.0_f64, 0.5), 0.0);
    assert_eq!(fmod(0.75_f64, 0.5), 0.25);
}

#[test]
fn test_fmod_sign_follows_dividend() {
    assert_eq!(fmod(-5.5_f64, 2.0), -1.5);
    assert_eq!(fmod(5.5_f64, -2.0), 1.5);
    assert_eq!(fmod(-5.5_f64, -2.0), -1.5);
}

#[test]
fn test_fmod_inexact_quotient() {
    assert!((fmod(7.25_f64, 1.5) - 1.25).abs() < 1e-12);
    assert!((fmod(10.0_f64, 3.0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_fmod_zero_divisor() {
    assert!(fmod(1.0_f64, 0.0).is_nan(), "x/0 poisons the quotient");
    assert!(fmod(0.0_f64, 0.0).is_nan());
}

#[test]
fn test_rounding_nan_truncates_to_zero() {
    // NaN saturates to 0 in the integer cast and the sign tests cannot
    // rescue it, so both directions report 0.
    assert_eq!(ceil(f64::NAN), 0.0);
    assert_eq!(floor(f64::NAN), 0.0);
    assert!(fmod(f64::NAN, 2.0).is_nan());
}

#[test]
fn test_rounding_saturates_beyond_i32() {
    // 3e9 is outside i32; the cast clamps and the correction step still
    // fires on the nonzero difference.
    assert_eq!(ceil(3e9_f64), 2147483648.0);
    assert_eq!(floor(-3e9_f64), -2147483649.0);
    // In the uncorrected direction only the clamp itself shows.
    assert_eq!(floor(3e9_f64), 2147483647.0);
    assert_eq!(ceil(-3e9_f64), -2147483648.0);
}

#[test]
fn test_rounding_f32() {
    assert_eq!(ceil(2.5_f32), 3.0);
    assert_eq!(floor(-2.5_f32), -3.0);
    assert_eq!(fmod(5.5_f32, 2.0), 1.5);
}
