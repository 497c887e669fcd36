use compass_rose::{AzimuthDegrees, normalize};
use rand::prelude::*;
use rand_pcg::Pcg64;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const EPSILON: f32 = 1e-3;

/// Reference values where both sign branches must agree
#[test]
fn test_reference_values() {
    assert_eq!(normalize(0.0), 0.0);
    assert_eq!(normalize(PI), 180.0);
    assert_eq!(normalize(-PI), 180.0);
    assert!((normalize(FRAC_PI_4) - 45.0).abs() < EPSILON);
    assert!((normalize(-FRAC_PI_4) - 315.0).abs() < EPSILON);
    assert!((normalize(FRAC_PI_2) - 90.0).abs() < EPSILON);
    assert!((normalize(-FRAC_PI_2) - 270.0).abs() < EPSILON);
}

/// Every input in (-π, π] lands in [0, 360)
#[test]
fn test_range_over_random_inputs() {
    let mut rng = Pcg64::seed_from_u64(0x5eed);

    for _ in 0..100_000 {
        let radians: f32 = rng.random_range(-PI..=PI);
        if radians == -PI {
            continue;
        }
        let degrees = normalize(radians);
        assert!(
            (0.0..360.0).contains(&degrees),
            "normalize({}) = {} out of range",
            radians,
            degrees
        );
    }
}

/// Inputs hugging zero and ±π, where rounding is most likely to escape the range
#[test]
fn test_range_at_extremes() {
    let mut radians = -1e-3f32;
    while radians < 0.0 {
        let degrees = normalize(radians);
        assert!(
            (0.0..360.0).contains(&degrees),
            "normalize({}) = {} out of range",
            radians,
            degrees
        );
        radians /= 2.0;
        if radians > -f32::MIN_POSITIVE {
            break;
        }
    }

    for radians in [PI, -PI, f32::from_bits(PI.to_bits() - 1), f32::from_bits((-PI).to_bits() - 1), f32::MIN_POSITIVE, -f32::MIN_POSITIVE] {
        let degrees = normalize(radians);
        assert!(
            (0.0..360.0).contains(&degrees),
            "normalize({}) = {} out of range",
            radians,
            degrees
        );
    }
}

/// From 0 to π the degrees climb from 0 to 180
#[test]
fn test_monotonic_positive_branch() {
    let mut previous = normalize(0.0);
    for step in 1..=314 {
        let radians = step as f32 * 0.01;
        let degrees = normalize(radians);
        assert!(
            degrees > previous,
            "not increasing at {}: {} <= {}",
            radians,
            degrees,
            previous
        );
        previous = degrees;
    }
    assert!(previous <= 180.0);
}

/// From 0 down to -π the degrees fall from just under 360 to 180
#[test]
fn test_monotonic_negative_branch() {
    let mut previous = 360.0;
    for step in 1..=314 {
        let radians = step as f32 * -0.01;
        let degrees = normalize(radians);
        assert!(
            degrees < previous,
            "not decreasing at {}: {} >= {}",
            radians,
            degrees,
            previous
        );
        previous = degrees;
    }
    assert!(previous >= 180.0);
}

/// The canonical negative-branch formula agrees with the π - |r| variant on (-π, 0)
#[test]
fn test_sign_conventions_agree_on_negative_range() {
    let mut rng = Pcg64::seed_from_u64(42);

    for _ in 0..10_000 {
        let radians: f32 = rng.random_range(-3.14..-0.01);
        let variant = (PI - radians.abs()) / PI * 180.0 + 180.0;
        assert!(
            (normalize(radians) - variant).abs() < EPSILON,
            "formulas disagree at {}",
            radians
        );
    }
}

/// The degree newtype carries exactly what normalize produced
#[test]
fn test_azimuth_degrees() {
    let azimuth = AzimuthDegrees::from_radians(-FRAC_PI_4);
    assert_eq!(azimuth.value(), normalize(-FRAC_PI_4));
    assert_eq!(format!("{:.1}", azimuth), "315.0°");
}
