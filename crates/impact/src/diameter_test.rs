//! Tests for absolute-magnitude diameter estimation

use approx::assert_relative_eq;

use crate::diameter::{
    estimate_diameter, estimate_diameter_default_albedo, estimate_diameter_km, DEFAULT_ALBEDO,
    DIAMETER_CALIBRATION_KM,
};
use crate::error::ErrorKind;

#[test]
fn test_reference_body() {
    // H = 0 with albedo 1 is the calibration diameter itself
    let d = estimate_diameter_km(0.0, 1.0).unwrap();
    assert_relative_eq!(d, DIAMETER_CALIBRATION_KM);
}

#[test]
fn test_typical_near_earth_object() {
    // H = 22, p = 0.15: the classic ~140 m hazard threshold
    let d = estimate_diameter_km(22.0, DEFAULT_ALBEDO).unwrap();
    assert_relative_eq!(d, 0.136_609_012_322_167, max_relative = 1e-9);
}

#[test]
fn test_five_magnitudes_is_factor_ten() {
    let bright = estimate_diameter_km(15.0, 0.15).unwrap();
    let faint = estimate_diameter_km(20.0, 0.15).unwrap();
    assert_relative_eq!(bright / faint, 10.0, max_relative = 1e-12);
}

#[test]
fn test_darker_bodies_are_larger() {
    let dark = estimate_diameter_km(20.0, 0.05).unwrap();
    let bright = estimate_diameter_km(20.0, 0.25).unwrap();
    assert!(dark > bright);
    assert_relative_eq!(dark / bright, 5.0_f64.sqrt(), max_relative = 1e-12);
}

#[test]
fn test_estimate_is_bit_identical_across_calls() {
    let first = estimate_diameter_km(22.0, 0.15).unwrap();
    let second = estimate_diameter_km(22.0, 0.15).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_faint_bodies_stay_positive() {
    let d = estimate_diameter_km(60.0, 0.15).unwrap();
    assert!(d > 0.0, "Very faint bodies are tiny but not zero, got {}", d);
}

#[test]
fn test_typed_length() {
    let length = estimate_diameter(22.0, 0.15).unwrap();
    assert_relative_eq!(length.to_meters(), 136.609_012_322_167, max_relative = 1e-9);

    let default = estimate_diameter_default_albedo(22.0).unwrap();
    assert_eq!(default, length);
}

#[test]
fn test_rejects_non_positive_albedo() {
    for albedo in [0.0, -0.15, f64::NAN] {
        let err = estimate_diameter_km(22.0, albedo).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn test_rejects_non_finite_magnitude() {
    assert!(estimate_diameter_km(f64::INFINITY, 0.15).is_err());
    assert!(estimate_diameter_km(f64::NAN, 0.15).is_err());
}
