//! Tests for risk tiers

use approx::assert_relative_eq;
use units::{Energy, Length};

use crate::error::ErrorKind;
use crate::risk::{risk_assessment, risk_assessment_for, RiskLevel};

#[test]
fn test_low_risk() {
    let risk = risk_assessment(150.0, 1.0).unwrap();
    assert_relative_eq!(risk.risk_score, 1.5);
    assert_eq!(risk.risk_level, RiskLevel::Low);
    assert_eq!(risk.risk_level.to_string(), "Low");
}

#[test]
fn test_medium_risk() {
    // 15000 Mt at 1 AU scores 150
    let risk = risk_assessment(15_000.0, 1.0).unwrap();
    assert_relative_eq!(risk.risk_score, 150.0);
    assert_eq!(risk.risk_level, RiskLevel::Medium);
}

#[test]
fn test_high_risk() {
    let risk = risk_assessment(150_000.0, 1.0).unwrap();
    assert_relative_eq!(risk.risk_score, 1500.0);
    assert_eq!(risk.risk_level, RiskLevel::High);
    assert_eq!(risk.risk_level.as_str(), "High");

    // The same yield passing closer scores higher
    let close = risk_assessment(15_000.0, 0.1).unwrap();
    assert_eq!(close.risk_level, RiskLevel::High);
}

#[test]
fn test_boundaries_fall_to_lower_tier() {
    let at_medium = risk_assessment(10_000.0, 1.0).unwrap();
    assert_eq!(at_medium.risk_score, 100.0);
    assert_eq!(at_medium.risk_level, RiskLevel::Low);

    let at_high = risk_assessment(100_000.0, 1.0).unwrap();
    assert_eq!(at_high.risk_score, 1000.0);
    assert_eq!(at_high.risk_level, RiskLevel::Medium);

    assert_eq!(RiskLevel::from_score(100.000_001), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(1000.000_001), RiskLevel::High);
}

#[test]
fn test_levels_are_ordered() {
    assert!(RiskLevel::Low < RiskLevel::Medium);
    assert!(RiskLevel::Medium < RiskLevel::High);
}

#[test]
fn test_rejects_bad_distance() {
    for distance in [0.0, -0.5, f64::NAN] {
        let err = risk_assessment(150.0, distance).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
    assert!(risk_assessment(f64::INFINITY, 1.0).is_err());
}

#[test]
fn test_typed_entry() {
    let risk =
        risk_assessment_for(Energy::from_megatons_tnt(150_000.0), Length::from_au(1.0)).unwrap();
    assert_eq!(risk.risk_level, RiskLevel::High);
    assert_relative_eq!(risk.risk_score, 1500.0, max_relative = 1e-9);
}

#[test]
fn test_serializes_level_as_name() {
    let risk = risk_assessment(150.0, 1.0).unwrap();
    let value = serde_json::to_value(risk).unwrap();
    assert_eq!(value["risk_level"], "Low");
}
