//! Qualitative risk tier from yield and closest approach
//!
//! score = E_Mt / (d_AU · 100)
//!
//! Tier boundaries use strict comparisons, so a score sitting exactly on a
//! threshold falls into the lower tier.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::{Energy, Length};

use crate::error::{require_finite, require_positive, Result};

/// Scores above this are `High`
pub const HIGH_RISK_THRESHOLD: f64 = 1000.0;

/// Scores above this (and not above `HIGH_RISK_THRESHOLD`) are `Medium`
pub const MEDIUM_RISK_THRESHOLD: f64 = 100.0;

/// Distance normalization applied to the AU distance
pub const DISTANCE_SCALE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
}

/// Risk tier for a yield passing at a minimum distance
///
/// # Example
/// ```
/// use impact::risk::{risk_assessment, RiskLevel};
///
/// let risk = risk_assessment(150.0, 1.0).unwrap();
/// assert_eq!(risk.risk_level, RiskLevel::Low);
/// assert!(risk_assessment(150.0, 0.0).is_err());
/// ```
pub fn risk_assessment(energy_megatons: f64, min_distance_au: f64) -> Result<RiskAssessment> {
    let energy_megatons = require_finite("energy_megatons", energy_megatons)?;
    let min_distance_au = require_positive("min_distance_au", min_distance_au)?;

    let risk_score = energy_megatons / (min_distance_au * DISTANCE_SCALE);
    Ok(RiskAssessment {
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
    })
}

pub fn risk_assessment_for(energy: Energy, min_distance: Length) -> Result<RiskAssessment> {
    risk_assessment(energy.to_megatons_tnt(), min_distance.to_au())
}
