//! Diameter estimation from absolute magnitude
//!
//! Catalogs list small bodies by absolute magnitude H rather than size.
//! Combined with an assumed geometric albedo p, the standard relation
//!
//! D = 1329 km / √p · 10^(-H/5)
//!
//! gives the diameter of a sphere with that brightness.
//!
//! # References
//! - Bowell et al. (1989) - "Application of photometric models to asteroids"
//! - Harris & Harris (1997) - "On the revision of radiometric albedos and diameters of asteroids"

use units::Length;

use crate::error::{require_finite, require_positive, Result};

/// Diameter in km of an albedo-1 body with H = 0
pub const DIAMETER_CALIBRATION_KM: f64 = 1329.0;

/// Typical albedo for near-Earth asteroids when nothing better is known
pub const DEFAULT_ALBEDO: f64 = 0.15;

/// Estimate a body's diameter in kilometers
///
/// # Arguments
/// * `h_magnitude` - Absolute magnitude H
/// * `albedo` - Geometric albedo, must be greater than zero
///
/// # Example
/// ```
/// use impact::diameter::estimate_diameter_km;
///
/// // H = 22 with p = 0.15 is roughly a 110-140 m body
/// let d = estimate_diameter_km(22.0, 0.15).unwrap();
/// assert!(d > 0.1 && d < 0.15);
/// ```
pub fn estimate_diameter_km(h_magnitude: f64, albedo: f64) -> Result<f64> {
    let h_magnitude = require_finite("h_magnitude", h_magnitude)?;
    let albedo = require_positive("albedo", albedo)?;
    Ok(DIAMETER_CALIBRATION_KM / albedo.sqrt() * 10f64.powf(-0.2 * h_magnitude))
}

/// Estimate a body's diameter as a typed length
pub fn estimate_diameter(h_magnitude: f64, albedo: f64) -> Result<Length> {
    estimate_diameter_km(h_magnitude, albedo).map(Length::from_km)
}

pub fn estimate_diameter_default_albedo(h_magnitude: f64) -> Result<Length> {
    estimate_diameter(h_magnitude, DEFAULT_ALBEDO)
}
