//! WASM bindings for the impact calculation pipeline.

use wasm_bindgen::prelude::*;

use impact::diameter::DEFAULT_ALBEDO;
use impact::{
    damage_radii as core_damage_radii, estimate_diameter_km as core_estimate_diameter_km,
    risk_assessment as core_risk_assessment, run_full_impact as core_run_full_impact, run_impact,
    ImpactConfig, DEFAULT_SITE_DENSITY_KG_M3,
};

use crate::{from_js, to_js, to_js_object};

// =============================================================================
// Full pipeline
// =============================================================================

/// Run the full impact calculation.
///
/// # Arguments
/// * `diameter_m` - Impactor diameter in meters
/// * `velocity_ms` - Impact velocity in m/s
/// * `is_ocean` - Whether the impact point is open water
/// * `site_density_kg_m3` - Target density, defaults to 2700 kg/m³
///
/// # Returns
/// A FullImpactResult with `mass_energy`, `effects` and `damage_radii`.
#[wasm_bindgen]
pub fn run_full_impact(
    diameter_m: f64,
    velocity_ms: f64,
    is_ocean: bool,
    site_density_kg_m3: Option<f64>,
) -> Result<JsValue, JsError> {
    let result = core_run_full_impact(
        diameter_m,
        velocity_ms,
        is_ocean,
        site_density_kg_m3.unwrap_or(DEFAULT_SITE_DENSITY_KG_M3),
    )?;
    to_js(&result)
}

/// Run the full impact calculation and flatten the result.
///
/// Returns a single object of field name to number, with `null` for
/// absent values such as the tsunami height of a land impact.
#[wasm_bindgen]
pub fn run_full_impact_flat(
    diameter_m: f64,
    velocity_ms: f64,
    is_ocean: bool,
    site_density_kg_m3: Option<f64>,
) -> Result<JsValue, JsError> {
    let result = core_run_full_impact(
        diameter_m,
        velocity_ms,
        is_ocean,
        site_density_kg_m3.unwrap_or(DEFAULT_SITE_DENSITY_KG_M3),
    )?;
    to_js_object(&result.to_flat_map())
}

/// Run the full impact calculation under an explicit configuration.
///
/// # Arguments
/// * `config` - An ImpactConfig object; missing fields take their defaults
#[wasm_bindgen]
pub fn run_impact_with_config(
    diameter_m: f64,
    velocity_ms: f64,
    is_ocean: bool,
    config: JsValue,
) -> Result<JsValue, JsError> {
    let config: ImpactConfig = from_js(config)?;
    let body = config.body(diameter_m, velocity_ms)?;
    let site = config.site(is_ocean)?;
    to_js(&run_impact(&body, &site, &config)?)
}

/// The default calculation parameters.
#[wasm_bindgen]
pub fn default_impact_config() -> Result<JsValue, JsError> {
    to_js(&ImpactConfig::default())
}

// =============================================================================
// Individual models
// =============================================================================

/// Estimate a diameter in km from absolute magnitude.
///
/// # Arguments
/// * `h_magnitude` - Absolute magnitude H
/// * `albedo` - Geometric albedo, defaults to 0.15
#[wasm_bindgen]
pub fn estimate_diameter_km(h_magnitude: f64, albedo: Option<f64>) -> Result<f64, JsError> {
    Ok(core_estimate_diameter_km(
        h_magnitude,
        albedo.unwrap_or(DEFAULT_ALBEDO),
    )?)
}

/// Blast damage radii in km for a yield in megatons.
#[wasm_bindgen]
pub fn damage_radii(energy_megatons: f64) -> Result<JsValue, JsError> {
    to_js(&core_damage_radii(energy_megatons))
}

/// Risk tier for a yield passing at a minimum distance in AU.
#[wasm_bindgen]
pub fn risk_assessment(energy_megatons: f64, min_distance_au: f64) -> Result<JsValue, JsError> {
    to_js(&core_risk_assessment(energy_megatons, min_distance_au)?)
}
