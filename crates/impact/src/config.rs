//! Calculation parameters passed explicitly into every configurable call
//!
//! Nothing here is process-wide: callers build an `ImpactConfig` (usually
//! `ImpactConfig::default()` or a partially specified JSON/TOML document
//! deserialized on top of the defaults) and hand it to the pipeline.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::diameter::DEFAULT_ALBEDO;
use crate::effects::{ImpactSite, DEFAULT_OCEAN_DEPTH_M};
use crate::energy::{ImpactBody, DEFAULT_BULK_DENSITY_KG_M3};
use crate::error::{require_in_range, require_positive, Result};
use crate::pipeline::DEFAULT_SITE_DENSITY_KG_M3;

/// Assumed material and environment parameters
///
/// # Example
/// ```
/// use impact::ImpactConfig;
///
/// let config = ImpactConfig {
///     bulk_density_kg_m3: 7800.0, // iron impactor
///     ..ImpactConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.albedo, 0.15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(default)]
pub struct ImpactConfig {
    /// Impactor bulk density in kg/m³
    pub bulk_density_kg_m3: f64,

    /// Target surface density in kg/m³
    pub site_density_kg_m3: f64,

    /// Geometric albedo used when a diameter is estimated from H
    pub albedo: f64,

    /// Assumed open-ocean depth in meters for tsunami estimates
    pub ocean_depth_m: f64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            bulk_density_kg_m3: DEFAULT_BULK_DENSITY_KG_M3,
            site_density_kg_m3: DEFAULT_SITE_DENSITY_KG_M3,
            albedo: DEFAULT_ALBEDO,
            ocean_depth_m: DEFAULT_OCEAN_DEPTH_M,
        }
    }
}

impl ImpactConfig {
    /// Check every field against its physical domain
    pub fn validate(&self) -> Result<()> {
        require_positive("bulk_density_kg_m3", self.bulk_density_kg_m3)?;
        require_positive("site_density_kg_m3", self.site_density_kg_m3)?;
        require_positive("albedo", self.albedo)?;
        require_in_range("albedo", self.albedo, 0.0, 1.0)?;
        require_positive("ocean_depth_m", self.ocean_depth_m)?;
        Ok(())
    }

    /// An impactor made of the configured bulk material
    pub fn body(&self, diameter_m: f64, velocity_ms: f64) -> Result<ImpactBody> {
        ImpactBody::with_density(diameter_m, velocity_ms, self.bulk_density_kg_m3)
    }

    /// An impact point on the configured target surface
    pub fn site(&self, is_ocean: bool) -> Result<ImpactSite> {
        ImpactSite::new(self.site_density_kg_m3, is_ocean)
    }
}
