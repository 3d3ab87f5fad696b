//! Crater, seismic and tsunami effects of an impact
//!
//! Empirical power laws fit to nuclear tests and terrestrial craters. All of
//! them are functions of impact energy only; the site decides whether a
//! tsunami estimate is produced.
//!
//! # References
//! - Collins, Melosh & Marcus (2005) - "Earth Impact Effects Program"
//! - Schmidt & Holsapple (1982) - "Estimates of crater size for large-body impact"
//! - Ward & Asphaug (2000) - "Asteroid impact tsunami: a probabilistic hazard assessment"

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::{Energy, Length, VolumeDensity};

use crate::error::{require_positive, Result};

/// Crater diameter in km at the reference energy
pub const CRATER_SCALING_COEFFICIENT_KM: f64 = 1.161;

/// Reference energy of the crater scaling law, J
pub const CRATER_REFERENCE_ENERGY_J: f64 = 1e15;

pub const CRATER_SCALING_EXPONENT: f64 = 0.294;

/// Transient crater depth as a fraction of its diameter
pub const CRATER_DEPTH_RATIO: f64 = 0.2;

pub const SEISMIC_LOG_SLOPE: f64 = 0.67;
pub const SEISMIC_OFFSET: f64 = 5.87;

pub const TSUNAMI_COEFFICIENT: f64 = 0.8;
pub const TSUNAMI_DEPTH_EXPONENT: f64 = 0.75;

/// Mean open-ocean depth assumed for tsunami estimates, m
pub const DEFAULT_OCEAN_DEPTH_M: f64 = 4000.0;

/// Where the body lands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ImpactSite {
    /// Target surface density in kg/m³
    pub surface_density_kg_m3: f64,

    /// Whether the impact point is open water
    pub is_ocean: bool,
}

impl ImpactSite {
    pub fn new(surface_density_kg_m3: f64, is_ocean: bool) -> Result<Self> {
        Ok(Self {
            surface_density_kg_m3: require_positive("site_density_kg_m3", surface_density_kg_m3)?,
            is_ocean,
        })
    }

    pub fn surface_density(&self) -> VolumeDensity {
        VolumeDensity::from_kg_per_m3(self.surface_density_kg_m3)
    }
}

/// Physical effects of an impact
///
/// `crater_depth_km` is always `CRATER_DEPTH_RATIO * crater_diameter_km`, and
/// `tsunami_height_m` is present exactly when `is_ocean_impact` is true.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ImpactEffects {
    /// Energy as megatons of TNT
    pub megatons_tnt: f64,

    /// Crater diameter in km
    pub crater_diameter_km: f64,

    /// Crater depth in km
    pub crater_depth_km: f64,

    /// Richter-scale equivalent of the seismic shaking
    pub earthquake_magnitude: f64,

    /// Tsunami wave height in m, only for ocean impacts
    pub tsunami_height_m: Option<f64>,

    pub is_ocean_impact: bool,
}

impl ImpactEffects {
    pub fn crater_diameter(&self) -> Length {
        Length::from_km(self.crater_diameter_km)
    }

    pub fn energy(&self) -> Energy {
        Energy::from_megatons_tnt(self.megatons_tnt)
    }
}

/// Crater diameter in km, D = 1.161 · (E / 10¹⁵ J)^0.294
pub fn crater_diameter_km(energy: Energy) -> f64 {
    CRATER_SCALING_COEFFICIENT_KM
        * (energy.to_joules() / CRATER_REFERENCE_ENERGY_J).powf(CRATER_SCALING_EXPONENT)
}

/// Richter-scale equivalent, M = 0.67 · log₁₀(E) − 5.87
pub fn earthquake_magnitude(energy: Energy) -> f64 {
    SEISMIC_LOG_SLOPE * energy.log10() - SEISMIC_OFFSET
}

/// Deep-water wave height in m, h = 0.8 · √E / d^0.75
pub fn tsunami_height_m(energy: Energy, ocean_depth: Length) -> f64 {
    TSUNAMI_COEFFICIENT * energy.sqrt() / ocean_depth.to_meters().powf(TSUNAMI_DEPTH_EXPONENT)
}

/// Impact effects for a raw energy and site description
///
/// # Arguments
/// * `energy_joules` - Kinetic energy in J, must be greater than zero
/// * `site_density_kg_m3` - Target surface density in kg/m³
/// * `is_ocean` - Whether to estimate a tsunami
///
/// # Example
/// ```
/// use impact::effects::impact_effects;
///
/// let land = impact_effects(4.184e15, 2700.0, false).unwrap();
/// assert_eq!(land.tsunami_height_m, None);
/// assert!((land.megatons_tnt - 1.0).abs() < 1e-12);
/// ```
pub fn impact_effects(
    energy_joules: f64,
    site_density_kg_m3: f64,
    is_ocean: bool,
) -> Result<ImpactEffects> {
    let site = ImpactSite::new(site_density_kg_m3, is_ocean)?;
    impact_effects_at(
        Energy::from_joules(energy_joules),
        &site,
        Length::from_meters(DEFAULT_OCEAN_DEPTH_M),
    )
}

/// Impact effects with an explicit ocean depth
///
/// Energy must be finite and positive: the crater law raises it to a
/// fractional power and the seismic law takes its logarithm.
pub fn impact_effects_at(
    energy: Energy,
    site: &ImpactSite,
    ocean_depth: Length,
) -> Result<ImpactEffects> {
    require_positive("energy_joules", energy.to_joules())?;
    require_positive("ocean_depth_m", ocean_depth.to_meters())?;

    let crater_diameter_km = crater_diameter_km(energy);
    let tsunami_height_m = site.is_ocean.then(|| tsunami_height_m(energy, ocean_depth));

    Ok(ImpactEffects {
        megatons_tnt: energy.to_megatons_tnt(),
        crater_diameter_km,
        crater_depth_km: CRATER_DEPTH_RATIO * crater_diameter_km,
        earthquake_magnitude: earthquake_magnitude(energy),
        tsunami_height_m,
        is_ocean_impact: site.is_ocean,
    })
}
