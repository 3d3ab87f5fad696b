//! Full impact calculation
//!
//! mass/energy → impact effects → damage radii, run in that order on every
//! call. Any stage failing aborts the whole calculation; callers never see
//! a partially filled result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::Length;

use crate::config::ImpactConfig;
use crate::damage::{damage_radii, DamageRadii};
use crate::effects::{impact_effects_at, ImpactEffects, ImpactSite};
use crate::energy::{ImpactBody, MassEnergyResult};
use crate::error::{ImpactError, Result};

/// Density of continental crust in kg/m³
pub const DEFAULT_SITE_DENSITY_KG_M3: f64 = 2700.0;

/// Everything the pipeline computes for one impact
///
/// Each stage keeps its own record, so no field of one stage can shadow a
/// field of another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct FullImpactResult {
    pub mass_energy: MassEnergyResult,
    pub effects: ImpactEffects,
    pub damage_radii: DamageRadii,
}

impl FullImpactResult {
    /// Flatten into field name → value
    ///
    /// Stages are written in pipeline order, so if two stages ever shared a
    /// key the later stage would win. Absent values stay `None` and are never
    /// written as zero; booleans become 1.0 / 0.0.
    pub fn to_flat_map(&self) -> BTreeMap<&'static str, Option<f64>> {
        let mut map = BTreeMap::new();

        let me = &self.mass_energy;
        map.insert("mass_kg", Some(me.mass_kg));
        map.insert("energy_joules", Some(me.energy_joules));
        map.insert("radius_m", Some(me.radius_m));
        map.insert("volume_m3", Some(me.volume_m3));
        map.insert("density_kg_m3", Some(me.density_kg_m3));

        let fx = &self.effects;
        map.insert("megatons_tnt", Some(fx.megatons_tnt));
        map.insert("crater_diameter_km", Some(fx.crater_diameter_km));
        map.insert("crater_depth_km", Some(fx.crater_depth_km));
        map.insert("earthquake_magnitude", Some(fx.earthquake_magnitude));
        map.insert("tsunami_height_m", fx.tsunami_height_m);
        map.insert("is_ocean_impact", Some(if fx.is_ocean_impact { 1.0 } else { 0.0 }));

        let dr = &self.damage_radii;
        map.insert("total_destruction_km", dr.total_destruction_km);
        map.insert("severe_damage_km", dr.severe_damage_km);
        map.insert("moderate_damage_km", dr.moderate_damage_km);
        map.insert("window_breakage_km", dr.window_breakage_km);
        map.insert("light_damage_km", dr.light_damage_km());

        map
    }
}

/// Run the full pipeline from raw numbers with the default impactor density
///
/// # Arguments
/// * `diameter_m` - Impactor diameter in m
/// * `velocity_ms` - Impact velocity in m/s
/// * `is_ocean` - Whether the impact point is open water
/// * `site_density_kg_m3` - Target surface density, normally `DEFAULT_SITE_DENSITY_KG_M3`
///
/// # Example
/// ```
/// use impact::pipeline::{run_full_impact, DEFAULT_SITE_DENSITY_KG_M3};
///
/// let result = run_full_impact(1000.0, 20_000.0, false, DEFAULT_SITE_DENSITY_KG_M3).unwrap();
/// assert!(result.effects.crater_diameter_km > 0.0);
/// assert!(result.effects.tsunami_height_m.is_none());
/// ```
pub fn run_full_impact(
    diameter_m: f64,
    velocity_ms: f64,
    is_ocean: bool,
    site_density_kg_m3: f64,
) -> Result<FullImpactResult> {
    let config = ImpactConfig {
        site_density_kg_m3,
        ..ImpactConfig::default()
    };
    let body = config.body(diameter_m, velocity_ms)?;
    let site = config.site(is_ocean)?;
    run_impact(&body, &site, &config)
}

/// Run the full pipeline for a validated body and site
///
/// The body and site must be made of the materials `config` describes,
/// which [`ImpactConfig::body`] and [`ImpactConfig::site`] guarantee.
/// `config` also supplies the assumed ocean depth.
pub fn run_impact(
    body: &ImpactBody,
    site: &ImpactSite,
    config: &ImpactConfig,
) -> Result<FullImpactResult> {
    config.validate()?;
    require_configured(
        "bulk_density_kg_m3",
        body.bulk_density().to_kg_per_m3(),
        config.bulk_density_kg_m3,
    )?;
    require_configured(
        "site_density_kg_m3",
        site.surface_density_kg_m3,
        config.site_density_kg_m3,
    )?;

    let mass_energy = body.mass_and_energy()?;
    debug!(
        mass_kg = mass_energy.mass_kg,
        energy_joules = mass_energy.energy_joules,
        "computed impactor mass and energy"
    );

    let effects = impact_effects_at(
        mass_energy.energy(),
        site,
        Length::from_meters(config.ocean_depth_m),
    )?;
    debug!(
        megatons_tnt = effects.megatons_tnt,
        crater_diameter_km = effects.crater_diameter_km,
        earthquake_magnitude = effects.earthquake_magnitude,
        tsunami_height_m = ?effects.tsunami_height_m,
        "computed impact effects"
    );

    let damage_radii = damage_radii(effects.megatons_tnt);

    Ok(FullImpactResult {
        mass_energy,
        effects,
        damage_radii,
    })
}

fn require_configured(parameter: &'static str, value: f64, configured: f64) -> Result<()> {
    if value == configured {
        Ok(())
    } else {
        Err(ImpactError::InvalidInput {
            parameter,
            value,
            reason: "does not match the configured value",
        })
    }
}
