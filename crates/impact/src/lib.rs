//! Celestial impact effects
//!
//! This crate estimates what happens when a small body hits the Earth:
//! impactor mass and kinetic energy, crater size, seismic magnitude,
//! tsunami height for ocean impacts, blast damage radii and a coarse risk
//! tier. Every calculation is a pure function of its inputs.
//!
//! # Example
//! ```
//! use impact::{run_full_impact, DEFAULT_SITE_DENSITY_KG_M3};
//!
//! // 50 m body at 15 km/s into the ocean
//! let result = run_full_impact(50.0, 15_000.0, true, DEFAULT_SITE_DENSITY_KG_M3).unwrap();
//! assert!(result.effects.tsunami_height_m.unwrap() > 0.0);
//! ```

pub mod collaborators;
pub mod config;
pub mod damage;
pub mod diameter;
pub mod effects;
pub mod energy;
pub mod error;
pub mod pipeline;
pub mod risk;
pub mod simulation;

// Re-export key types at crate root
pub use collaborators::{Catalog, CatalogEntry, Geolocator, ImpactRenderer, SurfaceLookup};
pub use config::ImpactConfig;
pub use damage::{damage_radii, DamageBand, DamageRadii};
pub use diameter::{estimate_diameter_km, DEFAULT_ALBEDO};
pub use effects::{impact_effects, ImpactEffects, ImpactSite};
pub use energy::{mass_and_energy, ImpactBody, MassEnergyResult, DEFAULT_BULK_DENSITY_KG_M3};
pub use error::{ErrorKind, ImpactError, Result};
pub use pipeline::{run_full_impact, run_impact, FullImpactResult, DEFAULT_SITE_DENSITY_KG_M3};
pub use risk::{risk_assessment, RiskAssessment, RiskLevel};
pub use simulation::{SimulationReport, SimulationRequest, Simulator};

#[cfg(test)]
mod collaborators_test;
#[cfg(test)]
mod diameter_test;
#[cfg(test)]
mod effects_test;
#[cfg(test)]
mod risk_test;
