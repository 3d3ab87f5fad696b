//! Seams to the outside world
//!
//! The pipeline never performs I/O. Hosts implement these traits over their
//! geocoding service, small-body catalog and map renderer, and the
//! [`Simulator`](crate::simulation::Simulator) wires them around the pure
//! calculation.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::{Length, Velocity};

use crate::damage::DamageRadii;
use crate::diameter::estimate_diameter;
use crate::error::{ImpactError, Result};

/// What a geocoder says about a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SurfaceLookup {
    Land,
    Ocean,
    /// The geocoder answered but had no result for the coordinate
    Unknown,
}

/// Address components of the first reverse-geocoding hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeComponents {
    pub country: Option<String>,
}

impl SurfaceLookup {
    /// Classify a reverse-geocoding response
    ///
    /// No hit at all is `Unknown`. A hit without a country is taken to be
    /// open water. This is a known approximation: unclaimed land
    /// (Antarctica, disputed areas) also lacks a country and will be
    /// reported as ocean.
    pub fn from_components(first_result: Option<&GeocodeComponents>) -> Self {
        match first_result {
            None => SurfaceLookup::Unknown,
            Some(GeocodeComponents { country: Some(_) }) => SurfaceLookup::Land,
            Some(GeocodeComponents { country: None }) => SurfaceLookup::Ocean,
        }
    }
}

/// Maps a coordinate to land or water
pub trait Geolocator {
    fn classify_surface(&self, latitude: f64, longitude: f64) -> Result<SurfaceLookup>;
}

/// Collapse a geocoder outcome into the ocean flag the pipeline takes
///
/// `Unknown` and collaborator failures both fall back to land, so an
/// unreachable geocoder never produces a tsunami estimate.
pub fn resolve_is_ocean(lookup: Result<SurfaceLookup>) -> bool {
    match lookup {
        Ok(SurfaceLookup::Ocean) => true,
        Ok(SurfaceLookup::Land) => false,
        Ok(SurfaceLookup::Unknown) => {
            warn!("surface type unknown, assuming land");
            false
        }
        Err(err) => {
            warn!(error = %err, "surface lookup failed, assuming land");
            false
        }
    }
}

/// A close-approach record with everything needed to run a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CatalogEntry {
    /// Provisional or permanent designation, e.g. "2024 YR4"
    pub designation: String,

    /// Absolute magnitude H
    pub h_magnitude: f64,

    /// Relative velocity at infinity, km/s
    pub v_inf_km_s: f64,
}

/// A raw catalog row before incomplete records are dropped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub designation: String,
    pub h_magnitude: Option<f64>,
    pub v_inf_km_s: Option<f64>,
}

impl CatalogEntry {
    /// Keep only rows that carry both H and v∞
    pub fn from_rows(rows: impl IntoIterator<Item = CatalogRow>) -> Vec<CatalogEntry> {
        rows.into_iter()
            .filter_map(|row| match (row.h_magnitude, row.v_inf_km_s) {
                (Some(h_magnitude), Some(v_inf_km_s)) => Some(CatalogEntry {
                    designation: row.designation,
                    h_magnitude,
                    v_inf_km_s,
                }),
                _ => None,
            })
            .collect()
    }

    pub fn estimated_diameter(&self, albedo: f64) -> Result<Length> {
        estimate_diameter(self.h_magnitude, albedo)
    }

    pub fn v_inf(&self) -> Velocity {
        Velocity::from_km_per_sec(self.v_inf_km_s)
    }
}

/// Source of named small bodies
pub trait Catalog {
    fn close_approaches(&self) -> Result<Vec<CatalogEntry>>;

    /// Look up a designation, ignoring whitespace
    fn find(&self, designation: &str) -> Result<Option<CatalogEntry>> {
        let wanted = normalize_designation(designation);
        Ok(self
            .close_approaches()?
            .into_iter()
            .find(|entry| normalize_designation(&entry.designation) == wanted))
    }
}

/// Turns impact results into presentation markup
pub trait ImpactRenderer {
    fn render(
        &self,
        latitude: f64,
        longitude: f64,
        radii: &DamageRadii,
        earthquake_magnitude: f64,
    ) -> String;
}

/// Strip all whitespace from a designation
pub fn normalize_designation(designation: &str) -> String {
    designation.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Wrap a transport-level failure as an upstream error
pub fn unavailable(collaborator: &'static str, err: impl std::fmt::Display) -> ImpactError {
    ImpactError::upstream(collaborator, err.to_string())
}
