//! Request resolution and collaborator orchestration
//!
//! A simulation request either names a catalogued body (absolute magnitude
//! plus speed) or gives a size and speed directly. The [`Simulator`]
//! resolves that into an [`ImpactBody`], asks the geolocator about the
//! impact point, runs the pure pipeline and finally hands the radii to the
//! renderer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use units::{Length, Velocity};

use crate::collaborators::{normalize_designation, resolve_is_ocean, Geolocator, ImpactRenderer};
use crate::config::ImpactConfig;
use crate::diameter::estimate_diameter;
use crate::energy::ImpactBody;
use crate::error::{require_in_range, require_positive, ImpactError, Result};
use crate::pipeline::{run_impact, FullImpactResult};

/// Incoming simulation parameters, every field optional
///
/// Sizes are in km and speeds in km/s, the units people type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationRequest {
    pub asteroid_name: Option<String>,
    pub diameter_km: Option<f64>,
    pub velocity_km_s: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub h_magnitude: Option<f64>,
}

/// Where the impactor's size came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BodySource {
    /// Estimated from a named body's absolute magnitude
    Catalog { designation: String, h_magnitude: f64 },
    /// Entered directly
    Manual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub source: BodySource,
    pub body: ImpactBody,
    pub latitude: f64,
    pub longitude: f64,
}

impl SimulationRequest {
    fn designation(&self) -> Option<String> {
        self.asteroid_name
            .as_deref()
            .map(normalize_designation)
            .filter(|name| !name.is_empty())
    }

    /// Turn the request into a validated body and coordinate
    ///
    /// A non-blank name needs `h_magnitude` and `velocity_km_s`; without a
    /// name, `diameter_km` and `velocity_km_s` are needed. Missing
    /// coordinates default to 0°, 0°.
    pub fn resolve(&self, config: &ImpactConfig) -> Result<ResolvedRequest> {
        let latitude = require_in_range("latitude", self.latitude.unwrap_or(0.0), -90.0, 90.0)?;
        let longitude =
            require_in_range("longitude", self.longitude.unwrap_or(0.0), -180.0, 180.0)?;

        let velocity_km_s = self
            .velocity_km_s
            .ok_or(ImpactError::MissingInput("velocity_km_s"))?;
        let velocity = Velocity::from_km_per_sec(require_positive("velocity_km_s", velocity_km_s)?);

        let (source, diameter) = match (self.designation(), self.h_magnitude, self.diameter_km) {
            (Some(designation), Some(h_magnitude), _) => {
                let diameter = estimate_diameter(h_magnitude, config.albedo)?;
                (
                    BodySource::Catalog {
                        designation,
                        h_magnitude,
                    },
                    diameter,
                )
            }
            (Some(_), None, _) => return Err(ImpactError::MissingInput("h_magnitude")),
            (None, _, Some(diameter_km)) => (BodySource::Manual, Length::from_km(diameter_km)),
            (None, _, None) => return Err(ImpactError::MissingInput("diameter_km")),
        };

        let body = config.body(diameter.to_meters(), velocity.to_meters_per_sec())?;

        Ok(ResolvedRequest {
            source,
            body,
            latitude,
            longitude,
        })
    }
}

/// A finished simulation, ready for the front-end
///
/// Markup from the renderer rides alongside the numeric result; the
/// pipeline records themselves never carry it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub source: BodySource,
    pub impact: FullImpactResult,
    pub is_ocean: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub map_markup: String,
}

pub struct Simulator<G, R> {
    geolocator: G,
    renderer: R,
    config: ImpactConfig,
}

impl<G: Geolocator, R: ImpactRenderer> Simulator<G, R> {
    pub fn new(geolocator: G, renderer: R, config: ImpactConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            geolocator,
            renderer,
            config,
        })
    }

    pub fn config(&self) -> &ImpactConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn simulate(&self, request: &SimulationRequest) -> Result<SimulationReport> {
        let resolved = request.resolve(&self.config)?;
        debug!(source = ?resolved.source, body = ?resolved.body, "resolved simulation request");

        let is_ocean = resolve_is_ocean(
            self.geolocator
                .classify_surface(resolved.latitude, resolved.longitude),
        );
        let site = self.config.site(is_ocean)?;

        let impact = run_impact(&resolved.body, &site, &self.config)?;
        let map_markup = self.renderer.render(
            resolved.latitude,
            resolved.longitude,
            &impact.damage_radii,
            impact.effects.earthquake_magnitude,
        );

        info!(
            latitude = resolved.latitude,
            longitude = resolved.longitude,
            is_ocean,
            megatons_tnt = impact.effects.megatons_tnt,
            "impact simulated"
        );

        Ok(SimulationReport {
            source: resolved.source,
            impact,
            is_ocean,
            latitude: resolved.latitude,
            longitude: resolved.longitude,
            map_markup,
        })
    }
}
