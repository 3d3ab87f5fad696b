//! Impactor mass and kinetic energy
//!
//! The body is treated as a uniform sphere, and the energy is the
//! non-relativistic kinetic energy at atmospheric entry. Impact speeds are
//! a few tens of km/s, far below the regime where relativistic terms matter.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::{Energy, Length, Mass, Velocity, VolumeDensity};

use crate::error::{require_positive, ImpactError, Result};

/// Average bulk density of a C-type asteroid in kg/m³
pub const DEFAULT_BULK_DENSITY_KG_M3: f64 = 2600.0;

/// A validated impactor: finite, positive size, speed and density
///
/// Only constructible through [`ImpactBody::new`] and
/// [`ImpactBody::with_density`], so every instance satisfies the
/// preconditions of the mass/energy model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactBody {
    diameter_m: f64,
    velocity_ms: f64,
    bulk_density_kg_m3: f64,
}

impl ImpactBody {
    /// A body with the default C-type bulk density
    pub fn new(diameter_m: f64, velocity_ms: f64) -> Result<Self> {
        Self::with_density(diameter_m, velocity_ms, DEFAULT_BULK_DENSITY_KG_M3)
    }

    pub fn with_density(
        diameter_m: f64,
        velocity_ms: f64,
        bulk_density_kg_m3: f64,
    ) -> Result<Self> {
        Ok(Self {
            diameter_m: require_positive("diameter_m", diameter_m)?,
            velocity_ms: require_positive("velocity_ms", velocity_ms)?,
            bulk_density_kg_m3: require_positive("bulk_density_kg_m3", bulk_density_kg_m3)?,
        })
    }

    pub fn diameter(&self) -> Length {
        Length::from_meters(self.diameter_m)
    }

    pub fn velocity(&self) -> Velocity {
        Velocity::from_meters_per_sec(self.velocity_ms)
    }

    pub fn bulk_density(&self) -> VolumeDensity {
        VolumeDensity::from_kg_per_m3(self.bulk_density_kg_m3)
    }

    /// Sphere geometry, mass and kinetic energy for this body
    ///
    /// Fails when the mass or energy overflows to infinity or underflows to
    /// zero, naming the input responsible: the diameter for mass, the
    /// velocity for energy.
    pub fn mass_and_energy(&self) -> Result<MassEnergyResult> {
        let radius = self.diameter().half();
        let volume_m3 = radius.sphere_volume_m3();
        let mass = Mass::of_sphere(radius, self.bulk_density());
        require_representable("diameter_m", self.diameter_m, mass.to_kg())?;

        let energy = Energy::kinetic(mass, self.velocity());
        require_representable("velocity_ms", self.velocity_ms, energy.to_joules())?;

        Ok(MassEnergyResult {
            mass_kg: mass.to_kg(),
            energy_joules: energy.to_joules(),
            radius_m: radius.to_meters(),
            volume_m3,
            density_kg_m3: self.bulk_density_kg_m3,
        })
    }
}

fn require_representable(parameter: &'static str, input: f64, derived: f64) -> Result<()> {
    if derived.is_finite() && derived > 0.0 {
        Ok(())
    } else {
        Err(ImpactError::InvalidInput {
            parameter,
            value: input,
            reason: "gives a mass or energy outside the floating-point range",
        })
    }
}

/// Mass and energy of an impactor
///
/// `energy_joules == 0.5 * mass_kg * v²` for the velocity it was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct MassEnergyResult {
    /// Mass in kg
    pub mass_kg: f64,

    /// Kinetic energy in J
    pub energy_joules: f64,

    /// Sphere radius in m
    pub radius_m: f64,

    /// Sphere volume in m³
    pub volume_m3: f64,

    /// Bulk density the mass was derived from, kg/m³
    pub density_kg_m3: f64,
}

impl MassEnergyResult {
    pub fn mass(&self) -> Mass {
        Mass::from_kg(self.mass_kg)
    }

    pub fn energy(&self) -> Energy {
        Energy::from_joules(self.energy_joules)
    }
}

/// Mass and kinetic energy of a uniform sphere
///
/// # Arguments
/// * `diameter_m` - Diameter in meters
/// * `velocity_ms` - Impact velocity in m/s
/// * `density_kg_m3` - Bulk density in kg/m³
///
/// # Example
/// ```
/// use impact::energy::mass_and_energy;
///
/// let result = mass_and_energy(1000.0, 20_000.0, 2600.0).unwrap();
/// assert!(result.energy_joules > 2.6e20 && result.energy_joules < 2.8e20);
/// ```
pub fn mass_and_energy(
    diameter_m: f64,
    velocity_ms: f64,
    density_kg_m3: f64,
) -> Result<MassEnergyResult> {
    ImpactBody::with_density(diameter_m, velocity_ms, density_kg_m3)?.mass_and_energy()
}
