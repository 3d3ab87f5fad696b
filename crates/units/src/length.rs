use serde::{Deserialize, Serialize};

/// Meters per astronomical unit (IAU 2012 definition)
pub const AU_TO_M: f64 = 1.495_978_707e11;
pub const KM_TO_M: f64 = 1000.0;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct stores meters as the base unit. Impact bodies are
/// specified in meters, crater and blast radii are reported in kilometers,
/// and close-approach distances arrive in astronomical units, so all three
/// conversions live here.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let impactor = Length::from_meters(1000.0);
/// assert_eq!(impactor.to_km(), 1.0);
///
/// let miss_distance = Length::from_au(0.05);
/// assert!(miss_distance.to_km() > 7.0e6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: m

impl Length {
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    /// Creates a new `Length` from a value in astronomical units.
    ///
    /// Close-approach catalogs report minimum distances in AU.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_M)
    }

    pub fn to_meters(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_M
    }

    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_M
    }

    /// Radius of a sphere with this length as its diameter
    pub fn half(&self) -> Self {
        Self(self.0 / 2.0)
    }

    /// Volume in m³ of a sphere with this length as its radius
    pub fn sphere_volume_m3(&self) -> f64 {
        4.0 / 3.0 * std::f64::consts::PI * self.0.powi(3)
    }
}
