use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Catalogs and user input express encounter speeds in km/s
    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * 1000.0)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / 1000.0
    }

    /// v², in m²/s²
    pub fn squared(&self) -> f64 {
        self.0 * self.0
    }
}
