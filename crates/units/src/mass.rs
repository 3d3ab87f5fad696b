use serde::{Deserialize, Serialize};

use crate::length::Length;
use crate::volume_density::VolumeDensity;

/// A physical mass quantity using f64 precision.
///
/// Kilograms are the base unit. Impactor masses span roughly 10³ kg for
/// a meter-sized meteoroid up to 10¹⁵ kg and beyond for kilometer-class
/// asteroids.
///
/// # Examples
///
/// ```rust
/// use units::{Length, Mass, VolumeDensity};
///
/// // A 10 m rocky sphere
/// let sphere = Mass::of_sphere(Length::from_meters(5.0), VolumeDensity::from_kg_per_m3(2600.0));
/// assert!(sphere.to_kg() > 1.3e6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: kg

impl Mass {
    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    /// Mass of a uniform sphere with the given radius and bulk density.
    ///
    /// m = ρ · (4/3)πr³
    pub fn of_sphere(radius: Length, density: VolumeDensity) -> Self {
        Self(density.to_kg_per_m3() * radius.sphere_volume_m3())
    }

    pub fn to_kg(&self) -> f64 {
        self.0
    }
}
