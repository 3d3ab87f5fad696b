use serde::{Deserialize, Serialize};

/// A bulk volume density (mass per volume) quantity using f64 precision.
///
/// Kilograms per cubic meter are the base unit. Typical values for
/// impactors and target surfaces:
/// - Cometary nucleus: ~600 kg/m³
/// - Carbonaceous (C-type) asteroid: ~2600 kg/m³
/// - Continental crust: ~2700 kg/m³
/// - Stony (S-type) asteroid: ~3300 kg/m³
/// - Iron (M-type) asteroid: ~7800 kg/m³
/// - Sea water: ~1025 kg/m³
///
/// # Examples
///
/// ```rust
/// use units::VolumeDensity;
///
/// let rubble = VolumeDensity::from_kg_per_m3(2600.0);
/// assert_eq!(rubble.to_kg_per_m3(), 2600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VolumeDensity(f64); // Base unit: kg/m³

impl VolumeDensity {
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value)
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0
    }
}
