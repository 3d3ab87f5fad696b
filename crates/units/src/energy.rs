use serde::{Deserialize, Serialize};

use crate::mass::Mass;
use crate::velocity::Velocity;

/// Joules released by one megaton of TNT (4.184 × 10¹⁵ J)
pub const JOULES_PER_MEGATON_TNT: f64 = 4.184e15;

/// A physical energy quantity using f64 precision.
///
/// Joules are the base unit. Impact energies are conventionally quoted as
/// TNT equivalent: the Chelyabinsk airburst released roughly 0.5 Mt, the
/// Chicxulub impactor on the order of 10⁸ Mt.
///
/// # Examples
///
/// ```rust
/// use units::{Energy, Mass, Velocity};
///
/// let yield_ = Energy::from_megatons_tnt(1.0);
/// assert_eq!(yield_.to_joules(), 4.184e15);
///
/// let kinetic = Energy::kinetic(Mass::from_kg(2.0), Velocity::from_meters_per_sec(3.0));
/// assert_eq!(kinetic.to_joules(), 9.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Energy(f64); // Base unit: J

impl Energy {
    pub fn from_joules(value: f64) -> Self {
        Self(value)
    }

    pub fn from_megatons_tnt(value: f64) -> Self {
        Self(value * JOULES_PER_MEGATON_TNT)
    }

    /// Non-relativistic kinetic energy, E = ½mv²
    pub fn kinetic(mass: Mass, velocity: Velocity) -> Self {
        Self(0.5 * mass.to_kg() * velocity.squared())
    }

    pub fn to_joules(&self) -> f64 {
        self.0
    }

    pub fn to_megatons_tnt(&self) -> f64 {
        self.0 / JOULES_PER_MEGATON_TNT
    }

    pub fn log10(&self) -> f64 {
        self.0.log10()
    }

    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}
