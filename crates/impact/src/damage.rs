//! Blast damage radii
//!
//! Overpressure radii scale with the cube root of yield. The four bands
//! below use fixed coefficients in km per Mt^(1/3), so for any positive
//! yield they nest strictly from total destruction out to window breakage.
//!
//! | Band              | Coefficient (km / Mt^⅓) | Approx. overpressure |
//! |-------------------|-------------------------|----------------------|
//! | Total destruction | 0.042                   | > 20 psi             |
//! | Severe damage     | 0.084                   | ~10 psi              |
//! | Moderate damage   | 0.17                    | ~5 psi               |
//! | Window breakage   | 0.34                    | ~1 psi               |

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::{Energy, Length};

/// Damage band around the impact point, ordered from the center outward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DamageBand {
    TotalDestruction,
    Severe,
    Moderate,
    /// Also reported as "light damage"
    WindowBreakage,
}

impl DamageBand {
    pub const ALL: [DamageBand; 4] = [
        DamageBand::TotalDestruction,
        DamageBand::Severe,
        DamageBand::Moderate,
        DamageBand::WindowBreakage,
    ];

    /// Radius in km of this band for a 1 Mt yield
    pub fn coefficient_km(self) -> f64 {
        match self {
            DamageBand::TotalDestruction => 0.042,
            DamageBand::Severe => 0.084,
            DamageBand::Moderate => 0.17,
            DamageBand::WindowBreakage => 0.34,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DamageBand::TotalDestruction => "total destruction",
            DamageBand::Severe => "severe damage",
            DamageBand::Moderate => "moderate damage",
            DamageBand::WindowBreakage => "window breakage",
        }
    }
}

/// Nested blast radii in km
///
/// Every field is `None` when there was no positive yield to scale from.
/// `window_breakage_km` is the canonical name of the outermost band;
/// `light_damage_km` is accepted on input and offered as an accessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct DamageRadii {
    pub total_destruction_km: Option<f64>,
    pub severe_damage_km: Option<f64>,
    pub moderate_damage_km: Option<f64>,
    #[serde(alias = "light_damage_km")]
    pub window_breakage_km: Option<f64>,
}

impl DamageRadii {
    /// No damage: every band absent
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bands().next().is_none()
    }

    pub fn radius_km(&self, band: DamageBand) -> Option<f64> {
        match band {
            DamageBand::TotalDestruction => self.total_destruction_km,
            DamageBand::Severe => self.severe_damage_km,
            DamageBand::Moderate => self.moderate_damage_km,
            DamageBand::WindowBreakage => self.window_breakage_km,
        }
    }

    pub fn radius(&self, band: DamageBand) -> Option<Length> {
        self.radius_km(band).map(Length::from_km)
    }

    pub fn light_damage_km(&self) -> Option<f64> {
        self.window_breakage_km
    }

    /// Present bands from innermost to outermost
    pub fn bands(&self) -> impl Iterator<Item = (DamageBand, f64)> + '_ {
        DamageBand::ALL
            .into_iter()
            .filter_map(|band| self.radius_km(band).map(|radius| (band, radius)))
    }
}

/// Damage radii for a yield in megatons of TNT
///
/// Yields that are not strictly positive finite numbers produce no damage
/// bands rather than an error.
///
/// # Example
/// ```
/// use impact::damage::damage_radii;
///
/// let radii = damage_radii(1000.0);
/// assert!((radii.total_destruction_km.unwrap() - 0.42).abs() < 1e-12);
///
/// assert!(damage_radii(0.0).is_empty());
/// assert!(damage_radii(-5.0).is_empty());
/// ```
pub fn damage_radii(energy_megatons: f64) -> DamageRadii {
    if !(energy_megatons > 0.0 && energy_megatons.is_finite()) {
        return DamageRadii::none();
    }

    let scale = energy_megatons.cbrt();
    let radius = |band: DamageBand| Some(band.coefficient_km() * scale);

    DamageRadii {
        total_destruction_km: radius(DamageBand::TotalDestruction),
        severe_damage_km: radius(DamageBand::Severe),
        moderate_damage_km: radius(DamageBand::Moderate),
        window_breakage_km: radius(DamageBand::WindowBreakage),
    }
}

pub fn damage_radii_for(energy: Energy) -> DamageRadii {
    damage_radii(energy.to_megatons_tnt())
}
