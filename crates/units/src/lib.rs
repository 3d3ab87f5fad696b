//! Typed physical quantities for impact calculations
//!
//! Every quantity stores an SI base unit internally and offers named
//! conversions to the units impact literature reports in (km, AU,
//! megatons TNT). All types serialize as bare numbers.

pub mod energy;
pub mod length;
pub mod mass;
pub mod velocity;
pub mod volume_density;

#[cfg(test)]
mod velocity_test;
#[cfg(test)]
mod volume_density_test;

pub use energy::Energy;
pub use length::Length;
pub use mass::Mass;
pub use velocity::Velocity;
pub use volume_density::VolumeDensity;
