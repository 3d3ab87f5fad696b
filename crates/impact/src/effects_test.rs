//! Tests for crater, seismic and tsunami effects

use approx::assert_relative_eq;
use units::{Energy, Length};

use crate::effects::{
    crater_diameter_km, impact_effects, impact_effects_at, ImpactSite, CRATER_DEPTH_RATIO,
};
use crate::error::ErrorKind;

#[test]
fn test_one_megaton_land_impact() {
    let effects = impact_effects(4.184e15, 2700.0, false).unwrap();

    assert_relative_eq!(effects.megatons_tnt, 1.0);
    assert_relative_eq!(effects.crater_diameter_km, 1.768_398_640_833_065, max_relative = 1e-9);
    assert_relative_eq!(effects.earthquake_magnitude, 4.596_466_422_825_677, max_relative = 1e-9);
    assert_eq!(effects.tsunami_height_m, None);
    assert!(!effects.is_ocean_impact);
}

#[test]
fn test_reference_energy_gives_reference_crater() {
    let crater = crater_diameter_km(Energy::from_joules(1e15));
    assert_relative_eq!(crater, 1.161);
}

#[test]
fn test_depth_is_fixed_fraction_of_diameter() {
    for energy in [1.0, 1e10, 4.184e15, 2.7e20, 1e24] {
        let effects = impact_effects(energy, 2700.0, false).unwrap();
        assert_eq!(effects.crater_depth_km, 0.2 * effects.crater_diameter_km);
        assert_eq!(effects.crater_depth_km, CRATER_DEPTH_RATIO * effects.crater_diameter_km);
    }
}

#[test]
fn test_tsunami_only_for_ocean() {
    let land = impact_effects(1.9e16, 2700.0, false).unwrap();
    assert!(land.tsunami_height_m.is_none());

    let ocean = impact_effects(1.9e16, 2700.0, true).unwrap();
    let height = ocean.tsunami_height_m.expect("ocean impacts carry a tsunami height");
    assert!(height > 0.0);
    assert!(ocean.is_ocean_impact);

    // Everything else is identical between the two
    assert_eq!(land.crater_diameter_km, ocean.crater_diameter_km);
    assert_eq!(land.earthquake_magnitude, ocean.earthquake_magnitude);
}

#[test]
fn test_tsunami_height_formula() {
    let effects = impact_effects(4.184e15, 1025.0, true).unwrap();
    assert_relative_eq!(
        effects.tsunami_height_m.unwrap(),
        102_882.339_515_174_32,
        max_relative = 1e-9
    );
}

#[test]
fn test_shallower_ocean_gives_taller_wave() {
    let site = ImpactSite::new(1025.0, true).unwrap();
    let energy = Energy::from_megatons_tnt(10.0);

    let deep = impact_effects_at(energy, &site, Length::from_meters(4000.0)).unwrap();
    let shallow = impact_effects_at(energy, &site, Length::from_meters(1000.0)).unwrap();
    assert!(shallow.tsunami_height_m.unwrap() > deep.tsunami_height_m.unwrap());
}

#[test]
fn test_magnitude_grows_with_energy() {
    let small = impact_effects(1e15, 2700.0, false).unwrap();
    let large = impact_effects(1e18, 2700.0, false).unwrap();
    // Three decades of energy add 3 × 0.67 magnitudes
    assert_relative_eq!(
        large.earthquake_magnitude - small.earthquake_magnitude,
        2.01,
        epsilon = 1e-9
    );
}

#[test]
fn test_rejects_non_positive_energy() {
    for energy in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = impact_effects(energy, 2700.0, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn test_rejects_bad_site() {
    assert!(impact_effects(1e15, 0.0, false).is_err());
    assert!(ImpactSite::new(-2700.0, true).is_err());

    let site = ImpactSite::new(2700.0, true).unwrap();
    assert!(impact_effects_at(Energy::from_joules(1e15), &site, Length::from_meters(0.0)).is_err());
    assert_eq!(site.surface_density().to_kg_per_m3(), 2700.0);
}
