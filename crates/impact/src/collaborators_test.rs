//! Tests for collaborator seams and fallback policy

use approx::assert_relative_eq;

use crate::collaborators::{
    normalize_designation, resolve_is_ocean, unavailable, Catalog, CatalogEntry, CatalogRow,
    GeocodeComponents, SurfaceLookup,
};
use crate::error::{ErrorKind, Result};

struct FixedCatalog(Vec<CatalogEntry>);

impl Catalog for FixedCatalog {
    fn close_approaches(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self.0.clone())
    }
}

struct OfflineCatalog;

impl Catalog for OfflineCatalog {
    fn close_approaches(&self) -> Result<Vec<CatalogEntry>> {
        Err(unavailable("catalog", "HTTP 503"))
    }
}

#[test]
fn test_surface_from_geocode_components() {
    assert_eq!(SurfaceLookup::from_components(None), SurfaceLookup::Unknown);

    let france = GeocodeComponents {
        country: Some("France".to_string()),
    };
    assert_eq!(SurfaceLookup::from_components(Some(&france)), SurfaceLookup::Land);

    // A hit without a country is read as open water
    let pacific = GeocodeComponents::default();
    assert_eq!(SurfaceLookup::from_components(Some(&pacific)), SurfaceLookup::Ocean);
}

#[test]
fn test_unknown_and_failures_fall_back_to_land() {
    assert!(resolve_is_ocean(Ok(SurfaceLookup::Ocean)));
    assert!(!resolve_is_ocean(Ok(SurfaceLookup::Land)));
    assert!(!resolve_is_ocean(Ok(SurfaceLookup::Unknown)));
    assert!(!resolve_is_ocean(Err(unavailable("geocoder", "timeout"))));
}

#[test]
fn test_catalog_rows_missing_fields_are_dropped() {
    let rows = vec![
        CatalogRow {
            designation: "2024 YR4".to_string(),
            h_magnitude: Some(23.9),
            v_inf_km_s: Some(12.6),
        },
        CatalogRow {
            designation: "2023 DW".to_string(),
            h_magnitude: None,
            v_inf_km_s: Some(20.0),
        },
        CatalogRow {
            designation: "2019 OK".to_string(),
            h_magnitude: Some(23.3),
            v_inf_km_s: None,
        },
    ];

    let entries = CatalogEntry::from_rows(rows);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].designation, "2024 YR4");
    assert_relative_eq!(entries[0].v_inf().to_meters_per_sec(), 12_600.0);
    assert!(entries[0].estimated_diameter(0.15).unwrap().to_meters() > 40.0);
}

#[test]
fn test_catalog_find_ignores_whitespace() {
    let catalog = FixedCatalog(vec![CatalogEntry {
        designation: "2024 YR4".to_string(),
        h_magnitude: 23.9,
        v_inf_km_s: 12.6,
    }]);

    let hit = catalog.find("2024YR4").unwrap();
    assert_eq!(hit.map(|entry| entry.h_magnitude), Some(23.9));
    assert!(catalog.find("1999 AN10").unwrap().is_none());
}

#[test]
fn test_catalog_failure_is_upstream_error() {
    let err = OfflineCatalog.find("2024 YR4").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
    assert_eq!(err.to_string(), "catalog unavailable: HTTP 503");
}

#[test]
fn test_normalize_designation() {
    assert_eq!(normalize_designation(" 2024 YR4 "), "2024YR4");
    assert_eq!(normalize_designation("   "), "");
}
