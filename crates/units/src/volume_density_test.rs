mod tests {
    use crate::volume_density::VolumeDensity;

    #[test]
    fn test_volume_density_conversions() {
        let rock = VolumeDensity::from_kg_per_m3(2700.0);
        assert_eq!(rock.to_kg_per_m3(), 2700.0);
    }

    #[test]
    fn test_volume_density_ordering() {
        let comet = VolumeDensity::from_kg_per_m3(600.0);
        let iron = VolumeDensity::from_kg_per_m3(7800.0);
        assert!(comet < iron);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&VolumeDensity::from_kg_per_m3(1025.0)).unwrap();
        assert_eq!(json, "1025.0");
    }
}
