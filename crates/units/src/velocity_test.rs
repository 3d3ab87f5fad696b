mod tests {
    use approx::assert_relative_eq;

    use crate::velocity::Velocity;

    #[test]
    fn test_velocity_conversions() {
        let v = Velocity::from_km_per_sec(20.0);
        assert_relative_eq!(v.to_meters_per_sec(), 20_000.0);
        assert_relative_eq!(v.to_km_per_sec(), 20.0);

        let slow = Velocity::from_meters_per_sec(11_200.0);
        assert_relative_eq!(slow.to_km_per_sec(), 11.2);
    }

    #[test]
    fn test_velocity_squared() {
        assert_relative_eq!(Velocity::from_km_per_sec(20.0).squared(), 4.0e8);
        assert_relative_eq!(Velocity::from_meters_per_sec(3.0).squared(), 9.0);
    }
}
