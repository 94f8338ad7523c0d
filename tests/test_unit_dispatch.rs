use heightwise::core::{imperial_only, CENTIMETERS_PER_INCH, INCHES_PER_CENTIMETER};
use heightwise::{Height, Imperial, Measurement, Metric, UnitSystem};
use proptest::prelude::*;

#[test]
fn test_multiply_heights() {
    assert_eq!(Measurement::metric(2.0, 60.0).scale(2.0).to_string(), "5.20m");
    assert_eq!(Measurement::imperial(3.0, 5.0).scale(3.0).to_string(), "10'3\"");
}

#[test]
fn test_scale_preserves_system_tag() {
    for system in UnitSystem::ALL {
        let scaled = Measurement::new(system, 1.0, 1.0).scale(7.5);
        assert_eq!(scaled.system(), system);
        assert!(scaled.is_normalized());
    }
}

#[test]
fn test_convert_targets_other_system() {
    for system in UnitSystem::ALL {
        let converted = Measurement::new(system, 2.0, 3.0).convert().unwrap();
        assert_eq!(converted.system(), system.converted());
    }
}

#[test]
fn test_conversion_factors_are_reciprocal() {
    assert!((CENTIMETERS_PER_INCH * INCHES_PER_CENTIMETER - 1.0).abs() < 1e-15);
    assert_eq!(
        UnitSystem::Imperial.minor_conversion_factor(UnitSystem::Metric),
        CENTIMETERS_PER_INCH
    );
    assert_eq!(UnitSystem::Metric.minor_conversion_factor(UnitSystem::Metric), 1.0);
}

#[test]
fn test_six_feet_in_metric() {
    let metric = Measurement::imperial(6.0, 0.0).convert().unwrap();
    let parts = metric.as_metric().unwrap();
    assert_eq!(parts.meters, 1.0);
    assert!((parts.centimeters - 82.88).abs() < 1e-9);
    assert_eq!(metric.to_string(), "1.83m");
}

#[test]
fn test_filter_mixed_heights() {
    let heights = vec![
        Measurement::metric(1.0, 75.0),
        Measurement::imperial(5.0, 11.0),
        Measurement::imperial(6.0, 2.0),
    ];

    let tallest = imperial_only(&heights)
        .map(|h| h.feet * 12.0 + h.inches)
        .fold(f64::MIN, f64::max);
    assert_eq!(tallest, 74.0);
}

#[test]
fn test_typed_height_round_trip() {
    let start = Height::<Imperial>::new(5.0, 10.0);
    let metric: Height<Metric> = start.convert().unwrap();
    let back: Height<Imperial> = metric.convert().unwrap();

    assert_eq!(back.system(), UnitSystem::Imperial);
    assert!((back.quantity().to_minor_units() - 70.0).abs() < 1e-9);
}

#[test]
fn test_typed_height_bridge() {
    let dynamic = Measurement::metric(1.0, 80.0);
    let typed = Height::<Metric>::try_from(dynamic).unwrap();
    assert_eq!(typed.scale(2.0).to_string(), "3.60m");
    assert!(Height::<Imperial>::try_from(dynamic).is_err());
}

proptest! {
    #[test]
    fn prop_measurement_convert_round_trip(major in 0u32..10, minor in 0.0f64..12.0) {
        let start = Measurement::imperial(major as f64, minor);
        let back = start.convert().unwrap().convert().unwrap();
        prop_assert_eq!(back.system(), UnitSystem::Imperial);
        prop_assert!((back.to_minor_units() - start.to_minor_units()).abs() < 1e-9);
    }
}
