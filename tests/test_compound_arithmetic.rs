use heightwise::{convert, from_minor_units, scale, to_minor_units, CompoundQuantity, ErrorKind};
use proptest::prelude::*;

fn quantity(major: f64, minor: f64, ratio: f64) -> CompoundQuantity {
    CompoundQuantity::new(major, minor, ratio).unwrap()
}

#[test]
fn test_metric_doubling() {
    // 2.60 doubled is 5.20
    assert_eq!(scale(&quantity(2.0, 60.0, 100.0), 2.0), quantity(5.0, 20.0, 100.0));
}

#[test]
fn test_imperial_tripling() {
    // 3'5" tripled is 10'3"
    assert_eq!(scale(&quantity(3.0, 5.0, 12.0), 3.0), quantity(10.0, 3.0, 12.0));
}

#[test]
fn test_negative_minor_units_use_floor_modulo() {
    let q = from_minor_units(-1.0, 12.0).unwrap();
    assert_eq!(q.major(), -1.0);
    assert_eq!(q.minor(), 11.0);
    assert_eq!(q.ratio(), 12.0);
}

#[test]
fn test_non_positive_ratio_fails() {
    for ratio in [0.0, -0.0, -100.0, f64::NAN, f64::NEG_INFINITY] {
        let err = from_minor_units(42.0, ratio).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::NonPositiveRatio { .. }));
    }
}

#[test]
fn test_fractional_multiplier() {
    // 5'0" halved is 2'6"
    assert_eq!(scale(&quantity(5.0, 0.0, 12.0), 0.5), quantity(2.0, 6.0, 12.0));
}

#[test]
fn test_convert_feet_to_meters_and_back() {
    let feet = quantity(5.0, 10.0, 12.0);
    let meters = convert(&feet, 100.0, 2.54).unwrap();
    assert_eq!(meters.major(), 1.0);
    assert!((meters.minor() - 77.8).abs() < 1e-9);

    let back = convert(&meters, 12.0, 1.0 / 2.54).unwrap();
    assert!((to_minor_units(&back) - to_minor_units(&feet)).abs() < 1e-9);
}

proptest! {
    #[test]
    fn prop_minor_in_range(total in -1e9f64..1e9, ratio in 1e-3f64..1e4) {
        let q = from_minor_units(total, ratio).unwrap();
        prop_assert!(q.minor() >= 0.0);
        prop_assert!(q.minor() < ratio);
    }

    #[test]
    fn prop_round_trip_integers(major in -10_000i32..10_000, minor in 0u32..12) {
        let q = quantity(major as f64, minor as f64, 12.0);
        prop_assert_eq!(from_minor_units(to_minor_units(&q), q.ratio()).unwrap(), q);
    }

    #[test]
    fn prop_round_trip_close(major in -1e6f64..1e6, frac in 0.0f64..1.0, ratio in 1.0f64..1000.0) {
        let q = quantity(major.floor(), frac * ratio, ratio);
        let back = from_minor_units(to_minor_units(&q), q.ratio()).unwrap();
        let tolerance = 1e-9 * to_minor_units(&q).abs().max(1.0);
        prop_assert!((to_minor_units(&back) - to_minor_units(&q)).abs() <= tolerance);
    }

    #[test]
    fn prop_scale_identity(major in -10_000i32..10_000, minor in 0u32..100) {
        let q = quantity(major as f64, minor as f64, 100.0);
        prop_assert_eq!(scale(&q, 1.0), q);
    }

    #[test]
    fn prop_scale_by_zero(major in -1e6f64..1e6, minor in -1e3f64..1e3) {
        let zero = scale(&quantity(major, minor, 12.0), 0.0);
        prop_assert_eq!(zero.major(), 0.0);
        prop_assert_eq!(zero.minor(), 0.0);
    }

    #[test]
    fn prop_scale_normalizes(major in -1e4f64..1e4, minor in -1e3f64..1e3, multiplier in -50.0f64..50.0) {
        let q = scale(&quantity(major, minor, 12.0), multiplier);
        prop_assert!(q.is_normalized());
    }

    #[test]
    fn prop_convert_round_trip(feet in 0u32..10, inches in 0.0f64..12.0) {
        let q = quantity(feet as f64, inches, 12.0);
        let metric = convert(&q, 100.0, 2.54).unwrap();
        let back = convert(&metric, 12.0, 1.0 / 2.54).unwrap();
        prop_assert!((to_minor_units(&back) - to_minor_units(&q)).abs() < 1e-9);
    }
}
