// Host-side tests for tuning constants and parameter validation.

use landing_motion::config::{CarouselParams, HoverTiltParams, ViewerParams};
use landing_motion::constants::*;
use landing_motion::core::constants::*;
use landing_motion::error::ConfigError;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, f64)]) -> impl Fn(&str) -> Option<f64> {
    let map: HashMap<String, f64> = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    move |key| map.get(key).copied()
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn coast_constants_decay_to_a_stop() {
    assert!(COAST_FRICTION > 0.0 && COAST_FRICTION < 1.0);
    assert!(COAST_STOP_VELOCITY > 0.0);
    assert!(FRAME_NORMALIZATION_MS > 0.0);
    assert!(DRAG_SENSITIVITY > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn viewer_constants_are_in_range() {
    assert!(POINTER_LERP > 0.0 && POINTER_LERP <= 1.0);
    assert!(SPIN_LERP > 0.0 && SPIN_LERP <= 1.0);
    assert!((INITIAL_YAW - 80.0_f32.to_radians()).abs() < 1e-6);
    assert!(TILT_X_BIAS < 0.0 && TILT_Z_BIAS < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn card_arc_keeps_edge_cards_visible() {
    assert!(CARD_SHRINK >= 0.0 && CARD_SHRINK < 1.0);
    assert!(CARD_CURVE_EXPONENT > 0.0);
    assert!(CARD_Z_INDEX_SPAN >= 1.0);
}

#[test]
fn defaults_validate() {
    assert_eq!(CarouselParams::default().validate(), Ok(()));
    assert_eq!(ViewerParams::default().validate(), Ok(()));
    assert_eq!(HoverTiltParams::default().validate(), Ok(()));
}

#[test]
fn resolve_without_overrides_is_default() {
    let none = |_: &str| None;
    assert_eq!(CarouselParams::resolve(none), Ok(CarouselParams::default()));
    assert_eq!(ViewerParams::resolve(none), Ok(ViewerParams::default()));
    assert_eq!(HoverTiltParams::resolve(none), Ok(HoverTiltParams::default()));
}

#[test]
fn overrides_replace_named_fields_only() {
    let params = CarouselParams::resolve(lookup(&[("friction", 0.9), ("lift", 120.0)]))
        .expect("valid overrides");
    assert_eq!(params.friction, 0.9);
    assert_eq!(params.lift_px, 120.0);
    assert_eq!(params.sensitivity, DRAG_SENSITIVITY);
    assert_eq!(params.depth_px, CARD_DEPTH_PX);
}

#[test]
fn yaw_override_is_given_in_degrees() {
    let params = ViewerParams::resolve(lookup(&[("initial-yaw-deg", 90.0)])).expect("valid");
    assert!((params.initial_yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn friction_must_decay() {
    for friction in [0.0, 1.0, 1.2] {
        let params = CarouselParams {
            friction,
            ..CarouselParams::default()
        };
        assert!(
            matches!(
                params.validate(),
                Err(ConfigError::OutOfRange { field: "friction", .. })
            ),
            "friction {friction}"
        );
    }
}

#[test]
fn invalid_override_is_rejected() {
    let err = CarouselParams::resolve(lookup(&[("sensitivity", -1.0)])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::NotPositive {
            field: "sensitivity",
            value: -1.0
        }
    );

    let err = HoverTiltParams::resolve(lookup(&[("lerp", f64::NAN)])).unwrap_err();
    assert!(matches!(err, ConfigError::NotFinite { field: "lerp", .. }));

    let err = CarouselParams::resolve(lookup(&[("shrink", 1.0)])).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "shrink", .. }));
}

#[test]
fn lerp_of_one_is_allowed() {
    let params = ViewerParams {
        pointer_lerp: 1.0,
        spin_lerp: 1.0,
        ..ViewerParams::default()
    };
    assert_eq!(params.validate(), Ok(()));
}

#[test]
fn errors_name_the_field() {
    let err = ConfigError::OutOfRange {
        field: "friction",
        value: 1.0,
        range: "(0, 1)",
    };
    assert_eq!(err.to_string(), "friction must lie in (0, 1), got 1");
}
