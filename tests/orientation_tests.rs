// Host-side tests for the product viewer's orientation blending.

use glam::{Mat3, Vec2, Vec3};
use landing_motion::config::ViewerParams;
use landing_motion::core::orientation::scroll_angle;
use landing_motion::core::smoothing::approach;
use landing_motion::core::{
    Bounds, ModelFit, Orientation, OrientationBlender, OrientationState,
};
use std::f32::consts::{PI, TAU};

const EPS: f32 = 1e-5;

fn snappy_pointer() -> ViewerParams {
    ViewerParams {
        pointer_lerp: 1.0,
        ..ViewerParams::default()
    }
}

#[test]
fn smoothing_at_target_is_a_fixed_point() {
    for (value, factor) in [(0.0, 0.05), (1.3962634, 0.1), (-7.25, 1.0)] {
        assert_eq!(approach(value, value, factor), value);
    }
}

#[test]
fn smoothing_never_overshoots() {
    let mut value = 0.0_f32;
    for _ in 0..500 {
        value = approach(value, 1.0, 0.1);
        assert!(value <= 1.0);
    }
    assert!((value - 1.0).abs() < EPS);
}

#[test]
fn full_scroll_is_exactly_one_turn() {
    let params = ViewerParams::default();
    let start = scroll_angle(0.0, &params);
    let end = scroll_angle(1.0, &params);

    assert_eq!(start, params.initial_yaw);
    assert!((end - start - TAU).abs() < EPS);
    assert!((params.initial_yaw - 80.0_f32.to_radians()).abs() < EPS);
}

#[test]
fn scroll_fraction_is_clamped() {
    let params = ViewerParams::default();
    assert_eq!(scroll_angle(2.5, &params), scroll_angle(1.0, &params));
    assert_eq!(scroll_angle(-1.0, &params), scroll_angle(0.0, &params));
    assert_eq!(scroll_angle(f32::NAN, &params), params.initial_yaw);
}

#[test]
fn pointer_does_not_move_the_spin_target() {
    let mut blender = OrientationBlender::new(snappy_pointer());
    blender.set_scroll_fraction(0.25);
    blender.tick();
    let before = blender.target().scroll_angle;

    blender.set_pointer(Vec2::new(0.05, 0.95));
    blender.tick();
    assert_eq!(blender.target().scroll_angle, before);
}

#[test]
fn spin_eases_toward_the_scroll_target() {
    let params = ViewerParams::default();
    let mut blender = OrientationBlender::new(params);
    blender.set_scroll_fraction(0.5);

    let first = blender.tick().orientation.spin_y;
    assert!((first - (params.initial_yaw + 0.1 * PI)).abs() < EPS);

    let target = params.initial_yaw + PI;
    let mut previous = first;
    for _ in 0..300 {
        let spin = blender.tick().orientation.spin_y;
        assert!(spin >= previous && spin <= target + EPS);
        previous = spin;
    }
    assert!((previous - target).abs() < 1e-3);
}

#[test]
fn pointer_smoothing_starts_off_centre() {
    let params = ViewerParams::default();
    let mut blender = OrientationBlender::new(params);
    assert_eq!(blender.state().smoothed_pointer, Vec2::new(0.9, 0.9));

    // no pointer yet: drift toward the rest point
    blender.tick();
    let smoothed = blender.state().smoothed_pointer;
    assert!((smoothed.x - 0.88).abs() < EPS);
    assert!((smoothed.y - 0.88).abs() < EPS);
}

#[test]
fn pointer_axes_map_to_pitch_and_roll() {
    let params = snappy_pointer();
    let mut blender = OrientationBlender::new(params);

    blender.set_pointer(Vec2::new(1.0, 0.5));
    let pose = blender.tick().orientation;
    assert!((pose.tilt_z - (params.tilt_z_bias + 0.2)).abs() < EPS);
    assert!((pose.tilt_x - params.tilt_x_bias).abs() < EPS);

    blender.set_pointer(Vec2::new(0.5, 0.0));
    let pose = blender.tick().orientation;
    assert!((pose.tilt_x - (params.tilt_x_bias - 0.2)).abs() < EPS);
    assert!((pose.tilt_z - params.tilt_z_bias).abs() < EPS);
}

#[test]
fn leaving_the_viewer_returns_to_rest() {
    let params = snappy_pointer();
    let mut blender = OrientationBlender::new(params);
    blender.set_pointer(Vec2::new(0.0, 0.0));
    blender.tick();
    blender.clear_pointer();
    let pose = blender.tick().orientation;
    assert!((pose.tilt_x - params.tilt_x_bias).abs() < EPS);
    assert!((pose.tilt_z - params.tilt_z_bias).abs() < EPS);
}

#[test]
fn non_finite_pointer_is_ignored() {
    let mut blender = OrientationBlender::new(snappy_pointer());
    blender.set_pointer(Vec2::new(0.2, 0.3));
    blender.set_pointer(Vec2::new(f32::NAN, 0.0));
    blender.tick();
    let smoothed = blender.state().smoothed_pointer;
    assert!(smoothed.abs_diff_eq(Vec2::new(0.2, 0.3), EPS));
}

#[test]
fn composition_order_matters() {
    let pose = Orientation {
        tilt_x: 0.3,
        tilt_z: -0.45,
        spin_y: 1.2,
    };
    let tilt_then_spin = Mat3::from_quat(pose.tilt() * pose.spin());
    let spin_then_tilt = Mat3::from_quat(pose.spin() * pose.tilt());

    assert!(pose.matrix().abs_diff_eq(tilt_then_spin, EPS));
    assert!(!tilt_then_spin.abs_diff_eq(spin_then_tilt, 1e-3));
}

#[test]
fn spin_keeps_the_tilted_axis_fixed() {
    let pose = Orientation {
        tilt_x: -0.7,
        tilt_z: -0.45,
        spin_y: 2.0,
    };
    let axis = pose.quat() * Vec3::Y;
    assert!(axis.abs_diff_eq(pose.spin_axis(), EPS));
    // and the axis really is tilted away from world up
    assert!(!axis.abs_diff_eq(Vec3::Y, 1e-2));
}

#[test]
fn untilted_orders_agree() {
    let pose = Orientation {
        tilt_x: 0.0,
        tilt_z: 0.0,
        spin_y: 0.8,
    };
    let a = Mat3::from_quat(pose.tilt() * pose.spin());
    let b = Mat3::from_quat(pose.spin() * pose.tilt());
    assert!(a.abs_diff_eq(b, EPS));
}

#[test]
fn fit_waits_for_measurable_geometry() {
    let params = ViewerParams::default();
    let mut blender = OrientationBlender::new(params);
    assert_eq!(blender.tick().fit, None);

    blender.set_geometry(Bounds {
        size: Vec3::ZERO,
        center: Vec3::ZERO,
    });
    assert_eq!(blender.tick().fit, None);
    // retried every frame, without giving up
    assert_eq!(blender.tick().fit, None);

    blender.set_geometry(Bounds {
        size: Vec3::new(2.0, 4.0, 1.0),
        center: Vec3::new(1.0, 1.0, 0.0),
    });
    let fit = blender.tick().fit.expect("fitted once bounds are valid");
    assert!((fit.scale - 0.925).abs() < EPS);
    assert!(fit.position.abs_diff_eq(Vec3::new(-0.425, -0.675, 0.0), EPS));

    // later frames keep the same fit
    assert_eq!(blender.tick().fit, Some(fit));
}

#[test]
fn degenerate_bounds_do_not_fit() {
    let params = ViewerParams::default();
    for size in [
        Vec3::new(-1.0, -2.0, -3.0),
        Vec3::new(f32::NAN, 1.0, 1.0),
        Vec3::new(f32::INFINITY, 1.0, 1.0),
    ] {
        let bounds = Bounds {
            size,
            center: Vec3::ZERO,
        };
        assert_eq!(ModelFit::from_bounds(&bounds, &params), None, "{size:?}");
    }
}

#[test]
fn partially_measured_geometry_keeps_the_fit_pending() {
    let mut blender = OrientationBlender::new(ViewerParams::default());
    for size in [
        Vec3::new(f32::NAN, 1.0, 1.0),
        Vec3::new(2.0, f32::NAN, 0.5),
        Vec3::new(1.0, 1.0, f32::NEG_INFINITY),
    ] {
        blender.set_geometry(Bounds {
            size,
            center: Vec3::ZERO,
        });
        assert_eq!(blender.tick().fit, None, "{size:?}");
        assert_eq!(blender.tick().fit, None, "{size:?}");
    }

    blender.set_geometry(Bounds {
        size: Vec3::new(1.0, 2.0, 1.0),
        center: Vec3::ZERO,
    });
    let fit = blender.tick().fit.expect("fitted once every dimension is known");
    assert!((fit.scale - 1.85).abs() < EPS);
}

#[test]
fn reset_restores_mount_pose_and_keeps_fit() {
    let params = ViewerParams::default();
    let mut blender = OrientationBlender::new(params);
    blender.set_geometry(Bounds {
        size: Vec3::ONE,
        center: Vec3::ZERO,
    });
    blender.set_scroll_fraction(0.8);
    blender.set_pointer(Vec2::new(0.1, 0.1));
    for _ in 0..20 {
        blender.tick();
    }

    blender.reset();
    assert_eq!(*blender.state(), OrientationState::new(&params));
    assert_eq!(blender.target().scroll_angle, params.initial_yaw);
    assert!(blender.tick().fit.is_some());
}
