//! Scroll- and pointer-driven orientation for the 3D product viewer.
//!
//! Two inputs feed one pose. The page scroll fraction sets a slow spin about
//! the model's own vertical axis; the hovering pointer adds a small, fast
//! tilt on top of fixed lean biases. Tilt lives in the outer frame and spin
//! in the inner one, so the model always spins about its own (tilted) axis.

use crate::config::ViewerParams;
use crate::core::smoothing::{approach, approach_vec2};
use glam::{Mat3, Quat, Vec2, Vec3};
use std::f32::consts::TAU;

/// Per-frame goal the smoothed state chases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationTarget {
    pub scroll_angle: f32,
    pub pointer_offset_x: f32,
    pub pointer_offset_y: f32,
}

impl OrientationTarget {
    pub fn new(scroll_fraction: f32, smoothed_pointer: Vec2, params: &ViewerParams) -> Self {
        let offset = (smoothed_pointer - Vec2::splat(0.5)) * params.tilt_amplitude;
        Self {
            scroll_angle: scroll_angle(scroll_fraction, params),
            pointer_offset_x: offset.x,
            pointer_offset_y: offset.y,
        }
    }
}

/// Spin target for a scroll fraction: one full turn across 0..1, starting
/// from the default-facing yaw.
#[inline]
pub fn scroll_angle(fraction: f32, params: &ViewerParams) -> f32 {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    fraction * TAU + params.initial_yaw
}

/// Smoothed values carried from frame to frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationState {
    pub current_angle_y: f32,
    pub smoothed_pointer: Vec2,
}

impl OrientationState {
    pub fn new(params: &ViewerParams) -> Self {
        Self {
            current_angle_y: params.initial_yaw,
            smoothed_pointer: params.pointer_start,
        }
    }
}

/// Composed pose in radians.
///
/// `tilt_x`/`tilt_z` rotate the outer frame (X then Z, as in an `XYZ` Euler
/// with zero Y); `spin_y` rotates the inner frame about its own Y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub tilt_x: f32,
    pub tilt_z: f32,
    pub spin_y: f32,
}

impl Orientation {
    #[inline]
    pub fn tilt(&self) -> Quat {
        Quat::from_rotation_x(self.tilt_x) * Quat::from_rotation_z(self.tilt_z)
    }

    #[inline]
    pub fn spin(&self) -> Quat {
        Quat::from_rotation_y(self.spin_y)
    }

    /// Tilt frame first, spin within it.
    #[inline]
    pub fn quat(&self) -> Quat {
        self.tilt() * self.spin()
    }

    #[inline]
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_quat(self.quat())
    }

    /// The model's spin axis expressed in world space.
    #[inline]
    pub fn spin_axis(&self) -> Vec3 {
        self.tilt() * Vec3::Y
    }
}

/// Axis-aligned bounding box reported by the renderer once geometry loads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub size: Vec3,
    pub center: Vec3,
}

/// Uniform scale and position that frame the model in the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelFit {
    pub scale: f32,
    pub position: Vec3,
}

impl ModelFit {
    /// `None` until the bounds have a finite, positive extent.
    pub fn from_bounds(bounds: &Bounds, params: &ViewerParams) -> Option<Self> {
        // max_element skips NaN components, so check the whole size first
        if !bounds.size.is_finite() || !bounds.center.is_finite() {
            return None;
        }
        let max_dim = bounds.size.max_element();
        if max_dim <= 0.0 {
            return None;
        }
        let scale = params.fit_extent / max_dim * params.fit_multiplier;
        Some(Self {
            scale,
            position: -bounds.center * scale + params.fit_offset,
        })
    }
}

/// Output of one viewer tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerFrame {
    pub orientation: Orientation,
    /// `None` while the model geometry is not measurable yet.
    pub fit: Option<ModelFit>,
}

/// Owns the viewer's smoothing state; advance it once per rendered frame.
#[derive(Clone, Debug)]
pub struct OrientationBlender {
    params: ViewerParams,
    state: OrientationState,
    raw_pointer: Vec2,
    scroll_fraction: f32,
    bounds: Option<Bounds>,
    fit: Option<ModelFit>,
}

impl OrientationBlender {
    pub fn new(params: ViewerParams) -> Self {
        Self {
            state: OrientationState::new(&params),
            raw_pointer: params.pointer_rest,
            scroll_fraction: 0.0,
            bounds: None,
            fit: None,
            params,
        }
    }

    /// Back to the mount-time pose. Known geometry is kept.
    pub fn reset(&mut self) {
        self.state = OrientationState::new(&self.params);
        self.raw_pointer = self.params.pointer_rest;
        self.scroll_fraction = 0.0;
    }

    /// Raw pointer in normalized 0..1 viewer coordinates.
    pub fn set_pointer(&mut self, pointer: Vec2) {
        if pointer.is_finite() {
            self.raw_pointer = pointer;
        }
    }

    /// Pointer left the viewer; drift back to the rest point.
    pub fn clear_pointer(&mut self) {
        self.raw_pointer = self.params.pointer_rest;
    }

    pub fn set_scroll_fraction(&mut self, fraction: f32) {
        if fraction.is_finite() {
            self.scroll_fraction = fraction.clamp(0.0, 1.0);
        }
    }

    /// New geometry replaces any previous fit; it is measured on the next tick.
    pub fn set_geometry(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
        self.fit = None;
    }

    pub fn target(&self) -> OrientationTarget {
        OrientationTarget::new(self.scroll_fraction, self.state.smoothed_pointer, &self.params)
    }

    pub fn tick(&mut self) -> ViewerFrame {
        let params = &self.params;
        self.state.smoothed_pointer =
            approach_vec2(self.state.smoothed_pointer, self.raw_pointer, params.pointer_lerp);

        let target = OrientationTarget::new(self.scroll_fraction, self.state.smoothed_pointer, params);
        self.state.current_angle_y =
            approach(self.state.current_angle_y, target.scroll_angle, params.spin_lerp);

        if self.fit.is_none() {
            if let Some(bounds) = &self.bounds {
                self.fit = ModelFit::from_bounds(bounds, params);
                match &self.fit {
                    Some(fit) => log::info!("[viewer] model fitted at scale {:.3}", fit.scale),
                    None => log::debug!("[viewer] bounds not measurable yet, retrying next frame"),
                }
            }
        }

        ViewerFrame {
            orientation: Orientation {
                // vertical pointer motion pitches, horizontal motion rolls
                tilt_x: params.tilt_x_bias + target.pointer_offset_y,
                tilt_z: params.tilt_z_bias + target.pointer_offset_x,
                spin_y: self.state.current_angle_y,
            },
            fit: self.fit,
        }
    }

    #[inline]
    pub fn state(&self) -> &OrientationState {
        &self.state
    }

    #[inline]
    pub fn params(&self) -> &ViewerParams {
        &self.params
    }
}
