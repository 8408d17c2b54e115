//! Tuning parameters for every interactive surface.
//!
//! Each surface takes its constants as a parameter struct instead of baking
//! them in, so two surfaces with slightly different feel can share one
//! engine. Defaults come from `constants.rs` and `core/constants.rs`.

use crate::constants::*;
use crate::core::constants::*;
use crate::error::ConfigError;
use glam::{Vec2, Vec3};

/// Drag, inertia and card-arc tuning for the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselParams {
    pub sensitivity: f64,
    pub frame_normalization_ms: f64,
    pub friction: f64,
    pub stop_velocity: f64,
    pub curve_exponent: f32,
    pub lift_px: f32,
    pub depth_px: f32,
    pub yaw_deg: f32,
    pub roll_deg: f32,
    pub pitch_deg: f32,
    pub shrink: f32,
    pub z_index_span: f32,
    pub visibility_threshold: f64,
}

impl Default for CarouselParams {
    fn default() -> Self {
        Self {
            sensitivity: DRAG_SENSITIVITY,
            frame_normalization_ms: FRAME_NORMALIZATION_MS,
            friction: COAST_FRICTION,
            stop_velocity: COAST_STOP_VELOCITY,
            curve_exponent: CARD_CURVE_EXPONENT,
            lift_px: CARD_LIFT_PX,
            depth_px: CARD_DEPTH_PX,
            yaw_deg: CARD_YAW_DEG,
            roll_deg: CARD_ROLL_DEG,
            pitch_deg: CARD_PITCH_DEG,
            shrink: CARD_SHRINK,
            z_index_span: CARD_Z_INDEX_SPAN,
            visibility_threshold: CAROUSEL_VISIBILITY_THRESHOLD,
        }
    }
}

impl CarouselParams {
    /// Defaults with `lookup` overrides applied, rejected if invalid.
    pub fn resolve(lookup: impl Fn(&str) -> Option<f64>) -> Result<Self, ConfigError> {
        let params = Self::default().with_overrides(lookup);
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("sensitivity", self.sensitivity)?;
        positive("frame_normalization_ms", self.frame_normalization_ms)?;
        open_fraction("friction", self.friction)?;
        positive("stop_velocity", self.stop_velocity)?;
        positive("curve_exponent", self.curve_exponent as f64)?;
        finite("lift_px", self.lift_px as f64)?;
        finite("depth_px", self.depth_px as f64)?;
        finite("yaw_deg", self.yaw_deg as f64)?;
        finite("roll_deg", self.roll_deg as f64)?;
        finite("pitch_deg", self.pitch_deg as f64)?;
        // shrink of 1 collapses edge cards to nothing
        if !(0.0..1.0).contains(&self.shrink) {
            return Err(ConfigError::OutOfRange {
                field: "shrink",
                value: self.shrink as f64,
                range: "[0, 1)",
            });
        }
        positive("z_index_span", self.z_index_span as f64)?;
        unit_fraction("visibility_threshold", self.visibility_threshold)?;
        Ok(())
    }

    /// Apply overrides from a key lookup (e.g. `data-*` attributes).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<f64>) -> Self {
        override_f64(&mut self.sensitivity, lookup("sensitivity"));
        override_f64(&mut self.friction, lookup("friction"));
        override_f64(&mut self.stop_velocity, lookup("stop-velocity"));
        override_f32(&mut self.curve_exponent, lookup("curve-exponent"));
        override_f32(&mut self.lift_px, lookup("lift"));
        override_f32(&mut self.depth_px, lookup("depth"));
        override_f32(&mut self.shrink, lookup("shrink"));
        self
    }
}

/// Orientation blending and model framing for the 3D product viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerParams {
    pub pointer_lerp: f32,
    pub spin_lerp: f32,
    pub tilt_amplitude: f32,
    pub initial_yaw: f32,
    pub tilt_x_bias: f32,
    pub tilt_z_bias: f32,
    pub pointer_start: Vec2,
    pub pointer_rest: Vec2,
    pub fit_extent: f32,
    pub fit_multiplier: f32,
    pub fit_offset: Vec3,
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            pointer_lerp: POINTER_LERP,
            spin_lerp: SPIN_LERP,
            tilt_amplitude: TILT_AMPLITUDE,
            initial_yaw: INITIAL_YAW,
            tilt_x_bias: TILT_X_BIAS,
            tilt_z_bias: TILT_Z_BIAS,
            pointer_start: POINTER_START,
            pointer_rest: POINTER_REST,
            fit_extent: FIT_EXTENT,
            fit_multiplier: FIT_MULTIPLIER,
            fit_offset: FIT_OFFSET,
        }
    }
}

impl ViewerParams {
    /// Defaults with `lookup` overrides applied, rejected if invalid.
    pub fn resolve(lookup: impl Fn(&str) -> Option<f64>) -> Result<Self, ConfigError> {
        let params = Self::default().with_overrides(lookup);
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_fraction("pointer_lerp", self.pointer_lerp as f64)?;
        unit_fraction("spin_lerp", self.spin_lerp as f64)?;
        finite("tilt_amplitude", self.tilt_amplitude as f64)?;
        finite("initial_yaw", self.initial_yaw as f64)?;
        finite("tilt_x_bias", self.tilt_x_bias as f64)?;
        finite("tilt_z_bias", self.tilt_z_bias as f64)?;
        positive("fit_extent", self.fit_extent as f64)?;
        positive("fit_multiplier", self.fit_multiplier as f64)?;
        if !self.pointer_start.is_finite() || !self.pointer_rest.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "pointer",
                value: f64::NAN,
            });
        }
        if !self.fit_offset.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "fit_offset",
                value: f64::NAN,
            });
        }
        Ok(())
    }

    /// Apply overrides from a key lookup. Angles are given in degrees.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<f64>) -> Self {
        override_f32(&mut self.pointer_lerp, lookup("pointer-lerp"));
        override_f32(&mut self.spin_lerp, lookup("spin-lerp"));
        override_f32(&mut self.tilt_amplitude, lookup("tilt-amplitude"));
        override_f32(
            &mut self.initial_yaw,
            lookup("initial-yaw-deg").map(f64::to_radians),
        );
        override_f32(&mut self.fit_multiplier, lookup("fit-multiplier"));
        self
    }
}

/// Pointer-follow tilt for flat images.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTiltParams {
    pub amplitude_deg: f32,
    pub lerp: f32,
    pub dead_band_deg: f32,
    pub perspective_px: f32,
}

impl Default for HoverTiltParams {
    fn default() -> Self {
        Self {
            amplitude_deg: HOVER_TILT_AMPLITUDE_DEG,
            lerp: HOVER_TILT_LERP,
            dead_band_deg: HOVER_TILT_DEAD_BAND_DEG,
            perspective_px: HOVER_TILT_PERSPECTIVE_PX,
        }
    }
}

impl HoverTiltParams {
    /// Defaults with `lookup` overrides applied, rejected if invalid.
    pub fn resolve(lookup: impl Fn(&str) -> Option<f64>) -> Result<Self, ConfigError> {
        let params = Self::default().with_overrides(lookup);
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("amplitude_deg", self.amplitude_deg as f64)?;
        unit_fraction("lerp", self.lerp as f64)?;
        if !self.dead_band_deg.is_finite() || self.dead_band_deg < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "dead_band_deg",
                value: self.dead_band_deg as f64,
                range: "[0, inf)",
            });
        }
        positive("perspective_px", self.perspective_px as f64)?;
        Ok(())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<f64>) -> Self {
        override_f32(&mut self.amplitude_deg, lookup("amplitude"));
        override_f32(&mut self.lerp, lookup("lerp"));
        self
    }
}

// ---------------- validation helpers ----------------
fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

// (0, 1): decays but never stalls or grows
fn open_fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            range: "(0, 1)",
        })
    }
}

// (0, 1]: a factor of 1 snaps to the target
fn unit_fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            range: "(0, 1]",
        })
    }
}

#[inline]
fn override_f64(slot: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *slot = v;
    }
}

#[inline]
fn override_f32(slot: &mut f32, value: Option<f64>) {
    if let Some(v) = value {
        *slot = v as f32;
    }
}
