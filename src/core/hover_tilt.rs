use crate::config::HoverTiltParams;
use crate::core::smoothing::approach_vec2;
use glam::Vec2;

/// Pointer-follow tilt for a flat image.
///
/// `x` is the rotation about the horizontal axis and `y` about the vertical
/// axis, both in degrees.
#[derive(Clone, Debug)]
pub struct HoverTilt {
    params: HoverTiltParams,
    target: Vec2,
    current: Vec2,
}

impl HoverTilt {
    pub fn new(params: HoverTiltParams) -> Self {
        Self {
            params,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
        }
    }

    /// Pointer at normalized `(x, y)` over the image container.
    pub fn pointer(&mut self, normalized: Vec2) {
        if !normalized.is_finite() {
            return;
        }
        let amp = self.params.amplitude_deg;
        self.target = Vec2::new((normalized.y - 0.5) * amp, (0.5 - normalized.x) * amp);
    }

    pub fn leave(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// Advance one frame. `None` means the change is too small to repaint.
    pub fn tick(&mut self) -> Option<Vec2> {
        let delta = self.target - self.current;
        let band = self.params.dead_band_deg;
        if delta.x.abs() < band && delta.y.abs() < band {
            return None;
        }
        self.current = approach_vec2(self.current, self.target, self.params.lerp);
        Some(self.current)
    }

    pub fn css(&self, rotation: Vec2) -> String {
        format!(
            "translate3d(0, 0, 0) perspective({}px) rotateX({:.3}deg) rotateY({:.3}deg)",
            self.params.perspective_px, rotation.x, rotation.y
        )
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }
}
