use crate::config::CarouselParams;

/// Residual carousel motion after a drag is released.
///
/// `velocity` is in px per frame and shrinks by `friction` every tick until
/// it falls to the stop threshold, at which point the state resets to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InertiaState {
    pub velocity: f64,
    pub running: bool,
}

impl InertiaState {
    /// Seed from the release velocity. Slow or non-finite releases do not coast.
    pub fn release(velocity: f64, params: &CarouselParams) -> Self {
        if velocity.is_finite() && velocity.abs() > params.stop_velocity {
            Self {
                velocity,
                running: true,
            }
        } else {
            Self::default()
        }
    }

    /// Advance one frame and return the offset delta to apply.
    ///
    /// The decayed velocity is applied even on the frame that settles.
    pub fn step(&mut self, params: &CarouselParams) -> Option<f64> {
        if !self.running {
            return None;
        }
        self.velocity *= params.friction;
        let delta = -self.velocity;
        if self.velocity.abs() <= params.stop_velocity {
            *self = Self::default();
        }
        Some(delta)
    }

    #[inline]
    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

/// Number of ticks a release at `velocity` coasts before settling.
pub fn ticks_to_settle(velocity: f64, params: &CarouselParams) -> u32 {
    let speed = velocity.abs();
    if !speed.is_finite() || speed <= params.stop_velocity {
        return 0;
    }
    ((params.stop_velocity / speed).ln() / params.friction.ln()).ceil() as u32
}

/// Continuous-time estimate of the total coast distance, `v0 / (1 - friction)`.
#[inline]
pub fn coast_distance(velocity: f64, params: &CarouselParams) -> f64 {
    velocity / (1.0 - params.friction)
}
