use crate::config::CarouselParams;

/// One pointer or touch position with the time it was observed.
///
/// Coordinates are page pixels; `timestamp_ms` is any monotonic millisecond
/// clock (only differences between samples matter).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64, timestamp_ms: f64) -> Self {
        Self { x, y, timestamp_ms }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.timestamp_ms.is_finite()
    }
}

/// A press-drag gesture on the carousel track. The offset follows the
/// pointer directly; `velocity` only seeds inertia once the gesture ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub origin_x: f64,
    pub base_offset: f64,
    pub last: PointerSample,
    pub velocity: f64, // px per normalized frame
}

impl DragSession {
    pub fn begin(sample: PointerSample, base_offset: f64) -> Self {
        Self {
            origin_x: sample.x,
            base_offset,
            last: sample,
            velocity: 0.0,
        }
    }

    /// Follow a move sample and return the new absolute scroll offset.
    ///
    /// Returns `None` for a sample with non-finite fields. A sample with no
    /// elapsed time since the previous one keeps the previous velocity.
    pub fn track(&mut self, sample: PointerSample, params: &CarouselParams) -> Option<f64> {
        if !sample.is_finite() {
            return None;
        }
        let walk = (sample.x - self.origin_x) * params.sensitivity;

        let elapsed = sample.timestamp_ms - self.last.timestamp_ms;
        if elapsed > 0.0 {
            let distance = sample.x - self.last.x;
            self.velocity = distance / elapsed.max(1.0) * params.frame_normalization_ms;
        }
        self.last = sample;

        Some(self.base_offset - walk)
    }
}
