//! Pinned, scroll-stepped sequences.
//!
//! A section pins at the viewport top and stays pinned for one viewport
//! height per step. Progress through that pinned span picks the visible
//! step; scrolling past the end holds the last step and scrolling back above
//! the start returns to the first.

use crate::constants::SEQUENCE_STEP_NUDGE;
use crate::core::viewport::section_fraction;

/// Step shown at `progress` (0..1) through a sequence of `count` steps.
/// Zero when there are no steps.
pub fn sequence_index(progress: f32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let step = (progress * count as f32 + SEQUENCE_STEP_NUDGE).floor() as usize;
    step.min(count - 1)
}

/// What changed in one update; `None` fields are unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceChange {
    pub index: Option<usize>,
    pub pinned: Option<bool>,
}

impl SequenceChange {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_none() && self.pinned.is_none()
    }
}

#[derive(Clone, Debug)]
pub struct ScrollSequence {
    count: usize,
    index: usize,
    pinned: bool,
}

impl ScrollSequence {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            index: 0,
            pinned: false,
        }
    }

    /// Scroll distance the section stays pinned for.
    #[inline]
    pub fn pinned_span(&self, viewport_height: f64) -> f64 {
        viewport_height * self.count as f64
    }

    /// Follow the page scroll. `anchor_top` is the section's document
    /// offset measured while it is not pinned.
    pub fn update(&mut self, scroll_y: f64, anchor_top: f64, viewport_height: f64) -> SequenceChange {
        let span = self.pinned_span(viewport_height);
        if !(span.is_finite() && span > 0.0) || !scroll_y.is_finite() || !anchor_top.is_finite() {
            return SequenceChange::default();
        }
        let pinned = scroll_y >= anchor_top && scroll_y <= anchor_top + span;
        let index = sequence_index(section_fraction(scroll_y, anchor_top, span), self.count);

        let mut change = SequenceChange::default();
        if pinned != self.pinned {
            self.pinned = pinned;
            change.pinned = Some(pinned);
        }
        if index != self.index {
            self.index = index;
            change.index = Some(index);
        }
        change
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}
