//! Drag-to-scroll state machine for the carousel track.
//!
//! The track is `Idle`, `Dragging` (offset follows the pointer) or
//! `Coasting` (offset keeps moving under decaying velocity). Transitions are
//! a pure function of the current phase and one input event, so the same
//! machine serves mouse, touch and tests alike.

use crate::config::CarouselParams;
use crate::core::inertia::InertiaState;
use crate::core::pointer::{DragSession, PointerSample};

/// Input delivered to the scroll machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEvent {
    /// Press; `base_offset` is the host's current scroll offset.
    Down {
        sample: PointerSample,
        base_offset: f64,
    },
    Move(PointerSample),
    Up,
    Leave,
    /// One animation frame elapsed.
    Tick,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ScrollPhase {
    #[default]
    Idle,
    Dragging(DragSession),
    Coasting(InertiaState),
}

/// What the host should do to its scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollCommand {
    SetTo(f64),
    ScrollBy(f64),
}

impl ScrollCommand {
    /// Resolve against the host's current offset.
    #[inline]
    pub fn apply(self, current: f64) -> f64 {
        match self {
            ScrollCommand::SetTo(offset) => offset,
            ScrollCommand::ScrollBy(delta) => current + delta,
        }
    }
}

impl ScrollPhase {
    pub fn next(self, event: ScrollEvent, params: &CarouselParams) -> (Self, Option<ScrollCommand>) {
        match (self, event) {
            // a press always wins, even mid-coast
            (_, ScrollEvent::Down { sample, base_offset }) => (
                ScrollPhase::Dragging(DragSession::begin(sample, base_offset)),
                None,
            ),
            (ScrollPhase::Dragging(mut session), ScrollEvent::Move(sample)) => {
                let command = session.track(sample, params).map(ScrollCommand::SetTo);
                (ScrollPhase::Dragging(session), command)
            }
            (ScrollPhase::Dragging(session), ScrollEvent::Up | ScrollEvent::Leave) => {
                let inertia = InertiaState::release(session.velocity, params);
                if inertia.running {
                    (ScrollPhase::Coasting(inertia), None)
                } else {
                    (ScrollPhase::Idle, None)
                }
            }
            (ScrollPhase::Coasting(mut inertia), ScrollEvent::Tick) => {
                let command = inertia.step(params).map(ScrollCommand::ScrollBy);
                if inertia.running {
                    (ScrollPhase::Coasting(inertia), command)
                } else {
                    (ScrollPhase::Idle, command)
                }
            }
            (phase, _) => (phase, None),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, ScrollPhase::Dragging(_))
    }

    #[inline]
    pub fn is_coasting(&self) -> bool {
        matches!(self, ScrollPhase::Coasting(_))
    }

    /// Velocity of the gesture in flight, or zero when idle.
    pub fn velocity(&self) -> f64 {
        match self {
            ScrollPhase::Idle => 0.0,
            ScrollPhase::Dragging(session) => session.velocity,
            ScrollPhase::Coasting(inertia) => inertia.velocity,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ScrollPhase::Idle => "idle",
            ScrollPhase::Dragging(_) => "dragging",
            ScrollPhase::Coasting(_) => "coasting",
        }
    }
}

/// Scroll machine bound to one carousel track.
#[derive(Clone, Debug)]
pub struct CarouselScroller {
    phase: ScrollPhase,
    params: CarouselParams,
}

impl CarouselScroller {
    pub fn new(params: CarouselParams) -> Self {
        Self {
            phase: ScrollPhase::Idle,
            params,
        }
    }

    pub fn on_pointer_down(&mut self, sample: PointerSample, base_offset: f64) {
        self.dispatch(ScrollEvent::Down {
            sample,
            base_offset,
        });
    }

    /// Returns the absolute offset to scroll to, or `None` when not dragging.
    pub fn on_pointer_move(&mut self, sample: PointerSample) -> Option<ScrollCommand> {
        self.dispatch(ScrollEvent::Move(sample))
    }

    /// Returns true when the release started a coast.
    pub fn on_pointer_up(&mut self) -> bool {
        self.dispatch(ScrollEvent::Up);
        self.phase.is_coasting()
    }

    pub fn on_pointer_leave(&mut self) -> bool {
        self.dispatch(ScrollEvent::Leave);
        self.phase.is_coasting()
    }

    /// Advance a coast by one frame.
    pub fn tick(&mut self) -> Option<ScrollCommand> {
        self.dispatch(ScrollEvent::Tick)
    }

    pub fn dispatch(&mut self, event: ScrollEvent) -> Option<ScrollCommand> {
        let before = self.phase;
        let (phase, command) = before.next(event, &self.params);
        if std::mem::discriminant(&before) != std::mem::discriminant(&phase) {
            log::debug!(
                "[carousel] {} -> {} (v={:.2})",
                before.label(),
                phase.label(),
                phase.velocity()
            );
        }
        self.phase = phase;
        command
    }

    #[inline]
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    #[inline]
    pub fn params(&self) -> &CarouselParams {
        &self.params
    }
}
