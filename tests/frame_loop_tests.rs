// Host-side tests for frame-loop and repaint-timer bookkeeping, driven by a
// fake scheduler in place of requestAnimationFrame and setTimeout.

use landing_motion::config::CarouselParams;
use landing_motion::core::inertia::ticks_to_settle;
use landing_motion::core::{CarouselScroller, FrameLoop, PointerSample, Throttle};
use std::cell::RefCell;

#[derive(Default)]
struct FakeHost {
    next: u32,
    requested: Vec<u32>,
    cancelled: Vec<u32>,
    refuse: bool,
}

impl FakeHost {
    fn request(&mut self) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        self.requested.push(self.next);
        Some(self.next)
    }

    fn cancel(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}

#[test]
fn start_is_idempotent() {
    let mut host = FakeHost::default();
    let mut lp = FrameLoop::new();

    assert!(lp.start(|| host.request()));
    assert!(!lp.start(|| host.request()));
    assert_eq!(host.requested, vec![1]);
    assert_eq!(lp.pending(), Some(&1));
}

#[test]
fn stop_cancels_the_pending_frame() {
    let mut host = FakeHost::default();
    let mut lp = FrameLoop::new();
    lp.start(|| host.request());

    assert!(lp.stop(|h| host.cancel(h)));
    assert!(!lp.is_running());
    assert_eq!(host.cancelled, vec![1]);
    assert_eq!(lp.pending(), None);

    assert!(!lp.stop(|h| host.cancel(h)));
    assert_eq!(host.cancelled, vec![1]);
}

#[test]
fn frames_reschedule_while_running() {
    let mut host = FakeHost::default();
    let mut lp = FrameLoop::new();
    lp.start(|| host.request());

    for expected in 2..=5 {
        assert!(lp.begin_frame());
        assert_eq!(lp.pending(), None);
        lp.end_frame(|| host.request());
        assert_eq!(lp.pending(), Some(&expected));
    }
    assert_eq!(host.requested.len(), 5);
}

#[test]
fn stopping_inside_a_frame_prevents_the_next_one() {
    let mut host = FakeHost::default();
    let mut lp = FrameLoop::new();
    lp.start(|| host.request());

    assert!(lp.begin_frame());
    // nothing pending any more, so nothing to cancel
    assert!(lp.stop(|h| host.cancel(h)));
    lp.end_frame(|| host.request());

    assert!(host.cancelled.is_empty());
    assert_eq!(host.requested, vec![1]);
    assert!(!lp.begin_frame());
}

#[test]
fn refused_schedule_leaves_the_loop_stopped() {
    let mut host = FakeHost {
        refuse: true,
        ..FakeHost::default()
    };
    let mut lp = FrameLoop::new();
    assert!(!lp.start(|| host.request()));
    assert!(!lp.is_running());

    host.refuse = false;
    assert!(lp.start(|| host.request()));
    lp.begin_frame();
    host.refuse = true;
    lp.end_frame(|| host.request());
    assert!(!lp.is_running());
}

#[test]
fn visibility_gates_the_loop() {
    let host = RefCell::new(FakeHost::default());
    let mut lp = FrameLoop::new();
    let schedule = || host.borrow_mut().request();
    let cancel = |h| host.borrow_mut().cancel(h);

    assert!(lp.set_visible(true, schedule, cancel));
    assert!(!lp.set_visible(true, schedule, cancel));
    assert!(lp.set_visible(false, schedule, cancel));
    assert!(!lp.is_running());
    assert!(lp.set_visible(true, schedule, cancel));

    let host = host.into_inner();
    assert_eq!(host.requested, vec![1, 2]);
    assert_eq!(host.cancelled, vec![1]);
}

#[test]
fn coast_loop_runs_until_the_scroller_settles() {
    let params = CarouselParams::default();
    let mut scroller = CarouselScroller::new(params);
    scroller.on_pointer_down(PointerSample::new(100.0, 0.0, 0.0), 500.0);
    scroller.on_pointer_move(PointerSample::new(160.0, 0.0, 100.0));
    assert!(scroller.on_pointer_up());

    let mut host = FakeHost::default();
    let mut lp = FrameLoop::new();
    lp.start(|| host.request());

    let mut offset = 410.0;
    let mut frames = 0;
    while lp.begin_frame() {
        frames += 1;
        if let Some(command) = scroller.tick() {
            offset = command.apply(offset);
        }
        if scroller.phase().is_coasting() {
            lp.end_frame(|| host.request());
        } else {
            lp.stop(|h| host.cancel(h));
        }
        assert!(frames < 1000);
    }

    assert_eq!(frames, ticks_to_settle(9.6, &params));
    assert!(offset < 410.0);
    assert!(host.cancelled.is_empty());
}

#[test]
fn throttle_keeps_a_single_pending_timer() {
    let mut host = FakeHost::default();
    let mut timer = Throttle::new();

    assert!(timer.schedule(|| host.request()));
    assert!(!timer.schedule(|| host.request()));
    assert!(!timer.schedule(|| host.request()));
    assert_eq!(host.requested, vec![1]);

    assert!(timer.fire());
    assert!(!timer.is_pending());
    assert!(timer.schedule(|| host.request()));
    assert_eq!(host.requested, vec![1, 2]);
}

#[test]
fn teardown_clears_a_pending_timer() {
    let mut host = FakeHost::default();
    let mut timer = Throttle::new();
    timer.schedule(|| host.request());

    assert!(timer.cancel(|h| host.cancel(h)));
    assert_eq!(host.cancelled, vec![1]);
    assert!(!timer.is_pending());
    // a callback that slipped through after teardown does no work
    assert!(!timer.fire());
}

#[test]
fn teardown_without_pending_timer_cancels_nothing() {
    let mut host = FakeHost::default();
    let mut timer = Throttle::<u32>::new();
    assert!(!timer.cancel(|h| host.cancel(h)));

    timer.schedule(|| host.request());
    timer.fire();
    assert!(!timer.cancel(|h| host.cancel(h)));
    assert!(host.cancelled.is_empty());
}

#[test]
fn refused_timer_can_be_requested_again() {
    let mut host = FakeHost {
        refuse: true,
        ..FakeHost::default()
    };
    let mut timer = Throttle::new();
    assert!(!timer.schedule(|| host.request()));
    assert!(!timer.is_pending());

    host.refuse = false;
    assert!(timer.schedule(|| host.request()));
}
