use crate::core::FrameLoop;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Returned by a frame body to keep or end its loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that can be started, stopped and gated
/// on visibility. Starting a running loop does nothing; dropping the loop
/// cancels its pending frame.
pub struct RafLoop {
    label: &'static str,
    state: Rc<RefCell<FrameLoop<i32>>>,
    tick: Tick,
}

impl RafLoop {
    pub fn new(label: &'static str, mut body: impl FnMut() -> LoopControl + 'static) -> Self {
        let state: Rc<RefCell<FrameLoop<i32>>> = Rc::new(RefCell::new(FrameLoop::new()));
        let tick: Tick = Rc::new(RefCell::new(None));

        let state_tick = state.clone();
        // weak: the closure must not keep its own cell alive
        let tick_weak: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !state_tick.borrow_mut().begin_frame() {
                return;
            }
            if body() == LoopControl::Stop {
                state_tick.borrow_mut().stop(cancel_frame);
                log::debug!("[frame] {} loop finished", label);
                return;
            }
            if let Some(tick) = tick_weak.upgrade() {
                state_tick.borrow_mut().end_frame(|| request_frame(&tick));
            }
        }) as Box<dyn FnMut()>));

        Self { label, state, tick }
    }

    /// Returns false when the loop was already running.
    pub fn start(&self) -> bool {
        let started = self.state.borrow_mut().start(|| request_frame(&self.tick));
        if started {
            log::debug!("[frame] {} loop started", self.label);
        }
        started
    }

    pub fn stop(&self) -> bool {
        let stopped = self.state.borrow_mut().stop(cancel_frame);
        if stopped {
            log::debug!("[frame] {} loop stopped", self.label);
        }
        stopped
    }

    pub fn set_visible(&self, visible: bool) {
        let changed = self
            .state
            .borrow_mut()
            .set_visible(visible, || request_frame(&self.tick), cancel_frame);
        if changed {
            log::debug!("[frame] {} loop visible={}", self.label, visible);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("requestAnimationFrame error: {:?}", e);
            None
        }
    }
}

fn cancel_frame(handle: i32) {
    if let Some(window) = web::window() {
        _ = window.cancel_animation_frame(handle);
    }
}
