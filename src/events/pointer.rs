use crate::core::{CarouselScroller, PointerSample, ScrollCommand};
use crate::dom::{self, Listener};
use crate::frame::RafLoop;
use crate::input::{self, PointerClock};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const DRAGGING_CLASS: &str = "is-dragging";

#[derive(Clone)]
pub struct DragWiring {
    pub track: web::HtmlElement,
    pub scroller: Rc<RefCell<CarouselScroller>>,
    pub coast: Rc<RafLoop>,
    pub clock: PointerClock,
}

/// Mouse and touch handlers that drive the track's scroll machine.
pub fn wire_drag_handlers(w: &DragWiring) -> Vec<Listener> {
    vec![
        wire_mousedown(w),
        wire_mousemove(w),
        wire_release(w, "mouseup"),
        wire_release(w, "mouseleave"),
        wire_touchstart(w),
        wire_touchmove(w),
        wire_release(w, "touchend"),
        wire_release(w, "touchcancel"),
    ]
}

fn begin_drag(w: &DragWiring, sample: PointerSample) {
    // a press cancels any coast still in flight
    w.coast.stop();
    let base_offset = dom::scroll_left(&w.track);
    w.scroller.borrow_mut().on_pointer_down(sample, base_offset);
    _ = w.track.class_list().add_1(DRAGGING_CLASS);
}

fn follow_drag(w: &DragWiring, sample: PointerSample) {
    let command = w.scroller.borrow_mut().on_pointer_move(sample);
    if let Some(command) = command {
        apply_scroll(&w.track, command);
    }
}

fn wire_mousedown(w: &DragWiring) -> Listener {
    let w = w.clone();
    let target = w.track.clone();
    Listener::new(&target, "mousedown", move |ev: web::MouseEvent| {
        let sample = input::mouse_sample(&ev, &w.clock);
        begin_drag(&w, sample);
    })
}

fn wire_mousemove(w: &DragWiring) -> Listener {
    let w = w.clone();
    let target = w.track.clone();
    Listener::new(&target, "mousemove", move |ev: web::MouseEvent| {
        if !w.scroller.borrow().phase().is_dragging() {
            return;
        }
        ev.prevent_default();
        let sample = input::mouse_sample(&ev, &w.clock);
        follow_drag(&w, sample);
    })
}

fn wire_touchstart(w: &DragWiring) -> Listener {
    let w = w.clone();
    let target = w.track.clone();
    Listener::passive(&target, "touchstart", move |ev: web::TouchEvent| {
        if let Some(sample) = input::touch_sample(&ev, &w.clock) {
            begin_drag(&w, sample);
        }
    })
}

fn wire_touchmove(w: &DragWiring) -> Listener {
    let w = w.clone();
    let target = w.track.clone();
    Listener::passive(&target, "touchmove", move |ev: web::TouchEvent| {
        if let Some(sample) = input::touch_sample(&ev, &w.clock) {
            follow_drag(&w, sample);
        }
    })
}

fn wire_release(w: &DragWiring, event: &'static str) -> Listener {
    let w = w.clone();
    let target = w.track.clone();
    Listener::new(&target, event, move |_ev: web::Event| {
        if !w.scroller.borrow().phase().is_dragging() {
            return;
        }
        let coasting = if event == "mouseleave" {
            w.scroller.borrow_mut().on_pointer_leave()
        } else {
            w.scroller.borrow_mut().on_pointer_up()
        };
        _ = w.track.class_list().remove_1(DRAGGING_CLASS);
        if coasting {
            w.coast.start();
        }
    })
}

#[inline]
pub fn apply_scroll(track: &web::Element, command: ScrollCommand) {
    let current = dom::scroll_left(track);
    dom::set_scroll_left(track, command.apply(current));
}
