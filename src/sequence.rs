use crate::core::{sequence_index, ScrollSequence, SequenceChange};
use crate::dom::{self, Listener};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Fired on `window` when the section pins or unpins; `detail.isPinned`.
pub const PIN_TOGGLE_EVENT: &str = "news-pin-toggle";
/// Fired on the section when the visible step changes; `detail.index`.
pub const STEP_EVENT: &str = "sequence-step";

/// Step for `progress` (0..1) through `count` steps.
#[wasm_bindgen]
pub fn sequence_step(progress: f32, count: u32) -> u32 {
    sequence_index(progress, count as usize) as u32
}

/// A section that pins for one viewport height per step while the page
/// scroll walks through its steps. Pinning itself is left to the page CSS;
/// size the pin spacer with `pinned_span_px()`.
#[wasm_bindgen]
pub struct PinnedSequence {
    sequence: Rc<RefCell<ScrollSequence>>,
    anchor_top: Rc<Cell<f64>>,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl PinnedSequence {
    #[wasm_bindgen(constructor)]
    pub fn new(section_id: &str, count: u32) -> Result<PinnedSequence, JsValue> {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let section = dom::html_element_by_id(&document, section_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{section_id}")))?;

        let sequence = Rc::new(RefCell::new(ScrollSequence::new(count as usize)));
        let anchor_top = Rc::new(Cell::new(measure_anchor(&window, &section)));
        sync(&window, &section, &sequence, &anchor_top);

        let listeners = vec![
            {
                let (win, section) = (window.clone(), section.clone());
                let (sequence, anchor_top) = (sequence.clone(), anchor_top.clone());
                Listener::passive(&window, "scroll", move |_ev: web::Event| {
                    sync(&win, &section, &sequence, &anchor_top);
                })
            },
            {
                let (win, section) = (window.clone(), section.clone());
                let (sequence, anchor_top) = (sequence.clone(), anchor_top.clone());
                Listener::new(&window, "resize", move |_ev: web::Event| {
                    // a pinned section reports its stuck position, not its anchor
                    if !sequence.borrow().is_pinned() {
                        anchor_top.set(measure_anchor(&win, &section));
                    }
                    sync(&win, &section, &sequence, &anchor_top);
                })
            },
        ];

        log::info!("[sequence] mounted on #{} with {} steps", section_id, count);
        Ok(PinnedSequence {
            sequence,
            anchor_top,
            _listeners: listeners,
        })
    }

    pub fn index(&self) -> u32 {
        self.sequence.borrow().index() as u32
    }

    pub fn is_pinned(&self) -> bool {
        self.sequence.borrow().is_pinned()
    }

    /// Scroll distance the section stays pinned for at the current viewport height.
    pub fn pinned_span_px(&self) -> f64 {
        self.sequence.borrow().pinned_span(viewport_height())
    }

    /// Document offset the pinned span starts from.
    pub fn anchor_top_px(&self) -> f64 {
        self.anchor_top.get()
    }
}

fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn measure_anchor(window: &web::Window, section: &web::HtmlElement) -> f64 {
    section.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
}

fn sync(
    window: &web::Window,
    section: &web::HtmlElement,
    sequence: &RefCell<ScrollSequence>,
    anchor_top: &Cell<f64>,
) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let change = sequence
        .borrow_mut()
        .update(scroll_y, anchor_top.get(), viewport_height());
    if !change.is_empty() {
        announce(window, section, change);
    }
}

fn announce(window: &web::Window, section: &web::HtmlElement, change: SequenceChange) {
    if let Some(pinned) = change.pinned {
        log::debug!("[sequence] pinned={}", pinned);
        dispatch(window, PIN_TOGGLE_EVENT, "isPinned", &JsValue::from_bool(pinned));
    }
    if let Some(index) = change.index {
        log::debug!("[sequence] step {}", index);
        dispatch(section, STEP_EVENT, "index", &JsValue::from_f64(index as f64));
    }
}

fn dispatch(target: &web::EventTarget, event: &str, key: &str, value: &JsValue) {
    let detail = js_sys::Object::new();
    _ = js_sys::Reflect::set(&detail, &JsValue::from_str(key), value);
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    match web::CustomEvent::new_with_event_init_dict(event, &init) {
        Ok(ev) => {
            _ = target.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[sequence] cannot build {} event: {:?}", event, e),
    }
}
