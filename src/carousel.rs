use crate::config::CarouselParams;
use crate::core::{layout_cards, CardTransform, CarouselScroller, Span};
use crate::dom::{self, Listener};
use crate::events::{self, DragWiring};
use crate::frame::{LoopControl, RafLoop};
use crate::input::PointerClock;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub const CAROUSEL_ID: &str = "collections-carousel";
pub const CARD_SELECTOR: &str = "[data-carousel-card]";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Draggable, arc-laid-out card track.
///
/// Owns two frame loops: the coast loop runs only between a fling release
/// and settling, the layout loop only while the track is on screen.
pub struct CarouselSurface {
    _listeners: Vec<Listener>,
    coast: Rc<RafLoop>,
    layout: Rc<RafLoop>,
    observer: Option<web::IntersectionObserver>,
    _observer_cb: Option<ObserverCallback>,
}

impl CarouselSurface {
    /// Mount on `#collections-carousel`. `Ok(None)` when the page has no carousel.
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(track) = dom::html_element_by_id(document, CAROUSEL_ID) else {
            log::debug!("[carousel] no #{} on this page", CAROUSEL_ID);
            return Ok(None);
        };
        let params = CarouselParams::resolve(|key| dom::data_f64(&track, key)).unwrap_or_else(|e| {
            log::warn!("[carousel] {}; using defaults", e);
            CarouselParams::default()
        });
        let cards = Rc::new(dom::html_elements(&track, CARD_SELECTOR));
        let scroller = Rc::new(RefCell::new(CarouselScroller::new(params)));

        let coast = {
            let scroller = scroller.clone();
            let track = track.clone();
            Rc::new(RafLoop::new("coast", move || {
                let command = scroller.borrow_mut().tick();
                let Some(command) = command else {
                    return LoopControl::Stop;
                };
                events::apply_scroll(&track, command);
                if scroller.borrow().phase().is_coasting() {
                    LoopControl::Continue
                } else {
                    LoopControl::Stop
                }
            }))
        };

        let layout = {
            let track = track.clone();
            let cards = cards.clone();
            Rc::new(RafLoop::new("card layout", move || {
                update_card_transforms(&track, &cards, &params);
                LoopControl::Continue
            }))
        };

        let mut listeners = events::wire_drag_handlers(&DragWiring {
            track: track.clone(),
            scroller,
            coast: coast.clone(),
            clock: PointerClock::new(),
        });
        if let Some(window) = web::window() {
            let track = track.clone();
            let cards = cards.clone();
            listeners.push(Listener::new(&window, "resize", move |_ev: web::Event| {
                update_card_transforms(&track, &cards, &params);
            }));
        }

        update_card_transforms(&track, &cards, &params);
        let (observer, observer_cb) = match observe_visibility(&track, &layout, params.visibility_threshold) {
            Ok((observer, cb)) => (Some(observer), Some(cb)),
            Err(e) => {
                // without intersection tracking, keep the layout live
                log::warn!("[carousel] {:?}; layout loop runs unconditionally", e);
                layout.start();
                (None, None)
            }
        };

        log::info!("[carousel] mounted with {} cards", cards.len());
        Ok(Some(Self {
            _listeners: listeners,
            coast,
            layout,
            observer,
            _observer_cb: observer_cb,
        }))
    }
}

impl Drop for CarouselSurface {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        self.coast.stop();
        self.layout.stop();
    }
}

fn observe_visibility(
    track: &web::HtmlElement,
    layout: &Rc<RafLoop>,
    threshold: f64,
) -> Result<(web::IntersectionObserver, ObserverCallback), JsValue> {
    let layout = layout.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let entry = entries.get(0);
            let visible = !entry.is_undefined()
                && entry.unchecked_into::<web::IntersectionObserverEntry>().is_intersecting();
            layout.set_visible(visible);
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(track);
    Ok((observer, callback))
}

fn update_card_transforms(track: &web::HtmlElement, cards: &[web::HtmlElement], params: &CarouselParams) {
    let container = dom::span_of(track);
    let spans: SmallVec<[Span; 8]> = cards.iter().map(|card| dom::span_of(card)).collect();
    for (card, transform) in cards.iter().zip(layout_cards(container, &spans, params)) {
        dom::set_style(card, "transform", &transform.css());
        dom::set_style(card, "transform-origin", CardTransform::ORIGIN);
        dom::set_style(card, "z-index", &transform.z_index.to_string());
    }
}
