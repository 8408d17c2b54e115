use crate::core::Span;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements under `root` matching `selector`, in document order.
pub fn html_elements(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Numeric `data-{key}` attribute; absent or unparsable values are `None`.
pub fn data_f64(el: &web::Element, key: &str) -> Option<f64> {
    el.get_attribute(&format!("data-{key}"))
        .and_then(|raw| raw.trim().parse::<f64>().ok())
}

#[inline]
pub fn span_of(el: &web::Element) -> Span {
    let rect = el.get_bounding_client_rect();
    Span::new(rect.left() as f32, rect.width() as f32)
}

// `Element::scroll_left` is integral in web-sys; coasting moves by
// fractions of a pixel per frame, so go through the JS property directly.
pub fn scroll_left(el: &web::Element) -> f64 {
    js_sys::Reflect::get(el, &JsValue::from_str("scrollLeft"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn set_scroll_left(el: &web::Element, value: f64) {
    if value.is_finite() {
        _ = js_sys::Reflect::set(el, &JsValue::from_str("scrollLeft"), &JsValue::from_f64(value));
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E>(target: &web::EventTarget, event: &'static str, handler: impl FnMut(E) + 'static) -> Self
    where
        E: JsCast,
    {
        Self::with_passive(target, event, false, handler)
    }

    /// Listener that promises never to call `preventDefault` (scroll, touch).
    pub fn passive<E>(target: &web::EventTarget, event: &'static str, handler: impl FnMut(E) + 'static) -> Self
    where
        E: JsCast,
    {
        Self::with_passive(target, event, true, handler)
    }

    fn with_passive<E>(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: JsCast,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("[dom] could not listen for {}: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
