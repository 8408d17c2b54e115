use crate::constants::OVERLAY_REPAINT_THROTTLE_MS;
use crate::core::noise::{noise_image, overlay_height};
use crate::core::Throttle;
use crate::dom::{self, Listener};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys as web;

pub const OVERLAY_ID: &str = "noise-overlay";

struct Painter {
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    rng: RefCell<StdRng>,
}

impl Painter {
    fn paint(&self) -> Result<(), JsValue> {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let width = window.inner_width()?.as_f64().unwrap_or(0.0).max(0.0) as u32;
        let height = overlay_height(&document_heights(&document));
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.canvas.set_width(width);
        self.canvas.set_height(height);
        dom::set_style(&self.container, "width", &format!("{width}px"));
        dom::set_style(&self.container, "height", &format!("{height}px"));

        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()?;
        let pixels = noise_image(width, height, &mut *self.rng.borrow_mut());
        let image = web::ImageData::new_with_u8_clamped_array_and_sh(Clamped(&pixels[..]), width, height)?;
        ctx.put_image_data(&image, 0.0, 0.0)
    }

    fn repaint(&self) {
        if let Err(e) = self.paint() {
            log::warn!("[overlay] repaint failed: {:?}", e);
        }
    }
}

fn document_heights(document: &web::Document) -> Vec<i32> {
    let mut heights = Vec::with_capacity(5);
    if let Some(root) = document.document_element() {
        heights.push(root.scroll_height());
        heights.push(root.client_height());
        if let Ok(root) = root.dyn_into::<web::HtmlElement>() {
            heights.push(root.offset_height());
        }
    }
    if let Some(body) = document.body() {
        heights.push(body.scroll_height());
        heights.push(body.offset_height());
    }
    heights
}

/// Full-page monochrome grain, regenerated whenever the page size changes.
pub struct NoiseOverlay {
    _listeners: Vec<Listener>,
    observer: Option<web::MutationObserver>,
    timer: Rc<RefCell<Throttle<i32>>>,
    _observer_cb: Closure<dyn FnMut()>,
    _timeout_cb: Rc<Closure<dyn FnMut()>>,
}

impl NoiseOverlay {
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(container) = dom::html_element_by_id(document, OVERLAY_ID) else {
            log::debug!("[overlay] no #{} on this page", OVERLAY_ID);
            return Ok(None);
        };
        let canvas = match container.query_selector("canvas").ok().flatten() {
            Some(el) => el
                .dyn_into::<web::HtmlCanvasElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?,
            None => {
                let el = document
                    .create_element("canvas")
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?
                    .dyn_into::<web::HtmlCanvasElement>()
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                _ = container.append_child(&el);
                el
            }
        };
        dom::set_style(&canvas, "display", "block");
        dom::set_style(&canvas, "width", "100%");
        dom::set_style(&canvas, "height", "100%");

        let painter = Rc::new(Painter {
            container,
            canvas,
            rng: RefCell::new(StdRng::from_entropy()),
        });
        painter.repaint();

        let mut listeners = Vec::new();
        if let Some(window) = web::window() {
            let painter = painter.clone();
            listeners.push(Listener::new(&window, "resize", move |_ev: web::Event| {
                painter.repaint();
            }));
        }

        // DOM mutations repaint at most once per throttle window
        let timer: Rc<RefCell<Throttle<i32>>> = Rc::new(RefCell::new(Throttle::new()));
        let timeout_cb: Rc<Closure<dyn FnMut()>> = {
            let painter = painter.clone();
            let timer = timer.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                let due = timer.borrow_mut().fire();
                if due {
                    painter.repaint();
                }
            }) as Box<dyn FnMut()>))
        };
        let observer_cb: Closure<dyn FnMut()> = {
            let timer = timer.clone();
            let timeout_cb = timeout_cb.clone();
            Closure::wrap(Box::new(move || {
                let Some(window) = web::window() else {
                    return;
                };
                timer.borrow_mut().schedule(|| {
                    window
                        .set_timeout_with_callback_and_timeout_and_arguments_0(
                            (*timeout_cb).as_ref().unchecked_ref(),
                            OVERLAY_REPAINT_THROTTLE_MS,
                        )
                        .map_err(|e| log::warn!("[overlay] cannot schedule repaint: {:?}", e))
                        .ok()
                });
            }) as Box<dyn FnMut()>)
        };

        let observer = match (web::MutationObserver::new(observer_cb.as_ref().unchecked_ref()), document.body()) {
            (Ok(observer), Some(body)) => {
                let init = web::MutationObserverInit::new();
                init.set_child_list(true);
                init.set_subtree(false);
                init.set_attributes(false);
                match observer.observe_with_options(&body, &init) {
                    Ok(()) => Some(observer),
                    Err(e) => {
                        log::warn!("[overlay] cannot observe body: {:?}", e);
                        None
                    }
                }
            }
            _ => None,
        };

        log::info!("[overlay] mounted");
        Ok(Some(Self {
            _listeners: listeners,
            observer,
            timer,
            _observer_cb: observer_cb,
            _timeout_cb: timeout_cb,
        }))
    }
}

impl Drop for NoiseOverlay {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        // the timeout closure is freed with `self`; a late tick would throw
        self.timer.borrow_mut().cancel(|handle| {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        });
    }
}
