use crate::config::HoverTiltParams;
use crate::core::HoverTilt;
use crate::dom::{self, Listener};
use crate::frame::{LoopControl, RafLoop};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub const CONTAINER_ID: &str = "about-image-container";
pub const IMAGE_ID: &str = "about-image";

/// Image that leans toward the hovering pointer.
pub struct HoverSurface {
    _listeners: Vec<Listener>,
    frames: RafLoop,
}

impl HoverSurface {
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let (Some(container), Some(image)) = (
            dom::html_element_by_id(document, CONTAINER_ID),
            dom::html_element_by_id(document, IMAGE_ID),
        ) else {
            log::debug!("[hover] no #{} / #{} on this page", CONTAINER_ID, IMAGE_ID);
            return Ok(None);
        };
        let params = HoverTiltParams::resolve(|key| dom::data_f64(&container, key)).unwrap_or_else(|e| {
            log::warn!("[hover] {}; using defaults", e);
            HoverTiltParams::default()
        });
        let tilt = Rc::new(RefCell::new(HoverTilt::new(params)));

        let listeners = vec![
            {
                let tilt = tilt.clone();
                let el = container.clone();
                Listener::new(&container, "mousemove", move |ev: web::MouseEvent| {
                    if let Some(uv) = input::pointer_in_element(&ev, &el) {
                        tilt.borrow_mut().pointer(uv);
                    }
                })
            },
            {
                let tilt = tilt.clone();
                Listener::new(&container, "mouseleave", move |_ev: web::MouseEvent| {
                    tilt.borrow_mut().leave();
                })
            },
        ];

        let frames = RafLoop::new("hover tilt", move || {
            let css = {
                let mut tilt = tilt.borrow_mut();
                tilt.tick().map(|rotation| tilt.css(rotation))
            };
            if let Some(css) = css {
                dom::set_style(&image, "transform", &css);
            }
            LoopControl::Continue
        });
        frames.start();

        log::info!("[hover] mounted on #{}", IMAGE_ID);
        Ok(Some(Self {
            _listeners: listeners,
            frames,
        }))
    }
}

impl Drop for HoverSurface {
    fn drop(&mut self) {
        self.frames.stop();
    }
}
