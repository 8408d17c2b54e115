use crate::config::ViewerParams;
use crate::core::viewport::{section_fraction, window_fraction};
use crate::core::{Bounds, OrientationBlender, ViewerFrame};
use crate::dom::{self, Listener};
use crate::input;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Pose for one rendered frame, handed to the JS 3D renderer.
///
/// Apply `tilt_x`/`tilt_z` to the outer group and `spin_y` to the inner
/// group, or use the quaternion directly on a single object.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct ViewerPose {
    pub tilt_x: f32,
    pub tilt_z: f32,
    pub spin_y: f32,
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
    /// False until the model bounds were measurable.
    pub fitted: bool,
    pub scale: f32,
    pub position_x: f32,
    pub position_y: f32,
    pub position_z: f32,
}

impl From<ViewerFrame> for ViewerPose {
    fn from(frame: ViewerFrame) -> Self {
        let o = frame.orientation;
        let q = o.quat();
        let (fitted, scale, position) = match frame.fit {
            Some(fit) => (true, fit.scale, fit.position),
            None => (false, 1.0, Vec3::ZERO),
        };
        Self {
            tilt_x: o.tilt_x,
            tilt_z: o.tilt_z,
            spin_y: o.spin_y,
            qx: q.x,
            qy: q.y,
            qz: q.z,
            qw: q.w,
            fitted,
            scale,
            position_x: position.x,
            position_y: position.y,
            position_z: position.z,
        }
    }
}

/// Scroll- and pointer-reactive orientation for the hero product model.
///
/// The renderer calls `tick()` once per frame and applies the returned pose.
#[wasm_bindgen]
pub struct ProductViewer {
    blender: Rc<RefCell<OrientationBlender>>,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl ProductViewer {
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> Result<ProductViewer, JsValue> {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = dom::html_element_by_id(&document, container_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{container_id}")))?;

        let params = ViewerParams::resolve(|key| dom::data_f64(&container, key)).unwrap_or_else(|e| {
            log::warn!("[viewer] {}; using defaults", e);
            ViewerParams::default()
        });
        let blender = Rc::new(RefCell::new(OrientationBlender::new(params)));
        sync_scroll(&window, &blender);

        let listeners = vec![
            {
                let blender = blender.clone();
                let el = container.clone();
                Listener::new(&container, "mousemove", move |ev: web::MouseEvent| {
                    // zero-sized container: drop the sample
                    if let Some(uv) = input::pointer_in_element(&ev, &el) {
                        blender.borrow_mut().set_pointer(uv);
                    }
                })
            },
            {
                let blender = blender.clone();
                Listener::new(&container, "mouseleave", move |_ev: web::MouseEvent| {
                    blender.borrow_mut().clear_pointer();
                })
            },
            {
                let blender = blender.clone();
                let win = window.clone();
                Listener::passive(&window, "scroll", move |_ev: web::Event| {
                    sync_scroll(&win, &blender);
                })
            },
        ];

        log::info!("[viewer] mounted on #{}", container_id);
        Ok(ProductViewer {
            blender,
            _listeners: listeners,
        })
    }

    /// Model bounding box once the renderer has loaded the geometry.
    pub fn set_geometry(
        &mut self,
        size_x: f32,
        size_y: f32,
        size_z: f32,
        center_x: f32,
        center_y: f32,
        center_z: f32,
    ) {
        self.blender.borrow_mut().set_geometry(Bounds {
            size: Vec3::new(size_x, size_y, size_z),
            center: Vec3::new(center_x, center_y, center_z),
        });
    }

    /// Override the scroll fraction (0..1), e.g. for a scroll container
    /// other than the window.
    pub fn set_scroll_fraction(&mut self, fraction: f32) {
        self.blender.borrow_mut().set_scroll_fraction(fraction);
    }

    pub fn tick(&mut self) -> ViewerPose {
        self.blender.borrow_mut().tick().into()
    }

    pub fn reset(&mut self) {
        self.blender.borrow_mut().reset();
    }
}

fn sync_scroll(window: &web::Window, blender: &Rc<RefCell<OrientationBlender>>) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    blender
        .borrow_mut()
        .set_scroll_fraction(window_fraction(scroll_y, viewport_h));
}

/// Scroll progress (0..1) through the page section with id `section_id`:
/// zero until its top reaches the viewport top, one once it has scrolled past.
#[wasm_bindgen]
pub fn section_progress(section_id: &str) -> f32 {
    let Some(window) = web::window() else {
        return 0.0;
    };
    let Some(section) = window
        .document()
        .and_then(|document| document.get_element_by_id(section_id))
    else {
        return 0.0;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let rect = section.get_bounding_client_rect();
    section_fraction(scroll_y, rect.top() + scroll_y, rect.height())
}
