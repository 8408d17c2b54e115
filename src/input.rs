use crate::core::viewport::normalize_in_rect;
use crate::core::PointerSample;
use glam::Vec2;
use instant::Instant;
use web_sys as web;

/// Millisecond clock for pointer samples, relative to surface mount.
#[derive(Clone, Copy, Debug)]
pub struct PointerClock {
    epoch: Instant,
}

impl PointerClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for PointerClock {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------- Event → sample helpers ----------------
#[inline]
pub fn mouse_sample(ev: &web::MouseEvent, clock: &PointerClock) -> PointerSample {
    PointerSample::new(ev.page_x() as f64, ev.page_y() as f64, clock.now_ms())
}

/// First touch point of the event; `None` once every finger has lifted.
#[inline]
pub fn touch_sample(ev: &web::TouchEvent, clock: &PointerClock) -> Option<PointerSample> {
    let touch = ev.touches().get(0)?;
    Some(PointerSample::new(
        touch.page_x() as f64,
        touch.page_y() as f64,
        clock.now_ms(),
    ))
}

/// Pointer position over `el`, 0..1 on each axis.
#[inline]
pub fn pointer_in_element(ev: &web::MouseEvent, el: &web::Element) -> Option<Vec2> {
    let rect = el.get_bounding_client_rect();
    normalize_in_rect(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    )
}
