use glam::Vec2;

// Page-geometry normalizers. Every function maps degenerate geometry
// (zero or non-finite sizes) to a neutral value instead of NaN.

/// Scroll progress over one viewport height, in 0..1.
#[inline]
pub fn window_fraction(scroll_y: f64, viewport_height: f64) -> f32 {
    if !(viewport_height.is_finite() && viewport_height > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / viewport_height).clamp(0.0, 1.0) as f32
}

/// Scroll progress through a page section, in 0..1. Zero before the section
/// top and one once it has fully scrolled past.
#[inline]
pub fn section_fraction(scroll_y: f64, section_top: f64, section_height: f64) -> f32 {
    if !(section_height.is_finite() && section_height > 0.0)
        || !scroll_y.is_finite()
        || !section_top.is_finite()
    {
        return 0.0;
    }
    let scrolled_in = (scroll_y - section_top).max(0.0);
    (scrolled_in / section_height).min(1.0) as f32
}

/// Pointer position relative to a box, 0..1 on each axis inside it.
/// `None` when the box has no area yet.
#[inline]
pub fn normalize_in_rect(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let uv = Vec2::new(
        ((client_x - left) / width) as f32,
        ((client_y - top) / height) as f32,
    );
    uv.is_finite().then_some(uv)
}
