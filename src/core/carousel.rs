//! Arc layout for carousel cards.
//!
//! Each card's horizontal distance from the container centre becomes a
//! progress value in [-1, 1]; an eased curve of its magnitude drives depth,
//! drop, tilt and scale so side cards recede along an arc.

use crate::config::CarouselParams;
use smallvec::SmallVec;

/// Horizontal extent of an element in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub left: f32,
    pub width: f32,
}

impl Span {
    pub const fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Signed distance of a card centre from the container centre, in half
/// container widths, clamped to [-1, 1]. A zero-width container yields 0.
pub fn card_progress(card_center_x: f32, container_center_x: f32, container_width: f32) -> f32 {
    let half = container_width / 2.0;
    if !half.is_finite() || half <= 0.0 {
        return 0.0;
    }
    let progress = (card_center_x - container_center_x) / half;
    if progress.is_finite() {
        progress.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Transform parameters for one card. Lengths in px, angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub translate_y: f32,
    pub translate_z: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub rotate_z: f32,
    pub scale: f32,
    pub z_index: i32,
}

impl CardTransform {
    /// Cards pivot around their top edge.
    pub const ORIGIN: &'static str = "center top";

    pub fn from_progress(progress: f32, params: &CarouselParams) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let distance = progress.abs();
        let curve = distance.powf(params.curve_exponent);
        // f32::signum maps 0.0 to 1.0; the centred card must not roll
        let direction = if progress > 0.0 {
            1.0
        } else if progress < 0.0 {
            -1.0
        } else {
            0.0
        };

        Self {
            translate_y: curve * params.lift_px,
            translate_z: -curve * params.depth_px,
            rotate_x: -curve * params.pitch_deg,
            rotate_y: progress * params.yaw_deg,
            rotate_z: direction * curve * params.roll_deg,
            scale: 1.0 - curve * params.shrink,
            z_index: ((1.0 - distance) * params.z_index_span).round() as i32,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "translate3d(0, {:.3}px, {:.3}px) rotateY({:.3}deg) rotateX({:.3}deg) rotateZ({:.3}deg) scale({:.4})",
            self.translate_y, self.translate_z, self.rotate_y, self.rotate_x, self.rotate_z, self.scale
        )
    }
}

/// Lay out every card against the container. Output order matches `cards`.
pub fn layout_cards(
    container: Span,
    cards: &[Span],
    params: &CarouselParams,
) -> SmallVec<[CardTransform; 8]> {
    let container_center = container.center();
    cards
        .iter()
        .map(|card| {
            let progress = card_progress(card.center(), container_center, container.width);
            CardTransform::from_progress(progress, params)
        })
        .collect()
}
