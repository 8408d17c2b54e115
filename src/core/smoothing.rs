use glam::Vec2;

// First-order low-pass steps shared by the viewer and the hover tilt.
// With a factor in (0, 1] the value converges on the target without
// overshooting, and a value already at the target stays bit-identical.

#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[inline]
pub fn approach_vec2(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

