use glam::{Vec2, Vec3};

// Shared 3D scene constants for the product viewer.

// Orientation smoothing
pub const POINTER_LERP: f32 = 0.05; // pointer low-pass, smaller is smoother
pub const SPIN_LERP: f32 = 0.1; // scroll-driven spin catch-up rate
pub const TILT_AMPLITUDE: f32 = 0.4; // radians across the full pointer range

// Resting pose
pub const INITIAL_YAW: f32 = 80.0 * std::f32::consts::PI / 180.0; // default-facing side
pub const TILT_X_BIAS: f32 = -40.0 * std::f32::consts::PI / 180.0; // lean back
pub const TILT_Z_BIAS: f32 = -26.0 * std::f32::consts::PI / 180.0; // lean right

// Pointer positions (normalized 0..1)
pub const POINTER_START: Vec2 = Vec2::new(0.9, 0.9); // smoothed pointer on mount
pub const POINTER_REST: Vec2 = Vec2::new(0.5, 0.5); // raw pointer when none is hovering

// Model framing
pub const FIT_EXTENT: f32 = 2.0; // world units the largest model dimension maps to
pub const FIT_MULTIPLIER: f32 = 1.85; // enlarge beyond the extent
pub const FIT_OFFSET: Vec3 = Vec3::new(0.5, 0.25, 0.0); // nudge right and up after centring
