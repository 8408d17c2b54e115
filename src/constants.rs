/// Interaction tuning constants for the carousel, hover tilt, scroll
/// sequence and overlay.
///
/// These constants express intended behavior (sensitivities, decay rates,
/// easing shapes) and keep magic numbers out of the code. The parameter
/// structs in `config.rs` take their defaults from here.

// Carousel drag
pub const DRAG_SENSITIVITY: f64 = 1.5; // scroll px per pointer px while dragging
pub const FRAME_NORMALIZATION_MS: f64 = 16.0; // ~one 60 fps frame; velocity is px per frame

// Carousel inertia
pub const COAST_FRICTION: f64 = 0.95; // velocity multiplier applied every tick
pub const COAST_STOP_VELOCITY: f64 = 0.1; // px/frame at or below which coasting ends

// Carousel card arc
pub const CARD_CURVE_EXPONENT: f32 = 1.1; // easing applied to |progress|
pub const CARD_LIFT_PX: f32 = 180.0; // side cards drop by this much at the edge
pub const CARD_DEPTH_PX: f32 = 160.0; // side cards recede by this much at the edge
pub const CARD_YAW_DEG: f32 = 12.0; // turn toward the centre
pub const CARD_ROLL_DEG: f32 = 14.0; // lean away from the centre
pub const CARD_PITCH_DEG: f32 = 7.0; // fall back at the edge
pub const CARD_SHRINK: f32 = 0.15; // edge cards are this much smaller
pub const CARD_Z_INDEX_SPAN: f32 = 100.0; // paint order of the centred card

// Carousel visibility gating
pub const CAROUSEL_VISIBILITY_THRESHOLD: f64 = 0.05; // intersection ratio that counts as on-screen

// About-image hover tilt
pub const HOVER_TILT_AMPLITUDE_DEG: f32 = 15.0; // full-range tilt across the container
pub const HOVER_TILT_LERP: f32 = 0.15; // fraction of remaining distance closed per frame
pub const HOVER_TILT_DEAD_BAND_DEG: f32 = 0.01; // skip style writes below this delta
pub const HOVER_TILT_PERSPECTIVE_PX: f32 = 1000.0;

// Pinned scroll sequence
pub const SEQUENCE_STEP_NUDGE: f32 = 0.001; // lands exact k/count boundaries on step k

// Noise overlay
pub const OVERLAY_REPAINT_THROTTLE_MS: i32 = 500; // at most one repaint per window on DOM mutation
