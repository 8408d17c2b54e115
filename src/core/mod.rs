pub mod carousel;
pub mod constants;
pub mod frame_loop;
pub mod hover_tilt;
pub mod inertia;
pub mod noise;
pub mod orientation;
pub mod pointer;
pub mod scroller;
pub mod sequence;
pub mod smoothing;
pub mod throttle;
pub mod viewport;

pub use carousel::{card_progress, layout_cards, CardTransform, Span};
pub use frame_loop::FrameLoop;
pub use hover_tilt::HoverTilt;
pub use inertia::InertiaState;
pub use orientation::{
    Bounds, ModelFit, Orientation, OrientationBlender, OrientationState, OrientationTarget,
    ViewerFrame,
};
pub use pointer::{DragSession, PointerSample};
pub use scroller::{CarouselScroller, ScrollCommand, ScrollEvent, ScrollPhase};
pub use sequence::{sequence_index, ScrollSequence, SequenceChange};
pub use throttle::Throttle;
