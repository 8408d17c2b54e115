pub mod pointer;

pub use pointer::{apply_scroll, wire_drag_handlers, DragWiring};
