//! Foundation layer for the FM dial: input events, velocity tracking and the
//! text measurement contract a rendering surface must provide.

pub mod gesture_constants;
pub mod input;
pub mod text;
pub mod velocity_tracker;

pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use text::{MonospacedTextMeasurer, TextMeasurer, TextMetrics};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::input::{PointerEvent, PointerEventKind, PointerId};
    pub use crate::text::{TextMeasurer, TextMetrics};
}
