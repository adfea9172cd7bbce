//! Horizontal FM frequency dial.
//!
//! A scale of evenly spaced marks scrolls beneath a fixed centre pointer.
//! Dragging moves the scale, a fast release flings it, and whenever motion
//! stops the scale snaps onto the nearest mark. [`FrequencyDial`] ties the
//! pieces together; the modules below are usable on their own.

pub mod bounds;
pub mod config;
pub mod dial;
pub mod fling_animation;
pub mod gesture;
pub mod layout;
pub mod listeners;
pub mod renderer;
pub mod scale;
pub mod scroll;

pub use bounds::ScrollBounds;
pub use config::{DialConfig, DialStyle, GestureConfig, ScaleConfig, ScaleConfigError};
pub use dial::{FrameRequester, FrequencyDial};
pub use fling_animation::{FlingAnimation, FlingStatus};
pub use gesture::{GestureAction, GestureController, GesturePhase};
pub use layout::{measure, Constraints};
pub use listeners::{FrequencyListeners, ListenerId};
pub use renderer::{render, DrawCommand, DrawPlan, TextRole, TextRun};
pub use scale::Scale;
pub use scroll::ScrollState;

pub use fmdial_foundation::{
    MonospacedTextMeasurer, PointerEvent, PointerEventKind, PointerId, TextMeasurer, TextMetrics,
};
pub use fmdial_graphics::{Color, Density, Dp, Point, Size};

pub mod prelude {
    pub use crate::config::{DialConfig, DialStyle, ScaleConfig};
    pub use crate::dial::FrequencyDial;
    pub use crate::layout::Constraints;
    pub use crate::renderer::{DrawCommand, DrawPlan};
    pub use fmdial_foundation::prelude::*;
    pub use fmdial_graphics::prelude::*;
}
