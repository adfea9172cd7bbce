//! Pure math/data for drawing & units in the FM dial
//!
//! Geometry primitives, colour definitions and density-independent units
//! shared by the dial model and its rendering adapters.

mod color;
mod geometry;
mod unit;

pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Size};
    pub use crate::unit::{Density, Dp};
}
