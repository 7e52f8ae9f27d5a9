//! Prepares decoded mesh blocks for a 2D renderer.
//!
//! Blocks become colored rectangles in the xy plane, ordered coarse to
//! fine, together with the extent they cover and the axis limits to draw
//! them in. Drawing itself is left to the consumer of [`PlotPlan`].

pub mod palette;
pub mod prepare;
pub mod viewport;

pub use palette::{Palette, Rgb};
pub use prepare::{prepare, PlotConfig, PlotPlan, Rect, DEFAULT_MAX_LEVEL};
pub use viewport::Viewport;
