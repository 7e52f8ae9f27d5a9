//! Core types, math, and errors for blockmesh.
//!
//! This crate provides the foundational types shared by the decoder and the
//! plot preparation:
//! - Octant (child index) addressing
//! - Bounding boxes in the unit cube and 2D extents
//! - Common error type

pub mod coords;
pub mod error;
pub mod math;

pub use coords::{is_octal_digit, Octant, RefinementLevel};
pub use error::{Error, IdentifierFault, Result};
pub use math::{Aabb, Extent2};

/// Octree-wide constants
pub mod constants {
    /// Children per octree node
    pub const OCTANT_COUNT: usize = 8;
    /// Deepest refinement level whose box corners are still exact in `f64`.
    pub const MAX_LEVEL: u32 = 52;
}
