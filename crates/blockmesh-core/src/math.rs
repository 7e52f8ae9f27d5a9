//! Bounding boxes and extents.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::coords::Octant;

/// Axis-Aligned Bounding Box in double precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum (lower) corner
    pub min: DVec3,
    /// Maximum (upper) corner
    pub max: DVec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::UNIT
    }
}

impl Aabb {
    /// The unit cube `[0, 1]^3`, the octree root.
    pub const UNIT: Self = Self {
        min: DVec3::ZERO,
        max: DVec3::ONE,
    };

    /// Create a new AABB from min and max corners
    #[inline]
    pub fn new(min: DVec3, max: DVec3) -> Self {
        debug_assert!(
            min.cmple(max).all(),
            "AABB min must be <= max on all axes"
        );
        Self { min, max }
    }

    /// Get the size of the AABB
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Volume of the box
    #[inline]
    pub fn volume(&self) -> f64 {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// The box of one octree child: half the size, shifted by the octant's offset.
    #[inline]
    pub fn child(&self, octant: Octant) -> Self {
        let size = self.size() * 0.5;
        let min = self.min + size * octant.offset();
        Self { min, max: min + size }
    }

    /// Check if `other` lies entirely within this box
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.min.cmple(other.min).all() && other.max.cmple(self.max).all()
    }

    /// Check if this AABB intersects another, touching faces included
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }

    /// Check if the interiors overlap; boxes sharing only a face do not.
    #[inline]
    pub fn overlaps_interior(&self, other: &Self) -> bool {
        self.min.cmplt(other.max).all() && other.min.cmplt(self.max).all()
    }

    /// Drop z, keeping the footprint in the xy plane.
    #[inline]
    pub fn project_xy(&self) -> Extent2 {
        Extent2::new(self.min.truncate(), self.max.truncate())
    }
}

/// Axis-aligned rectangle in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent2 {
    /// Minimum corner
    pub min: DVec2,
    /// Maximum corner
    pub max: DVec2,
}

impl Extent2 {
    /// Create a new extent from min and max corners
    #[inline]
    pub fn new(min: DVec2, max: DVec2) -> Self {
        debug_assert!(
            min.cmple(max).all(),
            "extent min must be <= max on all axes"
        );
        Self { min, max }
    }

    /// The unit square `[0, 1]^2`
    pub const UNIT: Self = Self {
        min: DVec2::ZERO,
        max: DVec2::ONE,
    };

    /// Width along x
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height along y
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Smallest extent covering both
    #[inline]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow the shorter side symmetrically until width equals height.
    pub fn squared(&self) -> Self {
        let (width, height) = (self.width(), self.height());
        let half = 0.5 * (width - height).abs();
        if width > height {
            Self {
                min: DVec2::new(self.min.x, self.min.y - half),
                max: DVec2::new(self.max.x, self.max.y + half),
            }
        } else if height > width {
            Self {
                min: DVec2::new(self.min.x - half, self.min.y),
                max: DVec2::new(self.max.x + half, self.max.y),
            }
        } else {
            *self
        }
    }

    /// Pad every side by `margin`.
    #[inline]
    pub fn padded(&self, margin: f64) -> Self {
        Self {
            min: self.min - DVec2::splat(margin),
            max: self.max + DVec2::splat(margin),
        }
    }
}
