//! Axis limits for drawing a plan.

use blockmesh_core::{Error, Extent2, Result};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Lower axis limit of the fixed viewport.
pub const FIXED_MIN: f64 = -0.2;
/// Upper axis limit of the fixed viewport.
pub const FIXED_MAX: f64 = 1.2;
/// Border added around a fitted extent, as a fraction of its side.
pub const DEFAULT_BORDER: f64 = 0.2;

/// How the axis limits are chosen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Viewport {
    /// The same square limits on both axes, whatever the data.
    Fixed {
        /// Lower limit
        min: f64,
        /// Upper limit
        max: f64,
    },
    /// Fit the data: square the extent around its center, then pad it.
    Fit {
        /// Padding on each side as a fraction of the squared side
        border: f64,
    },
}

impl Default for Viewport {
    fn default() -> Self {
        Self::Fixed {
            min: FIXED_MIN,
            max: FIXED_MAX,
        }
    }
}

impl Viewport {
    /// Fit viewport with the default border.
    pub const fn fit() -> Self {
        Self::Fit {
            border: DEFAULT_BORDER,
        }
    }

    /// Reject inverted limits and negative or non-finite borders.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Fixed { min, max } => {
                if !(min.is_finite() && max.is_finite() && min < max) {
                    return Err(Error::InvalidConfig(format!(
                        "viewport limits [{min}, {max}] are not an increasing range"
                    )));
                }
            }
            Self::Fit { border } => {
                if !(border.is_finite() && border >= 0.0) {
                    return Err(Error::InvalidConfig(format!(
                        "viewport border {border} must be a non-negative number"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Axis limits for data covering `extent`.
    ///
    /// With no data a fitted viewport frames the unit square.
    pub fn limits(&self, extent: Option<&Extent2>) -> Extent2 {
        match *self {
            Self::Fixed { min, max } => Extent2::new(DVec2::splat(min), DVec2::splat(max)),
            Self::Fit { border } => {
                let square = extent.unwrap_or(&Extent2::UNIT).squared();
                square.padded(border * square.width())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fixed_ignores_data() {
        let extent = Extent2::new(DVec2::new(0.5, 0.5), DVec2::new(0.75, 0.75));
        let limits = Viewport::default().limits(Some(&extent));
        assert_relative_eq!(limits.min.x, -0.2);
        assert_relative_eq!(limits.min.y, -0.2);
        assert_relative_eq!(limits.max.x, 1.2);
        assert_relative_eq!(limits.max.y, 1.2);
    }

    #[test]
    fn fit_squares_then_pads() {
        let extent = Extent2::new(DVec2::new(0.5, 0.0), DVec2::new(1.0, 1.0));
        let limits = Viewport::fit().limits(Some(&extent));
        // squared to [0.25, 1.25] x [0, 1], then padded by 0.2
        assert_relative_eq!(limits.min.x, 0.05);
        assert_relative_eq!(limits.max.x, 1.45);
        assert_relative_eq!(limits.min.y, -0.2);
        assert_relative_eq!(limits.max.y, 1.2);
    }

    #[test]
    fn fit_without_data_frames_unit_square() {
        let limits = Viewport::fit().limits(None);
        assert_relative_eq!(limits.min.x, -0.2);
        assert_relative_eq!(limits.max.y, 1.2);
    }

    #[test]
    fn invalid_viewports_rejected() {
        assert!(Viewport::default().validate().is_ok());
        assert!(Viewport::fit().validate().is_ok());
        assert!(Viewport::Fixed { min: 1.0, max: 0.0 }.validate().is_err());
        assert!(Viewport::Fit { border: -0.1 }.validate().is_err());
        assert!(Viewport::Fit { border: f64::NAN }.validate().is_err());
    }
}
