//! Turning decoded blocks into ordered, colored rectangles.

use blockmesh_core::{Extent2, RefinementLevel, Result};
use blockmesh_decode::{OctreePath, ScannedBlock};
use glam::DVec2;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::palette::{Palette, Rgb};
use crate::viewport::Viewport;

/// Levels at or above this are left out of a plan by default.
pub const DEFAULT_MAX_LEVEL: RefinementLevel = 10;

/// Plot preparation settings.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Exclusive upper bound on plotted refinement levels.
    pub max_level: RefinementLevel,
    /// Colors cycled by level.
    pub palette: Palette,
    /// How axis limits are chosen.
    pub viewport: Viewport,
    /// Emit each distinct path once, at its first occurrence.
    pub unique: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            palette: Palette::default(),
            viewport: Viewport::default(),
            unique: false,
        }
    }
}

impl PlotConfig {
    /// Set the exclusive level bound.
    #[must_use]
    pub const fn with_max_level(mut self, max_level: RefinementLevel) -> Self {
        self.max_level = max_level;
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the viewport.
    #[must_use]
    pub const fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Enable or disable deduplication of repeated paths.
    #[must_use]
    pub const fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

/// One block as drawn in the xy plane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Lower x
    pub x: f64,
    /// Lower y
    pub y: f64,
    /// Extent along x
    pub width: f64,
    /// Extent along y
    pub height: f64,
    /// Refinement level
    pub level: RefinementLevel,
    /// Edge color for this level
    pub color: Rgb,
    /// Block name as found in the input
    pub token: String,
}

impl Rect {
    /// Footprint of the rectangle.
    pub fn extent(&self) -> Extent2 {
        Extent2::new(
            DVec2::new(self.x, self.y),
            DVec2::new(self.x + self.width, self.y + self.height),
        )
    }
}

/// Everything a renderer needs to draw one pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotPlan {
    /// Rectangles in draw order: coarse levels first, input order within a level.
    pub rects: Vec<Rect>,
    /// Area covered by the rectangles, `None` when there are none.
    pub extent: Option<Extent2>,
    /// Axis limits to draw with.
    pub limits: Extent2,
}

impl PlotPlan {
    /// Number of rectangles at each level below `max_level`.
    pub fn level_counts(&self, max_level: RefinementLevel) -> Vec<usize> {
        let mut counts = vec![0; max_level as usize];
        for rect in &self.rects {
            if let Some(count) = counts.get_mut(rect.level as usize) {
                *count += 1;
            }
        }
        counts
    }
}

/// Build the draw plan for `blocks`.
///
/// Blocks at `config.max_level` or deeper are dropped. The extent is the
/// fold of every emitted rectangle's footprint.
pub fn prepare<'a, I>(blocks: I, config: &PlotConfig) -> Result<PlotPlan>
where
    I: IntoIterator<Item = &'a ScannedBlock>,
{
    config.viewport.validate()?;

    let mut seen: HashSet<&OctreePath> = HashSet::new();
    let mut selected: Vec<&ScannedBlock> = blocks
        .into_iter()
        .filter(|&block| block.address.level < config.max_level)
        .filter(|&block| !config.unique || seen.insert(&block.path))
        .collect();

    // Stable, so input order survives within a level.
    selected.sort_by_key(|block| block.address.level);

    let rects: Vec<Rect> = selected
        .into_iter()
        .map(|block| {
            let footprint = block.address.bounds.project_xy();
            Rect {
                x: footprint.min.x,
                y: footprint.min.y,
                width: footprint.width(),
                height: footprint.height(),
                level: block.address.level,
                color: config.palette.color_for(block.address.level),
                token: block.token.clone(),
            }
        })
        .collect();

    let extent = rects
        .iter()
        .map(Rect::extent)
        .reduce(|acc, extent| acc.merge(&extent));
    let limits = config.viewport.limits(extent.as_ref());

    debug!(
        rects = rects.len(),
        max_level = config.max_level,
        "prepared plot plan"
    );

    Ok(PlotPlan {
        rects,
        extent,
        limits,
    })
}
