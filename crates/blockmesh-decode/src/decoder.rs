//! Block-name to bounding-box decoding.

use blockmesh_core::{Aabb, RefinementLevel, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;
use crate::path::OctreePath;

/// A decoded block: its refinement level and extent in the unit cube.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockAddress {
    /// Refinement level (number of path digits)
    pub level: RefinementLevel,
    /// Extent of the block, `0.5^level` wide on every axis
    pub bounds: Aabb,
}

impl BlockAddress {
    /// Decode the box a path names.
    ///
    /// Starting from the unit cube, each octant halves the box and moves
    /// its lower corner by the new size times the octant's offset.
    pub fn from_path(path: &OctreePath) -> Self {
        Self {
            level: path.level(),
            bounds: path.bounds(),
        }
    }

    /// Lower corner
    #[inline]
    pub const fn lower(&self) -> DVec3 {
        self.bounds.min
    }

    /// Upper corner
    #[inline]
    pub const fn upper(&self) -> DVec3 {
        self.bounds.max
    }

    /// Edge length on every axis
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.bounds.size()
    }
}

/// Decodes block names written in one [`Grammar`].
///
/// Stateless; a single decoder can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct BlockAddressDecoder {
    grammar: Grammar,
}

impl BlockAddressDecoder {
    /// Create a decoder for `grammar`.
    pub const fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// The grammar this decoder accepts.
    pub const fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Decode `identifier` into its level and bounding box.
    pub fn decode(&self, identifier: &str) -> Result<BlockAddress> {
        decode(identifier, &self.grammar)
    }

    /// Parse and decode, keeping the parsed path.
    pub fn decode_path(&self, identifier: &str) -> Result<(OctreePath, BlockAddress)> {
        let path = OctreePath::parse(identifier, &self.grammar)?;
        let address = BlockAddress::from_path(&path);
        Ok((path, address))
    }
}

/// Decode `identifier` under `grammar`.
pub fn decode(identifier: &str, grammar: &Grammar) -> Result<BlockAddress> {
    OctreePath::parse(identifier, grammar).map(|path| BlockAddress::from_path(&path))
}
