//! Octree paths parsed from block names.
//!
//! A path is the sequence of child octants taken from the root, so its
//! length is the refinement level of the block it names.

use std::fmt;

use blockmesh_core::constants::MAX_LEVEL;
use blockmesh_core::{Aabb, Error, IdentifierFault, Octant, RefinementLevel, Result};
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;

/// Validated sequence of octants from the root to a block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OctreePath {
    octants: Vec<Octant>,
}

impl OctreePath {
    /// The root path (level 0).
    pub const fn root() -> Self {
        Self {
            octants: Vec::new(),
        }
    }

    /// Parse a block name under `grammar`.
    ///
    /// A prefixed name's first character is skipped whatever it is; the
    /// marker only matters when picking names out of text.
    pub fn parse(token: &str, grammar: &Grammar) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::invalid_identifier(token, IdentifierFault::Empty));
        }

        let octants = match grammar {
            Grammar::Prefixed { .. } => parse_prefixed(token)?,
            Grammar::Delimited { marker, separator } => {
                parse_delimited(token, marker, *separator)?
            }
        };

        if octants.len() > MAX_LEVEL as usize {
            return Err(Error::invalid_identifier(
                token,
                IdentifierFault::TooDeep {
                    depth: octants.len(),
                    max: MAX_LEVEL,
                },
            ));
        }

        Ok(Self { octants })
    }

    /// Refinement level, the number of octants in the path.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn level(&self) -> RefinementLevel {
        // bounded by MAX_LEVEL
        self.octants.len() as RefinementLevel
    }

    /// Whether this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.octants.is_empty()
    }

    /// Octants from the root downwards.
    #[inline]
    pub fn octants(&self) -> &[Octant] {
        &self.octants
    }

    /// Path of the parent block, `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.octants.split_last()?;
        Some(Self {
            octants: parent.to_vec(),
        })
    }

    /// Path of the child in `octant`, `None` past [`MAX_LEVEL`].
    pub fn child(&self, octant: Octant) -> Option<Self> {
        if self.level() >= MAX_LEVEL {
            return None;
        }
        let mut octants = self.octants.clone();
        octants.push(octant);
        Some(Self { octants })
    }

    /// All eight child paths in octant order, `None` past [`MAX_LEVEL`].
    pub fn children(&self) -> Option<[Self; 8]> {
        if self.level() >= MAX_LEVEL {
            return None;
        }
        Some(Octant::ALL.map(|octant| {
            let mut octants = self.octants.clone();
            octants.push(octant);
            Self { octants }
        }))
    }

    /// Bounding box of the block in the unit cube.
    pub fn bounds(&self) -> Aabb {
        self.octants
            .iter()
            .fold(Aabb::UNIT, |bounds, &octant| bounds.child(octant))
    }
}

impl fmt::Display for OctreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for octant in &self.octants {
            write!(f, "{octant}")?;
        }
        Ok(())
    }
}

fn parse_prefixed(token: &str) -> Result<Vec<Octant>> {
    token
        .chars()
        .skip(1)
        .enumerate()
        .map(|(i, ch)| {
            Octant::from_digit(ch).ok_or_else(|| {
                Error::invalid_identifier(
                    token,
                    IdentifierFault::NotOctal {
                        found: ch,
                        position: i + 1,
                    },
                )
            })
        })
        .collect()
}

fn parse_delimited(token: &str, marker: &str, separator: char) -> Result<Vec<Octant>> {
    let Some(body) = token.strip_prefix(marker) else {
        return Err(Error::invalid_identifier(
            token,
            IdentifierFault::MissingMarker(marker.to_string()),
        ));
    };

    let offset = marker.chars().count();
    let mut octants = Vec::with_capacity(body.len());
    let mut seen_separator = false;

    for (i, ch) in body.chars().enumerate() {
        if let Some(octant) = Octant::from_digit(ch) {
            octants.push(octant);
        } else if ch == separator && !seen_separator {
            seen_separator = true;
        } else {
            return Err(Error::invalid_identifier(
                token,
                IdentifierFault::NotOctal {
                    found: ch,
                    position: offset + i,
                },
            ));
        }
    }

    if !seen_separator {
        return Err(Error::invalid_identifier(
            token,
            IdentifierFault::MissingSeparator(separator),
        ));
    }

    Ok(octants)
}
