//! Octree child addressing.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::OCTANT_COUNT;

/// Depth in the octree; the root is level 0.
pub type RefinementLevel = u32;

/// One of the eight children of an octree node.
///
/// The index packs one bit per axis: bit 0 selects the upper half in x,
/// bit 1 in y, bit 2 in z. Written as a single octal digit in block names.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Octant(u8);

impl Octant {
    /// All octants in index order.
    pub const ALL: [Self; OCTANT_COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Create an octant from its index, `None` if out of range.
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < OCTANT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Parse an octal digit character.
    #[inline]
    pub const fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '0'..='7' => Some(Self(ch as u8 - b'0')),
            _ => None,
        }
    }

    /// Create from per-axis upper-half flags.
    #[inline]
    pub const fn from_bits(x: bool, y: bool, z: bool) -> Self {
        Self((x as u8) | ((y as u8) << 1) | ((z as u8) << 2))
    }

    /// Index in `0..8`
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Octal digit for this octant
    #[inline]
    pub const fn to_digit(self) -> char {
        (b'0' + self.0) as char
    }

    /// Per-axis bits `[x, y, z]`
    #[inline]
    pub const fn bits(self) -> [u8; 3] {
        [self.0 & 1, (self.0 >> 1) & 1, (self.0 >> 2) & 1]
    }

    /// Offset of this child's lower corner in units of the child size.
    #[inline]
    pub fn offset(self) -> DVec3 {
        let [x, y, z] = self.bits();
        DVec3::new(f64::from(x), f64::from(y), f64::from(z))
    }
}

impl fmt::Display for Octant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_digit())
    }
}

/// Returns true for the digits `0`..`7`.
#[inline]
pub const fn is_octal_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_roundtrip() {
        for octant in Octant::ALL {
            assert_eq!(Octant::from_digit(octant.to_digit()), Some(octant));
        }
    }

    #[test]
    fn non_octal_digits_rejected() {
        assert_eq!(Octant::from_digit('8'), None);
        assert_eq!(Octant::from_digit('9'), None);
        assert_eq!(Octant::from_digit(':'), None);
        assert_eq!(Octant::from_digit('Z'), None);
        assert_eq!(Octant::new(8), None);
    }

    #[test]
    fn offset_follows_bit_decomposition() {
        assert_eq!(Octant::from_digit('0').unwrap().offset(), DVec3::ZERO);
        assert_eq!(Octant::from_digit('1').unwrap().offset(), DVec3::X);
        assert_eq!(Octant::from_digit('2').unwrap().offset(), DVec3::Y);
        assert_eq!(Octant::from_digit('4').unwrap().offset(), DVec3::Z);
        assert_eq!(Octant::from_digit('7').unwrap().offset(), DVec3::ONE);
        assert_eq!(
            Octant::from_digit('6').unwrap().offset(),
            DVec3::new(0.0, 1.0, 1.0)
        );
    }

    #[test]
    fn from_bits_matches_index() {
        for octant in Octant::ALL {
            let [x, y, z] = octant.bits();
            assert_eq!(Octant::from_bits(x == 1, y == 1, z == 1), octant);
        }
    }
}
