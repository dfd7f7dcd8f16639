//! Face-relative directions and the adjacency bitmask built from them.

use crate::types::Facing;
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// One of the eight neighbors around a face, as seen looking at the face.
///
/// Declared clockwise from the top so that each direction's bit is
/// `1 << index`: cardinals land on even bits, corners on odd bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dir {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Dir {
    /// All eight directions, clockwise from the top.
    pub const ALL: [Dir; 8] = [
        Dir::Top,
        Dir::TopRight,
        Dir::Right,
        Dir::BottomRight,
        Dir::Bottom,
        Dir::BottomLeft,
        Dir::Left,
        Dir::TopLeft,
    ];

    pub const CARDINALS: [Dir; 4] = [Dir::Top, Dir::Right, Dir::Bottom, Dir::Left];

    pub const CORNERS: [Dir; 4] = [Dir::TopRight, Dir::BottomRight, Dir::BottomLeft, Dir::TopLeft];

    /// The bit this direction occupies in an [`AdjacencyMask`].
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    pub const fn is_corner(self) -> bool {
        (self as u8) & 1 == 1
    }

    /// Steps along the face's (up, right) tangents.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Dir::Top => (1, 0),
            Dir::TopRight => (1, 1),
            Dir::Right => (0, 1),
            Dir::BottomRight => (-1, 1),
            Dir::Bottom => (-1, 0),
            Dir::BottomLeft => (-1, -1),
            Dir::Left => (0, -1),
            Dir::TopLeft => (1, -1),
        }
    }

    /// World offset of this neighbor for a face with the given facing.
    pub fn offset(self, facing: Facing) -> IVec3 {
        let (up, right) = self.step();
        facing.up() * up + facing.right() * right
    }

    /// The two cardinals flanking a corner; `None` for cardinals.
    pub const fn corner_edges(self) -> Option<(Dir, Dir)> {
        match self {
            Dir::TopRight => Some((Dir::Top, Dir::Right)),
            Dir::BottomRight => Some((Dir::Bottom, Dir::Right)),
            Dir::BottomLeft => Some((Dir::Bottom, Dir::Left)),
            Dir::TopLeft => Some((Dir::Top, Dir::Left)),
            _ => None,
        }
    }
}

/// Which of the eight neighbors of a face are connected. One bit per [`Dir`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdjacencyMask(u8);

impl AdjacencyMask {
    pub const EMPTY: AdjacencyMask = AdjacencyMask(0);
    pub const ALL: AdjacencyMask = AdjacencyMask(0xFF);
    const CARDINAL_BITS: u8 = 0x55;

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a mask with exactly the given directions set.
    pub fn of(dirs: &[Dir]) -> Self {
        dirs.iter().fold(Self::EMPTY, |mask, &dir| mask.with(dir))
    }

    pub fn set(&mut self, dir: Dir) {
        self.0 |= dir.bit();
    }

    pub const fn with(self, dir: Dir) -> Self {
        Self(self.0 | dir.bit())
    }

    pub const fn is_connected(self, dir: Dir) -> bool {
        self.0 & dir.bit() != 0
    }

    /// True if every given direction is connected.
    pub fn connected_and(self, dirs: &[Dir]) -> bool {
        dirs.iter().all(|&dir| self.is_connected(dir))
    }

    /// True if any given direction is connected.
    pub fn connected_or(self, dirs: &[Dir]) -> bool {
        dirs.iter().any(|&dir| self.is_connected(dir))
    }

    /// The mask with all corner bits cleared.
    pub const fn cardinals(self) -> Self {
        Self(self.0 & Self::CARDINAL_BITS)
    }

    /// Apply the corner-implies-edge rule: a corner bit survives only when
    /// both cardinals flanking it are set.
    ///
    /// This collapses the 256 raw masks to the 47 outcomes of the blob method.
    pub const fn fold(self) -> Self {
        let b = self.0;
        let mut out = b & Self::CARDINAL_BITS;
        // each corner sits one bit clockwise of its first cardinal
        let mut corner = 1;
        while corner < 8 {
            let before = 1u8 << (corner - 1);
            let after = 1u8 << ((corner + 1) % 8);
            let bit = 1u8 << corner;
            if b & bit != 0 && b & before != 0 && b & after != 0 {
                out |= bit;
            }
            corner += 2;
        }
        Self(out)
    }

    /// True if folding would not change this mask.
    pub const fn is_folded(self) -> bool {
        self.fold().0 == self.0
    }

    /// Iterate over the connected directions, clockwise from the top.
    pub fn iter(self) -> impl Iterator<Item = Dir> {
        Dir::ALL.into_iter().filter(move |&dir| self.is_connected(dir))
    }
}

impl std::fmt::Display for AdjacencyMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
