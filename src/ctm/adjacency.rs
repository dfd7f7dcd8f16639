//! Builds the adjacency mask for one face of one block.

use super::mask::{AdjacencyMask, Dir};
use super::predicate::ConnectionPredicate;
use crate::types::{BlockPosition, Facing, InputBlock, WorldQuery};

/// Samples the eight neighbors of a face and folds the predicate results
/// into an [`AdjacencyMask`].
///
/// Unloaded positions, and positions past the edge of the coordinate
/// range, read as "not connected". The mapper holds no state
/// between calls and can be shared across render workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyMapper {
    /// When set, a neighbor whose own face is covered by a same-surface
    /// block (the block at `neighbor + normal`) does not connect.
    pub obscured_face_check: bool,
}

impl Default for AdjacencyMapper {
    fn default() -> Self {
        Self {
            obscured_face_check: true,
        }
    }
}

impl AdjacencyMapper {
    pub fn new(obscured_face_check: bool) -> Self {
        Self { obscured_face_check }
    }

    /// Mapper with the obscured-face check disabled, as used by simple
    /// 4-tile textures.
    pub fn without_obscured_check() -> Self {
        Self::new(false)
    }

    /// Compute the adjacency mask of `facing` on the block at `origin`.
    ///
    /// If the origin itself is unavailable nothing can connect and the mask
    /// is empty.
    pub fn map<W, P>(&self, world: &W, origin: BlockPosition, facing: Facing, predicate: &P) -> AdjacencyMask
    where
        W: WorldQuery + ?Sized,
        P: ConnectionPredicate + ?Sized,
    {
        let Some(origin_block) = world.occupant_at(origin) else {
            return AdjacencyMask::EMPTY;
        };

        let mut mask = AdjacencyMask::EMPTY;
        for dir in Dir::ALL {
            let connected = origin
                .offset(dir.offset(facing))
                .is_some_and(|pos| self.is_connected(world, origin_block, pos, facing, predicate));
            if connected {
                mask.set(dir);
            }
        }
        mask
    }

    fn is_connected<W, P>(
        &self,
        world: &W,
        origin_block: &InputBlock,
        pos: BlockPosition,
        facing: Facing,
        predicate: &P,
    ) -> bool
    where
        W: WorldQuery + ?Sized,
        P: ConnectionPredicate + ?Sized,
    {
        let Some(neighbor) = world.occupant_at(pos) else {
            return false;
        };
        if !predicate.connects(origin_block, neighbor) {
            return false;
        }
        if self.obscured_face_check {
            if let Some(front) = pos.neighbor(facing).and_then(|front| world.occupant_at(front)) {
                return !predicate.connects(origin_block, front);
            }
        }
        true
    }
}
