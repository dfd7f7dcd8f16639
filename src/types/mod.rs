//! Shared types used throughout the library.

mod facing;

pub use facing::Facing;

use glam::IVec3;
use std::collections::HashMap;

/// A block position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPosition {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Get the position displaced by an integer offset.
    ///
    /// Returns `None` if the result leaves the `i32` coordinate range.
    pub fn offset(&self, delta: IVec3) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(delta.x)?,
            y: self.y.checked_add(delta.y)?,
            z: self.z.checked_add(delta.z)?,
        })
    }

    /// Get the neighboring position across the given face.
    pub fn neighbor(&self, facing: Facing) -> Option<Self> {
        self.offset(facing.normal())
    }
}

/// A block occupying a voxel: its registry name plus state properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBlock {
    /// Block name, e.g., "chisel:antiblock"
    pub name: String,
    /// Block properties, e.g., {"variation": "3"}
    pub properties: HashMap<String, String>,
}

impl InputBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Get a property value.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|s| s.as_str())
    }
}

/// Read access to the voxel world around a face.
///
/// Implementations must be safe for concurrent reads if the resolver is
/// called from several render workers at once.
pub trait WorldQuery {
    /// Get the block at a position, or `None` if it is not loaded.
    fn occupant_at(&self, pos: BlockPosition) -> Option<&InputBlock>;
}

impl<W: WorldQuery + ?Sized> WorldQuery for &W {
    fn occupant_at(&self, pos: BlockPosition) -> Option<&InputBlock> {
        (**self).occupant_at(pos)
    }
}

/// A world backed by a hash map; positions not in the map are unavailable.
#[derive(Debug, Default, Clone)]
pub struct SparseWorld {
    blocks: HashMap<BlockPosition, InputBlock>,
}

impl SparseWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a block, replacing whatever was there.
    pub fn set(&mut self, pos: BlockPosition, block: InputBlock) {
        self.blocks.insert(pos, block);
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, pos: BlockPosition, block: InputBlock) -> Self {
        self.set(pos, block);
        self
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl WorldQuery for SparseWorld {
    fn occupant_at(&self, pos: BlockPosition) -> Option<&InputBlock> {
        self.blocks.get(&pos)
    }
}
