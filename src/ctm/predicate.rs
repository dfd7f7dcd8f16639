//! Rules deciding whether two blocks belong to the same connected surface.

use crate::types::InputBlock;

/// Decides whether a neighbor connects to the block whose face is drawn.
///
/// Any `Fn(&InputBlock, &InputBlock) -> bool` closure is a predicate.
pub trait ConnectionPredicate {
    fn connects(&self, origin: &InputBlock, neighbor: &InputBlock) -> bool;
}

impl<F> ConnectionPredicate for F
where
    F: Fn(&InputBlock, &InputBlock) -> bool,
{
    fn connects(&self, origin: &InputBlock, neighbor: &InputBlock) -> bool {
        self(origin, neighbor)
    }
}

/// Connects blocks with the same registry name, ignoring state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameBlock;

impl ConnectionPredicate for SameBlock {
    fn connects(&self, origin: &InputBlock, neighbor: &InputBlock) -> bool {
        origin.name == neighbor.name
    }
}

/// Connects blocks with the same name and exactly the same properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameState;

impl ConnectionPredicate for SameState {
    fn connects(&self, origin: &InputBlock, neighbor: &InputBlock) -> bool {
        origin == neighbor
    }
}

/// Connects blocks with the same name whose numeric `key` property differs
/// by at most `tolerance`.
///
/// Blocks missing the property, or holding a non-numeric value, never connect.
#[derive(Debug, Clone)]
pub struct SamePropertyWithin {
    pub key: String,
    pub tolerance: u32,
}

impl SamePropertyWithin {
    pub fn new(key: impl Into<String>, tolerance: u32) -> Self {
        Self {
            key: key.into(),
            tolerance,
        }
    }

    /// Exact match on the property.
    pub fn exact(key: impl Into<String>) -> Self {
        Self::new(key, 0)
    }

    fn value(&self, block: &InputBlock) -> Option<i64> {
        block.property(&self.key)?.parse().ok()
    }
}

impl ConnectionPredicate for SamePropertyWithin {
    fn connects(&self, origin: &InputBlock, neighbor: &InputBlock) -> bool {
        if origin.name != neighbor.name {
            return false;
        }
        match (self.value(origin), self.value(neighbor)) {
            (Some(a), Some(b)) => a.abs_diff(b) <= self.tolerance as u64,
            _ => false,
        }
    }
}
