//! Connected-texture resolution.
//!
//! At render time each visible face samples its eight in-plane neighbors
//! ([`AdjacencyMapper`]), producing an [`AdjacencyMask`]. A
//! [`ConnectionMethod`] then maps the mask to a tile of an
//! [`AtlasSubmap`](crate::atlas::AtlasSubmap). Everything here is pure and
//! reentrant.

mod adjacency;
pub mod blob;
mod mask;
pub mod method;
mod predicate;
mod texture;

pub use adjacency::AdjacencyMapper;
pub use mask::{AdjacencyMask, Dir};
pub use method::{resolve, ConnectionMethod};
pub use predicate::{ConnectionPredicate, SameBlock, SamePropertyWithin, SameState};
pub use texture::{CtmTexture, ResolvedTile};
