//! Atlas geometry.
//!
//! Sprites inside a stitched atlas are described by UV regions; a submap
//! divides one sprite into a grid of tiles that connection methods address.

mod region;
mod submap;
mod texture;

pub use region::{AtlasRegion, TileTransform};
pub use submap::{AtlasSubmap, TileCoord};
pub use texture::{load_texture_from_bytes, TextureData};
