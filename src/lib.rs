//! # Connected Textures
//!
//! Connected-texture tile selection and metadata variant packing for voxel blocks.
//!
//! ## Overview
//!
//! A block face looks at its eight in-plane neighbors, builds an
//! [`AdjacencyMask`], and a [`ConnectionMethod`] maps the mask onto a tile of
//! an [`AtlasSubmap`]. Block variations are declared with a [`BlockBuilder`]
//! and packed into fixed-size slot sets, one physical block per set, and
//! grouped variations land in a [`CarvingIndex`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use connected_textures::{AtlasSubmap, CtmTexture, ConnectionMethod, SameBlock, Facing};
//!
//! let submap = AtlasSubmap::new("chisel:marble/ctm", 6, 8)?;
//! let texture = CtmTexture::new(submap, ConnectionMethod::Full)?;
//!
//! // Pick the tile for the top face of the block at `pos`
//! let tile = texture.resolve(&world, pos, Facing::Up, &SameBlock);
//! let uvs = tile.uvs();
//! ```
//!
//! ## Content Packs
//!
//! Whole content packs are described in JSON and loaded in one go:
//!
//! ```ignore
//! use connected_textures::{load_content, ContentConfig, ContentManifest};
//!
//! let manifest = ContentManifest::from_path("content.json")?;
//! let loaded = load_content(&manifest, &ContentConfig::default())?;
//! let marble = loaded.registry.carving().group("marble");
//! ```

pub mod error;
pub mod types;
pub mod atlas;
pub mod ctm;
pub mod variant;
pub mod carving;
pub mod registry;
pub mod content;

// Re-export main types for convenience
pub use error::{CtmError, Result};
pub use types::{BlockPosition, Facing, InputBlock, SparseWorld, WorldQuery};
pub use atlas::{AtlasRegion, AtlasSubmap, TextureData, TileCoord, TileTransform};
pub use ctm::{
    AdjacencyMapper, AdjacencyMask, ConnectionMethod, ConnectionPredicate, CtmTexture, Dir, ResolvedTile, SameBlock,
    SamePropertyWithin, SameState,
};
pub use variant::{BlockBuilder, PackedBlock, ResourceLocation, VariantDescriptor, VariantPacker, VariantRequest};
pub use carving::{CarvingEntry, CarvingIndex, CarvingValue};
pub use registry::{BlockId, ContentRegistry, RegisteredBlock};
pub use content::{load_content, ContentConfig, ContentManifest, LoadedContent};

/// Load a content manifest and config from disk and populate a registry.
pub fn load_content_from_paths<P: AsRef<std::path::Path>, Q: AsRef<std::path::Path>>(
    manifest: P,
    config: Option<Q>,
) -> Result<LoadedContent> {
    let manifest = ContentManifest::from_path(manifest)?;
    let config = match config {
        Some(path) => ContentConfig::from_path(path)?,
        None => ContentConfig::default(),
    };
    load_content(&manifest, &config)
}
