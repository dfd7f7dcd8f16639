//! Declarative content: JSON manifests of features, blocks and textures,
//! and the loader that turns them into a [`ContentRegistry`](crate::registry::ContentRegistry).

mod config;
mod loader;
mod manifest;

pub use config::ContentConfig;
pub use loader::{feature_statuses, load_content, FeatureStatus, LoadedContent};
pub use manifest::{BlockManifest, CarvingManifest, ContentManifest, FeatureManifest, TextureManifest, VariationManifest};
