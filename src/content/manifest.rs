//! JSON content declarations: features, their blocks and variations.

use crate::atlas::TileTransform;
use crate::ctm::ConnectionMethod;
use crate::error::Result;
use crate::types::Facing;
use crate::variant::SmeltRecipe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

fn default_true() -> bool {
    true
}

/// Everything one content pack declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentManifest {
    /// Namespace for blocks and bare texture paths.
    pub domain: String,
    #[serde(default)]
    pub features: Vec<FeatureManifest>,
}

impl ContentManifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Feature by name. Names are unique in a manifest that loads.
    pub fn feature(&self, name: &str) -> Option<&FeatureManifest> {
        self.features.iter().find(|f| f.name == name)
    }
}

/// A unit of content that can be switched off as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureManifest {
    pub name: String,
    /// Only load when this mod is present.
    #[serde(default)]
    pub required_mod: Option<String>,
    /// Only load when this feature is enabled.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub blocks: Vec<BlockManifest>,
    #[serde(default)]
    pub carving: Vec<CarvingManifest>,
    #[serde(default)]
    pub textures: Vec<TextureManifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockManifest {
    pub name: String,
    /// Texture folder; defaults to the block name.
    #[serde(default)]
    pub parent_folder: Option<String>,
    /// Carving group; defaults to the block name.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default = "default_true")]
    pub opaque: bool,
    pub variations: Vec<VariationManifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationManifest {
    pub name: String,
    /// Overrides the block's group; an empty string leaves the variation ungrouped.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub opaque: Option<bool>,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub overrides: BTreeMap<Facing, String>,
    #[serde(default)]
    pub smelt: Option<SmeltRecipe>,
    #[serde(default)]
    pub recipe: Option<String>,
}

/// A value outside this content pack that joins a carving group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarvingManifest {
    pub group: String,
    pub value: String,
    #[serde(default)]
    pub order: i32,
}

/// Attaches a connected texture to a texture location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Texture location as used by variations, e.g. `futura/controller`.
    pub location: String,
    /// Sprite holding the tiles; defaults to `<location>-ctm`.
    #[serde(default)]
    pub sprite: Option<String>,
    pub method: ConnectionMethod,
    /// Grid size; defaults to what the method needs.
    #[serde(default)]
    pub rows: Option<u32>,
    #[serde(default)]
    pub cols: Option<u32>,
    #[serde(default)]
    pub transform: TileTransform,
    /// Defaults to off for simple textures and on otherwise.
    #[serde(default)]
    pub obscured_face_check: Option<bool>,
}
