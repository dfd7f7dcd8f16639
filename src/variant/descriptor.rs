//! Immutable records describing one texture variant.

use crate::types::Facing;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// A namespaced resource path, e.g. `chisel:marble/raw`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    pub namespace: String,
    pub path: String,
}

impl ResourceLocation {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Parse `namespace:path`; a bare path gets `default_namespace`.
    pub fn parse(s: &str, default_namespace: &str) -> Self {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(default_namespace, s),
        }
    }
}

impl std::fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ResourceLocation::parse(&s, "minecraft"))
    }
}

/// Smelting metadata: `amount` of this variant are produced from `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmeltRecipe {
    pub source: String,
    pub amount: u32,
}

/// A variant as declared, before the packer has placed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantRequest {
    pub name: String,
    /// Carving group; `None` keeps the variant out of the carving index.
    pub group: Option<String>,
    /// Tie-break priority inside the group; lower sorts first.
    pub order: i32,
    /// Whether the face fully occludes its neighbors.
    pub opaque: bool,
    pub texture_location: ResourceLocation,
    pub face_overrides: BTreeMap<Facing, ResourceLocation>,
    pub smelt: Option<SmeltRecipe>,
    /// Handle of a crafting recipe registered by the host.
    pub recipe: Option<String>,
}

impl VariantRequest {
    /// A request with default metadata: no group, order 0, opaque.
    pub fn new(name: impl Into<String>, texture_location: ResourceLocation) -> Self {
        Self {
            name: name.into(),
            group: None,
            order: 0,
            opaque: true,
            texture_location,
            face_overrides: BTreeMap::new(),
            smelt: None,
            recipe: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub(crate) fn realize(self, ordered_index: usize) -> VariantDescriptor {
        VariantDescriptor {
            name: self.name,
            group: self.group.filter(|g| !g.is_empty()),
            ordered_index,
            order: self.order,
            opaque: self.opaque,
            texture_location: self.texture_location,
            face_overrides: self.face_overrides,
            smelt: self.smelt,
            recipe: self.recipe,
        }
    }
}

/// A packed variant. Immutable once the packer has created it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantDescriptor {
    pub name: String,
    pub group: Option<String>,
    /// Position in the packing run's input, starting at 0.
    pub ordered_index: usize,
    pub order: i32,
    pub opaque: bool,
    pub texture_location: ResourceLocation,
    pub face_overrides: BTreeMap<Facing, ResourceLocation>,
    pub smelt: Option<SmeltRecipe>,
    pub recipe: Option<String>,
}

impl VariantDescriptor {
    /// The texture drawn on a face: its override if any, else the default.
    pub fn texture_for(&self, facing: Facing) -> &ResourceLocation {
        self.face_overrides
            .get(&facing)
            .unwrap_or(&self.texture_location)
    }
}
