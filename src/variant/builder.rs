//! Declaring the variations of a block and building its slot sets.

use super::descriptor::{ResourceLocation, SmeltRecipe, VariantDescriptor, VariantRequest};
use super::packer::{GroupEntry, SlotSet, VariantPacker};
use crate::error::{CtmError, Result};
use crate::types::Facing;
use std::collections::HashSet;
use std::sync::Arc;

/// One physical block produced by packing: a registry name plus the slot
/// set its metadata values index into.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDefinition {
    /// Registry name without namespace, e.g. `antiblock1`.
    pub registry_name: String,
    /// Translation key shared by every block of the request, e.g. `chisel.antiblock`.
    pub translation_key: String,
    /// Number of variations across all blocks of the request.
    pub total_variations: usize,
    pub slot_set: SlotSet,
}

impl BlockDefinition {
    /// The variant stored at a metadata value.
    pub fn variant(&self, meta: usize) -> Option<&Arc<VariantDescriptor>> {
        self.slot_set.get(meta)
    }
}

/// Every block built from one [`BlockBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct PackedBlock {
    pub domain: String,
    pub name: String,
    pub blocks: Vec<BlockDefinition>,
    pub group_entries: Vec<GroupEntry>,
}

impl PackedBlock {
    pub fn variant_count(&self) -> usize {
        self.blocks.iter().map(|b| b.slot_set.len()).sum()
    }

    /// Find a variant by name: the block holding it and its metadata value.
    pub fn find(&self, variant: &str) -> Option<(&BlockDefinition, usize)> {
        self.blocks
            .iter()
            .find_map(|block| block.slot_set.slot_of(variant).map(|meta| (block, meta)))
    }
}

/// Registry name for the `index`-th block of a request.
pub fn registry_name(block_name: &str, index: usize) -> String {
    if index == 0 {
        block_name.to_string()
    } else {
        format!("{}{}", block_name, index)
    }
}

/// Collects the variations of one logical block in declaration order.
///
/// ```ignore
/// let mut block = BlockBuilder::new("chisel", "blockAluminum").parent_folder("metals/aluminum");
/// block.variation("caution").next("crate").next("thermal");
/// let packed = block.build(&VariantPacker::default())?;
/// ```
#[derive(Debug, Clone)]
pub struct BlockBuilder {
    domain: String,
    name: String,
    parent_folder: String,
    group: Option<String>,
    opaque: bool,
    requests: Vec<VariantRequest>,
}

impl BlockBuilder {
    pub fn new(domain: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            domain: domain.into(),
            parent_folder: name.clone(),
            name,
            group: None,
            opaque: true,
            requests: Vec::new(),
        }
    }

    /// Texture folder for variations declared after this call.
    pub fn parent_folder(mut self, folder: impl Into<String>) -> Self {
        self.parent_folder = folder.into();
        self
    }

    /// Default carving group for variations declared after this call.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Default opacity for variations declared after this call.
    pub fn opaque(mut self, opaque: bool) -> Self {
        self.opaque = opaque;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn requests(&self) -> &[VariantRequest] {
        &self.requests
    }

    /// Append a variation and return a builder to fill in its details.
    pub fn variation(&mut self, name: impl Into<String>) -> VariationBuilder<'_> {
        let name = name.into();
        let path = if self.parent_folder.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", self.parent_folder, name)
        };
        let group = self.group.clone().unwrap_or_else(|| self.name.clone());

        let mut request = VariantRequest::new(name, ResourceLocation::new(self.domain.clone(), path));
        request.group = Some(group);
        request.opaque = self.opaque;
        self.requests.push(request);

        let index = self.requests.len() - 1;
        VariationBuilder { block: self, index }
    }

    /// Pack the declared variations into blocks.
    pub fn build(&self, packer: &VariantPacker) -> Result<PackedBlock> {
        if self.requests.is_empty() {
            return Err(CtmError::EmptyRequest(self.name.clone()));
        }
        let mut seen = HashSet::new();
        for request in &self.requests {
            if request.name.is_empty() {
                return Err(CtmError::InvalidVariant(format!(
                    "block {} has a variation with an empty name",
                    self.name
                )));
            }
            if !seen.insert(request.name.as_str()) {
                return Err(CtmError::DuplicateVariant {
                    block: self.name.clone(),
                    name: request.name.clone(),
                });
            }
        }

        let packing = packer.pack(&self.name, self.requests.iter().cloned())?;
        let total_variations = packing.variant_count();
        let translation_key = format!("{}.{}", self.domain, self.name);
        let blocks = packing
            .slot_sets
            .into_iter()
            .map(|slot_set| BlockDefinition {
                registry_name: registry_name(&self.name, slot_set.index()),
                translation_key: translation_key.clone(),
                total_variations,
                slot_set,
            })
            .collect();

        Ok(PackedBlock {
            domain: self.domain.clone(),
            name: self.name.clone(),
            blocks,
            group_entries: packing.group_entries,
        })
    }
}

/// Fills in the details of the variation most recently appended.
pub struct VariationBuilder<'a> {
    block: &'a mut BlockBuilder,
    index: usize,
}

impl<'a> VariationBuilder<'a> {
    fn request(&mut self) -> &mut VariantRequest {
        &mut self.block.requests[self.index]
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.request().group = Some(group.into());
        self
    }

    /// Keep this variation out of the carving index.
    pub fn no_group(mut self) -> Self {
        self.request().group = None;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.request().order = order;
        self
    }

    pub fn opaque(mut self, opaque: bool) -> Self {
        self.request().opaque = opaque;
        self
    }

    /// Replace the default texture; a bare path lives in the block's domain.
    pub fn texture_location(mut self, path: &str) -> Self {
        let loc = ResourceLocation::parse(path, &self.block.domain);
        self.request().texture_location = loc;
        self
    }

    /// Use a different texture on the given faces.
    pub fn texture_override(mut self, path: &str, faces: &[Facing]) -> Self {
        let loc = ResourceLocation::parse(path, &self.block.domain);
        let request = self.request();
        for &face in faces {
            request.face_overrides.insert(face, loc.clone());
        }
        self
    }

    pub fn smelt_recipe(mut self, source: impl Into<String>, amount: u32) -> Self {
        self.request().smelt = Some(SmeltRecipe {
            source: source.into(),
            amount,
        });
        self
    }

    pub fn recipe(mut self, handle: impl Into<String>) -> Self {
        self.request().recipe = Some(handle.into());
        self
    }

    /// Finish this variation and start the next one.
    pub fn next(self, name: impl Into<String>) -> VariationBuilder<'a> {
        let block = self.block;
        block.variation(name)
    }
}
