//! The content registry: packed blocks, their connected textures and the
//! carving index, built once at load time and read-only afterwards.

use crate::carving::{CarvingIndex, CarvingValue};
use crate::ctm::{ConnectionPredicate, CtmTexture, ResolvedTile};
use crate::error::{CtmError, Result};
use crate::types::{BlockPosition, Facing, InputBlock, WorldQuery};
use crate::variant::{BlockBuilder, BlockDefinition, PackedBlock, ResourceLocation, VariantDescriptor, VariantPacker};
use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Block property holding the metadata value of a placed block.
pub const META_PROPERTY: &str = "variation";

/// Stable identity of a registered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

/// A block definition as registered.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredBlock {
    pub id: BlockId,
    pub domain: String,
    pub definition: BlockDefinition,
}

impl RegisteredBlock {
    /// Namespaced registry name, e.g. `chisel:antiblock1`.
    pub fn full_name(&self) -> String {
        format!("{}:{}", self.domain, self.definition.registry_name)
    }

    /// The block state a world would hold for the given metadata value.
    pub fn state(&self, meta: usize) -> InputBlock {
        InputBlock::new(self.full_name()).with_property(META_PROPERTY, meta.to_string())
    }
}

/// Owns everything produced while loading content.
#[derive(Debug, Default)]
pub struct ContentRegistry {
    packer: VariantPacker,
    blocks: Vec<RegisteredBlock>,
    by_name: HashMap<String, BlockId>,
    textures: HashMap<ResourceLocation, CtmTexture>,
    carving: CarvingIndex,
}

impl ContentRegistry {
    pub fn new(packer: VariantPacker) -> Self {
        Self {
            packer,
            ..Self::default()
        }
    }

    pub fn packer(&self) -> &VariantPacker {
        &self.packer
    }

    /// Pack a builder's variations and register the resulting blocks.
    pub fn register_builder(&mut self, builder: &BlockBuilder) -> Result<Vec<BlockId>> {
        let packed = builder.build(&self.packer)?;
        self.register_packed(packed)
    }

    /// Register already packed blocks and index their grouped variants.
    ///
    /// Nothing is registered if any of the registry names is taken or a
    /// group entry points at a slot the blocks do not have.
    pub fn register_packed(&mut self, packed: PackedBlock) -> Result<Vec<BlockId>> {
        for entry in &packed.group_entries {
            let in_range = packed
                .blocks
                .get(entry.slot_set)
                .is_some_and(|block| entry.slot < block.slot_set.len());
            if !in_range {
                return Err(CtmError::InvalidVariant(format!(
                    "block {} has a {} group entry at slot {} of slot set {}, which does not exist",
                    packed.name, entry.group, entry.slot, entry.slot_set
                )));
            }
        }
        for block in &packed.blocks {
            let name = format!("{}:{}", packed.domain, block.registry_name);
            if self.by_name.contains_key(&name) {
                return Err(CtmError::DuplicateBlock(name));
            }
        }

        self.carving.add_packed(&packed);

        let mut ids = Vec::with_capacity(packed.blocks.len());
        for definition in packed.blocks {
            let id = BlockId(self.blocks.len() as u32);
            let block = RegisteredBlock {
                id,
                domain: packed.domain.clone(),
                definition,
            };
            debug!(
                "Registered {} with {} variation(s)",
                block.full_name(),
                block.definition.slot_set.len()
            );
            self.by_name.insert(block.full_name(), id);
            self.blocks.push(block);
            ids.push(id);
        }
        Ok(ids)
    }

    /// Add a value the packer did not produce (e.g. a vanilla block) to a group.
    pub fn add_carving(&mut self, group: &str, value: CarvingValue, order: i32) -> bool {
        self.carving.add_variation(group, value, order)
    }

    /// Attach a connected texture to a texture location.
    ///
    /// A location can carry only one connected texture.
    pub fn register_texture(&mut self, location: ResourceLocation, texture: CtmTexture) -> Result<()> {
        match self.textures.entry(location) {
            Entry::Occupied(existing) => Err(CtmError::DuplicateTexture(existing.key().to_string())),
            Entry::Vacant(slot) => {
                slot.insert(texture);
                Ok(())
            }
        }
    }

    pub fn block(&self, id: BlockId) -> Option<&RegisteredBlock> {
        self.blocks.get(id.0 as usize)
    }

    /// Look up a block by namespaced registry name.
    pub fn lookup(&self, name: &str) -> Option<&RegisteredBlock> {
        self.by_name.get(name).and_then(|&id| self.block(id))
    }

    pub fn blocks(&self) -> impl Iterator<Item = &RegisteredBlock> {
        self.blocks.iter()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// The variant a block shows at a metadata value.
    pub fn variant(&self, name: &str, meta: usize) -> Option<&Arc<VariantDescriptor>> {
        self.lookup(name)?.definition.variant(meta)
    }

    /// The variant shown by a placed block, read from its metadata property.
    pub fn variant_of(&self, block: &InputBlock) -> Option<&Arc<VariantDescriptor>> {
        let meta = block.property(META_PROPERTY).unwrap_or("0").parse().ok()?;
        self.variant(&block.name, meta)
    }

    pub fn texture(&self, location: &ResourceLocation) -> Option<&CtmTexture> {
        self.textures.get(location)
    }

    pub fn carving(&self) -> &CarvingIndex {
        &self.carving
    }

    /// Pick the tile for one face of a placed block.
    ///
    /// Returns `None` if the position is unloaded, the block is not ours, or
    /// the face's texture has no connected texture attached.
    pub fn resolve_face<W, P>(&self, world: &W, pos: BlockPosition, facing: Facing, predicate: &P) -> Option<ResolvedTile>
    where
        W: WorldQuery + ?Sized,
        P: ConnectionPredicate + ?Sized,
    {
        let block = world.occupant_at(pos)?;
        let variant = self.variant_of(block)?;
        let texture = self.texture(variant.texture_for(facing))?;
        Some(texture.resolve(world, pos, facing, predicate))
    }
}
