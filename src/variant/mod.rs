//! Texture variants and their packing into metadata slot sets.
//!
//! A block may hold only a fixed number of metadata states. Variations are
//! declared in order on a [`BlockBuilder`]; the [`VariantPacker`] chunks them
//! into as many [`SlotSet`]s as needed, each becoming one physical block.

mod builder;
mod descriptor;
mod packer;

pub use builder::{registry_name, BlockBuilder, BlockDefinition, PackedBlock, VariationBuilder};
pub use descriptor::{ResourceLocation, SmeltRecipe, VariantDescriptor, VariantRequest};
pub use packer::{pack, GroupEntry, Packing, SlotSet, VariantPacker, DEFAULT_CAPACITY};
