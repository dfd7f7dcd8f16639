//! The carving index: which values belong to which connectivity group.
//!
//! Selection tools use it to offer every member of a group, sorted by each
//! member's order. The index is a projection of packed data plus any
//! external values registered explicitly; it holds no other state.

use crate::variant::PackedBlock;
use log::warn;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Something that can be selected from a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarvingValue {
    /// A metadata state of a packed block, e.g. `chisel:antiblock1` meta 3.
    Variant { block: String, meta: usize },
    /// A block state owned by someone else, e.g. `minecraft:stone`.
    External(String),
}

impl std::fmt::Display for CarvingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarvingValue::Variant { block, meta } => write!(f, "{}#{}", block, meta),
            CarvingValue::External(state) => write!(f, "{}", state),
        }
    }
}

/// One member of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarvingEntry {
    pub order: i32,
    pub value: CarvingValue,
}

/// Group name to members, each group sorted by order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CarvingIndex {
    groups: BTreeMap<String, Vec<CarvingEntry>>,
    #[serde(skip)]
    owners: HashMap<CarvingValue, String>,
}

impl CarvingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to a group.
    ///
    /// Members with equal order keep insertion order. A value can belong to
    /// only one group; adding it again is ignored and returns `false`.
    pub fn add_variation(&mut self, group: &str, value: CarvingValue, order: i32) -> bool {
        if let Some(existing) = self.owners.get(&value) {
            warn!(
                "Ignoring {} for group {}: already a member of {}",
                value, group, existing
            );
            return false;
        }
        self.owners.insert(value.clone(), group.to_string());

        let members = self.groups.entry(group.to_string()).or_default();
        let at = members.partition_point(|e| e.order <= order);
        members.insert(at, CarvingEntry { order, value });
        true
    }

    /// Add every grouped variant of a packed block.
    ///
    /// Entries pointing at a slot set the block does not have are skipped.
    pub fn add_packed(&mut self, packed: &PackedBlock) {
        for entry in &packed.group_entries {
            let Some(block) = packed.blocks.get(entry.slot_set) else {
                warn!(
                    "Ignoring {} entry for {}: no slot set {}",
                    entry.group, packed.name, entry.slot_set
                );
                continue;
            };
            let value = CarvingValue::Variant {
                block: format!("{}:{}", packed.domain, block.registry_name),
                meta: entry.slot,
            };
            self.add_variation(&entry.group, value, entry.order);
        }
    }

    /// Members of a group in order; empty for unknown groups.
    pub fn group(&self, name: &str) -> &[CarvingEntry] {
        self.groups.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The group a value belongs to.
    pub fn group_of(&self, value: &CarvingValue) -> Option<&str> {
        self.owners.get(value).map(String::as_str)
    }

    /// Group names in sorted order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of members across all groups.
    pub fn member_count(&self) -> usize {
        self.owners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{BlockBuilder, GroupEntry, VariantPacker};

    fn external(s: &str) -> CarvingValue {
        CarvingValue::External(s.to_string())
    }

    #[test]
    fn test_group_is_sorted_by_order() {
        let mut index = CarvingIndex::new();
        index.add_variation("andesite", external("chisel:andesite#0"), 0);
        index.add_variation("andesite", external("minecraft:andesite"), -2);
        index.add_variation("andesite", external("minecraft:polished_andesite"), -1);
        index.add_variation("andesite", external("chisel:andesite#1"), 0);

        let members: Vec<_> = index.group("andesite").iter().map(|e| e.value.to_string()).collect();
        assert_eq!(
            members,
            vec![
                "minecraft:andesite",
                "minecraft:polished_andesite",
                "chisel:andesite#0",
                "chisel:andesite#1",
            ]
        );
    }

    #[test]
    fn test_value_belongs_to_one_group() {
        let mut index = CarvingIndex::new();
        assert!(index.add_variation("glass", external("minecraft:glass"), -1));
        assert!(!index.add_variation("ice", external("minecraft:glass"), -1));
        assert_eq!(index.group_of(&external("minecraft:glass")), Some("glass"));
        assert!(index.group("ice").is_empty());
        assert_eq!(index.member_count(), 1);
    }

    #[test]
    fn test_packed_block_projection() {
        let mut block = BlockBuilder::new("chisel", "marble").group("marble");
        block.variation("raw").order(-100).next("brick").next("pillar").no_group();
        let packed = block.build(&VariantPacker::new(2).unwrap()).unwrap();

        let mut index = CarvingIndex::new();
        index.add_packed(&packed);

        let members = index.group("marble");
        assert_eq!(members.len(), 2);
        assert_eq!(
            members[0],
            CarvingEntry {
                order: -100,
                value: CarvingValue::Variant { block: "chisel:marble".into(), meta: 0 },
            }
        );
        assert_eq!(
            members[1].value,
            CarvingValue::Variant { block: "chisel:marble".into(), meta: 1 }
        );

        let pillar = CarvingValue::Variant { block: "chisel:marble1".into(), meta: 0 };
        assert_eq!(index.group_of(&pillar), None);
    }

    #[test]
    fn test_every_grouped_variant_appears_once() {
        let mut block = BlockBuilder::new("chisel", "antiblock");
        let _ = (1..40).fold(block.variation("v0"), |b, i| b.next(format!("v{i}")).order(i % 3));
        let packed = block.build(&VariantPacker::default()).unwrap();

        let mut index = CarvingIndex::new();
        index.add_packed(&packed);
        assert_eq!(index.member_count(), 40);
        assert_eq!(index.group("antiblock").len(), 40);

        for entry in &packed.group_entries {
            let block = &packed.blocks[entry.slot_set];
            let value = CarvingValue::Variant {
                block: format!("chisel:{}", block.registry_name),
                meta: entry.slot,
            };
            let found: Vec<_> = index.group("antiblock").iter().filter(|e| e.value == value).collect();
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].order, entry.order);
        }
    }

    #[test]
    fn test_dangling_group_entry_is_skipped() {
        let mut block = BlockBuilder::new("chisel", "marble");
        block.variation("raw");
        let mut packed = block.build(&VariantPacker::default()).unwrap();
        packed.group_entries.push(GroupEntry { group: "marble".into(), slot_set: 3, slot: 0, order: 0 });

        let mut index = CarvingIndex::new();
        index.add_packed(&packed);
        assert_eq!(index.member_count(), 1);
    }

    #[test]
    fn test_groups_listing() {
        let mut index = CarvingIndex::new();
        index.add_variation("marble", external("a"), 0);
        index.add_variation("basalt", external("b"), 0);
        assert_eq!(index.groups().collect::<Vec<_>>(), vec!["basalt", "marble"]);
        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
    }
}
