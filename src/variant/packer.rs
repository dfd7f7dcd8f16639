//! Greedy fixed-width packing of variants into metadata slot sets.

use super::descriptor::{VariantDescriptor, VariantRequest};
use crate::error::{CtmError, Result};
use log::debug;
use std::sync::Arc;

/// Metadata states a single block can hold.
pub const DEFAULT_CAPACITY: usize = 16;

/// The variants one physical block carries, indexed by metadata value.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSet {
    index: usize,
    variants: Vec<Arc<VariantDescriptor>>,
}

impl SlotSet {
    /// Position of this set in the packing run.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// The variant stored at a metadata value.
    pub fn get(&self, slot: usize) -> Option<&Arc<VariantDescriptor>> {
        self.variants.get(slot)
    }

    pub fn variants(&self) -> &[Arc<VariantDescriptor>] {
        &self.variants
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<VariantDescriptor>> {
        self.variants.iter()
    }

    /// Metadata value of the variant with the given name.
    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.variants.iter().position(|v| v.name == name)
    }
}

/// A grouped variant's position, as handed to the carving index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    pub group: String,
    pub slot_set: usize,
    pub slot: usize,
    pub order: i32,
}

/// Result of one packing run.
#[derive(Debug, Clone, PartialEq)]
pub struct Packing {
    pub slot_sets: Vec<SlotSet>,
    /// One entry per grouped variant, in input order.
    pub group_entries: Vec<GroupEntry>,
}

impl Packing {
    /// Total number of packed variants.
    pub fn variant_count(&self) -> usize {
        self.slot_sets.iter().map(SlotSet::len).sum()
    }

    /// All descriptors in packing order.
    pub fn descriptors(&self) -> impl Iterator<Item = &Arc<VariantDescriptor>> {
        self.slot_sets.iter().flat_map(SlotSet::iter)
    }
}

/// Splits an ordered variant list into slot sets of at most `capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPacker {
    capacity: usize,
}

impl Default for VariantPacker {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl VariantPacker {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(CtmError::InvalidCapacity(capacity));
        }
        Ok(Self { capacity })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pack `requests` in order. `owner` names the request in errors and logs.
    ///
    /// Produces `ceil(n / capacity)` slot sets; every set but the last is full.
    pub fn pack<I>(&self, owner: &str, requests: I) -> Result<Packing>
    where
        I: IntoIterator<Item = VariantRequest>,
    {
        let mut slot_sets: Vec<SlotSet> = Vec::new();
        let mut group_entries = Vec::new();

        for (ordered_index, request) in requests.into_iter().enumerate() {
            let slot_set = ordered_index / self.capacity;
            let slot = ordered_index % self.capacity;
            if slot == 0 {
                slot_sets.push(SlotSet {
                    index: slot_set,
                    variants: Vec::with_capacity(self.capacity),
                });
            }

            let descriptor = request.realize(ordered_index);
            if let Some(group) = &descriptor.group {
                group_entries.push(GroupEntry {
                    group: group.clone(),
                    slot_set,
                    slot,
                    order: descriptor.order,
                });
            }
            slot_sets[slot_set].variants.push(Arc::new(descriptor));
        }

        if slot_sets.is_empty() {
            return Err(CtmError::EmptyRequest(owner.to_string()));
        }

        let packing = Packing {
            slot_sets,
            group_entries,
        };
        debug!(
            "Packed {} variations of {} into {} slot set(s) of {}",
            packing.variant_count(),
            owner,
            packing.slot_sets.len(),
            self.capacity
        );
        Ok(packing)
    }
}

/// Pack with a one-off packer.
pub fn pack<I>(owner: &str, requests: I, capacity: usize) -> Result<Packing>
where
    I: IntoIterator<Item = VariantRequest>,
{
    VariantPacker::new(capacity)?.pack(owner, requests)
}
