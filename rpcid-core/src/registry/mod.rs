//! Capability registry
//!
//! Maps well-known capability names to fixed bit positions in the OS
//! capability bitmap. A registry is immutable once built and only exposes
//! lookups and ordered iteration.

pub mod table;

use crate::format::constants::bitmap::OS_SYSCAP_BITS;
use crate::{Result, RpcidError};
use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashMap;

pub use table::BUILTIN_CAPABILITIES;

/// One registry capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Full capability name, `SystemCapability.` prefix included
    pub name: &'static str,
    /// Bit position in the OS capability bitmap
    pub bit_index: u16,
}

impl RegistryEntry {
    /// Create a new entry
    pub const fn new(name: &'static str, bit_index: u16) -> Self {
        Self { name, bit_index }
    }
}

/// Immutable name <-> bit index mapping
#[derive(Debug, Clone)]
pub struct CapabilityRegistry {
    entries: &'static [RegistryEntry],
    by_name: HashMap<&'static str, u16>,
    by_index: Vec<Option<&'static str>>,
}

impl CapabilityRegistry {
    /// Build a registry, rejecting duplicate names, duplicate bits and bits
    /// outside the bitmap
    pub fn from_entries(entries: &'static [RegistryEntry]) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_index = vec![None; OS_SYSCAP_BITS];

        for entry in entries {
            let slot = by_index
                .get_mut(entry.bit_index as usize)
                .ok_or(RpcidError::BitIndexOutOfRange {
                    index: entry.bit_index,
                })?;
            if slot.is_some() {
                return Err(RpcidError::DuplicateRegistryIndex {
                    index: entry.bit_index,
                });
            }
            if by_name.insert(entry.name, entry.bit_index).is_some() {
                return Err(RpcidError::DuplicateRegistryName {
                    index: entry.bit_index,
                });
            }
            *slot = Some(entry.name);
        }

        Ok(Self {
            entries,
            by_name,
            by_index,
        })
    }

    /// Build the compiled-in registry
    pub fn builtin() -> Result<Self> {
        Self::from_entries(BUILTIN_CAPABILITIES)
    }

    /// Bit position of a full capability name
    pub fn bit_index(&self, name: &str) -> Option<u16> {
        self.by_name.get(name).copied()
    }

    /// Capability name assigned to a bit position
    pub fn name_of(&self, bit_index: u16) -> Option<&'static str> {
        self.by_index.get(bit_index as usize).copied().flatten()
    }

    /// Entries in registry order
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Number of registry capabilities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
