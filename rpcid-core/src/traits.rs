//! Storage abstraction for record bytes

use crate::validation::{validate_record, ValidatedRecord};
use crate::Result;

/// Trait for backends that hold a raw RPCID buffer
///
/// Implemented by whatever owns the input bytes (a mapped file, an
/// in-memory vector) so the transforms never care where bytes came from.
pub trait StorageBackend {
    /// Get a slice of the underlying data
    fn as_slice(&self) -> &[u8];

    /// Get the size of the data in bytes
    fn size(&self) -> usize {
        self.as_slice().len()
    }

    /// Run the structural checks over the stored bytes
    fn validate(&self) -> Result<ValidatedRecord<'_>> {
        validate_record(self.as_slice())
    }
}

impl StorageBackend for [u8] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl StorageBackend for alloc::vec::Vec<u8> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}
