//! Structural validation of raw RPCID buffers
//!
//! [`validate_record`] is the only way to obtain a [`ValidatedRecord`], and
//! the decoder and projector only accept a `ValidatedRecord`, so no slot is
//! ever indexed before the capability region has been bounds-checked.

use crate::format::constants::*;
use crate::format::RpcidHeader;
use crate::{Result, RpcidError};

/// A buffer that passed [`validate_record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRecord<'a> {
    bytes: &'a [u8],
    header: RpcidHeader,
}

impl<'a> ValidatedRecord<'a> {
    /// Parsed header
    pub fn header(&self) -> &RpcidHeader {
        &self.header
    }

    /// The whole input buffer, trailing bytes included
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of whole slots in the capability region
    pub fn slot_count(&self) -> usize {
        self.header.slot_count()
    }

    /// Raw bytes of slot `index`
    pub fn slot(&self, index: usize) -> Option<&'a [u8]> {
        if index >= self.slot_count() {
            return None;
        }
        let start = CAPABILITY_REGION_OFFSET + index * SLOT_SIZE;
        self.bytes.get(start..start + SLOT_SIZE)
    }

    /// Iterate over raw slots in record order
    pub fn slots(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        let region_end = CAPABILITY_REGION_OFFSET + self.slot_count() * SLOT_SIZE;
        self.bytes[CAPABILITY_REGION_OFFSET..region_end].chunks_exact(SLOT_SIZE)
    }

    /// Bytes after the declared capability region
    pub fn trailing_len(&self) -> usize {
        self.bytes.len() - self.header.record_len()
    }
}

/// Check that `bytes` is a well-formed RPCID record
///
/// Checks run in a fixed order: minimum length, api version type,
/// capability set type, then that the declared capability region fits in
/// the buffer. Oversized buffers are accepted.
pub fn validate_record(bytes: &[u8]) -> Result<ValidatedRecord<'_>> {
    if bytes.len() < MIN_BUFFER_LEN {
        return Err(RpcidError::BufferTooShort { len: bytes.len() });
    }

    let header = RpcidHeader::from_bytes(bytes)?;
    if header.api_version_type != API_VERSION_TYPE_RPCID {
        return Err(RpcidError::InvalidApiVersionType);
    }
    if header.capability_set_type != REQUEST_CAPABILITY_SET {
        return Err(RpcidError::InvalidCapabilitySetType {
            found: header.capability_set_type,
        });
    }

    let declared = header.record_len();
    if declared > bytes.len() {
        return Err(RpcidError::CapabilitySetOverrun {
            declared,
            available: bytes.len(),
        });
    }

    Ok(ValidatedRecord { bytes, header })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn record(api_word: [u8; 2], set_type: u16, set_len: u16, total: usize) -> alloc::vec::Vec<u8> {
        let mut bytes = vec![0u8; total];
        bytes[0..2].copy_from_slice(&api_word);
        bytes[2..4].copy_from_slice(&set_type.to_be_bytes());
        bytes[4..6].copy_from_slice(&set_len.to_be_bytes());
        bytes
    }

    #[test]
    fn test_minimum_length() {
        assert_eq!(
            validate_record(&[0x80, 0x09, 0x00, 0x02, 0x00, 0x00, 0x00]),
            Err(RpcidError::BufferTooShort { len: 7 })
        );
        assert_eq!(
            validate_record(&[]),
            Err(RpcidError::BufferTooShort { len: 0 })
        );
    }

    #[test]
    fn test_api_version_type() {
        let bytes = record([0x00, 0x09], 2, 0, 8);
        assert_eq!(
            validate_record(&bytes),
            Err(RpcidError::InvalidApiVersionType)
        );
    }

    #[test]
    fn test_capability_set_type() {
        let bytes = record([0x80, 0x09], 1, 0, 8);
        assert_eq!(
            validate_record(&bytes),
            Err(RpcidError::InvalidCapabilitySetType { found: 1 })
        );
    }

    #[test]
    fn test_overrun() {
        let bytes = record([0x80, 0x09], 2, 256, 6 + 255);
        assert_eq!(
            validate_record(&bytes),
            Err(RpcidError::CapabilitySetOverrun {
                declared: 262,
                available: 261
            })
        );

        let bytes = record([0x80, 0x09], 2, 256, 6 + 256);
        assert!(validate_record(&bytes).is_ok());
    }

    #[test]
    fn test_type_checked_before_length() {
        // A PCID-style buffer is rejected on its type bit, not its length
        let bytes = record([0x00, 0x09], 2, 0xFFFF, 8);
        assert_eq!(
            validate_record(&bytes),
            Err(RpcidError::InvalidApiVersionType)
        );
    }

    #[test]
    fn test_oversized_buffer() {
        let bytes = record([0x80, 0x09], 2, 128, 6 + 128 + 10);
        let validated = validate_record(&bytes).unwrap();
        assert_eq!(validated.slot_count(), 1);
        assert_eq!(validated.trailing_len(), 10);
        assert_eq!(validated.slots().count(), 1);
        assert_eq!(validated.slot(0).map(|s| s.len()), Some(SLOT_SIZE));
        assert_eq!(validated.slot(1), None);
    }

    #[test]
    fn test_partial_slot_ignored() {
        let bytes = record([0x80, 0x09], 2, 130, 6 + 130);
        let validated = validate_record(&bytes).unwrap();
        assert_eq!(validated.slot_count(), 1);
        assert_eq!(validated.header().partial_slot_bytes(), 2);
        assert_eq!(validated.slots().count(), 1);
    }
}
