//! RPCID record header
//!
//! The header is three big-endian 16-bit words:
//!
//! | offset | field                                              |
//! |--------|----------------------------------------------------|
//! | 0      | bit 15: `apiVersionType`, bits 0..15: `apiVersion` |
//! | 2      | `capabilitySetType`                                |
//! | 4      | `capabilitySetByteLength`                          |
//!
//! Capability slots start at offset 6.

use super::byte_order::read_u16_be;
use super::constants::*;
use crate::{Result, RpcidError};

/// Decoded RPCID header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpcidHeader {
    /// Application API level (15 bits)
    pub api_version: u16,
    /// 1 for a required-capability record
    pub api_version_type: u8,
    /// 2 for a request capability set
    pub capability_set_type: u16,
    /// Byte length of the capability name region
    pub capability_set_len: u16,
}

impl RpcidHeader {
    /// Size of the header in bytes
    pub const SIZE: usize = CAPABILITY_REGION_OFFSET;

    /// Create a request-capability header for `slot_count` slots
    ///
    /// The api version is masked to 15 bits and the slot count must already be
    /// bounded by [`MAX_SLOTS`].
    pub const fn new(api_version: u16, slot_count: u16) -> Self {
        Self {
            api_version: api_version & API_VERSION_MAX,
            api_version_type: API_VERSION_TYPE_RPCID,
            capability_set_type: REQUEST_CAPABILITY_SET,
            capability_set_len: slot_count.wrapping_mul(SLOT_SIZE as u16),
        }
    }

    /// Combine api version and type flag into the first header word
    pub const fn pack_api_word(api_version: u16, api_version_type: u8) -> u16 {
        ((api_version_type as u16 & 1) << API_VERSION_TYPE_SHIFT) | (api_version & API_VERSION_MAX)
    }

    /// Split the first header word into (api version, type flag)
    pub const fn unpack_api_word(word: u16) -> (u16, u8) {
        (
            word & API_VERSION_MAX,
            (word >> API_VERSION_TYPE_SHIFT) as u8,
        )
    }

    /// Whether this header describes a required-capability request set
    pub fn is_valid(&self) -> bool {
        self.api_version_type == API_VERSION_TYPE_RPCID
            && self.capability_set_type == REQUEST_CAPABILITY_SET
    }

    /// Number of whole capability slots declared by the header
    pub const fn slot_count(&self) -> usize {
        self.capability_set_len as usize / SLOT_SIZE
    }

    /// Bytes of the declared capability region that do not fill a slot
    pub const fn partial_slot_bytes(&self) -> usize {
        self.capability_set_len as usize % SLOT_SIZE
    }

    /// Total record size implied by the header
    pub const fn record_len(&self) -> usize {
        Self::SIZE + self.capability_set_len as usize
    }

    /// Parse header fields from bytes without checking the marker values
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let too_short = RpcidError::BufferTooShort { len: bytes.len() };

        let api_word = read_u16_be(bytes, 0).ok_or(too_short)?;
        let capability_set_type = read_u16_be(bytes, API_WORD_SIZE).ok_or(too_short)?;
        let capability_set_len = read_u16_be(bytes, API_WORD_SIZE + 2).ok_or(too_short)?;
        let (api_version, api_version_type) = Self::unpack_api_word(api_word);

        Ok(Self {
            api_version,
            api_version_type,
            capability_set_type,
            capability_set_len,
        })
    }

    /// Convert header to its wire representation
    pub const fn to_bytes_array(&self) -> [u8; Self::SIZE] {
        let api = Self::pack_api_word(self.api_version, self.api_version_type).to_be_bytes();
        let set_type = self.capability_set_type.to_be_bytes();
        let set_len = self.capability_set_len.to_be_bytes();

        [
            api[0], api[1], set_type[0], set_type[1], set_len[0], set_len[1],
        ]
    }
}

impl Default for RpcidHeader {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
