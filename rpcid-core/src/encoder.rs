//! Descriptor to RPCID record encoding

use crate::format::constants::*;
use crate::format::RpcidHeader;
use crate::validation::short_name;
use crate::{Descriptor, Result, RpcidError};
use alloc::vec;
use alloc::vec::Vec;

/// Size of the record that would hold `slot_count` capabilities
pub const fn encoded_len(slot_count: usize) -> usize {
    RpcidHeader::SIZE + slot_count * SLOT_SIZE
}

/// Encode a descriptor into a complete RPCID record
///
/// The buffer is sized and zero-filled up front, so every slot is NUL-padded.
/// Any invalid entry fails the whole encode and no buffer is returned.
pub fn encode(descriptor: &Descriptor) -> Result<Vec<u8>> {
    if descriptor.api_version > API_VERSION_MAX {
        return Err(RpcidError::ApiVersionOutOfRange {
            value: descriptor.api_version as u64,
        });
    }

    let count = descriptor.syscap.len();
    if count > MAX_SLOTS {
        return Err(RpcidError::TooManyCapabilities { count });
    }

    let mut buffer = vec![0u8; encoded_len(count)];
    let header = RpcidHeader::new(descriptor.api_version, count as u16);
    buffer[..RpcidHeader::SIZE].copy_from_slice(&header.to_bytes_array());

    let slots = buffer[CAPABILITY_REGION_OFFSET..].chunks_exact_mut(SLOT_SIZE);
    for (entry, (name, slot)) in descriptor.syscap.iter().zip(slots).enumerate() {
        let short = short_name(name, entry)?;
        slot[..short.len()].copy_from_slice(short.as_bytes());
    }

    Ok(buffer)
}
