//! Capability slot and name checks

use crate::format::constants::*;
use crate::{Result, RpcidError};

/// Read the NUL-terminated short name stored in one slot
///
/// `slot` is the slot's position in the record and only used for error
/// reporting.
pub fn slot_name(bytes: &[u8], slot: usize) -> Result<&str> {
    let window = &bytes[..bytes.len().min(SLOT_SIZE)];
    let len = window
        .iter()
        .position(|&b| b == 0)
        .ok_or(RpcidError::UnterminatedSlot { slot })?;

    core::str::from_utf8(&window[..len]).map_err(|_| RpcidError::InvalidSlotEncoding { slot })
}

/// Split a full capability name into its short name
///
/// The text up to and including the first `.` must be exactly
/// `SystemCapability.`, and the remainder must fit in a slot with room for
/// its terminator.
pub fn short_name(name: &str, entry: usize) -> Result<&str> {
    let dot = name
        .find('.')
        .ok_or(RpcidError::MissingSeparator { entry })?;
    if &name[..=dot] != SYSCAP_PREFIX {
        return Err(RpcidError::MissingPrefix { entry });
    }

    let short = &name[dot + 1..];
    if short.len() >= SLOT_SIZE {
        return Err(RpcidError::NameTooLong {
            entry,
            len: short.len(),
        });
    }
    if short.as_bytes().contains(&0) {
        return Err(RpcidError::EmbeddedNul { entry });
    }
    Ok(short)
}
