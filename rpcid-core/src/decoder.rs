//! RPCID record to descriptor decoding

use crate::format::constants::SYSCAP_PREFIX;
use crate::validation::{slot_name, ValidatedRecord};
use crate::{Descriptor, Result};
use alloc::string::String;
use alloc::vec::Vec;

/// Decode a validated record back into its descriptor
///
/// Slots are re-prefixed with `SystemCapability.` and kept in record order.
/// A slot without a terminator fails the whole decode.
pub fn decode(record: &ValidatedRecord<'_>) -> Result<Descriptor> {
    let mut syscap = Vec::with_capacity(record.slot_count());
    for (index, slot) in record.slots().enumerate() {
        let short = slot_name(slot, index)?;
        let mut name = String::with_capacity(SYSCAP_PREFIX.len() + short.len());
        name.push_str(SYSCAP_PREFIX);
        name.push_str(short);
        syscap.push(name);
    }

    Ok(Descriptor {
        api_version: record.header().api_version,
        syscap,
    })
}
