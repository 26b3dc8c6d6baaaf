//! Format constants for the RPCID record

/// Width of one capability name slot in bytes
pub const SLOT_SIZE: usize = 128;

/// Size of the bit-packed api version word
pub const API_WORD_SIZE: usize = 2;

/// Size of the capability set type + length fields
pub const CAPABILITY_SET_HEADER_SIZE: usize = 4;

/// Offset of the first capability slot
pub const CAPABILITY_REGION_OFFSET: usize = API_WORD_SIZE + CAPABILITY_SET_HEADER_SIZE;

/// Smallest buffer the validator will look at (two 32-bit regions)
pub const MIN_BUFFER_LEN: usize = 8;

/// Largest api version representable in the 15-bit field
pub const API_VERSION_MAX: u16 = 0x7FFF;

/// Bit position of the api version type flag in the api word
pub const API_VERSION_TYPE_SHIFT: u32 = 15;

/// Api version type of a required-capability record
pub const API_VERSION_TYPE_RPCID: u8 = 1;

/// Capability set type of a request capability set
pub const REQUEST_CAPABILITY_SET: u16 = 2;

/// Most slots the 16-bit set length can describe
pub const MAX_SLOTS: usize = u16::MAX as usize / SLOT_SIZE;

/// Prefix shared by every capability name
pub const SYSCAP_PREFIX: &str = "SystemCapability.";

/// Bitmap layout constants for the text projection
pub mod bitmap {
    /// Bytes in the OS capability bitmap
    pub const OS_SYSCAP_BYTES: usize = 120;

    /// Number of bits (registry capabilities) the bitmap can hold
    pub const OS_SYSCAP_BITS: usize = OS_SYSCAP_BYTES * 8;

    /// 32-bit words covering the bitmap
    pub const OS_SYSCAP_WORDS: usize = OS_SYSCAP_BYTES / 4;

    /// Total words in the projected output (api version, marker, bitmap)
    pub const OUTPUT_WORDS: usize = 2 + OS_SYSCAP_WORDS;
}
