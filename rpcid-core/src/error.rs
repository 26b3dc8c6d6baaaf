//! Error types for RPCID operations

/// Broad class of an [`RpcidError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The bytes do not form a well-structured RPCID record
    Format,
    /// The descriptor cannot be expressed as an RPCID record
    Encoding,
}

/// Errors that can occur during RPCID operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcidError {
    /// Buffer is shorter than the minimum record header
    BufferTooShort { len: usize },
    /// The api version type bit is not set (not a required-capability record)
    InvalidApiVersionType,
    /// The capability set type is not the request capability set
    InvalidCapabilitySetType { found: u16 },
    /// The declared capability set extends past the end of the buffer
    CapabilitySetOverrun { declared: usize, available: usize },
    /// A slot has no NUL terminator within its 128 bytes
    UnterminatedSlot { slot: usize },
    /// A slot does not hold valid UTF-8
    InvalidSlotEncoding { slot: usize },
    /// A bit index does not fit in the OS capability bitmap
    BitIndexOutOfRange { index: u16 },
    /// The registry names the same capability twice
    DuplicateRegistryName { index: u16 },
    /// The registry assigns the same bit twice
    DuplicateRegistryIndex { index: u16 },
    /// A capability entry has no `.` separator
    MissingSeparator { entry: usize },
    /// A capability entry does not start with `SystemCapability.`
    MissingPrefix { entry: usize },
    /// A short name does not fit in its slot with a terminator
    NameTooLong { entry: usize, len: usize },
    /// A short name contains a NUL byte
    EmbeddedNul { entry: usize },
    /// The api version does not fit in 15 bits
    ApiVersionOutOfRange { value: u64 },
    /// Too many capabilities for the 16-bit set length field
    TooManyCapabilities { count: usize },
}

impl RpcidError {
    /// Get the broad category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            RpcidError::MissingSeparator { .. }
            | RpcidError::MissingPrefix { .. }
            | RpcidError::NameTooLong { .. }
            | RpcidError::EmbeddedNul { .. }
            | RpcidError::ApiVersionOutOfRange { .. }
            | RpcidError::TooManyCapabilities { .. } => ErrorCategory::Encoding,
            _ => ErrorCategory::Format,
        }
    }
}

impl core::fmt::Display for RpcidError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RpcidError::BufferTooShort { len } => {
                write!(f, "invalid format: buffer of {len} bytes is too short for a header")
            }
            RpcidError::InvalidApiVersionType => write!(f, "invalid format: apiVersionType != 1"),
            RpcidError::InvalidCapabilitySetType { found } => {
                write!(f, "invalid format: capability set type {found} != 2")
            }
            RpcidError::CapabilitySetOverrun {
                declared,
                available,
            } => write!(
                f,
                "invalid format: capability set needs {declared} bytes, buffer has {available}"
            ),
            RpcidError::UnterminatedSlot { slot } => {
                write!(f, "invalid format: capability slot {slot} is not NUL-terminated")
            }
            RpcidError::InvalidSlotEncoding { slot } => {
                write!(f, "invalid format: capability slot {slot} is not valid UTF-8")
            }
            RpcidError::BitIndexOutOfRange { index } => {
                write!(f, "syscap bit index {index} out of range (960)")
            }
            RpcidError::DuplicateRegistryName { index } => {
                write!(f, "registry entry with bit {index} repeats a name")
            }
            RpcidError::DuplicateRegistryIndex { index } => {
                write!(f, "registry bit {index} is assigned twice")
            }
            RpcidError::MissingSeparator { entry } => {
                write!(f, "syscap[{entry}] has no '.' separator")
            }
            RpcidError::MissingPrefix { entry } => {
                write!(f, "syscap[{entry}] does not start with \"SystemCapability.\"")
            }
            RpcidError::NameTooLong { entry, len } => {
                write!(f, "syscap[{entry}] short name is {len} bytes, limit is 127")
            }
            RpcidError::EmbeddedNul { entry } => write!(f, "syscap[{entry}] contains a NUL byte"),
            RpcidError::ApiVersionOutOfRange { value } => {
                write!(f, "api_version {value} does not fit in 15 bits")
            }
            RpcidError::TooManyCapabilities { count } => {
                write!(f, "{count} capabilities exceed the 16-bit set length")
            }
        }
    }
}

/// Result type for RPCID operations
pub type Result<T> = core::result::Result<T, RpcidError>;
