//! Logical capability descriptor
//!
//! The descriptor is the JSON-facing side of an RPCID record: an api
//! version plus the full `SystemCapability.`-prefixed capability names in
//! record order.

use alloc::string::String;
use alloc::vec::Vec;

/// Capability requirements of one application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Descriptor {
    /// Application API level
    pub api_version: u16,
    /// Full capability names, order preserved
    pub syscap: Vec<String>,
}

impl Descriptor {
    /// Create a descriptor from an api version and capability names
    pub fn new<I, S>(api_version: u16, syscap: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            api_version,
            syscap: syscap.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of capabilities
    pub fn len(&self) -> usize {
        self.syscap.len()
    }

    /// Whether the descriptor lists no capabilities
    pub fn is_empty(&self) -> bool {
        self.syscap.is_empty()
    }
}
