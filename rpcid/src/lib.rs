//! RPCID - capability record tooling
//!
//! This library reads and writes RPCID capability records on disk and
//! projects them into the registry bitmap text form.
//!
//! ## Architecture
//!
//! - **rpcid-core**: record layout, validation, encode/decode and projection (no I/O)
//! - **rpcid**: file I/O, descriptor JSON, configuration and the `rpcid` binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rpcid::{RpcidTool, ToolConfig};
//!
//! fn example() -> rpcid::error::Result<()> {
//!     let tool = RpcidTool::new(ToolConfig::default());
//!     let record = tool.encode("syscap.json", "out")?;
//!     tool.decode_to_text(&record, "out")?;
//!     Ok(())
//! }
//! ```
//!
//! Every operation writes exactly one file into an existing directory and
//! writes nothing when it fails.

// Re-export core abstractions and format definitions
pub use rpcid_core::{
    // Transforms
    decode, encode, project, project_descriptor, validate_record,
    // Types
    BitmapOutput, CapabilityRegistry, Descriptor, RegistryEntry, RpcidHeader, ValidatedRecord,
    // Backend trait
    StorageBackend,
    // Core errors
    ErrorCategory, RpcidError,
};

pub mod config;
pub mod error;
pub mod file_io;
pub mod json;
pub mod registry;
pub mod tool;

pub use config::{ToolConfig, DEFAULT_MAX_INPUT_BYTES};
pub use error::ToolError;
pub use file_io::{read_whole_file, write_whole_file, MappedFile};
pub use json::{descriptor_from_json, descriptor_to_pretty_json, parse_descriptor};
pub use registry::registry;
pub use tool::{RecordSummary, RpcidTool};
