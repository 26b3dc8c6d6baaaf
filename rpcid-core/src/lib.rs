#![no_std]

//! RPCID Core - Required Product Compatibility ID record format
//!
//! This crate provides the binary layout of the RPCID capability record and
//! the pure transforms over it:
//!
//! - [`encoder::encode`]: descriptor to record bytes
//! - [`validation::validate_record`]: structural checks on untrusted bytes
//! - [`decoder::decode`]: validated record to descriptor
//! - [`projector::project`]: validated record to registry bitmap + private names
//!
//! No I/O happens here.

extern crate alloc;

pub mod bitmap;
pub mod decoder;
pub mod descriptor;
pub mod encoder;
pub mod error;
pub mod format;
pub mod projector;
pub mod registry;
pub mod traits;
pub mod validation;

pub use bitmap::{set_os_syscap_bitmap, OsCapabilityBitmap};
pub use decoder::decode;
pub use descriptor::Descriptor;
pub use encoder::{encode, encoded_len};
pub use error::*;
pub use format::*;
pub use projector::{partition, project, project_descriptor, BitmapOutput, CapabilityPartition};
pub use registry::{CapabilityRegistry, RegistryEntry};
pub use traits::StorageBackend;
pub use validation::{validate_record, ValidatedRecord};
