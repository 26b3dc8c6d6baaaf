//! Validation utilities for RPCID records
//!
//! Pure functions over byte slices and strings. No I/O.

pub mod record;
pub mod slot;

pub use record::{validate_record, ValidatedRecord};
pub use slot::{short_name, slot_name};
