//! Binary format definitions for the RPCID record
//!
//! Pure data layout only. No I/O.

pub mod byte_order;
pub mod constants;
pub mod header;

pub use byte_order::{hton16, ntoh16, read_u16_be, write_u16_be};
pub use header::RpcidHeader;
