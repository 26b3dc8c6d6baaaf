//! Process-wide capability registry

use crate::error::Result;
use rpcid_core::{CapabilityRegistry, RpcidError};
use std::sync::OnceLock;

static REGISTRY: OnceLock<std::result::Result<CapabilityRegistry, RpcidError>> = OnceLock::new();

/// The built-in registry, built on first use and never mutated
pub fn registry() -> Result<&'static CapabilityRegistry> {
    REGISTRY
        .get_or_init(CapabilityRegistry::builtin)
        .as_ref()
        .map_err(|err| (*err).into())
}
