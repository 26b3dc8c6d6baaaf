//! Descriptor JSON conversion

use crate::error::{Result, ToolError};
use rpcid_core::format::constants::API_VERSION_MAX;
use rpcid_core::{CapabilityRegistry, Descriptor, RpcidError};
use serde::ser::SerializeMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

const API_VERSION: &str = "api_version";
const SYSCAP: &str = "syscap";

/// Parse descriptor JSON text
pub fn parse_descriptor(text: &[u8]) -> Result<Descriptor> {
    let root: Value = serde_json::from_slice(text)?;
    descriptor_from_json(&root)
}

/// Build a descriptor from a parsed JSON tree
///
/// `api_version` must be a non-negative integer that fits in 15 bits and
/// `syscap` must be an array of strings. Capability names are not checked
/// here; the encoder does that.
pub fn descriptor_from_json(root: &Value) -> Result<Descriptor> {
    let object = root.as_object().ok_or_else(|| ToolError::WrongType {
        field: "<root>".to_string(),
        expected: "an object",
    })?;

    let api_version = api_version(field(object, API_VERSION)?)?;

    let entries = field(object, SYSCAP)?
        .as_array()
        .ok_or_else(|| wrong_type(SYSCAP.to_string(), "an array"))?;
    let syscap = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| wrong_type(format!("{SYSCAP}[{i}]"), "a string"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Descriptor {
        api_version,
        syscap,
    })
}

fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Result<&'a Value> {
    object
        .get(name)
        .ok_or_else(|| ToolError::MissingField(name.to_string()))
}

fn wrong_type(field: String, expected: &'static str) -> ToolError {
    ToolError::WrongType { field, expected }
}

fn api_version(value: &Value) -> Result<u16> {
    let number = value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
        .ok_or_else(|| wrong_type(API_VERSION.to_string(), "a non-negative integer"))?;

    if number > API_VERSION_MAX as u64 {
        return Err(RpcidError::ApiVersionOutOfRange { value: number }.into());
    }
    Ok(number as u16)
}

/// Pretty-print a descriptor with tab indentation
pub fn descriptor_to_pretty_json(descriptor: &Descriptor) -> Result<Vec<u8>> {
    to_pretty_json(descriptor)
}

/// Render the registry as `{name: bitIndex}` in registry order
pub fn registry_to_pretty_json(registry: &CapabilityRegistry) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(registry.len() * 48);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    // serde_json::Map is sorted, so stream entries to keep registry order
    let mut map = serde::Serializer::serialize_map(&mut ser, Some(registry.len()))?;
    for entry in registry.iter() {
        map.serialize_entry(entry.name, &entry.bit_index)?;
    }
    map.end()?;
    Ok(out)
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut ser)?;
    Ok(out)
}
