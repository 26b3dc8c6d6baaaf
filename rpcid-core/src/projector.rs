//! Bitmap projection of RPCID records
//!
//! Splits a record's capabilities into registry capabilities, carried as
//! bits of a 960-bit bitmap, and private capabilities, carried by name. The
//! result renders as one comma-separated line:
//!
//! ```text
//! api_version,2,word2,...,word31,privateCap1,privateCap2,...
//! ```
//!
//! The projection is lossy and has no inverse.

use crate::bitmap::OsCapabilityBitmap;
use crate::decoder::decode;
use crate::format::constants::bitmap::OUTPUT_WORDS;
use crate::format::constants::REQUEST_CAPABILITY_SET;
use crate::registry::CapabilityRegistry;
use crate::validation::ValidatedRecord;
use crate::{Descriptor, Result};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

/// Capabilities split by registry membership, each list in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityPartition {
    /// Bit indices of registry capabilities
    pub os_indices: Vec<u16>,
    /// Names not found in the registry
    pub private: Vec<String>,
}

/// Split descriptor capabilities into registry bits and private names
pub fn partition(descriptor: &Descriptor, registry: &CapabilityRegistry) -> CapabilityPartition {
    let mut parts = CapabilityPartition::default();
    for name in &descriptor.syscap {
        match registry.bit_index(name) {
            Some(index) => parts.os_indices.push(index),
            None => parts.private.push(name.clone()),
        }
    }
    parts
}

/// Projected form of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapOutput {
    /// api version, set type marker, then the bitmap as host-order words
    pub words: [u32; OUTPUT_WORDS],
    /// Private capability names in record order
    pub private: Vec<String>,
}

impl BitmapOutput {
    /// Api version word
    pub fn api_version(&self) -> u32 {
        self.words[0]
    }

    /// The bitmap words (words 2..32)
    pub fn bitmap_words(&self) -> &[u32] {
        &self.words[2..]
    }

    /// Render the comma-separated text record
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(OUTPUT_WORDS * 11 + self.private.len() * 64);
        // Writing into a String cannot fail
        let _ = write!(out, "{self}");
        out
    }
}

impl fmt::Display for BitmapOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, rest) = self.words.split_at(1);
        write!(f, "{}", first[0])?;
        for word in rest {
            write!(f, ",{word}")?;
        }
        for name in &self.private {
            write!(f, ",{name}")?;
        }
        Ok(())
    }
}

/// Project a descriptor against a registry
pub fn project_descriptor(
    descriptor: &Descriptor,
    registry: &CapabilityRegistry,
) -> Result<BitmapOutput> {
    let CapabilityPartition {
        os_indices,
        private,
    } = partition(descriptor, registry);
    let bitmap = OsCapabilityBitmap::from_indices(&os_indices)?;

    let mut words = [0u32; OUTPUT_WORDS];
    words[0] = descriptor.api_version as u32;
    words[1] = REQUEST_CAPABILITY_SET as u32;
    words[2..].copy_from_slice(&bitmap.words());

    Ok(BitmapOutput { words, private })
}

/// Decode a validated record and project it
pub fn project(record: &ValidatedRecord<'_>, registry: &CapabilityRegistry) -> Result<BitmapOutput> {
    let descriptor = decode(record)?;
    project_descriptor(&descriptor, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::registry::RegistryEntry;
    use crate::validation::validate_record;
    use crate::RpcidError;
    use alloc::format;
    use alloc::string::ToString;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    static ENTRIES: &[RegistryEntry] = &[
        RegistryEntry::new("SystemCapability.Communication.WiFi", 0),
        RegistryEntry::new("SystemCapability.Sensors.Sensor", 9),
        RegistryEntry::new("SystemCapability.Multimedia.Camera.Core", 40),
    ];

    fn registry() -> CapabilityRegistry {
        CapabilityRegistry::from_entries(ENTRIES).unwrap()
    }

    #[test]
    fn test_partition() {
        let descriptor = Descriptor::new(
            9,
            [
                "SystemCapability.Vendor.Thing",
                "SystemCapability.Sensors.Sensor",
                "SystemCapability.Communication.WiFi",
                "SystemCapability.Vendor.Other",
            ],
        );
        let parts = partition(&descriptor, &registry());
        assert_eq!(parts.os_indices, [9, 0]);
        assert_eq!(
            parts.private,
            ["SystemCapability.Vendor.Thing", "SystemCapability.Vendor.Other"]
        );
    }

    #[test]
    fn test_render() {
        let descriptor = Descriptor::new(
            9,
            [
                "SystemCapability.Communication.WiFi",
                "SystemCapability.Vendor.Thing",
                "SystemCapability.Sensors.Sensor",
            ],
        );
        let output = project_descriptor(&descriptor, &registry()).unwrap();
        assert_eq!(output.api_version(), 9);
        assert_eq!(output.words[1], 2);

        let first = u32::from_ne_bytes([0x01, 0x02, 0x00, 0x00]);
        let mut expected = format!("9,2,{first}");
        for _ in 1..30 {
            expected.push_str(",0");
        }
        expected.push_str(",SystemCapability.Vendor.Thing");
        assert_eq!(output.render(), expected);
        assert_eq!(output.to_string(), expected);
    }

    #[test]
    fn test_render_no_capabilities() {
        let output = project_descriptor(&Descriptor::new(7, ["SystemCapability.X"]), &registry())
            .unwrap();
        let text = output.render();
        assert!(text.starts_with("7,2,0,"));
        assert_eq!(text.split(',').count(), OUTPUT_WORDS + 1);
        assert!(text.ends_with(",SystemCapability.X"));
    }

    #[test]
    fn test_project_record() {
        let descriptor = Descriptor::new(
            11,
            ["SystemCapability.Multimedia.Camera.Core", "SystemCapability.Vendor.Thing"],
        );
        let bytes = encode(&descriptor).unwrap();
        let record = validate_record(&bytes).unwrap();
        let output = project(&record, &registry()).unwrap();

        let bitmap = OsCapabilityBitmap::from_indices(&[40]).unwrap();
        assert_eq!(output.bitmap_words(), bitmap.words());
        assert_eq!(output.private, ["SystemCapability.Vendor.Thing"]);
    }

    #[test]
    fn test_project_propagates_decode_error() {
        let mut bytes = encode(&Descriptor::new(1, ["SystemCapability.A"])).unwrap();
        for b in &mut bytes[6..] {
            *b = b'q';
        }
        let record = validate_record(&bytes).unwrap();
        assert_eq!(
            project(&record, &registry()),
            Err(RpcidError::UnterminatedSlot { slot: 0 })
        );
    }

    #[test]
    fn test_partition_is_complete() {
        let registry = CapabilityRegistry::builtin().unwrap();
        let known: Vec<&str> = registry.iter().map(|e| e.name).collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let count = rng.gen_range(0..30);
            let syscap: Vec<String> = (0..count)
                .map(|i| {
                    if rng.gen_bool(0.6) {
                        known.choose(&mut rng).unwrap().to_string()
                    } else {
                        format!("SystemCapability.Vendor.Private{i}")
                    }
                })
                .collect();
            let descriptor = Descriptor {
                api_version: 9,
                syscap,
            };

            let parts = partition(&descriptor, &registry);
            assert_eq!(
                parts.os_indices.len() + parts.private.len(),
                descriptor.len()
            );
            for name in &descriptor.syscap {
                let in_bitmap = registry
                    .bit_index(name)
                    .is_some_and(|i| parts.os_indices.contains(&i));
                let in_private = parts.private.contains(name);
                assert!(in_bitmap != in_private, "{name} must land in exactly one list");
            }
        }
    }
}
