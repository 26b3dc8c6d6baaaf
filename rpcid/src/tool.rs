//! File-level RPCID operations
//!
//! Each operation reads one input file completely, transforms it in memory
//! and writes one artifact. Nothing is written unless the whole transform
//! succeeded.

use crate::config::ToolConfig;
use crate::error::Result;
use crate::file_io::{read_whole_file, write_whole_file, MappedFile};
use crate::json::{descriptor_to_pretty_json, parse_descriptor};
use crate::registry::registry;
use rpcid_core::{decode, encode, project, RpcidHeader, StorageBackend, ValidatedRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Header fields and layout of a validated record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSummary {
    pub header: RpcidHeader,
    pub slot_count: usize,
    pub trailing_bytes: usize,
}

impl std::fmt::Display for RecordSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "api_version:              {}", self.header.api_version)?;
        writeln!(f, "apiVersionType:           {}", self.header.api_version_type)?;
        writeln!(f, "capabilitySetType:        {}", self.header.capability_set_type)?;
        writeln!(f, "capabilitySetByteLength:  {}", self.header.capability_set_len)?;
        writeln!(f, "slots:                    {}", self.slot_count)?;
        write!(f, "trailing bytes:           {}", self.trailing_bytes)
    }
}

/// Runs encode / decode / decode-to-text against files
#[derive(Debug, Clone, Default)]
pub struct RpcidTool {
    config: ToolConfig,
}

impl RpcidTool {
    /// Create a tool with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Encode a descriptor JSON file into `out_dir/rpcid.sc`
    pub fn encode(&self, input: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let input = read_whole_file(input, self.config.max_input_bytes)?;
        let descriptor = parse_descriptor(input.as_slice())?;
        debug!(
            api_version = descriptor.api_version,
            capabilities = descriptor.len(),
            "parsed descriptor"
        );

        let bytes = encode(&descriptor)?;
        let target = write_whole_file(out_dir, &self.config.encoded_file_name, &bytes)?;
        info!(path = %target.display(), bytes = bytes.len(), "wrote RPCID record");
        Ok(target)
    }

    /// Decode an RPCID file into `out_dir/rpcid.json`
    pub fn decode(&self, input: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let input = self.open_record(input)?;
        let record = self.validate(&input)?;
        let descriptor = decode(&record)?;

        let json = descriptor_to_pretty_json(&descriptor)?;
        let target = write_whole_file(out_dir, &self.config.decoded_file_name, &json)?;
        info!(
            path = %target.display(),
            capabilities = descriptor.len(),
            "wrote descriptor JSON"
        );
        Ok(target)
    }

    /// Project an RPCID file into `out_dir/RPCID.txt`
    pub fn decode_to_text(
        &self,
        input: impl AsRef<Path>,
        out_dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let input = self.open_record(input)?;
        let record = self.validate(&input)?;
        let output = project(&record, registry()?)?;
        debug!(
            private = output.private.len(),
            registry = record.slot_count() - output.private.len(),
            "partitioned capabilities"
        );

        let text = output.render();
        let target = write_whole_file(out_dir, &self.config.text_file_name, text.as_bytes())?;
        info!(path = %target.display(), "wrote RPCID text projection");
        Ok(target)
    }

    /// Validate an RPCID file and report its header
    pub fn inspect(&self, input: impl AsRef<Path>) -> Result<RecordSummary> {
        let input = self.open_record(input)?;
        let record = self.validate(&input)?;
        Ok(RecordSummary {
            header: *record.header(),
            slot_count: record.slot_count(),
            trailing_bytes: record.trailing_len(),
        })
    }

    fn open_record(&self, input: impl AsRef<Path>) -> Result<MappedFile> {
        read_whole_file(input, self.config.max_input_bytes)
    }

    fn validate<'a>(&self, input: &'a MappedFile) -> Result<ValidatedRecord<'a>> {
        let record = input.validate()?;
        let header = record.header();
        debug!(
            path = %input.path().display(),
            api_version = header.api_version,
            capability_set_len = header.capability_set_len,
            "validated RPCID header"
        );

        if header.partial_slot_bytes() != 0 {
            warn!(
                capability_set_len = header.capability_set_len,
                "capability set length is not a multiple of 128, ignoring partial slot"
            );
        }
        if record.trailing_len() != 0 {
            warn!(
                trailing = record.trailing_len(),
                "ignoring bytes after the capability set"
            );
        }
        Ok(record)
    }
}
