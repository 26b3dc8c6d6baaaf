//! Tool configuration

/// Default cap on input file size (16 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

/// Configuration for the file-level operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Largest input file accepted, in bytes
    pub max_input_bytes: u64,
    /// Artifact written by encode
    pub encoded_file_name: String,
    /// Artifact written by decode
    pub decoded_file_name: String,
    /// Artifact written by decode-to-text
    pub text_file_name: String,
}

impl ToolConfig {
    /// Set the input size limit
    pub fn with_max_input_bytes(mut self, max_input_bytes: u64) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Set the encoded artifact name
    pub fn with_encoded_file_name(mut self, name: impl Into<String>) -> Self {
        self.encoded_file_name = name.into();
        self
    }

    /// Set the decoded JSON artifact name
    pub fn with_decoded_file_name(mut self, name: impl Into<String>) -> Self {
        self.decoded_file_name = name.into();
        self
    }

    /// Set the text projection artifact name
    pub fn with_text_file_name(mut self, name: impl Into<String>) -> Self {
        self.text_file_name = name.into();
        self
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            encoded_file_name: "rpcid.sc".to_string(),
            decoded_file_name: "rpcid.json".to_string(),
            text_file_name: "RPCID.txt".to_string(),
        }
    }
}
