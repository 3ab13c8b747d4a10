use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Default distance between framing markers in the output stream.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Configuration for a [`CircularCompressor`](crate::CircularCompressor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressorConfig {
    /// Number of codes between consecutive framing markers.
    pub chunk_size: usize,

    /// Accepted for API compatibility with earlier releases; the LZW stage
    /// does not consult it.
    pub min_pattern_length: usize,

    /// If true, anomalies raise typed errors; if false, the codec recovers
    /// best-effort with a warning.
    pub strict: bool,

    /// If true, emit per-stage trace lines. Purely observational.
    pub verbose: bool,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            min_pattern_length: 4,
            strict: true,
            verbose: false,
        }
    }
}

impl CompressorConfig {
    /// Check the configuration for nonsensical values.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.chunk_size == 0 {
            return Err(CodecError::Config(
                "chunk_size must be a positive integer".to_string(),
            ));
        }
        if self.min_pattern_length == 0 {
            return Err(CodecError::Config(
                "min_pattern_length must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}
