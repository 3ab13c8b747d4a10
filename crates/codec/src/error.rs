use thiserror::Error;

/// Error type for codec operations.
///
/// In strict mode every variant is surfaced at the API boundary and partial
/// output is discarded. In lenient mode the compressor downgrades `Format`,
/// `InvalidCode` and `Integrity` to warnings; `Config` is always fatal.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed input: invalid base character, a stream that opens with the
    /// reset code, or an out-of-range code.
    #[error("Format error: {0}")]
    Format(String),

    /// The decompressor met a code that is neither in its dictionary nor
    /// equal to the next free code with a non-empty previous entry.
    #[error("Invalid code {code} at position {position} (next code: {next_code})")]
    InvalidCode {
        code: u32,
        position: usize,
        next_code: u32,
    },

    /// Ring digest mismatch during decapsulation.
    #[error("Integrity check failed: expected digest {expected}, computed {computed}")]
    Integrity { expected: String, computed: String },

    /// Nonsensical configuration parameter.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
