use serde::{Deserialize, Serialize};

/// Decoding metadata produced alongside the framed code stream.
///
/// Carries every length the inverse pipeline needs: the three trailing size
/// fields (`code_count`, `original_bits`, `original_size`) each override the
/// corresponding stage's internal length computation, and `ring_length`,
/// `marker_code` and `digest` drive decapsulation. The record must reach
/// the decoder verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Original input length in bytes.
    pub original_size: usize,
    /// Original input length in bits (8 x bytes for whole-byte input).
    pub original_bits: usize,
    /// Length of the base sequence fed to the LZW coder.
    pub dna_length: usize,
    /// Length of the code stream before circular encapsulation.
    pub code_count: usize,
    /// Prime length of the ring proper (zero padding included, bridge
    /// excluded).
    pub ring_length: usize,
    /// Number of head codes repeated at the tail of the ring.
    pub bridge_length: usize,
    /// Codes between consecutive framing markers.
    pub chunk_size: usize,
    /// The trans-splicing marker code. Guaranteed absent from the ring.
    pub marker_code: u32,
    /// Digest of the ring proper, for integrity verification.
    pub digest: String,
}

impl Metadata {
    /// Metadata for an empty input.
    pub fn empty(chunk_size: usize) -> Self {
        Self {
            original_size: 0,
            original_bits: 0,
            dna_length: 0,
            code_count: 0,
            ring_length: 0,
            bridge_length: 0,
            chunk_size,
            marker_code: 0,
            digest: String::new(),
        }
    }
}
