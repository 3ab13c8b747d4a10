//! End-to-end orchestration of the compression pipeline.

use log::{debug, warn};

use crate::base::DnaSequence;
use crate::config::CompressorConfig;
use crate::error::CodecError;
use crate::metadata::Metadata;
use crate::stats::{compression_stats, CompressionStats};
use crate::{digest, framing, lzw, ring, transform};

/// The circular-chromosome codec.
///
/// Runs the full chain: bit-to-base transform, LZW with dictionary reset,
/// circular encapsulation, and trans-splicing framing with an integrity
/// digest. Deterministic: equal input and configuration yield identical
/// code streams and metadata.
///
/// # Examples
///
/// ```
/// use chromozip_codec::CircularCompressor;
///
/// let codec = CircularCompressor::with_defaults();
/// let (codes, metadata) = codec.compress(b"dinoflagellate");
/// let restored = codec.decompress(&codes, &metadata).unwrap();
/// assert_eq!(restored, b"dinoflagellate");
/// ```
#[derive(Debug, Clone)]
pub struct CircularCompressor {
    config: CompressorConfig,
}

impl CircularCompressor {
    /// Construct a codec from a validated configuration.
    pub fn new(config: CompressorConfig) -> Result<Self, CodecError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Construct a codec with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: CompressorConfig::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Parse a textual base sequence honoring the configured strictness:
    /// strict mode fails on the first invalid character, lenient mode drops
    /// invalid characters with a warning.
    pub fn parse_sequence(&self, s: &str) -> Result<DnaSequence, CodecError> {
        if self.config.strict {
            s.parse()
        } else {
            Ok(DnaSequence::from_str_lossy(s).0)
        }
    }

    /// Compress a byte sequence into a framed code stream plus the metadata
    /// required to invert it.
    pub fn compress(&self, data: &[u8]) -> (Vec<u32>, Metadata) {
        if data.is_empty() {
            return (Vec::new(), Metadata::empty(self.config.chunk_size));
        }

        let dna = transform::bytes_to_dna(data);
        if self.config.verbose {
            debug!("converted {} bytes to {} bases", data.len(), dna.len());
        }

        let codes = lzw::compress(&dna);
        if self.config.verbose {
            debug!(
                "compressed {} bases to {} codes ({} resets)",
                dna.len(),
                codes.len(),
                codes.iter().filter(|&&c| c == lzw::RESET_CODE).count()
            );
        }

        let ring_length = ring::next_prime(codes.len());
        let bridge_length = ring::bridge_length(ring_length);
        let ring = ring::encapsulate(&codes);
        debug_assert_eq!(ring.len(), ring_length + bridge_length);

        let digest = digest::ring_digest(&ring[..ring_length]);
        let marker_code = framing::select_marker(&ring);
        let framed = framing::insert_markers(&ring, marker_code, self.config.chunk_size);
        if self.config.verbose {
            debug!(
                "ring of {} codes (bridge {}), marker {}, {} framed codes",
                ring_length,
                bridge_length,
                marker_code,
                framed.len()
            );
        }

        let metadata = Metadata {
            original_size: data.len(),
            original_bits: data.len() * 8,
            dna_length: dna.len(),
            code_count: codes.len(),
            ring_length,
            bridge_length,
            chunk_size: self.config.chunk_size,
            marker_code,
            digest,
        };
        (framed, metadata)
    }

    /// Decompress a framed code stream back into the original bytes.
    ///
    /// The metadata's size fields are authoritative: the code count strips
    /// zero padding, the bit count truncates the recovered bit string, and
    /// the byte count fixes the output length.
    pub fn decompress(&self, framed: &[u32], metadata: &Metadata) -> Result<Vec<u8>, CodecError> {
        if metadata.original_size == 0 {
            return Ok(Vec::new());
        }
        let strict = self.config.strict;

        let filtered = framing::remove_markers(framed, metadata.marker_code);
        if self.config.verbose {
            debug!(
                "removed {} markers, {} codes remain",
                framed.len() - filtered.len(),
                filtered.len()
            );
        }

        let ring = if filtered.len() >= metadata.ring_length {
            &filtered[..metadata.ring_length]
        } else if strict {
            return Err(CodecError::Format(format!(
                "framed stream too short: {} codes after marker removal, ring length {}",
                filtered.len(),
                metadata.ring_length
            )));
        } else {
            warn!(
                "framed stream shorter than ring length ({} < {}); continuing with what survives",
                filtered.len(),
                metadata.ring_length
            );
            &filtered[..]
        };

        let computed = digest::ring_digest(ring);
        if computed != metadata.digest {
            if strict {
                return Err(CodecError::Integrity {
                    expected: metadata.digest.clone(),
                    computed,
                });
            }
            warn!(
                "ring digest mismatch (expected {}, computed {computed}); continuing",
                metadata.digest
            );
        }

        if strict && metadata.code_count > ring.len() {
            return Err(CodecError::Format(format!(
                "metadata code count {} exceeds ring length {}",
                metadata.code_count,
                ring.len()
            )));
        }
        let code_count = metadata.code_count.min(ring.len());
        let codes = &ring[..code_count];

        let dna = lzw::decompress(codes, strict)?;
        if self.config.verbose {
            debug!("decompressed {} codes to {} bases", codes.len(), dna.len());
        }

        let mut bytes = transform::dna_to_bytes(&dna, metadata.original_bits);
        // The original byte count is the sole authority on output length.
        bytes.resize(metadata.original_size, 0);
        Ok(bytes)
    }

    /// Compression diagnostics for an input and its encoding. Informational
    /// only; see [`compression_stats`].
    pub fn stats(&self, original: &[u8], codes: &[u32], metadata: &Metadata) -> CompressionStats {
        compression_stats(original, codes, metadata)
    }
}
