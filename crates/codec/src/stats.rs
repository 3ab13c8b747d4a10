//! Compression diagnostics: size ratios and Shannon-entropy analysis.
//!
//! Everything here is informational; none of it affects round-trip
//! correctness. Serialized code size assumes the smallest whole-byte slot
//! that holds the largest code, with a 16-bit floor.

use serde::Serialize;

use crate::metadata::Metadata;

/// Diagnostics for one compression run.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionStats {
    pub original_size_bytes: usize,
    pub compressed_size_bytes: usize,
    pub compression_ratio: f64,
    pub space_savings_percent: f64,
    pub bits_per_base: f64,
    pub bits_per_code: u32,
    pub total_codes: usize,
    pub max_code_value: u32,
    /// Shannon entropy of the input, bits per byte.
    pub original_entropy: f64,
    /// Shannon entropy of the code stream expanded to little-endian octets.
    pub compressed_entropy: f64,
    pub entropy_reduction: f64,
    /// `entropy * bytes / 8`: the Shannon bound for this input.
    pub theoretical_minimum_size: f64,
    /// Shannon bound over actual compressed size, capped at 1.0.
    pub shannon_efficiency: f64,
    /// How closely the actual ratio approaches the Shannon bound, in [0, 1].
    pub compression_effectiveness: f64,
}

/// Shannon entropy of a byte sequence, in bits per byte.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut counts = [0usize; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }
    let total = data.len() as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Expand each code to its minimal little-endian octet run (at least one
/// byte), for entropy measurement of the serialized stream.
fn code_stream_octets(codes: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 2);
    for &code in codes {
        let bit_len = (32 - code.leading_zeros()).max(1);
        let byte_len = bit_len.div_ceil(8) as usize;
        out.extend_from_slice(&code.to_le_bytes()[..byte_len]);
    }
    out
}

/// Compute diagnostics for `original` and its framed encoding. Pure
/// function of its inputs.
pub fn compression_stats(
    original: &[u8],
    codes: &[u32],
    metadata: &Metadata,
) -> CompressionStats {
    let original_size = original.len();
    let total_codes = codes.len();
    let max_code_value = codes.iter().copied().max().unwrap_or(0);

    let bits_per_code = if total_codes == 0 {
        16
    } else {
        let bit_len = 32 - max_code_value.leading_zeros();
        (bit_len.div_ceil(8) * 8).max(16)
    };
    let compressed_size = total_codes * bits_per_code as usize / 8;

    let original_entropy = shannon_entropy(original);
    let compressed_entropy = shannon_entropy(&code_stream_octets(codes));
    let entropy_reduction = original_entropy - compressed_entropy;

    let theoretical_minimum_size = original_entropy * original_size as f64 / 8.0;
    let shannon_efficiency = if compressed_size > 0 {
        (theoretical_minimum_size / compressed_size as f64).min(1.0)
    } else {
        0.0
    };

    let compression_ratio = if original_size > 0 {
        compressed_size as f64 / original_size as f64
    } else {
        0.0
    };
    let shannon_ratio = if original_size > 0 {
        theoretical_minimum_size / original_size as f64
    } else {
        0.0
    };
    let compression_effectiveness = if shannon_ratio > 0.0 && compression_ratio > shannon_ratio {
        (shannon_ratio / compression_ratio).clamp(0.0, 1.0)
    } else if shannon_ratio > 0.0 {
        1.0
    } else {
        0.0
    };

    CompressionStats {
        original_size_bytes: original_size,
        compressed_size_bytes: compressed_size,
        compression_ratio,
        space_savings_percent: if original_size > 0 {
            (1.0 - compression_ratio) * 100.0
        } else {
            0.0
        },
        bits_per_base: if metadata.dna_length > 0 {
            (compressed_size * 8) as f64 / metadata.dna_length as f64
        } else {
            0.0
        },
        bits_per_code,
        total_codes,
        max_code_value,
        original_entropy,
        compressed_entropy,
        entropy_reduction,
        theoretical_minimum_size,
        shannon_efficiency,
        compression_effectiveness,
    }
}
