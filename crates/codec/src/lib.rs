//! Lossless byte-stream codec modeled after a circular DNA chromosome.
//!
//! The pipeline is a linear chain of reversible stages, inspired by
//! dinoflagellate chromosome organization:
//!
//! 1. bytes are serialized to bits and mapped pairwise onto the `ACGT`
//!    alphabet ([`transform`]);
//! 2. the base sequence is compressed by an LZW coder whose dictionary
//!    resets itself when it saturates ([`lzw`]);
//! 3. the code stream is padded to a prime length and closed into a ring
//!    with a short bridge suffix ([`ring`]);
//! 4. a trans-splicing marker is interleaved before each chunk and a digest
//!    of the ring is recorded for integrity checking ([`framing`],
//!    [`digest`]).
//!
//! [`CircularCompressor`] drives the chain end to end; the [`Metadata`]
//! record it produces must travel with the framed stream, since its size
//! fields are what let the decoder strip padding and restore the exact
//! original byte count.

pub mod base;
pub mod compressor;
pub mod config;
pub mod digest;
pub mod error;
pub mod framing;
pub mod lzw;
pub mod metadata;
pub mod ring;
pub mod stats;
pub mod transform;

pub use base::{DnaSequence, Nucleotide};
pub use compressor::CircularCompressor;
pub use config::CompressorConfig;
pub use error::CodecError;
pub use metadata::Metadata;
pub use stats::{compression_stats, shannon_entropy, CompressionStats};
