//! Integrity digest over the pre-framed ring.
//!
//! SHA-256 of the comma-joined decimal rendering of the codes, truncated to
//! eight hex characters. Detection only; both directions must use the same
//! function, and the value is only ever compared for equality.

use sha2::{Digest, Sha256};

/// Digest length in hex characters.
pub const DIGEST_LEN: usize = 8;

/// Compute the digest of a code sequence. An empty sequence digests to an
/// empty string.
pub fn ring_digest(codes: &[u32]) -> String {
    if codes.is_empty() {
        return String::new();
    }
    let joined = codes
        .iter()
        .map(|code| code.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let hash = Sha256::digest(joined.as_bytes());
    hex::encode(&hash[..DIGEST_LEN / 2])
}
