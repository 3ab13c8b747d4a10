//! Trans-splicing markers: framing of the ring into marker-prefixed chunks.
//!
//! A marker code is chosen to be provably disjoint from every code in the
//! ring (one past the maximum, bumped while present), then inserted before
//! each chunk. Removal simply drops every occurrence of the marker, which
//! is safe exactly because of how it was chosen.

use std::collections::HashSet;

/// Pick the framing marker for a ring: `max(ring) + 1`, bumped until it does
/// not occur in the ring.
pub fn select_marker(ring: &[u32]) -> u32 {
    let max = ring.iter().copied().max().unwrap_or(0);
    let members: HashSet<u32> = ring.iter().copied().collect();
    let mut marker = max + 1;
    while members.contains(&marker) {
        marker += 1;
    }
    marker
}

/// Interleave `marker` before every chunk of `chunk_size` codes.
pub fn insert_markers(ring: &[u32], marker: u32, chunk_size: usize) -> Vec<u32> {
    debug_assert!(chunk_size > 0);
    let chunks = ring.len().div_ceil(chunk_size);
    let mut out = Vec::with_capacity(ring.len() + chunks);
    for chunk in ring.chunks(chunk_size) {
        out.push(marker);
        out.extend_from_slice(chunk);
    }
    out
}

/// Drop every occurrence of `marker` from a framed stream.
pub fn remove_markers(framed: &[u32], marker: u32) -> Vec<u32> {
    framed.iter().copied().filter(|&c| c != marker).collect()
}
