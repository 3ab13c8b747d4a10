//! Circular encapsulation of a code stream.
//!
//! The code stream is zero-padded up to the next prime length, then the
//! first few codes are repeated at the tail as a bridge so the structure
//! closes on itself. Prime padding keeps the ring length coprime with
//! likely pattern periods in the payload; the decapsulator only ever reads
//! the first `prime` positions, so padding and bridge are structural.

/// Maximum bridge length in codes.
pub const MAX_BRIDGE_LENGTH: usize = 10;

/// Least prime `>= n`, treating `n <= 2` as 2.
pub fn next_prime(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }
    let mut candidate = n;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Bridge length for a ring of prime length `prime_len`.
pub fn bridge_length(prime_len: usize) -> usize {
    ((prime_len as f64).sqrt() as usize).min(MAX_BRIDGE_LENGTH)
}

/// Build the pre-framed ring: pad with zeros to the next prime length, then
/// append the first `bridge_length` codes again.
///
/// An empty stream encapsulates to an empty ring.
pub fn encapsulate(codes: &[u32]) -> Vec<u32> {
    if codes.is_empty() {
        return Vec::new();
    }
    let prime_len = next_prime(codes.len());
    let bridge_len = bridge_length(prime_len);

    let mut ring = Vec::with_capacity(prime_len + bridge_len);
    ring.extend_from_slice(codes);
    ring.resize(prime_len, 0);
    let bridge: Vec<u32> = ring[..bridge_len].to_vec();
    ring.extend_from_slice(&bridge);
    ring
}
