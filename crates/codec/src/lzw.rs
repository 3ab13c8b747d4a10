//! LZW coding over the base alphabet, with a dynamic dictionary reset.
//!
//! The dictionary is bounded at [`MAX_DICT_SIZE`] entries. When it
//! saturates, the encoder emits [`RESET_CODE`] and both sides drop back to
//! the four seed entries, so learned codes keep tracking local statistics on
//! long inputs. The reset code sits *outside* the 16-bit code range: a
//! learned code can never alias it, which is what makes the protocol sound.
//! Code slots are `u32` throughout; 16-bit storage cannot represent the
//! reset code and must not be used.
//!
//! Dictionaries never hold expanded strings. The encoder keys entries by
//! `(prefix code, next symbol)`; the decoder stores `(parent code, symbol)`
//! pairs and materializes an entry only while writing it to the output
//! buffer.

use std::collections::HashMap;

use log::warn;

use crate::base::DnaSequence;
use crate::error::CodecError;

/// Dictionary capacity, seed entries included.
pub const MAX_DICT_SIZE: u32 = 65536;

/// Distinguished code signaling a dictionary reset. Outside the 16-bit
/// range, so no learned code can collide with it.
pub const RESET_CODE: u32 = 65536;

/// Number of seed entries (one per base).
const BASE_CODES: u32 = 4;

/// Compress a sequence into a code stream.
pub fn compress(seq: &DnaSequence) -> Vec<u32> {
    let mut dict: HashMap<(u32, u8), u32> = HashMap::new();
    let mut next_code = BASE_CODES;
    let mut out = Vec::with_capacity(seq.len() / 4 + 1);
    let mut prefix: Option<u32> = None;

    for &symbol in seq.as_indices() {
        let current = match prefix {
            // The seed dictionary always contains the single-base string.
            None => {
                prefix = Some(u32::from(symbol));
                continue;
            }
            Some(code) => code,
        };

        match dict.get(&(current, symbol)) {
            Some(&code) => prefix = Some(code),
            None => {
                out.push(current);
                if next_code < MAX_DICT_SIZE {
                    dict.insert((current, symbol), next_code);
                    next_code += 1;
                } else {
                    // Saturated: signal a reset and relearn from scratch.
                    // The pair that triggered the reset is *not* inserted.
                    out.push(RESET_CODE);
                    dict.clear();
                    next_code = BASE_CODES;
                }
                prefix = Some(u32::from(symbol));
            }
        }
    }

    if let Some(code) = prefix {
        out.push(code);
    }
    out
}

/// A learned dictionary entry: the parent's string plus one symbol.
struct Entry {
    parent: u32,
    symbol: u8,
}

/// Decompress a code stream back into a sequence.
///
/// In lenient mode an invalid code truncates decompression at the failure
/// point with a warning; an out-of-range code is dropped. The first code of
/// a stream must not be the reset code.
pub fn decompress(codes: &[u32], strict: bool) -> Result<DnaSequence, CodecError> {
    if codes.is_empty() {
        return Ok(DnaSequence::new());
    }
    if codes[0] == RESET_CODE {
        return Err(CodecError::Format(
            "first code cannot be the reset code".to_string(),
        ));
    }

    let mut dict: Vec<Entry> = Vec::new();
    let mut next_code = BASE_CODES;
    let mut out: Vec<u8> = Vec::with_capacity(codes.len() * 2);
    // Previously decoded string, as (code, first symbol).
    let mut prev: Option<(u32, u8)> = None;

    for (position, &code) in codes.iter().enumerate() {
        if code > RESET_CODE {
            if strict {
                return Err(CodecError::Format(format!(
                    "out-of-range code {code} at position {position}"
                )));
            }
            warn!("dropping out-of-range code {code} at position {position}");
            continue;
        }

        if code == RESET_CODE {
            dict.clear();
            next_code = BASE_CODES;
            prev = None;
            continue;
        }

        let entry_first = if code < next_code {
            materialize(&dict, code, &mut out)
        } else if code == next_code {
            match prev {
                // The KwKwK case: the entry being referenced is the one
                // about to be learned, prev + prev[0].
                Some((prev_code, prev_first)) => {
                    materialize(&dict, prev_code, &mut out);
                    out.push(prev_first);
                    prev_first
                }
                None => {
                    if strict {
                        return Err(CodecError::InvalidCode {
                            code,
                            position,
                            next_code,
                        });
                    }
                    warn!(
                        "invalid code {code} at position {position} with no previous entry; \
                         truncating after {} bases",
                        out.len()
                    );
                    break;
                }
            }
        } else {
            if strict {
                return Err(CodecError::InvalidCode {
                    code,
                    position,
                    next_code,
                });
            }
            warn!(
                "invalid code {code} at position {position} (next code: {next_code}); \
                 truncating after {} bases",
                out.len()
            );
            break;
        };

        // Learn prev + entry[0]. Skipped on the first code after a reset,
        // exactly mirroring the encoder's no-insert-on-reset rule.
        if let Some((prev_code, _)) = prev {
            if next_code < MAX_DICT_SIZE {
                dict.push(Entry {
                    parent: prev_code,
                    symbol: entry_first,
                });
                next_code += 1;
            }
        }
        prev = Some((code, entry_first));
    }

    Ok(DnaSequence::from_raw_indices(out))
}

/// Write the string for `code` to `out` and return its first symbol.
///
/// Walks the parent chain (which yields the string reversed) and flips the
/// emitted span in place.
fn materialize(dict: &[Entry], code: u32, out: &mut Vec<u8>) -> u8 {
    let start = out.len();
    let mut current = code;
    loop {
        if current < BASE_CODES {
            out.push(current as u8);
            break;
        }
        let entry = &dict[(current - BASE_CODES) as usize];
        out.push(entry.symbol);
        current = entry.parent;
    }
    out[start..].reverse();
    out[start]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn seq(s: &str) -> DnaSequence {
        s.parse().expect("valid test sequence")
    }

    #[test]
    fn test_empty() {
        assert!(compress(&DnaSequence::new()).is_empty());
        assert!(decompress(&[], true).unwrap().is_empty());
    }

    #[test]
    fn test_single_base() {
        let codes = compress(&seq("G"));
        assert_eq!(codes, vec![2]);
        assert_eq!(decompress(&codes, true).unwrap().to_string(), "G");
    }

    #[test]
    fn test_known_code_stream() {
        // GCGCGCGCG: emits G, C, GC, GCG, C and learns GC, CG, GCG, GCGC
        let codes = compress(&seq("GCGCGCGCG"));
        assert_eq!(codes, vec![2, 1, 4, 6, 1]);
    }

    #[test]
    fn test_kwkwk_branch() {
        // Code 6 equals next_code when the decoder reaches it
        let decoded = decompress(&[2, 1, 4, 6, 1], true).unwrap();
        assert_eq!(decoded.to_string(), "GCGCGCGCG");
    }

    #[test]
    fn test_round_trip_simple() {
        for s in ["A", "ACGT", "AAAAAA", "ATCGATCGATCGATCGAAAAAATCGATCGATCG"] {
            let input = seq(s);
            let codes = compress(&input);
            assert!(!codes.contains(&RESET_CODE), "no reset expected for {s}");
            let decoded = decompress(&codes, true).unwrap();
            assert_eq!(decoded, input, "round trip failed for {s}");
        }
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let len = rng.gen_range(1..4000);
            let indices: Vec<u8> = (0..len).map(|_| rng.gen_range(0..4)).collect();
            let input = DnaSequence::from_raw_indices(indices);
            let codes = compress(&input);
            let decoded = decompress(&codes, true).unwrap();
            assert_eq!(decoded, input);
        }
    }

    #[test]
    fn test_dictionary_reset_round_trip() {
        // High-entropy input saturates the dictionary well before 2M bases
        let mut rng = rand::thread_rng();
        let indices: Vec<u8> = (0..2_000_000).map(|_| rng.gen_range(0..4)).collect();
        let input = DnaSequence::from_raw_indices(indices);

        let codes = compress(&input);
        assert!(
            codes.contains(&RESET_CODE),
            "expected at least one dictionary reset"
        );
        let decoded = decompress(&codes, true).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_first_code_reset_rejected() {
        let err = decompress(&[RESET_CODE, 0], true).unwrap_err();
        assert!(matches!(err, CodecError::Format(_)));
    }

    #[test]
    fn test_out_of_range_code_strict() {
        let err = decompress(&[0, RESET_CODE + 1], true).unwrap_err();
        assert!(matches!(err, CodecError::Format(_)));
    }

    #[test]
    fn test_invalid_code_strict() {
        // Code 9 cannot exist yet: only one entry has been learned
        let err = decompress(&[0, 1, 9], true).unwrap_err();
        match err {
            CodecError::InvalidCode {
                code,
                position,
                next_code,
            } => {
                assert_eq!(code, 9);
                assert_eq!(position, 2);
                assert_eq!(next_code, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_code_lenient_truncates() {
        let decoded = decompress(&[0, 1, 9, 2, 3], false).unwrap();
        // Lenient mode stops at the bad code and keeps what was decoded
        assert_eq!(decoded.to_string(), "AC");
    }

    #[test]
    fn test_reset_mid_stream() {
        // A, C, reset, then a fresh start: G, T
        let decoded = decompress(&[0, 1, RESET_CODE, 2, 3], true).unwrap();
        assert_eq!(decoded.to_string(), "ACGT");
    }

    #[test]
    fn test_learned_code_after_reset_rejected() {
        // Directly after a reset only the four seed codes are known
        let err = decompress(&[0, 1, RESET_CODE, 4], true).unwrap_err();
        assert!(matches!(err, CodecError::InvalidCode { code: 4, .. }));
    }
}
