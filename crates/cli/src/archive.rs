//! On-disk archive container.
//!
//! Layout: a 4-byte magic, a format version byte, a little-endian u32 length
//! for the JSON-serialized metadata header, the header bytes, then the
//! framed code stream as 32-bit little-endian integers. Codes need 32-bit
//! slots because the code space runs past the 16-bit range.

use anyhow::{bail, Context, Result};
use chromozip_codec::Metadata;
use std::fs;
use std::path::Path;

const MAGIC: [u8; 4] = *b"CCDZ";
const VERSION: u8 = 1;

/// Serialize codes and metadata into an archive file.
pub fn write(path: &Path, codes: &[u32], metadata: &Metadata) -> Result<()> {
    let header = serde_json::to_vec(metadata).context("failed to serialize metadata")?;

    let mut buf = Vec::with_capacity(MAGIC.len() + 1 + 4 + header.len() + codes.len() * 4);
    buf.extend_from_slice(&MAGIC);
    buf.push(VERSION);
    buf.extend_from_slice(&(header.len() as u32).to_le_bytes());
    buf.extend_from_slice(&header);
    for &code in codes {
        buf.extend_from_slice(&code.to_le_bytes());
    }

    fs::write(path, buf).with_context(|| format!("failed to write archive {}", path.display()))
}

/// Read an archive file back into codes and metadata.
pub fn read(path: &Path) -> Result<(Vec<u32>, Metadata)> {
    let buf =
        fs::read(path).with_context(|| format!("failed to read archive {}", path.display()))?;

    if buf.len() < MAGIC.len() + 1 + 4 {
        bail!("archive too short: {} bytes", buf.len());
    }
    if buf[..4] != MAGIC {
        bail!("not a chromozip archive (bad magic)");
    }
    if buf[4] != VERSION {
        bail!("unsupported archive version {}", buf[4]);
    }

    let header_len = u32::from_le_bytes([buf[5], buf[6], buf[7], buf[8]]) as usize;
    let header_end = 9 + header_len;
    if buf.len() < header_end {
        bail!("archive truncated inside metadata header");
    }
    let metadata: Metadata = serde_json::from_slice(&buf[9..header_end])
        .context("failed to parse metadata header")?;

    let payload = &buf[header_end..];
    if payload.len() % 4 != 0 {
        bail!(
            "archive code payload length {} is not a multiple of 4",
            payload.len()
        );
    }
    let codes = payload
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    Ok((codes, metadata))
}
