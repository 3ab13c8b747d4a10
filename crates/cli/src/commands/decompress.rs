use anyhow::{Context, Result};
use chromozip_codec::{CircularCompressor, CompressorConfig};
use std::fs;
use std::path::Path;

use crate::archive;

pub fn run(input: &Path, output: &Path, lenient: bool, verbose: bool) -> Result<()> {
    let (codes, metadata) = archive::read(input)?;

    let config = CompressorConfig {
        chunk_size: metadata.chunk_size,
        strict: !lenient,
        verbose,
        ..Default::default()
    };
    let codec = CircularCompressor::new(config)?;

    let data = codec
        .decompress(&codes, &metadata)
        .with_context(|| format!("failed to decompress {}", input.display()))?;

    fs::write(output, &data)
        .with_context(|| format!("failed to write output file {}", output.display()))?;

    println!(
        "Decompressed {} -> {} ({} bytes)",
        input.display(),
        output.display(),
        data.len()
    );
    Ok(())
}
