use anyhow::{Context, Result};
use chromozip_codec::{compression_stats, CircularCompressor, CompressorConfig};
use std::fs;
use std::path::Path;

use crate::archive;

pub fn run(
    input: &Path,
    output: &Path,
    chunk_size: usize,
    lenient: bool,
    verbose: bool,
) -> Result<()> {
    let data = fs::read(input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;

    let config = CompressorConfig {
        chunk_size,
        strict: !lenient,
        verbose,
        ..Default::default()
    };
    let codec = CircularCompressor::new(config)?;

    let (codes, metadata) = codec.compress(&data);
    archive::write(output, &codes, &metadata)?;

    let stats = compression_stats(&data, &codes, &metadata);
    println!("Compressed {} -> {}", input.display(), output.display());
    println!("  Original size:   {} bytes", stats.original_size_bytes);
    println!("  Compressed size: {} bytes", stats.compressed_size_bytes);
    println!(
        "  Ratio: {:.4} ({:.2}% savings)",
        stats.compression_ratio, stats.space_savings_percent
    );
    println!("  Bits per base: {:.4}", stats.bits_per_base);
    Ok(())
}
