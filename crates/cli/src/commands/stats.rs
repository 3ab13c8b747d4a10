use anyhow::{bail, Context, Result};
use chromozip_codec::{compression_stats, CompressionStats};
use std::fs;
use std::path::Path;

use crate::archive;

pub fn run(input: &Path, archive_path: &Path, format: &str) -> Result<()> {
    let data = fs::read(input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;
    let (codes, metadata) = archive::read(archive_path)?;

    let stats = compression_stats(&data, &codes, &metadata);
    match format {
        "pretty" => print_pretty(&stats),
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        other => bail!("unknown format '{other}' (expected pretty or json)"),
    }
    Ok(())
}

fn print_pretty(stats: &CompressionStats) {
    println!("Compression diagnostics");
    println!("  Original size:       {} bytes", stats.original_size_bytes);
    println!("  Compressed size:     {} bytes", stats.compressed_size_bytes);
    println!("  Compression ratio:   {:.4}", stats.compression_ratio);
    println!("  Space savings:       {:.2}%", stats.space_savings_percent);
    println!("  Bits per base:       {:.4}", stats.bits_per_base);
    println!(
        "  Code stream:         {} codes, {} bits each (max code {})",
        stats.total_codes, stats.bits_per_code, stats.max_code_value
    );
    println!("\nShannon entropy analysis");
    println!(
        "  Input entropy:       {:.3} bits/byte",
        stats.original_entropy
    );
    println!(
        "  Code entropy:        {:.3} bits/byte",
        stats.compressed_entropy
    );
    println!("  Entropy reduction:   {:.3}", stats.entropy_reduction);
    println!(
        "  Theoretical minimum: {:.0} bytes",
        stats.theoretical_minimum_size
    );
    println!(
        "  Shannon efficiency:  {:.3}",
        stats.shannon_efficiency
    );
    println!(
        "  Effectiveness:       {:.3}",
        stats.compression_effectiveness
    );
}
