mod archive;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{compress, decompress, stats};

/// chromozip - circular-chromosome file compressor
#[derive(Parser, Debug)]
#[command(name = "chromozip")]
#[command(author, version, about = "Circular-chromosome file compressor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compress a file into a chromosome archive
    Compress {
        /// Input file
        input: PathBuf,

        /// Output archive
        output: PathBuf,

        /// Codes between framing markers
        #[arg(long, default_value_t = 1000)]
        chunk_size: usize,

        /// Recover from anomalies with warnings instead of failing
        #[arg(long)]
        lenient: bool,

        /// Emit per-stage trace lines (requires RUST_LOG=debug)
        #[arg(long)]
        verbose: bool,
    },

    /// Restore the original file from a chromosome archive
    Decompress {
        /// Input archive
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Recover from anomalies with warnings instead of failing
        #[arg(long)]
        lenient: bool,

        /// Emit per-stage trace lines (requires RUST_LOG=debug)
        #[arg(long)]
        verbose: bool,
    },

    /// Show compression diagnostics for a file and its archive
    Stats {
        /// Original file
        input: PathBuf,

        /// Archive produced from it
        archive: PathBuf,

        /// Output format (pretty, json)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compress {
            input,
            output,
            chunk_size,
            lenient,
            verbose,
        } => compress::run(&input, &output, chunk_size, lenient, verbose),
        Commands::Decompress {
            input,
            output,
            lenient,
            verbose,
        } => decompress::run(&input, &output, lenient, verbose),
        Commands::Stats {
            input,
            archive,
            format,
        } => stats::run(&input, &archive, &format),
    }
}
