//! File compression tool fronting the codec library.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

/// Canonical Huffman file compressor.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Compress the input file.
    #[arg(long)]
    compress: bool,

    /// Decompress the input file.
    #[arg(long)]
    decompress: bool,

    /// Path to read.
    #[arg(long)]
    input: PathBuf,

    /// Path to write.
    #[arg(long)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.compress == args.decompress {
        bail!("choose one mode [--compress/--decompress]");
    }

    let input = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let output = File::create(&args.output)
        .with_context(|| format!("failed to open {}", args.output.display()))?;

    let mut src = BufReader::new(input);
    let mut dst = BufWriter::new(output);
    if args.compress {
        huffc::encode(&mut src, &mut dst)
            .with_context(|| format!("failed to compress {}", args.input.display()))?;
    } else {
        huffc::decode(&mut src, &mut dst)
            .with_context(|| format!("failed to decompress {}", args.input.display()))?;
    }
    dst.flush().context("failed to flush output")?;
    Ok(())
}
