//! Binary entry point for the `gunzip` command-line tool.
//!
//! Decompress-only: reads a single-member `.gz` file in one shot and writes
//! the decoded bytes to a file or to standard output. The output buffer is
//! sized from the trailer ISIZE hint; since ISIZE stores only the low 32
//! bits of the uncompressed length, the buffer grows and the decode retries
//! whenever the container layer reports insufficient output space.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use gzip::container::types::GZIP_MIN_OVERHEAD;
use gzip::{gzip_decompress_ex, Decompressor, GzipError};

#[derive(Parser)]
#[command(
    name = "gunzip",
    version = gzip::GZIPR_VERSION_STRING,
    about = "Decompress a single-member gzip file"
)]
struct Args {
    /// Input file (must end in .gz unless -o or -c is given).
    input: PathBuf,

    /// Write output to FILE instead of stripping the .gz suffix.
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write output to standard output.
    #[arg(short = 'c', long)]
    stdout: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("gunzip: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let data = fs::read(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    let (decoded, member_len) = decode_buffer(&data)
        .with_context(|| format!("{}", args.input.display()))?;

    if member_len < data.len() {
        eprintln!(
            "gunzip: {}: ignoring {} trailing byte(s) after the gzip member",
            args.input.display(),
            data.len() - member_len
        );
    }

    if args.stdout {
        io::stdout()
            .write_all(&decoded)
            .context("cannot write to stdout")?;
        return Ok(());
    }

    let dest = match &args.output {
        Some(path) => path.clone(),
        None => strip_gz_suffix(&args.input)?,
    };
    fs::write(&dest, &decoded).with_context(|| format!("cannot write {}", dest.display()))?;
    Ok(())
}

/// Decode one member from `data`, returning the output bytes and the
/// member's exact length within the buffer.
fn decode_buffer(data: &[u8]) -> Result<(Vec<u8>, usize)> {
    if data.len() < GZIP_MIN_OVERHEAD {
        bail!("not a gzip file (too short)");
    }

    // ISIZE hint from the last 4 bytes. It lies when the member wrapped
    // past 4 GiB or when trailing data follows the member, so it is only
    // a starting guess: capped by DEFLATE's worst-case expansion of the
    // whole file (1032:1), corrected by the retry loop below.
    let tail = data.len() - 4;
    let isize_hint = u32::from_le_bytes([
        data[tail],
        data[tail + 1],
        data[tail + 2],
        data[tail + 3],
    ]) as usize;

    let ratio_bound = data.len().saturating_mul(1032);
    let mut capacity = isize_hint.clamp(1, ratio_bound);
    let mut d = Decompressor::new();
    loop {
        let mut out = vec![0u8; capacity];
        match gzip_decompress_ex(&mut d, data, &mut out) {
            Ok(info) => {
                out.truncate(info.out_nbytes);
                return Ok((out, info.in_nbytes));
            }
            Err(GzipError::InsufficientSpace) => {
                capacity = capacity
                    .checked_mul(2)
                    .context("decompressed size exceeds addressable memory")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Derive the default output path by removing a trailing `.gz`.
fn strip_gz_suffix(input: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .context("input path has no usable file name")?;
    let Some(stem) = name.strip_suffix(".gz") else {
        bail!("{}: unknown suffix; use -o or -c", input.display());
    };
    if stem.is_empty() {
        bail!("{}: nothing left after removing .gz; use -o or -c", input.display());
    }
    Ok(input.with_file_name(stem))
}
