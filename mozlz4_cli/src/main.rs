use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, Level};

use mozlz4_core::{decode, decode_json, encode, inspect};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "mozlz4",
    about = "Mozilla JSON LZ4 tool — decompress, compress, and inspect jsonlz4/mozlz4 files",
    after_help = "Only the Mozilla container is supported (jsonlz4, mozlz4, baklz4 files).\nStandard .lz4 frame files need the regular lz4 tool.",
    version
)]
struct Cli {
    /// Print debug logs and the output path and size
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompress a jsonlz4 file to pretty-printed JSON
    Decompress {
        /// Source jsonlz4 file ("-" reads stdin)
        input: PathBuf,
        /// Destination file ("-" writes to stdout)
        output: PathBuf,
        /// Write the decompressed bytes as-is instead of reformatting JSON
        #[arg(long)]
        raw: bool,
    },
    /// Compress a file into a jsonlz4 container
    Compress {
        /// Source file ("-" reads stdin)
        input: PathBuf,
        /// Destination jsonlz4 file ("-" writes to stdout)
        output: PathBuf,
        /// Require the input to be valid JSON and store it minified
        #[arg(long)]
        json: bool,
    },
    /// Print the container header without decompressing
    Inspect {
        /// jsonlz4 file to inspect
        file: PathBuf,
    },
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some("-")
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if is_stdio(path) {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("Unable to read stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("Unable to read '{}'", path.display()))
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if is_stdio(path) {
        let mut out = io::stdout().lock();
        out.write_all(bytes).context("Unable to write to stdout")?;
        return out.flush().context("Unable to write to stdout");
    }
    let mut file =
        File::create(path).with_context(|| format!("Unable to write to '{}'", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("Unable to write to '{}'", path.display()))
}

/// Four-space indented JSON with a trailing newline, non-ASCII left as-is.
fn pretty_json(value: &serde_json::Value) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

fn report(verbose: bool, output: &Path, written: usize) {
    if verbose && !is_stdio(output) {
        eprintln!(
            "Output file '{}' created. {} bytes output.",
            output.display(),
            written
        );
    }
}

fn human_bytes(n: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", n)
    } else {
        format!("{:.2} {}", v, UNITS[unit])
    }
}

// ── Subcommand implementations ─────────────────────────────────────────────

fn run_decompress(input: PathBuf, output: PathBuf, raw: bool, verbose: bool) -> anyhow::Result<()> {
    let container = read_input(&input)?;
    let context = || format!("Unable to perform operations on file '{}'", input.display());

    let bytes = if raw {
        decode(&container).with_context(context)?
    } else {
        let value = decode_json(&container).with_context(context)?;
        pretty_json(&value)?
    };
    debug!(input = %input.display(), bytes = bytes.len(), raw, "decompressed");

    write_output(&output, &bytes)?;
    report(verbose, &output, bytes.len());
    Ok(())
}

fn run_compress(input: PathBuf, output: PathBuf, json: bool, verbose: bool) -> anyhow::Result<()> {
    let mut data = read_input(&input)?;
    if json {
        let value: serde_json::Value = serde_json::from_slice(&data)
            .with_context(|| format!("'{}' is not valid JSON", input.display()))?;
        data = serde_json::to_vec(&value)?;
    }

    let container = encode(&data)
        .with_context(|| format!("Unable to perform operations on file '{}'", input.display()))?;
    debug!(input = %input.display(), raw = data.len(), compressed = container.len(), "compressed");

    write_output(&output, &container)?;
    report(verbose, &output, container.len());
    Ok(())
}

fn run_inspect(file: PathBuf) -> anyhow::Result<()> {
    let container = read_input(&file)?;
    let info = inspect(&container)
        .with_context(|| format!("Unable to perform operations on file '{}'", file.display()))?;

    println!("=== mozlz4 file: {} ===", file.display());
    println!();
    println!("  uncompressed   : {} ({} bytes)", human_bytes(info.uncompressed_size()), info.uncompressed_size());
    println!("  lz4 block      : {} ({} bytes)", human_bytes(info.block_len as u64), info.block_len);
    println!("  file on disk   : {} ({} bytes)", human_bytes(info.container_len as u64), info.container_len);
    println!("  ratio          : {:.2}x", info.ratio());
    Ok(())
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match cli.command {
        Commands::Decompress { input, output, raw } => {
            run_decompress(input, output, raw, cli.verbose)
        }
        Commands::Compress {
            input,
            output,
            json,
        } => run_compress(input, output, json, cli.verbose),
        Commands::Inspect { file } => run_inspect(file),
    }
}
