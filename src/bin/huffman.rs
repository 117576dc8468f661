//! Huffman coding demo
//!
//! Builds a tree from the input, encodes and decodes it, and prints the codes
//! and compression ratio.
//!
//! ## Usage
//!
//! ```bash
//! huffman "hello world"
//! huffman -f input.txt
//! huffman -f input.txt --max-display 40 --log-level debug
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use huffman::{CompressionStats, HuffmanTree};

#[derive(Parser, Debug)]
#[command(name = "huffman")]
#[command(version)]
#[command(about = "Huffman encode, decode, and report", long_about = None)]
struct Args {
    /// Text to encode
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    text: Option<String>,

    /// Read input from file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Truncate displayed text and bit-strings to this many characters
    #[arg(long, default_value = "100")]
    max_display: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: failed to install logger: {err}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the decoded output matched the input.
fn run(args: &Args) -> anyhow::Result<bool> {
    let input = match (&args.file, &args.text) {
        (Some(path), _) => {
            fs::read(path).with_context(|| format!("could not read file {}", path.display()))?
        }
        (None, Some(text)) => text.clone().into_bytes(),
        (None, None) => bail!("no input given"),
    };

    if input.is_empty() {
        bail!("input text is empty");
    }
    info!(bytes = input.len(), "read input");

    let mut engine = HuffmanTree::new();
    engine
        .build_tree(&input)
        .context("failed to build huffman tree")?;
    let encoded = engine.encode(&input).context("failed to encode input")?;
    let decoded = engine.decode(&encoded).context("failed to decode output")?;

    let stats = CompressionStats::new(input.len(), encoded.len());
    let max = args.max_display;

    println!("\n=== Huffman Compression ===\n");

    let text = String::from_utf8_lossy(&input);
    println!("Original text: {}", truncate(&text, max, "chars"));
    println!(
        "Original size: {} bits ({} bytes)\n",
        stats.original_bits,
        input.len()
    );

    println!("Huffman Codes:");
    for (symbol, code) in engine.codes().sorted() {
        println!("  {} -> {}", display_symbol(symbol), code);
    }

    println!();
    println!("Encoded: {}", truncate(&encoded, max, "bits"));
    println!("{}\n", size_report(&stats));

    let verified = decoded == input;
    println!(
        "Verification: {}\n",
        if verified { "SUCCESS" } else { "FAILED" }
    );

    Ok(verified)
}

fn size_report(stats: &CompressionStats) -> String {
    format!(
        "Encoded size: {} bits\nSpace saved: {} bits\nCompression ratio: {:.2}%",
        stats.encoded_bits,
        stats.space_saved_bits(),
        stats.ratio_percent()
    )
}

fn truncate(text: &str, max: usize, unit: &str) -> String {
    let total = text.chars().count();
    if total <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}... ({total} {unit} total)")
}

fn display_symbol(byte: u8) -> String {
    match byte {
        b' ' => "' '".to_string(),
        b'\n' => "'\\n'".to_string(),
        b'\t' => "'\\t'".to_string(),
        b'\r' => "'\\r'".to_string(),
        b if b.is_ascii_graphic() => format!("'{}'", b as char),
        b => format!("'\\x{b:02x}'"),
    }
}
