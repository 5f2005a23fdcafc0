//! Extract document outlines to JSON.
//!
//! Writes one `<stem>.json` per input into the output directory.
//!
//! # Usage
//!
//! ```bash
//! # A single layout dump
//! pdf-outline input/report.json -o output/
//!
//! # Every supported file in a directory
//! pdf-outline input/ -o output/
//!
//! # Custom configuration, first 20 pages only
//! pdf-outline input/ --config outline.json --page-limit 20
//! ```
//!
//! Set `RUST_LOG=debug` to see each heading and the rule that produced it.

use clap::Parser;
use pdf_outliner::batch;
use pdf_outliner::{OutlineConfig, OutlineExtractor};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Infer a title and H1/H2/H3 outline from PDF layout
#[derive(Parser, Debug)]
#[command(name = "pdf-outline")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file or directory
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of pages to scan for headings
    #[arg(long)]
    page_limit: Option<usize>,
}

fn load_config(args: &Args) -> pdf_outliner::Result<OutlineConfig> {
    let mut config = match &args.config {
        Some(path) => OutlineConfig::from_json_file(path)?,
        None => OutlineConfig::default(),
    };
    if let Some(limit) = args.page_limit {
        config = config.with_page_limit(limit);
        config.validate()?;
    }
    Ok(config)
}

fn run(args: &Args) -> pdf_outliner::Result<bool> {
    let extractor = OutlineExtractor::with_config(load_config(args)?);

    if args.input.is_dir() {
        let summary = batch::process_dir(&extractor, &args.input, &args.output_dir)?;
        println!("Processed {} file(s), {} failed", summary.processed, summary.failed);
        Ok(summary.failed == 0)
    } else {
        fs::create_dir_all(&args.output_dir)?;
        let written = batch::process_file(&extractor, &args.input, &args.output_dir)?;
        println!("Wrote {}", written.display());
        Ok(true)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
