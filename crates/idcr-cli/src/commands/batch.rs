//! Batch command - extract fields from multiple OCR line files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use idcr_core::{CardExtractor, KtpParser};

use super::extract::{load_config, read_lines};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "json")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = KtpParser::new().with_config(config);
    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for path in &files {
        match process_file(path, &parser, args.output_dir.as_deref()) {
            Ok(missing) => {
                debug!(
                    "{}: extracted with {} missing field(s)",
                    path.display(),
                    missing
                );
                succeeded += 1;
            }
            Err(e) => {
                error!("{}: {}", path.display(), e);
                failed += 1;
                if !args.continue_on_error {
                    pb.finish_and_clear();
                    return Err(e);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    println!(
        "{} Processed {} file(s) in {:.1}s ({} failed)",
        style("✓").green(),
        succeeded,
        start.elapsed().as_secs_f32(),
        failed
    );

    Ok(())
}

/// Process one input file; returns the number of missing fields.
fn process_file(
    path: &Path,
    parser: &KtpParser,
    output_dir: Option<&Path>,
) -> anyhow::Result<usize> {
    let input = path.to_string_lossy();
    let lines = read_lines(&input, false)?;
    let result = parser.extract(&lines);
    let card = result.to_card();

    let json = serde_json::to_string_pretty(&card)?;
    match output_dir {
        Some(dir) => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            fs::write(dir.join(format!("{}.json", stem)), json)?;
        }
        None => println!("{}", json),
    }

    Ok(card.missing_fields().len())
}
