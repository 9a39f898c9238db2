//! Extract command - pull card fields from a single OCR line file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use idcr_core::models::card::KtpData;
use idcr_core::models::config::ExtractionConfig;
use idcr_core::models::ocr::lines_from_json;
use idcr_core::{CardExtractor, KtpParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file with OCR lines (text, JSON payload, or "-" for stdin)
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Treat input as an OCR JSON payload regardless of extension
    #[arg(long)]
    json_input: bool,

    /// Print warnings for fields that could not be extracted
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let lines = read_lines(&args.input, args.json_input)?;

    info!("Extracting card fields from {} lines", lines.len());

    let parser = KtpParser::new().with_config(config);
    let result = parser.extract(&lines);
    let card = result.to_card();

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_card(&card, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load the extraction config, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ExtractionConfig> {
    match config_path {
        Some(path) => Ok(ExtractionConfig::from_file(Path::new(path))?),
        None => Ok(ExtractionConfig::default()),
    }
}

/// Read OCR lines from a file or stdin.
///
/// `.json` inputs (or `force_json`) are decoded as an OCR payload or a
/// bare string array; anything else is split on newlines.
pub fn read_lines(input: &str, force_json: bool) -> anyhow::Result<Vec<String>> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        let path = Path::new(input);
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        fs::read_to_string(path)?
    };

    let extension = Path::new(input)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if force_json || extension == "json" {
        Ok(lines_from_json(&raw)?)
    } else {
        Ok(raw.lines().map(str::to_string).collect())
    }
}

/// Render the card in the requested output format.
pub fn format_card(card: &KtpData, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(card)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for (key, value) in card.entries() {
                let shown = if value.is_empty() { "-" } else { value };
                out.push_str(&format!("{:<20} {}\n", format!("{}:", key), shown));
            }
            let missing = card.missing_fields().len();
            if missing > 0 {
                out.push_str(&format!("\n{} field(s) not detected\n", missing));
            }
            Ok(out)
        }
    }
}
