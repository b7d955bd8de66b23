//! CLI tool for turning extracted pitch deck text into classified slides.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use deck_core::{
    DeckParser, ExtractedDocument, OutlineFormatter, ParseResult, PlainTextExtractor,
    SourceFormat, TextExtractor,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Split extracted pitch deck text into typed slides.
#[derive(Parser, Debug)]
#[command(name = "deck-parse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file(s) extracted from a deck, pages separated by form feeds
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Page count of the source PDF (required when the text has no form feeds)
    #[arg(long)]
    pages: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Include slide content in outline output
    #[arg(long)]
    content: bool,

    /// Leave bullet points out of outline output
    #[arg(long)]
    no_bullets: bool,

    /// Keep ligatures and other compatibility characters as extracted
    #[arg(long)]
    no_unicode_folding: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Pretty-printed JSON of the parse result
    Json,
    /// Human-readable slide outline
    Outline,
}

impl OutputFormat {
    fn suffix(&self) -> &'static str {
        match self {
            OutputFormat::Json => "slides.json",
            OutputFormat::Outline => "outline.txt",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let failed = run(&args);
    if failed > 0 {
        anyhow::bail!("{} of {} files failed", failed, args.input.len());
    }

    Ok(())
}

/// Process every input file. Returns the number of files that failed.
fn run(args: &Args) -> usize {
    let parser = DeckParser::new().with_unicode_folding(!args.no_unicode_folding);
    let formatter = OutlineFormatter::new()
        .with_content(args.content)
        .with_bullets(!args.no_bullets);
    let extractor = PlainTextExtractor::new();

    let mut failed = 0;
    for input_path in &args.input {
        log::info!("Processing: {}", input_path.display());

        let outcome = process_file(input_path, args, &extractor, &parser, &formatter)
            .and_then(|output| emit(input_path, args, &output));

        if let Err(e) = outcome {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failed += 1;
        }
    }

    failed
}

/// Process a single extracted text file.
fn process_file(
    input_path: &Path,
    args: &Args,
    extractor: &dyn TextExtractor,
    parser: &DeckParser,
    formatter: &OutlineFormatter,
) -> Result<String> {
    if input_path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(SourceFormat::from_extension)
        == Some(SourceFormat::Pdf)
    {
        anyhow::bail!("PDF input is not decoded here; extract its text first (e.g. pdftotext)");
    }

    let mut document = extractor
        .extract_file(input_path)
        .with_context(|| format!("{} backend failed", extractor.backend_name()))?;

    document.page_count = resolve_page_count(&document, args.pages)?;

    log::debug!(
        "  {} bytes, {} pages",
        document.file_size,
        document.page_count
    );

    let result = parser.parse_extracted(&document);

    if result.success {
        log::info!(
            "  Found {} slides (confidence {})",
            result.metadata.total_slides,
            result.metadata.confidence
        );
    } else if let Some(error) = &result.error {
        log::warn!("  {}", error);
    }

    render(&result, args.format, formatter)
}

/// Page count handed to the parser.
///
/// `--pages` wins. Otherwise the extractor's form-feed count is used, which
/// is only meaningful when the text actually contains page breaks.
fn resolve_page_count(document: &ExtractedDocument, pages: Option<usize>) -> Result<usize> {
    if let Some(pages) = pages {
        return Ok(pages);
    }

    if document.text.contains('\x0c') || document.text.trim().is_empty() {
        return Ok(document.page_count);
    }

    anyhow::bail!(
        "text has no form-feed page breaks; pass --pages with the page count of the source PDF"
    )
}

/// Print the output or write it next to the input (or into `--output`).
fn emit(input_path: &Path, args: &Args, output: &str) -> Result<()> {
    if args.print {
        print!("{}", output);
        return Ok(());
    }

    let output_path = get_output_path(input_path, args.output.as_ref(), args.format)?;
    write_output(&output_path, output)?;
    log::info!("Written to: {}", output_path.display());

    Ok(())
}

/// Render a parse result in the requested format.
fn render(result: &ParseResult, format: OutputFormat, formatter: &OutlineFormatter) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)
                .context("Failed to serialize parse result")?;
            Ok(format!("{}\n", json))
        }
        OutputFormat::Outline => Ok(formatter.format_with_summary(result)),
    }
}

/// Determine the output path for a processed file.
fn get_output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.{}", stem, format.suffix());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
