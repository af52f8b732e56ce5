//! Inspect command - show the extracted order without writing a workbook.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use pedido_core::{
    ExtractionResult, LayoutParser, LineItem, OrderParser, PdfExtractor, PdfProcessor,
};

use super::{load_config, read_pdf};

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Input order PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Include the raw extracted text
    #[arg(long)]
    raw_text: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary
    Text,
    /// JSON output
    Json,
}

pub fn run(args: InspectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let data = read_pdf(&args.input)?;

    let mut extractor =
        PdfExtractor::new().with_empty_password_decryption(config.pdf.decrypt_empty_password);
    extractor.load(&data)?;
    let text = extractor.extract_text()?;
    info!(
        "Extracted {} characters from {} pages",
        text.len(),
        extractor.page_count()
    );

    let result = LayoutParser::new()
        .with_sentinel(config.layout.sentinel.clone())
        .parse(&text);

    let output = match args.format {
        OutputFormat::Json => format_json(&result, args.raw_text)?,
        OutputFormat::Text => format_text(&result, args.raw_text)?,
    };
    println!("{}", output);

    Ok(())
}

fn format_json(result: &ExtractionResult, raw_text: bool) -> anyhow::Result<String> {
    let mut value = serde_json::to_value(result)?;
    if !raw_text {
        if let Some(obj) = value.as_object_mut() {
            obj.remove("raw_text");
        }
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

fn format_text(result: &ExtractionResult, raw_text: bool) -> anyhow::Result<String> {
    let mut output = String::new();
    let order = &result.order;

    if raw_text {
        writeln!(output, "{}", style("Raw text:").bold())?;
        writeln!(output, "{}", result.raw_text)?;
        writeln!(output)?;
    }

    writeln!(output, "{}", style("Order:").bold())?;
    for field in &order.header.fields {
        writeln!(output, "  {:<18} {}", field.label.as_str(), field.value)?;
    }
    writeln!(output)?;

    writeln!(output, "{} ({})", style("Items:").bold(), order.items.len())?;
    for (i, item) in order.items.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, item.product)?;
        for (column, value) in LineItem::COLUMNS.iter().zip(item.cells()).skip(1) {
            writeln!(output, "     {:<15} {}", column, value)?;
        }
    }

    if !result.warnings.is_empty() {
        writeln!(output)?;
        writeln!(output, "{}", style("Warnings:").yellow())?;
        for warning in &result.warnings {
            writeln!(output, "  - {}", warning)?;
        }
    }

    Ok(output.trim_end().to_string())
}
