//! Convert command - turn one order PDF into an XLSX workbook.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use pedido_core::{XLSX_MIME, convert_pdf};

use super::{load_config, read_pdf};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Input order PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Directory for the workbook, named after the order (default: current dir)
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Exact output path, overriding the derived file name
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Overwrite an existing workbook
    #[arg(long)]
    force: bool,

    /// Do not show the progress spinner
    #[arg(short, long)]
    quiet: bool,
}

pub fn run(args: ConvertArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let data = read_pdf(&args.input)?;
    info!("Processing file: {}", args.input.display());

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Processing PDF...");

    let conversion = match convert_pdf(&data, &config) {
        Ok(conversion) => conversion,
        Err(e) => {
            pb.finish_and_clear();
            eprintln!("{} Failed to process PDF", style("✗").red());
            return Err(e.into());
        }
    };
    pb.finish_and_clear();

    let output_path = match args.output {
        Some(path) => path,
        None => args
            .output_dir
            .unwrap_or_else(|| PathBuf::from("."))
            .join(&conversion.filename),
    };

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Output file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, &conversion.workbook)?;

    for warning in &conversion.warnings {
        eprintln!("{} {}", style("!").yellow(), warning);
    }

    println!(
        "{} Order processed: {} items",
        style("✓").green(),
        conversion.order.items.len()
    );
    println!(
        "{} Workbook written to {}",
        style("✓").green(),
        output_path.display()
    );

    debug!(
        "Wrote {} bytes ({}) in {:?}",
        conversion.workbook.len(),
        XLSX_MIME,
        start.elapsed()
    );

    Ok(())
}
