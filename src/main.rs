//! panel-layout - CLI tool to calculate sheet layouts for cutting jobs.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use panel_layout::{
    calculate_job, parse_job_file, validate_job, validate_layout, Job, LayoutConfig,
};

/// Calculate how many sheets a cut list needs and where each piece goes.
#[derive(Parser, Debug)]
#[command(name = "panel-layout")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input job file (JSON). Uses the built-in example job when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the layout as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't calculate a layout
    #[arg(long)]
    validate: bool,

    /// Print the layout as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let job = match &args.input {
        Some(path) => {
            info!("Processing: {}", path.display());
            parse_job_file(path).with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => {
            info!("No input given, using the example job");
            Job::default_example()
        }
    };

    // Validate
    let validation = validate_job(&job);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let layout = match calculate_job(&job) {
        Ok(layout) => layout,
        Err(err) if err.is_internal() => {
            error!("Unexpected failure: {}", err);
            return Err(err).context("Layout calculation hit an internal error");
        }
        Err(err) => return Err(err).context("Layout calculation failed"),
    };

    let check = validate_layout(&layout, &LayoutConfig::default());
    for err in &check.errors {
        error!("Layout self-check: {}", err);
    }

    info!("{}", layout);
    for sheet in &layout.sheets {
        info!(
            "Sheet {}: {} piece(s), used {:.2} mm², wasted {:.2} mm² ({:.1}%)",
            sheet.id,
            sheet.piece_count(),
            sheet.used_area,
            sheet.wasted_area,
            sheet.utilization_percent
        );
    }
    info!(
        "Total used {:.2} mm², wasted {:.2} mm², cut length {:.2} mm",
        layout.total_used_area, layout.total_wasted_area, layout.total_cut_perimeter
    );

    if args.json {
        let json = serde_json::to_string_pretty(&layout)?;
        println!("{}", json);
    }

    if let Some(output_path) = &args.output {
        let json = serde_json::to_string_pretty(&layout)?;
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        info!("Generated: {}", output_path.display());
    }

    Ok(())
}
