//! Build the comparative results table for a study's analysis directory.
//!
//! Exit codes:
//!   0 - Table written (instances may have been skipped with warnings)
//!   1 - Missing manifest, invalid arguments, or write failure

use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use mocompare::cli::{OutputFormat, TableArgs};
use mocompare::config::Config;
use mocompare::models::RunSummary;
use mocompare::{report, table};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = TableArgs::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    init_logging(&args);

    info!("mocompare comparative-table v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("Aggregation failed: {}", e);
        eprintln!("\nError: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &TableArgs) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete aggregation workflow.
fn run(args: TableArgs) -> Result<()> {
    let started = Utc::now();
    let timer = Instant::now();

    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let manifest_path = args.analysis_dir.join(&config.table.manifest);
    let instances = table::read_manifest(&manifest_path)?;
    info!(
        "{} instance(s) listed in {}",
        instances.len(),
        manifest_path.display()
    );

    let bar = progress_bar(&args, instances.len() as u64);
    let outcome = table::build_table(&args.analysis_dir, &instances, &config, |instance| {
        bar.set_message(instance.to_string());
        bar.inc(1);
    });
    bar.finish_and_clear();

    if outcome.rows.is_empty() {
        warn!("no instance produced a row; nothing to write");
        println!("No results processed.");
        return Ok(());
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args, &config));

    let rendered = match args.format {
        OutputFormat::Csv => report::render_csv(&outcome.rows, config.table.decimals)?,
        OutputFormat::Json => report::render_json(&outcome.rows)?,
    };

    std::fs::write(&output_path, &rendered)
        .with_context(|| format!("Failed to write table to {}", output_path.display()))?;

    let summary = RunSummary {
        started,
        processed: outcome.rows.len(),
        skipped: outcome.skipped,
        duration_seconds: timer.elapsed().as_secs_f64(),
    };
    print_summary(&summary, &output_path);

    Ok(())
}

/// Default output location: `<stem>.<ext>` in the parent of the analysis
/// directory, beside it rather than inside it.
fn default_output_path(args: &TableArgs, config: &Config) -> PathBuf {
    let parent = args
        .analysis_dir
        .parent()
        .unwrap_or_else(|| Path::new(""));
    parent.join(format!(
        "{}.{}",
        config.table.output_stem,
        args.format.extension()
    ))
}

/// Progress bar across instances, hidden in quiet mode.
fn progress_bar(args: &TableArgs, total: u64) -> ProgressBar {
    if args.quiet {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress template is valid")
            .progress_chars("#>-"),
    );
    bar
}

/// Print the run summary.
fn print_summary(summary: &RunSummary, output: &Path) {
    println!("\nAggregation Summary:");
    println!(
        "   Instances processed: {}/{}",
        summary.processed,
        summary.attempted()
    );
    if !summary.skipped.is_empty() {
        println!("   Instances skipped:");
        for (instance, reason) in &summary.skipped {
            println!("     - {}: {}", instance, reason);
        }
    }
    println!(
        "   Started: {}",
        summary.started.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("   Duration: {:.1}s", summary.duration_seconds);
    println!("\nTable written to: {}", output.display());
}

/// Load configuration from file or use defaults.
fn load_config(args: &TableArgs) -> Result<Config> {
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .mocompare.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
