//! Command-line interface argument parsing.
//!
//! This module handles argument parsing for both binaries using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Build a comparative results table for a study's analysis directory
///
/// Scans one subdirectory per problem instance, averages the per-run
/// hypervolume, epsilon-additive, and IGD files of each algorithm, collects
/// significant Kruskal-Wallis test lines, and writes one table row per
/// instance.
///
/// Examples:
///   comparative-table ./results/analysis
///   comparative-table ./results/analysis --format json
///   comparative-table ./results/analysis -o /tmp/table.csv --threshold 0.01
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct TableArgs {
    /// Analysis root directory, containing one subdirectory per instance
    ///
    /// The directory must hold the manifest file (`processed_instances.txt`
    /// by default) listing the instances to aggregate.
    #[arg(value_name = "ANALYSIS_DIR")]
    pub analysis_dir: PathBuf,

    /// Path to a TOML configuration file
    ///
    /// If not specified, looks for .mocompare.toml in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file path for the table
    ///
    /// Defaults to `comparative_results.<ext>` in the parent of ANALYSIS_DIR.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (csv, json)
    #[arg(long, default_value = "csv", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Significance threshold for the Kruskal-Wallis summaries
    ///
    /// Overrides the config file setting. Lines with a p-value at or below
    /// this value are kept as significance evidence.
    #[arg(long, value_name = "P")]
    pub threshold: Option<f64>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values (default)
    #[default]
    Csv,
    /// JSON format
    Json,
}

impl OutputFormat {
    /// File extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl TableArgs {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if !self.analysis_dir.is_dir() {
            return Err(format!(
                "Analysis directory does not exist: {}",
                self.analysis_dir.display()
            ));
        }

        if let Some(threshold) = self.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err("Threshold must be between 0.0 and 1.0".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        log_level(self.verbose, self.quiet)
    }
}

/// Compute the IGD indicator for each execution in a solution file
///
/// Reads a reference Pareto front and a solution file of blank-line-delimited
/// execution blocks, computes the distance of each execution to the reference
/// front, and writes one value per execution to the output file.
///
/// Example:
///   igd-calc FUN_nsga2_inst01.txt reference_front.txt IGD_nsga2_inst01.txt
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct IgdArgs {
    /// Solution file: blocks of 2D points separated by blank lines,
    /// one block per execution
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Reference front file: one whitespace-separated 2D point per line
    #[arg(value_name = "REFERENCE_FILE")]
    pub reference_file: PathBuf,

    /// Output file: one indicator value per execution, one per line
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

impl IgdArgs {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if !self.data_file.is_file() {
            return Err(format!(
                "Data file not found: {}",
                self.data_file.display()
            ));
        }

        if !self.reference_file.is_file() {
            return Err(format!(
                "Reference file not found: {}",
                self.reference_file.display()
            ));
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        log_level(self.verbose, self.quiet)
    }
}

fn log_level(verbose: bool, quiet: bool) -> tracing::Level {
    if quiet {
        tracing::Level::ERROR
    } else if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}
