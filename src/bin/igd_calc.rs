//! Compute the IGD indicator for each execution block in a solution file.
//!
//! Exit codes:
//!   0 - Values written
//!   1 - Missing input file, empty point set, or write failure

use anyhow::{Context, Result};
use mocompare::cli::IgdArgs;
use mocompare::igd;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = IgdArgs::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    init_logging(&args);

    info!("mocompare igd-calc v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("IGD computation failed: {}", e);
        eprintln!("\nError: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &IgdArgs) {
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

/// Run the complete computation workflow.
fn run(args: IgdArgs) -> Result<()> {
    let reference = igd::read_reference_front(&args.reference_file).with_context(|| {
        format!(
            "Failed to read reference front: {}",
            args.reference_file.display()
        )
    })?;
    let executions = igd::read_executions(&args.data_file)
        .with_context(|| format!("Failed to read solution file: {}", args.data_file.display()))?;

    info!(
        "{} reference point(s), {} execution(s)",
        reference.len(),
        executions.len()
    );

    let values = igd::indicator_per_execution(&reference, &executions)?;

    // One value per execution, in block order, with a trailing blank line so
    // the file follows the same blank-line convention the solution files use.
    let mut output = String::new();
    for value in &values {
        output.push_str(&format!("{}\n", value));
    }
    output.push('\n');

    std::fs::write(&args.output_file, output)
        .with_context(|| format!("Failed to write values to {}", args.output_file.display()))?;

    println!(
        "{} value(s) written to: {}",
        values.len(),
        args.output_file.display()
    );

    Ok(())
}
