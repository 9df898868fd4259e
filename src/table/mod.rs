//! Instance aggregation: from a manifest of instances to table rows.

use crate::config::Config;
use crate::discover::locate_metric_file;
use crate::metrics::{mean_of_file, parse_kruskal_file, FileMean};
use crate::models::{Algorithm, InstanceError, InstanceRow, KruskalSummary, Metric};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Rows and skips produced by one aggregation run.
#[derive(Debug, Default)]
pub struct TableOutcome {
    /// One row per successfully processed instance, in manifest order.
    pub rows: Vec<InstanceRow>,
    /// Instances that produced no row, with the reason each was dropped.
    pub skipped: Vec<(String, InstanceError)>,
}

/// Read the manifest of processed instances: one directory name per line,
/// blank lines ignored.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Manifest file not found: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Aggregate one instance into a table row.
///
/// Locates the 3 metrics x 3 algorithms value files plus the 3 Kruskal-Wallis
/// files, computes the means and significance summaries, and returns the
/// assembled row. A missing instance directory or an unreadable file is a
/// typed failure; missing individual metric files are not (their cells render
/// as `nan` / `N/A`).
pub fn process_instance(
    root: &Path,
    instance: &str,
    config: &Config,
) -> Result<InstanceRow, InstanceError> {
    let instance_dir = root.join(instance);
    if !instance_dir.is_dir() {
        return Err(InstanceError::MissingDirectory(instance_dir));
    }

    let mut row = InstanceRow::new(instance.to_string());
    let threshold = config.table.significance_threshold;

    for metric in Metric::ALL {
        let naming = config.naming.metric(metric);

        for algorithm in Algorithm::ALL {
            let file = locate_metric_file(&instance_dir, &naming.dir, naming.token(algorithm));
            let stats = match file {
                Some(ref path) => read_mean(path)?,
                None => FileMean::default(),
            };
            debug!(
                "{}: {} {} -> {:?} ({} sample(s))",
                instance, metric, algorithm, stats.mean, stats.samples
            );
            row.metric_mut(metric).set(algorithm, stats.mean);
        }

        let kruskal_file =
            locate_metric_file(&instance_dir, &config.naming.kruskal_dir, &naming.kruskal);
        let summary = match kruskal_file {
            Some(ref path) => read_kruskal(path, threshold)?,
            None => KruskalSummary::NotAvailable,
        };
        *row.kruskal_mut(metric) = summary;
    }

    Ok(row)
}

/// Fold the manifest into rows and typed skips, preserving manifest order.
///
/// `progress` is called once per instance before it is processed. Failures
/// never abort the fold: the instance is dropped with its reason and the
/// remaining instances still produce rows.
pub fn build_table<F>(
    root: &Path,
    instances: &[String],
    config: &Config,
    mut progress: F,
) -> TableOutcome
where
    F: FnMut(&str),
{
    let mut outcome = TableOutcome::default();

    for instance in instances {
        progress(instance);
        match process_instance(root, instance, config) {
            Ok(row) => outcome.rows.push(row),
            Err(error) => {
                warn!("skipping instance {}: {}", instance, error);
                outcome.skipped.push((instance.clone(), error));
            }
        }
    }

    outcome
}

fn read_mean(path: &Path) -> Result<FileMean, InstanceError> {
    mean_of_file(Some(path)).map_err(|source| InstanceError::Io {
        path: PathBuf::from(path),
        source,
    })
}

fn read_kruskal(path: &Path, threshold: f64) -> Result<KruskalSummary, InstanceError> {
    parse_kruskal_file(Some(path), threshold).map_err(|source| InstanceError::Io {
        path: PathBuf::from(path),
        source,
    })
}
