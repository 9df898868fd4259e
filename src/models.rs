//! Data models for the comparison tables.
//!
//! This module contains the core data structures shared by the aggregator
//! and the IGD calculator: algorithms, metrics, table rows, and run
//! summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Optimization algorithm under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Decomposition-based MOEA/D.
    MoeaD,
    /// The COMOLS/D variant.
    ComolsD,
    /// NSGA-II.
    Nsga2,
}

impl Algorithm {
    /// All algorithms, in the column order of the output table.
    pub const ALL: [Algorithm; 3] = [Algorithm::MoeaD, Algorithm::ComolsD, Algorithm::Nsga2];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::MoeaD => write!(f, "MOEA/D"),
            Algorithm::ComolsD => write!(f, "COMOLS/D"),
            Algorithm::Nsga2 => write!(f, "NSGA-II"),
        }
    }
}

/// Quality indicator whose per-run values are averaged per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Hypervolume,
    EpsilonAdditive,
    Igd,
}

impl Metric {
    /// All metrics, in the column order of the output table.
    pub const ALL: [Metric; 3] = [Metric::Hypervolume, Metric::EpsilonAdditive, Metric::Igd];
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Hypervolume => write!(f, "HV"),
            Metric::EpsilonAdditive => write!(f, "EPS"),
            Metric::Igd => write!(f, "IGD"),
        }
    }
}

/// Per-algorithm means for one metric.
///
/// `None` means the metric file was absent or had no parseable values; it
/// renders as `nan` in the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBlock {
    pub moead: Option<f64>,
    pub comolsd: Option<f64>,
    pub nsga2: Option<f64>,
}

impl MetricBlock {
    /// Mean for one algorithm.
    pub fn get(&self, algorithm: Algorithm) -> Option<f64> {
        match algorithm {
            Algorithm::MoeaD => self.moead,
            Algorithm::ComolsD => self.comolsd,
            Algorithm::Nsga2 => self.nsga2,
        }
    }

    /// Set the mean for one algorithm.
    pub fn set(&mut self, algorithm: Algorithm, value: Option<f64>) {
        match algorithm {
            Algorithm::MoeaD => self.moead = value,
            Algorithm::ComolsD => self.comolsd = value,
            Algorithm::Nsga2 => self.nsga2 = value,
        }
    }
}

/// Outcome of scanning one Kruskal-Wallis output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KruskalSummary {
    /// Test-output lines whose p-value met the significance threshold,
    /// preserved verbatim as the significance evidence.
    Significant(Vec<String>),
    /// No line met the threshold.
    NullHypothesis,
    /// No Kruskal-Wallis file was found for this metric.
    NotAvailable,
}

impl fmt::Display for KruskalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KruskalSummary::Significant(lines) => write!(f, "{}", lines.join(" | ")),
            KruskalSummary::NullHypothesis => write!(f, "H0"),
            KruskalSummary::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// One aggregated row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceRow {
    /// Instance (problem case) name, as listed in the manifest.
    pub instance: String,
    /// Hypervolume means per algorithm.
    pub hypervolume: MetricBlock,
    /// Epsilon-additive means per algorithm.
    pub epsilon_additive: MetricBlock,
    /// IGD means per algorithm.
    pub igd: MetricBlock,
    /// Kruskal-Wallis summary for the hypervolume comparison.
    pub kruskal_hv: KruskalSummary,
    /// Kruskal-Wallis summary for the epsilon-additive comparison.
    pub kruskal_eps: KruskalSummary,
    /// Kruskal-Wallis summary for the IGD comparison.
    pub kruskal_igd: KruskalSummary,
}

impl InstanceRow {
    /// Create an empty row for an instance.
    pub fn new(instance: String) -> Self {
        Self {
            instance,
            hypervolume: MetricBlock::default(),
            epsilon_additive: MetricBlock::default(),
            igd: MetricBlock::default(),
            kruskal_hv: KruskalSummary::NotAvailable,
            kruskal_eps: KruskalSummary::NotAvailable,
            kruskal_igd: KruskalSummary::NotAvailable,
        }
    }

    /// Means block for one metric.
    pub fn metric(&self, metric: Metric) -> &MetricBlock {
        match metric {
            Metric::Hypervolume => &self.hypervolume,
            Metric::EpsilonAdditive => &self.epsilon_additive,
            Metric::Igd => &self.igd,
        }
    }

    /// Mutable means block for one metric.
    pub fn metric_mut(&mut self, metric: Metric) -> &mut MetricBlock {
        match metric {
            Metric::Hypervolume => &mut self.hypervolume,
            Metric::EpsilonAdditive => &mut self.epsilon_additive,
            Metric::Igd => &mut self.igd,
        }
    }

    /// Kruskal-Wallis summary for one metric.
    pub fn kruskal(&self, metric: Metric) -> &KruskalSummary {
        match metric {
            Metric::Hypervolume => &self.kruskal_hv,
            Metric::EpsilonAdditive => &self.kruskal_eps,
            Metric::Igd => &self.kruskal_igd,
        }
    }

    /// Mutable Kruskal-Wallis summary for one metric.
    pub fn kruskal_mut(&mut self, metric: Metric) -> &mut KruskalSummary {
        match metric {
            Metric::Hypervolume => &mut self.kruskal_hv,
            Metric::EpsilonAdditive => &mut self.kruskal_eps,
            Metric::Igd => &mut self.kruskal_igd,
        }
    }
}

/// Why an instance produced no row.
#[derive(Debug, Error)]
pub enum InstanceError {
    /// The instance is listed in the manifest but its directory is absent.
    #[error("instance directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// A metric or Kruskal-Wallis file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome counts for one aggregation run.
#[derive(Debug)]
pub struct RunSummary {
    /// When the run started.
    pub started: DateTime<Utc>,
    /// Number of instances that produced a row.
    pub processed: usize,
    /// Skipped instances with the reason each was dropped.
    pub skipped: Vec<(String, InstanceError)>,
    /// Wall-clock duration in seconds.
    pub duration_seconds: f64,
}

impl RunSummary {
    /// Total number of instances the run attempted.
    pub fn attempted(&self) -> usize {
        self.processed + self.skipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_block_get_set() {
        let mut block = MetricBlock::default();
        assert_eq!(block.get(Algorithm::MoeaD), None);

        block.set(Algorithm::MoeaD, Some(0.5));
        block.set(Algorithm::Nsga2, Some(0.25));
        assert_eq!(block.get(Algorithm::MoeaD), Some(0.5));
        assert_eq!(block.get(Algorithm::ComolsD), None);
        assert_eq!(block.get(Algorithm::Nsga2), Some(0.25));
    }

    #[test]
    fn test_kruskal_summary_rendering() {
        let significant = KruskalSummary::Significant(vec![
            "A vs B with a p-value of 0.01".to_string(),
            "A vs C with a p-value of 0.03".to_string(),
        ]);
        assert_eq!(
            significant.to_string(),
            "A vs B with a p-value of 0.01 | A vs C with a p-value of 0.03"
        );
        assert_eq!(KruskalSummary::NullHypothesis.to_string(), "H0");
        assert_eq!(KruskalSummary::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn test_instance_row_accessors() {
        let mut row = InstanceRow::new("inst_01".to_string());
        row.metric_mut(Metric::Igd).set(Algorithm::Nsga2, Some(1.5));
        *row.kruskal_mut(Metric::Igd) = KruskalSummary::NullHypothesis;

        assert_eq!(row.metric(Metric::Igd).get(Algorithm::Nsga2), Some(1.5));
        assert_eq!(row.metric(Metric::Hypervolume).get(Algorithm::Nsga2), None);
        assert_eq!(*row.kruskal(Metric::Igd), KruskalSummary::NullHypothesis);
        assert_eq!(*row.kruskal(Metric::Hypervolume), KruskalSummary::NotAvailable);
    }

    #[test]
    fn test_run_summary_attempted() {
        let summary = RunSummary {
            started: Utc::now(),
            processed: 3,
            skipped: vec![(
                "inst_04".to_string(),
                InstanceError::MissingDirectory(PathBuf::from("/tmp/inst_04")),
            )],
            duration_seconds: 0.1,
        };
        assert_eq!(summary.attempted(), 4);
    }
}
