//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.mocompare.toml` files. The defaults reproduce the file naming
//! conventions used by the study's processing pipeline, so a config file is
//! only needed when those conventions change.

use crate::models::{Algorithm, Metric};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Table settings.
    #[serde(default)]
    pub table: TableConfig,

    /// File naming conventions.
    #[serde(default)]
    pub naming: NamingConfig,
}

/// Aggregation table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Manifest file name inside the analysis directory.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Output file name without extension.
    #[serde(default = "default_output_stem")]
    pub output_stem: String,

    /// p-value at or below which a Kruskal-Wallis line is significant.
    #[serde(default = "default_threshold")]
    pub significance_threshold: f64,

    /// Decimal places for the numeric table cells.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            output_stem: default_output_stem(),
            significance_threshold: default_threshold(),
            decimals: default_decimals(),
        }
    }
}

fn default_manifest() -> String {
    "processed_instances.txt".to_string()
}

fn default_output_stem() -> String {
    "comparative_results".to_string()
}

fn default_threshold() -> f64 {
    0.05
}

fn default_decimals() -> usize {
    4
}

/// Filename tokens for one metric: the subfolder holding the per-run value
/// files and the token each algorithm's file name contains, plus the token of
/// the metric's Kruskal-Wallis output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricNaming {
    /// Subfolder under the instance directory.
    pub dir: String,
    /// Token in the MOEA/D value file name.
    pub moead: String,
    /// Token in the COMOLS/D value file name.
    pub comolsd: String,
    /// Token in the NSGA-II value file name.
    pub nsga2: String,
    /// Token in the Kruskal-Wallis output file name.
    pub kruskal: String,
}

impl MetricNaming {
    /// Filename token of one algorithm's value file.
    pub fn token(&self, algorithm: Algorithm) -> &str {
        match algorithm {
            Algorithm::MoeaD => &self.moead,
            Algorithm::ComolsD => &self.comolsd,
            Algorithm::Nsga2 => &self.nsga2,
        }
    }
}

/// File naming conventions for all metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Subfolder holding the Kruskal-Wallis output files.
    #[serde(default = "default_kruskal_dir")]
    pub kruskal_dir: String,

    /// Hypervolume file naming.
    #[serde(default = "default_hypervolume_naming")]
    pub hypervolume: MetricNaming,

    /// Epsilon-additive file naming. The `esp_ad` spelling is historical and
    /// matches the files the pipeline already produces.
    #[serde(default = "default_epsilon_naming")]
    pub epsilon_additive: MetricNaming,

    /// IGD file naming.
    #[serde(default = "default_igd_naming")]
    pub igd: MetricNaming,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            kruskal_dir: default_kruskal_dir(),
            hypervolume: default_hypervolume_naming(),
            epsilon_additive: default_epsilon_naming(),
            igd: default_igd_naming(),
        }
    }
}

impl NamingConfig {
    /// Naming block for one metric.
    pub fn metric(&self, metric: Metric) -> &MetricNaming {
        match metric {
            Metric::Hypervolume => &self.hypervolume,
            Metric::EpsilonAdditive => &self.epsilon_additive,
            Metric::Igd => &self.igd,
        }
    }
}

fn default_kruskal_dir() -> String {
    "kruskal".to_string()
}

fn default_hypervolume_naming() -> MetricNaming {
    MetricNaming {
        dir: "hypervolume".to_string(),
        moead: "HV_moead".to_string(),
        comolsd: "HV_comolsd".to_string(),
        nsga2: "HV_nsga2".to_string(),
        kruskal: "hv_saidakruskal".to_string(),
    }
}

fn default_epsilon_naming() -> MetricNaming {
    MetricNaming {
        dir: "epsilon_additive".to_string(),
        moead: "esp_ad_moead".to_string(),
        comolsd: "esp_ad_comolsd".to_string(),
        nsga2: "esp_ad_nsga2".to_string(),
        kruskal: "eps_saidakruskal".to_string(),
    }
}

fn default_igd_naming() -> MetricNaming {
    MetricNaming {
        dir: "igd".to_string(),
        moead: "IGD_moead".to_string(),
        comolsd: "IGD_comolsd".to_string(),
        nsga2: "IGD_nsga2".to_string(),
        kruskal: "igd_saidakruskal".to_string(),
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but
    /// can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".mocompare.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    pub fn merge_with_args(&mut self, args: &crate::cli::TableArgs) {
        if let Some(threshold) = args.threshold {
            self.table.significance_threshold = threshold;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.table.manifest, "processed_instances.txt");
        assert_eq!(config.table.output_stem, "comparative_results");
        assert_eq!(config.table.significance_threshold, 0.05);
        assert_eq!(config.table.decimals, 4);
        assert_eq!(config.naming.kruskal_dir, "kruskal");
        assert_eq!(config.naming.hypervolume.dir, "hypervolume");
        assert_eq!(config.naming.epsilon_additive.moead, "esp_ad_moead");
        assert_eq!(config.naming.igd.kruskal, "igd_saidakruskal");
    }

    #[test]
    fn test_metric_naming_tokens() {
        let config = Config::default();
        let naming = config.naming.metric(Metric::Hypervolume);
        assert_eq!(naming.token(Algorithm::MoeaD), "HV_moead");
        assert_eq!(naming.token(Algorithm::ComolsD), "HV_comolsd");
        assert_eq!(naming.token(Algorithm::Nsga2), "HV_nsga2");
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[table]
significance_threshold = 0.01
decimals = 6

[naming.igd]
dir = "igd_plus"
moead = "IGDP_moead"
comolsd = "IGDP_comolsd"
nsga2 = "IGDP_nsga2"
kruskal = "igdp_saidakruskal"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.table.significance_threshold, 0.01);
        assert_eq!(config.table.decimals, 6);
        // untouched sections keep their defaults
        assert_eq!(config.table.manifest, "processed_instances.txt");
        assert_eq!(config.naming.hypervolume.dir, "hypervolume");
        assert_eq!(config.naming.igd.dir, "igd_plus");
        assert_eq!(config.naming.igd.token(Algorithm::MoeaD), "IGDP_moead");
    }

    #[test]
    fn test_default_toml_round_trip() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[table]"));
        assert!(toml_str.contains("[naming.hypervolume]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.naming, Config::default().naming);
    }
}
