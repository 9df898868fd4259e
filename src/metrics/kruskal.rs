//! Kruskal-Wallis test output scanning.

use crate::models::KruskalSummary;
use regex::Regex;
use std::io;
use std::path::Path;
use tracing::warn;

/// Pattern the statistical tool prints for each pairwise comparison.
const P_VALUE_PATTERN: &str = r"p-value of ([0-9.eE+-]+)";

/// Scan a Kruskal-Wallis output file and keep the lines whose p-value is at
/// or below `threshold`.
///
/// Significant lines are preserved verbatim so the table carries the original
/// test output as evidence of which comparisons differed. An absent file
/// yields `NotAvailable`; a present file with no significant line yields
/// `NullHypothesis`. Lines whose captured p-value does not parse are skipped
/// and counted.
pub fn parse_kruskal_file(path: Option<&Path>, threshold: f64) -> io::Result<KruskalSummary> {
    let Some(path) = path else {
        return Ok(KruskalSummary::NotAvailable);
    };
    if !path.exists() {
        return Ok(KruskalSummary::NotAvailable);
    }

    let pattern = Regex::new(P_VALUE_PATTERN).expect("p-value pattern compiles");
    let content = std::fs::read_to_string(path)?;

    let mut significant = Vec::new();
    let mut skipped = 0usize;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(captures) = pattern.captures(line) else {
            continue;
        };
        match captures[1].parse::<f64>() {
            Ok(p_value) if p_value <= threshold => significant.push(line.to_string()),
            Ok(_) => {}
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(
            "{}: skipped {} line(s) with unparseable p-values",
            path.display(),
            skipped
        );
    }

    if significant.is_empty() {
        Ok(KruskalSummary::NullHypothesis)
    } else {
        Ok(KruskalSummary::Significant(significant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saida.txt");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_significant_lines_kept_verbatim() {
        let (_dir, path) = write_file(
            "MOEA/D vs NSGA-II differ with a p-value of 0.03\n\
             MOEA/D vs COMOLS/D differ with a p-value of 0.8\n",
        );
        let summary = parse_kruskal_file(Some(&path), 0.05).unwrap();
        assert_eq!(
            summary,
            KruskalSummary::Significant(vec![
                "MOEA/D vs NSGA-II differ with a p-value of 0.03".to_string()
            ])
        );
    }

    #[test]
    fn test_no_significant_line_is_null_hypothesis() {
        let (_dir, path) = write_file(
            "A vs B with a p-value of 0.8\n\
             A vs C with a p-value of 0.051\n",
        );
        let summary = parse_kruskal_file(Some(&path), 0.05).unwrap();
        assert_eq!(summary, KruskalSummary::NullHypothesis);
    }

    #[test]
    fn test_threshold_boundary_is_significant() {
        let (_dir, path) = write_file("A vs B with a p-value of 0.05\n");
        let summary = parse_kruskal_file(Some(&path), 0.05).unwrap();
        assert!(matches!(summary, KruskalSummary::Significant(_)));
    }

    #[test]
    fn test_missing_file_is_not_available() {
        assert_eq!(
            parse_kruskal_file(None, 0.05).unwrap(),
            KruskalSummary::NotAvailable
        );

        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.txt");
        assert_eq!(
            parse_kruskal_file(Some(&absent), 0.05).unwrap(),
            KruskalSummary::NotAvailable
        );
    }

    #[test]
    fn test_scientific_notation_p_values() {
        let (_dir, path) = write_file("A vs B with a p-value of 1.2e-5\n");
        let summary = parse_kruskal_file(Some(&path), 0.05).unwrap();
        assert!(matches!(summary, KruskalSummary::Significant(_)));
    }

    #[test]
    fn test_lines_without_pattern_ignored() {
        let (_dir, path) = write_file(
            "Kruskal-Wallis rank sum test\n\
             samples: 30 30 30\n\
             A vs B with a p-value of 0.01\n",
        );
        let summary = parse_kruskal_file(Some(&path), 0.05).unwrap();
        assert_eq!(
            summary,
            KruskalSummary::Significant(vec!["A vs B with a p-value of 0.01".to_string()])
        );
    }

    #[test]
    fn test_multiple_significant_lines_keep_order() {
        let (_dir, path) = write_file(
            "first with a p-value of 0.01\n\
             second with a p-value of 0.02\n",
        );
        let summary = parse_kruskal_file(Some(&path), 0.05).unwrap();
        assert_eq!(
            summary.to_string(),
            "first with a p-value of 0.01 | second with a p-value of 0.02"
        );
    }
}
