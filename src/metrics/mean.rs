//! Arithmetic mean of a newline-delimited value file.

use std::io;
use std::path::Path;
use tracing::warn;

/// Mean of one metric file, with line accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FileMean {
    /// Mean of the parsed values, or `None` when nothing parsed.
    pub mean: Option<f64>,
    /// Number of lines parsed as values.
    pub samples: usize,
    /// Number of non-blank lines that failed to parse.
    pub skipped: usize,
}

/// Compute the mean of the non-blank lines of `path` parsed as floats.
///
/// One algorithm run per line. An absent path or missing file yields an
/// empty `FileMean` (mean `None`); blank lines are ignored; unparseable
/// lines are skipped, counted, and reported with a warning so silent data
/// loss stays visible. Read failures other than not-found propagate.
pub fn mean_of_file(path: Option<&Path>) -> io::Result<FileMean> {
    let Some(path) = path else {
        return Ok(FileMean::default());
    };
    if !path.exists() {
        return Ok(FileMean::default());
    }

    let content = std::fs::read_to_string(path)?;

    let mut sum = 0.0;
    let mut samples = 0usize;
    let mut skipped = 0usize;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<f64>() {
            Ok(value) => {
                sum += value;
                samples += 1;
            }
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("{}: skipped {} unparseable line(s)", path.display(), skipped);
    }

    let mean = (samples > 0).then(|| sum / samples as f64);
    Ok(FileMean {
        mean,
        samples,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.txt");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_mean_of_three_values() {
        let (_dir, path) = write_file("1.0\n2.0\n3.0\n");
        let result = mean_of_file(Some(&path)).unwrap();
        assert_eq!(result.mean, Some(2.0));
        assert_eq!(result.samples, 3);
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let (_dir, path) = write_file("\n1.0\n\n\n3.0\n\n");
        let result = mean_of_file(Some(&path)).unwrap();
        assert_eq!(result.mean, Some(2.0));
        assert_eq!(result.samples, 2);
    }

    #[test]
    fn test_missing_path_and_missing_file() {
        assert_eq!(mean_of_file(None).unwrap(), FileMean::default());

        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.txt");
        assert_eq!(mean_of_file(Some(&absent)).unwrap(), FileMean::default());
    }

    #[test]
    fn test_malformed_lines_skipped_and_counted() {
        let (_dir, path) = write_file("1.0\nnot-a-number\n3.0\n");
        let result = mean_of_file(Some(&path)).unwrap();
        assert_eq!(result.mean, Some(2.0));
        assert_eq!(result.samples, 2);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_only_malformed_lines_yields_none() {
        let (_dir, path) = write_file("abc\ndef\n");
        let result = mean_of_file(Some(&path)).unwrap();
        assert_eq!(result.mean, None);
        assert_eq!(result.samples, 0);
        assert_eq!(result.skipped, 2);
    }

    #[test]
    fn test_scientific_notation() {
        let (_dir, path) = write_file("1e-3\n3e-3\n");
        let result = mean_of_file(Some(&path)).unwrap();
        assert!((result.mean.unwrap() - 2e-3).abs() < 1e-12);
    }
}
