//! Point-set readers for the IGD calculator.
//!
//! Two file shapes: a reference front (one 2D point per line) and a solution
//! file (blocks of 2D points separated by blank lines, one block per
//! algorithm execution).

use std::io;
use std::path::Path;
use tracing::warn;

/// A point in 2D objective space.
pub type Point = [f64; 2];

/// Parse one line as exactly two whitespace-separated numeric tokens.
fn parse_point(line: &str) -> Option<Point> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some([x, y])
}

/// Read a reference front: one whitespace-separated 2D point per line.
///
/// Lines that are not exactly two numeric tokens are skipped and counted.
pub fn read_reference_front(path: &Path) -> io::Result<Vec<Point>> {
    let content = std::fs::read_to_string(path)?;

    let mut points = Vec::new();
    let mut skipped = 0usize;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_point(line) {
            Some(point) => points.push(point),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("{}: skipped {} malformed line(s)", path.display(), skipped);
    }

    Ok(points)
}

/// Read execution blocks: groups of 2D points separated by one or more blank
/// lines.
///
/// A trailing block with no terminating blank line is still emitted. Within a
/// block, lines that are not exactly two numeric tokens are skipped and
/// counted.
pub fn read_executions(path: &Path) -> io::Result<Vec<Vec<Point>>> {
    let content = std::fs::read_to_string(path)?;

    let mut executions = Vec::new();
    let mut current = Vec::new();
    let mut skipped = 0usize;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                executions.push(std::mem::take(&mut current));
            }
            continue;
        }
        match parse_point(line) {
            Some(point) => current.push(point),
            None => skipped += 1,
        }
    }
    if !current.is_empty() {
        executions.push(current);
    }

    if skipped > 0 {
        warn!("{}: skipped {} malformed line(s)", path.display(), skipped);
    }

    Ok(executions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_reference_front_two_columns_per_line() {
        let (_dir, path) = write_file("1.0 2.0\n3.0 4.0\n");
        let points = read_reference_front(&path).unwrap();
        assert_eq!(points, vec![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_reference_front_skips_malformed_lines() {
        let (_dir, path) = write_file("1.0 2.0\nheader x y\n3.0\n4.0 5.0 6.0\n7.0 8.0\n");
        let points = read_reference_front(&path).unwrap();
        assert_eq!(points, vec![[1.0, 2.0], [7.0, 8.0]]);
    }

    #[test]
    fn test_executions_split_on_blank_lines() {
        let (_dir, path) = write_file("1 2\n3 4\n\n5 6\n\n");
        let executions = read_executions(&path).unwrap();
        assert_eq!(executions, vec![vec![[1.0, 2.0], [3.0, 4.0]], vec![[5.0, 6.0]]]);
    }

    #[test]
    fn test_executions_trailing_block_without_blank_line() {
        let (_dir, path) = write_file("1 2\n\n3 4");
        let executions = read_executions(&path).unwrap();
        assert_eq!(executions, vec![vec![[1.0, 2.0]], vec![[3.0, 4.0]]]);
    }

    #[test]
    fn test_executions_collapse_repeated_blank_lines() {
        let (_dir, path) = write_file("1 2\n\n\n\n3 4\n");
        let executions = read_executions(&path).unwrap();
        assert_eq!(executions.len(), 2);
    }

    #[test]
    fn test_executions_empty_file() {
        let (_dir, path) = write_file("");
        assert!(read_executions(&path).unwrap().is_empty());
    }
}
