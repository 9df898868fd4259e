//! Per-file metric readers.
//!
//! Readers for the two file shapes the aggregator consumes: newline-delimited
//! value files that get averaged, and Kruskal-Wallis test output that gets
//! scanned for significant comparisons.

pub mod kruskal;
pub mod mean;

pub use kruskal::parse_kruskal_file;
pub use mean::{mean_of_file, FileMean};
