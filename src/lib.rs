//! MoCompare - comparison tables for multi-objective experiment studies.
//!
//! Shared library behind two binaries:
//! - `comparative-table` aggregates per-instance metric files (hypervolume,
//!   epsilon-additive, IGD) and Kruskal-Wallis test output into one
//!   consolidated comparison table;
//! - `igd-calc` computes the inverted generational distance of each
//!   execution in a solution file against a reference Pareto front.
//!
//! The binaries share mechanisms but no runtime state; `igd-calc` output
//! files are later discovered and averaged by `comparative-table`.

pub mod cli;
pub mod config;
pub mod discover;
pub mod igd;
pub mod metrics;
pub mod models;
pub mod report;
pub mod table;
