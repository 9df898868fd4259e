//! IGD calculator: point-set readers and the distance indicator.

pub mod front;
pub mod indicator;

pub use front::{read_executions, read_reference_front, Point};
pub use indicator::{indicator_per_execution, inverted_generational_distance, IndicatorError};
