//! Inverted generational distance.
//!
//! $ IGD(A, R) = \frac{1}{|R|} \sum_{r \in R} min_{a \in A} \; d(r, a) $
//!
//! with $R$ the reference front, $A$ the approximation set produced by one
//! execution, and $d$ the Euclidean distance. The reference set stays fixed
//! while the executions vary, so the value measures how well each execution
//! covers the reference front.

use super::front::Point;
use thiserror::Error;

/// Errors from the distance indicator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndicatorError {
    /// The reference front contains no points.
    #[error("the reference front is empty")]
    EmptyReferenceFront,

    /// An execution block contains no points.
    #[error("execution {0} contains no points")]
    EmptyExecution(usize),
}

fn euclidean_distance(a: Point, r: Point) -> f64 {
    a.iter()
        .zip(r.iter())
        .map(|(a_k, r_k)| (a_k - r_k).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// IGD of one approximation set against the reference front: the mean over
/// reference points of the distance to the nearest approximation point.
pub fn inverted_generational_distance(
    reference: &[Point],
    approximation: &[Point],
) -> Result<f64, IndicatorError> {
    if reference.is_empty() {
        return Err(IndicatorError::EmptyReferenceFront);
    }
    if approximation.is_empty() {
        return Err(IndicatorError::EmptyExecution(0));
    }

    let distance_sum: f64 = reference
        .iter()
        .map(|r| {
            approximation
                .iter()
                .map(|a| euclidean_distance(*a, *r))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();

    Ok(distance_sum / reference.len() as f64)
}

/// Indicator value for each execution, in input order.
pub fn indicator_per_execution(
    reference: &[Point],
    executions: &[Vec<Point>],
) -> Result<Vec<f64>, IndicatorError> {
    executions
        .iter()
        .enumerate()
        .map(|(index, execution)| {
            inverted_generational_distance(reference, execution).map_err(|error| match error {
                IndicatorError::EmptyExecution(_) => IndicatorError::EmptyExecution(index),
                other => other,
            })
        })
        .collect()
}
