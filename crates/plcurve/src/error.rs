use thiserror::Error;

/// Errors raised by the checked constructors. The curve operations themselves never fail.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CurveError {
    /// `points[index]` has a smaller X than its predecessor.
    #[error("curve is not monotone at index {index}: x = {next} follows x = {prev}")]
    NotMonotone { index: usize, prev: f64, next: f64 },
}
