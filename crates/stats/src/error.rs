use thiserror::Error;

/// Errors a statistic function can report.
///
/// `Degenerate` is internal to most public functions, which translate it
/// to a `f64::NAN` sentinel; only `InsufficientData` normally reaches
/// callers.
#[derive(Debug, Error)]
pub enum StatError {
    /// Too few observations to fit the statistic at all.
    #[error("insufficient data: need at least {needed} points, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Singular or zero-variance regression design.
    #[error("degenerate regression design")]
    Degenerate,
}
