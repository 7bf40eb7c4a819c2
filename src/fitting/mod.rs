//! Straight line fitting through measurement data
//!
//! A line through two points sharing an x coordinate has no finite slope.
//! Rather than failing, the fitters carry IEEE infinities and NaN through
//! into the resulting [`Line`](crate::language::Line), which can be asked
//! whether it is finite. Only missing or mismatched data is an error.

use thiserror::Error;

mod envelope;
mod geometry;
mod regression;

pub use envelope::{corner_lines, max_gradient, min_gradient};
pub use regression::line_of_best_fit;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("need at least 2 records to fit a line, found {found}")]
    InsufficientData { found: usize },

    #[error("data columns have differing lengths {lengths:?}")]
    MismatchedLengths { lengths: Vec<usize> },
}

/// Check that all columns are the same length and long enough to fit.
fn check_columns(columns: &[&[f64]]) -> Result<usize, FitError> {
    let lengths: Vec<usize> = columns
        .iter()
        .map(|column| column.len())
        .collect();

    let n = lengths
        .first()
        .copied()
        .unwrap_or(0);

    if lengths
        .iter()
        .any(|&len| len != n)
    {
        return Err(FitError::MismatchedLengths { lengths });
    }

    if n < 2 {
        return Err(FitError::InsufficientData { found: n });
    }

    Ok(n)
}
