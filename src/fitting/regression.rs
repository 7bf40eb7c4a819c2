use tracing::debug;

use crate::fitting::{check_columns, FitError};
use crate::language::Line;

/// Ordinary least squares line through the points (x[i], y[i]). When every
/// x is the same the slope is not finite.
pub fn line_of_best_fit(x: &[f64], y: &[f64]) -> Result<Line, FitError> {
    let n = check_columns(&[x, y])? as f64;

    let ax = x
        .iter()
        .sum::<f64>()
        / n;
    let ay = y
        .iter()
        .sum::<f64>()
        / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (xi, yi) in x
        .iter()
        .zip(y)
    {
        numerator += (xi - ax) * (yi - ay);
        denominator += (xi - ax).powi(2);
    }

    let slope = numerator / denominator;
    let line = Line {
        slope,
        intercept: ay - slope * ax,
    };
    debug!(%line, "best fit");

    Ok(line)
}
