//! Maximum and minimum gradient lines
//!
//! These bound the gradient graphically: every corner of the first record's
//! uncertainty box is joined to every corner of the last record's box, and
//! the steepest and shallowest of those sixteen lines are taken. Records in
//! between play no part.

use std::cmp::Ordering;

use tracing::debug;

use crate::fitting::{check_columns, FitError};
use crate::language::{Line, MeasurementRecord};

/// The sixteen lines joining the first and last uncertainty boxes. The
/// first record's corners form the outer loop, the last record's the inner,
/// each in the order given by [`MeasurementRecord::corners`].
pub fn corner_lines(x: &[f64], ux: &[f64], y: &[f64], uy: &[f64]) -> Result<Vec<Line>, FitError> {
    let n = check_columns(&[x, ux, y, uy])?;

    let first = MeasurementRecord {
        x: x[0],
        ux: ux[0],
        y: y[0],
        uy: uy[0],
    };
    let last = MeasurementRecord {
        x: x[n - 1],
        ux: ux[n - 1],
        y: y[n - 1],
        uy: uy[n - 1],
    };

    let ends = last.corners();
    let lines = first
        .corners()
        .iter()
        .flat_map(|&start| {
            ends.iter()
                .map(move |&end| Line::through(start, end))
        })
        .collect();

    Ok(lines)
}

pub fn max_gradient(x: &[f64], ux: &[f64], y: &[f64], uy: &[f64]) -> Result<Line, FitError> {
    let lines = corner_lines(x, ux, y, uy)?;
    let line = extreme(&lines, Ordering::Greater);
    debug!(%line, "max gradient");
    Ok(line)
}

pub fn min_gradient(x: &[f64], ux: &[f64], y: &[f64], uy: &[f64]) -> Result<Line, FitError> {
    let lines = corner_lines(x, ux, y, uy)?;
    let line = extreme(&lines, Ordering::Less);
    debug!(%line, "min gradient");
    Ok(line)
}

/// The first line whose slope is furthest in the `wanted` direction. Lines
/// with NaN slope are passed over unless there is nothing else.
fn extreme(lines: &[Line], wanted: Ordering) -> Line {
    let mut best: Option<Line> = None;

    for line in lines {
        if line
            .slope
            .is_nan()
        {
            continue;
        }
        match best {
            Some(current) if line.slope.partial_cmp(&current.slope) != Some(wanted) => {}
            _ => best = Some(*line),
        }
    }

    best.unwrap_or(lines[0])
}
