//! Types representing measurement data and the lines fitted through it

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::fitting::{self, FitError};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// One observation with absolute uncertainties on both axes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub x: f64,
    pub ux: f64,
    pub y: f64,
    pub uy: f64,
}

impl MeasurementRecord {
    /// The four corners of this record's uncertainty box, in the order
    /// (+,+), (+,-), (-,+), (-,-) for the x and y signs respectively.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x + self.ux, self.y + self.uy),
            Point::new(self.x + self.ux, self.y - self.uy),
            Point::new(self.x - self.ux, self.y + self.uy),
            Point::new(self.x - self.ux, self.y - self.uy),
        ]
    }
}

/// The records read from a data source, in input order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordCollection(pub Vec<MeasurementRecord>);

impl Deref for RecordCollection {
    type Target = [MeasurementRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<MeasurementRecord> for RecordCollection {
    fn from_iter<T: IntoIterator<Item = MeasurementRecord>>(iter: T) -> Self {
        RecordCollection(
            iter.into_iter()
                .collect(),
        )
    }
}

impl RecordCollection {
    pub fn x(&self) -> Vec<f64> {
        self.iter()
            .map(|record| record.x)
            .collect()
    }

    pub fn ux(&self) -> Vec<f64> {
        self.iter()
            .map(|record| record.ux)
            .collect()
    }

    pub fn y(&self) -> Vec<f64> {
        self.iter()
            .map(|record| record.y)
            .collect()
    }

    pub fn uy(&self) -> Vec<f64> {
        self.iter()
            .map(|record| record.uy)
            .collect()
    }

    // The extrema below are for sizing a chart. With `with_uncertainty` set
    // the error bars are included, so the extent covers every drawn bar.

    pub fn min_x(&self, with_uncertainty: bool) -> Option<f64> {
        extreme(self.iter().map(|r| {
            if with_uncertainty {
                r.x - r.ux
            } else {
                r.x
            }
        }), f64::min)
    }

    pub fn max_x(&self, with_uncertainty: bool) -> Option<f64> {
        extreme(self.iter().map(|r| {
            if with_uncertainty {
                r.x + r.ux
            } else {
                r.x
            }
        }), f64::max)
    }

    pub fn min_y(&self, with_uncertainty: bool) -> Option<f64> {
        extreme(self.iter().map(|r| {
            if with_uncertainty {
                r.y - r.uy
            } else {
                r.y
            }
        }), f64::min)
    }

    pub fn max_y(&self, with_uncertainty: bool) -> Option<f64> {
        extreme(self.iter().map(|r| {
            if with_uncertainty {
                r.y + r.uy
            } else {
                r.y
            }
        }), f64::max)
    }

    pub fn best_fit(&self) -> Result<Line, FitError> {
        fitting::line_of_best_fit(&self.x(), &self.y())
    }

    pub fn max_gradient(&self) -> Result<Line, FitError> {
        fitting::max_gradient(&self.x(), &self.ux(), &self.y(), &self.uy())
    }

    pub fn min_gradient(&self) -> Result<Line, FitError> {
        fitting::min_gradient(&self.x(), &self.ux(), &self.y(), &self.uy())
    }
}

fn extreme(mut values: impl Iterator<Item = f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    let first = values.next()?;
    Some(values.fold(first, pick))
}

/// A straight line y = slope * x + intercept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f
            .precision()
            .unwrap_or(6);

        // Smallest intercept still visible at this precision
        let epsilon = 10.0_f64.powi(-(precision as i32));

        // Shown in full when undefined, so a vertical line doesn't read as
        // one through the origin
        let intercept = if self.intercept.is_nan() {
            "+NaN".to_string()
        } else if self.intercept.is_infinite() {
            if self.intercept > 0.0 {
                "+inf".to_string()
            } else {
                "-inf".to_string()
            }
        } else if self.intercept >= epsilon {
            format!("+{:.*}", precision, self.intercept)
        } else if self.intercept <= -epsilon {
            format!("{:.*}", precision, self.intercept)
        } else {
            String::new()
        };

        write!(f, "y = {:.*}x{}", precision, self.slope, intercept)
    }
}
