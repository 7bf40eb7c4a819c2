//! Output generation for the plotfit CLI application

use serde::Serialize;
use thiserror::Error;
use tinytemplate::TinyTemplate;
use tracing::{debug, warn};

use crate::fitting::FitError;
use crate::language::{Line, MeasurementRecord, RecordCollection};

static TEMPLATE: &'static str = r#"{title}
{y_label} against {x_label}, {count} record{plural}

    Best fit      {best_fit}
    Max gradient  {max_gradient}
    Min gradient  {min_gradient}

    x from {x_from} to {x_to}, y from {y_from} to {y_to}
"#;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("template: {0}")]
    Template(#[from] tinytemplate::error::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a presentation layer needs to draw a dataset: the records
/// themselves, the three fitted lines, and the extent of the error bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub records: Vec<MeasurementRecord>,
    pub best_fit: Line,
    pub max_gradient: Line,
    pub min_gradient: Line,
    pub x_extent: (f64, f64),
    pub y_extent: (f64, f64),
}

impl Summary {
    pub fn new(
        title: &str,
        x_label: &str,
        y_label: &str,
        records: &RecordCollection,
    ) -> Result<Summary, FitError> {
        let best_fit = records.best_fit()?;
        let max_gradient = records.max_gradient()?;
        let min_gradient = records.min_gradient()?;

        for (name, line) in [
            ("best fit", &best_fit),
            ("max gradient", &max_gradient),
            ("min gradient", &min_gradient),
        ] {
            if !line.is_finite() {
                warn!("{} line is not finite: {}", name, line);
            }
        }

        // Fitting has already rejected fewer than two records, so the
        // extents always exist.
        let x_extent = (
            records
                .min_x(true)
                .unwrap_or_default(),
            records
                .max_x(true)
                .unwrap_or_default(),
        );
        let y_extent = (
            records
                .min_y(true)
                .unwrap_or_default(),
            records
                .max_y(true)
                .unwrap_or_default(),
        );

        Ok(Summary {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            records: records.to_vec(),
            best_fit,
            max_gradient,
            min_gradient,
            x_extent,
            y_extent,
        })
    }
}

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    count: usize,
    plural: &'static str,
    best_fit: String,
    max_gradient: String,
    min_gradient: String,
    x_from: f64,
    x_to: f64,
    y_from: f64,
    y_to: f64,
}

/// Render a summary as human readable text. Lines are shown to `precision`
/// decimal places.
pub fn via_text(summary: &Summary, precision: usize) -> Result<String, OutputError> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", TEMPLATE)?;

    let count = summary
        .records
        .len();

    let context = Context {
        title: &summary.title,
        x_label: &summary.x_label,
        y_label: &summary.y_label,
        count,
        plural: if count == 1 { "" } else { "s" },
        best_fit: format!("{:.*}", precision, summary.best_fit),
        max_gradient: format!("{:.*}", precision, summary.max_gradient),
        min_gradient: format!("{:.*}", precision, summary.min_gradient),
        x_from: summary
            .x_extent
            .0,
        x_to: summary
            .x_extent
            .1,
        y_from: summary
            .y_extent
            .0,
        y_to: summary
            .y_extent
            .1,
    };

    let rendered = tt.render("summary", &context)?;
    debug!("Rendered {} bytes", rendered.len());

    Ok(rendered)
}

pub fn via_json(summary: &Summary) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(summary)?)
}
