//! Project files bundle a dataset with its title, axis labels, and default
//! uncertainties so a plot can be reproduced later. They are stored as JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::defaults;
use crate::language::{LoadingError, RecordCollection};
use crate::parsing::{self, ParsingError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub version: String,
    pub creator: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub default_x_uncertainty: f64,
    pub default_y_uncertainty: f64,
    /// The measurement data, exactly as it would appear in a data file.
    pub dataset: String,
}

impl Default for Project {
    fn default() -> Self {
        Project {
            version: defaults::PROJECT_VERSION.to_string(),
            creator: defaults::CREATOR.to_string(),
            title: defaults::TITLE.to_string(),
            x_label: defaults::X_LABEL.to_string(),
            y_label: defaults::Y_LABEL.to_string(),
            default_x_uncertainty: defaults::X_UNCERTAINTY,
            default_y_uncertainty: defaults::Y_UNCERTAINTY,
            dataset: String::new(),
        }
    }
}

impl Project {
    pub fn load(filename: &Path) -> Result<Project, LoadingError<'_>> {
        info!("Loading project: {}", filename.display());

        let content = parsing::load(filename)?;

        serde_json::from_str(&content).map_err(|error| {
            debug!(?error);
            LoadingError {
                problem: "Invalid project file".to_string(),
                details: error.to_string(),
                filename,
            }
        })
    }

    pub fn save<'i>(&self, filename: &'i Path) -> Result<(), LoadingError<'i>> {
        info!("Saving project: {}", filename.display());

        let failed = |details: String| LoadingError {
            problem: "Failed writing".to_string(),
            details,
            filename,
        };

        let file = File::create(filename).map_err(|error| failed(error.to_string()))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, self).map_err(|error| failed(error.to_string()))?;
        writer
            .flush()
            .map_err(|error| failed(error.to_string()))
    }

    /// Parse the embedded dataset using this project's default uncertainties.
    pub fn records(&self) -> Result<RecordCollection, ParsingError> {
        parsing::parse(
            &self.dataset,
            self.default_x_uncertainty,
            self.default_y_uncertainty,
        )
    }
}
