//! parser for two-variable measurement data

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, RecordCollection};

pub mod parser;
pub mod scanner;

pub use parser::ParsingError;
pub use scanner::{scan, NumericToken};

/// Read a file and return an owned String. The caller keeps ownership of
/// the content so errors can later point back into it.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a collection of measurement records, using `dux` and
/// `duy` for lines which don't give their own uncertainties.
pub fn parse(content: &str, dux: f64, duy: f64) -> Result<RecordCollection, ParsingError> {
    let result = parser::read_records(content, dux, duy);

    match result {
        Ok(records) => {
            debug!(
                "Found {} record{}",
                records.len(),
                if records.len() == 1 { "" } else { "s" }
            );
            Ok(records)
        }
        Err(error) => {
            debug!("error: {}", error);
            Err(error)
        }
    }
}
