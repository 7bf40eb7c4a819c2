use thiserror::Error;
use tracing::trace;

use crate::language::{MeasurementRecord, RecordCollection};
use crate::parsing::scanner::scan;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsingError {
    #[error("unknown fields {fields:?} on line {line}")]
    MalformedRecord { line: usize, fields: Vec<f64> },
}

impl ParsingError {
    /// The 1-based line number the problem was found on.
    pub fn line(&self) -> usize {
        match self {
            ParsingError::MalformedRecord { line, .. } => *line,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::MalformedRecord { fields, .. } => match fields.len() {
                1 => "only one number on this line".to_string(),
                n => format!("{} numbers on this line", n),
            },
        }
    }

    pub fn details(&self) -> String {
        "A measurement line holds 2 numbers (x y), 3 numbers (x y uy), or 4 numbers (x ux y uy).".to_string()
    }
}

/// Every number on a line, in order of appearance.
pub fn fields(line: &str) -> Vec<f64> {
    let mut fields = Vec::with_capacity(4);
    let mut rest = line;

    while let Some(token) = scan(rest) {
        fields.push(token.value);
        rest = &rest[token
            .span
            .end..];
    }

    fields
}

/// Interpret a line of text as a measurement. Lines without any numbers
/// give Ok(None). The line number is only used for error reporting.
pub fn read_record(
    line: &str,
    number: usize,
    dux: f64,
    duy: f64,
) -> Result<Option<MeasurementRecord>, ParsingError> {
    let fields = fields(line);
    trace!(number, ?fields);

    let record = match *fields.as_slice() {
        [] => return Ok(None),
        [x, y] => Some(MeasurementRecord {
            x,
            ux: dux,
            y,
            uy: duy,
        }),
        [x, y, uy] => Some(MeasurementRecord { x, ux: dux, y, uy }),
        [x, ux, y, uy] => Some(MeasurementRecord { x, ux, y, uy }),
        _ => None,
    };

    match record {
        Some(record) => Ok(Some(record)),
        None => Err(ParsingError::MalformedRecord {
            line: number,
            fields,
        }),
    }
}

/// Read every measurement out of `content`, one per line. The first
/// malformed line aborts the whole parse.
pub fn read_records(content: &str, dux: f64, duy: f64) -> Result<RecordCollection, ParsingError> {
    let mut records = Vec::new();

    for (i, line) in content
        .lines()
        .enumerate()
    {
        if let Some(record) = read_record(line, i + 1, dux, duy)? {
            records.push(record);
        }
    }

    Ok(RecordCollection(records))
}
