use std::{fmt, path::Path};

use owo_colors::OwoColorize;

use crate::parsing::{scan, ParsingError};

/// A problem with a data file, carrying enough context to show the user
/// where in the file it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
    pub source: &'i str,
    /// 1-based
    pub line: usize,
}

impl<'i> DataError<'i> {
    pub fn from_parsing(error: &ParsingError, filename: &'i Path, source: &'i str) -> Self {
        DataError {
            problem: error.message(),
            details: error.details(),
            filename,
            source,
            line: error.line(),
        }
    }

    // Verbose detailed explanation
    pub fn full_details(&self) -> String {
        let code = self
            .source
            .lines()
            .nth(self.line.saturating_sub(1))
            .unwrap_or("?");

        let column = calculate_column_number(code) + 1;

        let width = self
            .line
            .to_string()
            .len();
        let width = 3.max(width);

        format!(
            r#"
{}: {}
{}:{}:{}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
            "#,
            "error".bright_red(),
            self.problem
                .bold(),
            self.filename
                .to_string_lossy(),
            self.line,
            column,
            ' ',
            '|'.bright_blue(),
            self.line
                .bright_blue(),
            '|'.bright_blue(),
            code,
            ' ',
            '|'.bright_blue(),
            '^'.bright_red(),
            self.details
        )
        .trim_ascii()
        .to_string()
    }
}

// Concise version for internal use
impl<'i> fmt::Display for DataError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: {}:{}:{} {}",
            self.filename
                .to_string_lossy(),
            self.line,
            calculate_column_number(
                self.source
                    .lines()
                    .nth(self.line.saturating_sub(1))
                    .unwrap_or("")
            ) + 1,
            self.problem
        )
    }
}

// Zero-origin column, counted in characters, of the first number on the
// line. That's where the user should start looking.
fn calculate_column_number(code: &str) -> usize {
    match scan(code) {
        Some(token) => code[..token
            .span
            .start]
            .chars()
            .count(),
        None => 0,
    }
}
