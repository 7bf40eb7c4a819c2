//! Scanner for unsigned decimal numbers embedded in free text

use std::ops::Range;

/// A number found in a fragment of text. The span covers the digits (and
/// any absorbed decimal point) as byte offsets into the scanned fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericToken {
    pub value: f64,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No digit seen yet. A decimal point met here is remembered and puts
    /// the digits that follow into the fractional part.
    Before { point: bool },
    Integer,
    Fractional { leading: bool },
    Done { leading: bool },
}

/// Find the first number in `text`. Returns None if there are no digits.
pub fn scan(text: &str) -> Option<NumericToken> {
    let mut state = State::Before { point: false };
    let mut start = 0;
    let mut end = text.len();

    for (i, c) in text.char_indices() {
        let digit = c.is_ascii_digit();

        state = match (state, digit) {
            (State::Before { point }, true) => {
                start = i;
                if point {
                    State::Fractional { leading: true }
                } else {
                    State::Integer
                }
            }
            (State::Before { .. }, false) if c == '.' => State::Before { point: true },
            (State::Before { point }, false) => State::Before { point },
            (State::Integer, true) => State::Integer,
            (State::Integer, false) if c == '.' => State::Fractional { leading: false },
            (State::Fractional { leading }, true) => State::Fractional { leading },
            (State::Integer, false) => {
                end = i;
                State::Done { leading: false }
            }
            (State::Fractional { leading }, false) => {
                end = i;
                State::Done { leading }
            }
            (State::Done { leading }, _) => State::Done { leading },
        };

        if let State::Done { .. } = state {
            break;
        }
    }

    let leading = match state {
        State::Before { .. } => return None,
        State::Integer => false,
        State::Fractional { leading } | State::Done { leading } => leading,
    };

    // The run is ASCII digits with at most one point, so the standard
    // float parser gives the correctly rounded value.
    let run = &text[start..end];
    let value = if leading {
        format!("0.{}", run).parse::<f64>()
    } else {
        run.parse::<f64>()
    };

    value
        .ok()
        .map(|value| NumericToken {
            value,
            span: start..end,
        })
}
