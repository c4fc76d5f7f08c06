//! Record-oriented process loader.
//!
//! Each record is one line of comma-separated base-10 integers in fixed
//! order: `id, burst, arrival[, priority]`. Priority defaults to 0 when
//! the fourth field is absent. Blank lines are skipped; any malformed
//! field or wrong field count is fatal — the simulator cannot
//! meaningfully schedule incomplete data.

use std::error::Error;
use std::fmt;
use std::io::BufRead;

use crate::models::ProcessSpec;

/// An input-format error, tagged with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct InputError {
    /// Error category.
    pub kind: InputErrorKind,
    /// 1-based line number of the offending record.
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    /// The underlying reader failed.
    Io,
    /// A record has fewer than 3 or more than 4 fields.
    FieldCount,
    /// A field did not parse as a base-10 integer.
    MalformedInteger,
}

impl InputError {
    fn new(kind: InputErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl Error for InputError {}

/// Parses a single record.
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_record(line: &str, line_number: usize) -> Result<ProcessSpec, InputError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 || fields.len() > 4 {
        return Err(InputError::new(
            InputErrorKind::FieldCount,
            line_number,
            format!("expected 3 or 4 fields, got {}", fields.len()),
        ));
    }

    let id = parse_field::<u32>(fields[0], "id", line_number)?;
    let burst = parse_field::<u64>(fields[1], "burst", line_number)?;
    let arrival = parse_field::<u64>(fields[2], "arrival", line_number)?;

    let mut spec = ProcessSpec::new(id, burst, arrival);
    if let Some(raw) = fields.get(3) {
        spec = spec.with_priority(parse_field::<i64>(raw, "priority", line_number)?);
    }
    Ok(spec)
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    name: &str,
    line_number: usize,
) -> Result<T, InputError> {
    raw.parse().map_err(|_| {
        InputError::new(
            InputErrorKind::MalformedInteger,
            line_number,
            format!("malformed {name} field: '{raw}'"),
        )
    })
}

/// Loads all process records from a reader, in file order.
pub fn load_processes<R: BufRead>(reader: R) -> Result<Vec<ProcessSpec>, InputError> {
    let mut processes = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| {
            InputError::new(InputErrorKind::Io, line_number, e.to_string())
        })?;
        if line.trim().is_empty() {
            continue;
        }
        processes.push(parse_record(&line, line_number)?);
    }
    Ok(processes)
}
