use crate::error::{LineError, TrafficError};
use crate::record::{CarCount, Record};
use chrono::{DateTime, NaiveDateTime};
use log::{debug, warn};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A line that did not produce a record.
#[derive(Debug)]
pub struct RejectedLine {
    /// 1-based.
    pub line_number: usize,
    pub content: String,
    pub error: LineError,
}

impl fmt::Display for RejectedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} skipped ('{}'): {}", self.line_number, self.content, self.error)
    }
}

#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Valid records in file order.
    pub records: Vec<Record>,
    pub rejected: Vec<RejectedLine>,
}

/// Accepts local date-times with second or minute precision, or an RFC 3339
/// timestamp with an offset, which keeps its wall-clock time as written.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, LineError> {
    NaiveDateTime::parse_from_str(value, SECONDS_FORMAT)
        .or_else(|first| NaiveDateTime::parse_from_str(value, MINUTES_FORMAT).map_err(|_| first))
        .or_else(|first| {
            DateTime::parse_from_rfc3339(value)
                .map(|ts| ts.naive_local())
                .map_err(|_| first)
        })
        .map_err(|source| LineError::Timestamp {
            value: value.to_string(),
            source,
        })
}

/// A single half-hour count must fit in `u32`, so sums over any realistic
/// number of records fit in `CarCount`.
pub fn parse_count(value: &str) -> Result<CarCount, LineError> {
    // "-0" is still zero
    if let Some(magnitude) = value.strip_prefix('-') {
        if let Ok(n) = magnitude.parse::<u32>() {
            return if n == 0 {
                Ok(0)
            } else {
                Err(LineError::NegativeCount {
                    value: value.to_string(),
                })
            };
        }
    }
    value
        .parse::<u32>()
        .map(CarCount::from)
        .map_err(|source| LineError::Count {
            value: value.to_string(),
            source,
        })
}

/// Parses one non-blank line of the form `<timestamp> <count>`.
pub fn parse_line(line: &str) -> Result<Record, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [timestamp, count] = fields.as_slice() else {
        return Err(LineError::FieldCount { found: fields.len() });
    };
    Ok(Record::new(parse_timestamp(timestamp)?, parse_count(count)?))
}

/// Reads every line from `reader`, keeping the valid records and a diagnostic
/// for each rejected line. Blank lines are ignored. Only a failing reader is
/// an error.
pub fn parse_reader<R: BufRead>(mut reader: R) -> io::Result<ParseOutcome> {
    let mut outcome = ParseOutcome::default();
    let mut buffer = Vec::new();
    let mut line_number = 0;

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_number += 1;

        let parsed = match std::str::from_utf8(&buffer) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                parse_line(text).map_err(|error| (text.to_string(), error))
            }
            Err(_) => Err((
                String::from_utf8_lossy(&buffer).trim().to_string(),
                LineError::Encoding,
            )),
        };

        match parsed {
            Ok(record) => outcome.records.push(record),
            Err((content, error)) => {
                let rejected = RejectedLine {
                    line_number,
                    content,
                    error,
                };
                warn!("{rejected}");
                outcome.rejected.push(rejected);
            }
        }
    }

    debug!(
        "parsed {} records, rejected {} lines",
        outcome.records.len(),
        outcome.rejected.len()
    );
    Ok(outcome)
}

/// Opens and fully reads `path`. The file handle is dropped before returning.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseOutcome, TrafficError> {
    let path = path.as_ref();
    let io_error = |source| TrafficError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    parse_reader(BufReader::new(file)).map_err(io_error)
}
