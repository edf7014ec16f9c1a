//! Parser for the tabular `systemctl list-timers` listing.
//!
//! The listing is fixed-width: column spans come from the header row and are
//! applied to every data row by character position, never by splitting on
//! whitespace (time values contain spaces).

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc, Weekday};
use regex::Regex;

use super::errors::TimerError;

/// `NEXT` and `UNIT` labels, each extended over trailing padding up to the
/// start of the following column label.
static HEADER_COLUMNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\bNEXT\W*\b).*(\bUNIT\W*\b)").expect("timer header regex is valid")
});

/// Character span `[from, to)` of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub from: usize,
    pub to: usize,
}

impl ColumnSpan {
    /// Slice this column out of `line`, trailing whitespace removed.
    ///
    /// Short lines yield a truncated or empty slice rather than an error.
    pub fn extract<'a>(&self, line: &'a str) -> &'a str {
        let start = byte_offset(line, self.from);
        let end = byte_offset(line, self.to);
        line[start..end].trim_end()
    }
}

/// Column layout derived once from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerColumns {
    pub next: ColumnSpan,
    pub unit: ColumnSpan,
}

impl TimerColumns {
    /// Locate the `NEXT` and `UNIT` columns in a header line.
    pub fn from_header(header: &str) -> Result<Self, TimerError> {
        let caps = HEADER_COLUMNS
            .captures(header)
            .ok_or_else(|| TimerError::MalformedHeader {
                header: header.to_string(),
            })?;

        let span = |index: usize| {
            caps.get(index).map(|m| ColumnSpan {
                from: header[..m.start()].chars().count(),
                to: header[..m.end()].chars().count(),
            })
        };

        match (span(1), span(2)) {
            (Some(next), Some(unit)) => Ok(Self { next, unit }),
            _ => Err(TimerError::MalformedHeader {
                header: header.to_string(),
            }),
        }
    }
}

/// Convert a character index into a byte offset, clamped to the line length.
fn byte_offset(line: &str, char_index: usize) -> usize {
    line.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}

/// Find the next run of `unit_name` in a timer listing.
///
/// Returns the timestamp of the first data row whose unit column equals
/// `unit_name` exactly, or `None` when no row matches. Rows after the first
/// match are never looked at.
///
/// # Errors
///
/// - [`TimerError::MalformedHeader`] if the listing is empty or its first line
///   lacks the `NEXT`/`UNIT` labels
/// - [`TimerError::TimeParse`] if the matching row's time column is not a
///   `<weekday> <YYYY-MM-DD> <HH:MM:SS> <zone>` value
pub fn parse_timer_listing(
    listing: &str,
    unit_name: &str,
) -> Result<Option<DateTime<Utc>>, TimerError> {
    let mut lines = listing.lines();
    let header = lines.next().ok_or_else(|| TimerError::MalformedHeader {
        header: String::new(),
    })?;
    let columns = TimerColumns::from_header(header)?;

    for line in lines {
        if columns.unit.extract(line) == unit_name {
            return parse_timer_time(columns.next.extract(line)).map(Some);
        }
    }

    Ok(None)
}

/// Parse `Mon 2026-10-19 15:00:00 CEST` as a UTC timestamp.
///
/// The zone abbreviation is required but ignored: the calendar fields are read
/// as UTC wall-clock time. The weekday must be a valid name but is not checked
/// against the date.
pub fn parse_timer_time(text: &str) -> Result<DateTime<Utc>, TimerError> {
    let invalid = |message: &str| TimerError::TimeParse {
        text: text.to_string(),
        message: message.to_string(),
    };

    let fields: Vec<&str> = text.split_whitespace().collect();
    let [weekday, date, time, zone] = fields.as_slice() else {
        return Err(invalid(
            "expected '<weekday> <YYYY-MM-DD> <HH:MM:SS> <timezone>'",
        ));
    };

    weekday
        .parse::<Weekday>()
        .map_err(|_| invalid("unknown weekday"))?;
    if !zone.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-')) {
        return Err(invalid("invalid timezone abbreviation"));
    }

    let naive = NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S")
        .map_err(|e| invalid(&e.to_string()))?;
    Ok(naive.and_utc())
}
