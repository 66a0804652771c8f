//! Rendering of parsed messages into the backup file format
//!
//! The text format is one block per message, each followed by a blank line:
//!
//! ```text
//! Date: 2021-01-01
//! Heure: 00:00:00
//! De: 12345
//! Message: Hello, world
//!
//! ```
//!
//! Bodies are written verbatim. A body containing a blank line looks like a block
//! separator to a human reader; the file is not meant to be parsed back.

pub mod timezone;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::models::{Direction, MessageRecord};

pub use timezone::RenderZone;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Render records as text, one block per record in input order
///
/// # Examples
///
/// ```
/// use sms_backup::formatter::{RenderZone, format_records};
/// use sms_backup::parse_dump;
///
/// let records = parse_dump("Row: 0 date=1609459200000, address=12345, type=1, body=Hi");
/// assert_eq!(
///     format_records(&records, RenderZone::Utc),
///     "Date: 2021-01-01\nHeure: 00:00:00\nDe: 12345\nMessage: Hi\n\n"
/// );
/// ```
pub fn format_records(records: &[MessageRecord], zone: RenderZone) -> String {
    let mut output = String::new();
    for record in records {
        write_record(&mut output, record, zone);
    }
    output
}

fn write_record(output: &mut String, record: &MessageRecord, zone: RenderZone) {
    let wall = zone.to_wall_clock(&record.timestamp());
    output.push_str(&format!(
        "Date: {}\nHeure: {}\n{}: {}\nMessage: {}\n\n",
        wall.format("%Y-%m-%d"),
        wall.format("%H:%M:%S"),
        record.direction().label(),
        record.address(),
        record.body()
    ));
}

#[derive(Debug, Serialize)]
struct RenderedMessage<'a> {
    date: String,
    time: String,
    direction: Direction,
    address: &'a str,
    body: &'a str,
    epoch_millis: i64,
}

/// Render records as a pretty-printed JSON array with the same date and time columns
/// as the text format
pub fn format_records_json(records: &[MessageRecord], zone: RenderZone) -> Result<String> {
    let rendered: Vec<RenderedMessage<'_>> = records
        .iter()
        .map(|record| {
            let wall = zone.to_wall_clock(&record.timestamp());
            RenderedMessage {
                date: wall.format("%Y-%m-%d").to_string(),
                time: wall.format("%H:%M:%S").to_string(),
                direction: record.direction(),
                address: record.address(),
                body: record.body(),
                epoch_millis: record.epoch_millis(),
            }
        })
        .collect();

    serde_json::to_string_pretty(&rendered).context("Failed to serialize messages to JSON")
}

/// Render records in the requested format
pub fn render(records: &[MessageRecord], zone: RenderZone, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_records(records, zone)),
        OutputFormat::Json => format_records_json(records, zone),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn record(millis: u64, address: &str, direction: Direction, body: &str) -> MessageRecord {
        MessageRecord::new(millis, address, direction, body).unwrap()
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_records(&[], RenderZone::Utc), "");
    }

    #[test]
    fn test_format_two_records() {
        let records = vec![
            record(1609459200000, "12345", Direction::Incoming, "Hello, world"),
            record(1609459260000, "67890", Direction::Outgoing, "Bye"),
        ];

        let expected = "Date: 2021-01-01\nHeure: 00:00:00\nDe: 12345\nMessage: Hello, world\n\n\
                        Date: 2021-01-01\nHeure: 00:01:00\nÀ: 67890\nMessage: Bye\n\n";
        assert_eq!(format_records(&records, RenderZone::Utc), expected);
    }

    #[test]
    fn test_format_body_verbatim() {
        let records = vec![record(0, "1", Direction::Incoming, "a\n\nb \"q\"")];
        let output = format_records(&records, RenderZone::Utc);
        assert!(output.ends_with("Message: a\n\nb \"q\"\n\n"));
    }

    #[test]
    fn test_format_golden_timestamp_reparses() {
        let records = vec![record(1700000000000, "1", Direction::Outgoing, "")];
        let output = format_records(&records, RenderZone::Utc);

        let date_line = output.lines().find_map(|l| l.strip_prefix("Date: ")).unwrap();
        let time_line = output.lines().find_map(|l| l.strip_prefix("Heure: ")).unwrap();
        assert_eq!(date_line, "2023-11-14");
        assert_eq!(time_line, "22:13:20");

        let date = NaiveDate::parse_from_str(date_line, "%Y-%m-%d").unwrap();
        let time = NaiveTime::parse_from_str(time_line, "%H:%M:%S").unwrap();
        assert_eq!(date.and_time(time), RenderZone::Utc.to_wall_clock(&records[0].timestamp()));
    }

    #[test]
    fn test_format_fixed_offset() {
        let records = vec![record(1609459200000, "1", Direction::Incoming, "x")];
        let zone: RenderZone = "-01:00".parse().unwrap();
        let output = format_records(&records, zone);
        assert!(output.starts_with("Date: 2020-12-31\nHeure: 23:00:00\n"));
    }

    #[test]
    fn test_format_json() {
        let records = vec![record(1609459200000, "12345", Direction::Incoming, "Hello, world")];
        let json = format_records_json(&records, RenderZone::Utc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["date"], "2021-01-01");
        assert_eq!(value[0]["time"], "00:00:00");
        assert_eq!(value[0]["direction"], "Incoming");
        assert_eq!(value[0]["address"], "12345");
        assert_eq!(value[0]["body"], "Hello, world");
        assert_eq!(value[0]["epoch_millis"], 1609459200000i64);
    }

    #[test]
    fn test_format_json_empty() {
        assert_eq!(format_records_json(&[], RenderZone::Utc).unwrap(), "[]");
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Text.extension(), "txt");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}
