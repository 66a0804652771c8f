use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Direction, MessageRecord};
use crate::parsers::fields::{extract_body, extract_field};

fn row_marker_re() -> &'static Regex {
    static ROW_MARKER_RE: OnceLock<Regex> = OnceLock::new();
    ROW_MARKER_RE.get_or_init(|| Regex::new(r"Row: \d+\s+").expect("valid row marker regex"))
}

/// Records parsed from a dump, with counters for blocks that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpParse {
    pub records: Vec<MessageRecord>,
    /// Number of `Row: N` markers found
    pub blocks: usize,
    /// Blocks that produced no record
    pub dropped: usize,
}

impl DumpParse {
    /// True when rows were present but none could be parsed, which usually means
    /// the device emitted a dump layout this parser does not understand
    pub fn all_dropped(&self) -> bool {
        self.blocks > 0 && self.records.is_empty()
    }
}

/// Parse an `adb shell content query --uri content://sms` dump into message records
///
/// Blocks missing `date` or `address`, or whose `date` is not a non-negative integer,
/// are skipped. Records keep the order of the dump.
///
/// # Examples
///
/// ```
/// use sms_backup::parse_dump;
///
/// let dump = "Row: 0 date=1609459200000, address=12345, type=1, body=\"Hello, world\"\n\
///             Row: 1 date=1609459260000, address=67890, type=2, body=Bye";
/// let records = parse_dump(dump);
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].body(), "Hello, world");
/// ```
pub fn parse_dump(raw: &str) -> Vec<MessageRecord> {
    parse_dump_with_stats(raw).records
}

/// Same as [`parse_dump`], also reporting how many blocks were seen and dropped
pub fn parse_dump_with_stats(raw: &str) -> DumpParse {
    let mut parse = DumpParse::default();

    // The segment before the first marker is banner text, never a row
    for block in row_marker_re().split(raw).skip(1) {
        parse.blocks += 1;
        match parse_block(block) {
            Some(record) => parse.records.push(record),
            None => parse.dropped += 1,
        }
    }

    parse
}

fn parse_block(block: &str) -> Option<MessageRecord> {
    let date = extract_field(block, "date");
    let address = extract_field(block, "address");
    if date.is_empty() || address.is_empty() {
        return None;
    }

    let epoch_millis = date.parse::<u64>().ok()?;
    let direction = Direction::from_type_code(&extract_field(block, "type"));
    let body = extract_body(block);

    MessageRecord::new(epoch_millis, address, direction, body)
}
