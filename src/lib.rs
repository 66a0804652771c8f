//! SMS Backup - Save the SMS messages of an Android device as a readable text file
//!
//! The device side is a plain `adb shell content query --uri content://sms`. This library
//! turns the dump it prints into message records and renders them:
//!
//! - Splitting the dump into `Row: N` blocks and extracting `date`, `address`, `type`
//!   and `body` from each one
//! - Skipping malformed rows without failing the whole dump
//! - Rendering records as dated text blocks (or JSON) in an explicit timezone
//! - Driving `adb` and writing timestamped backup files
//!
//! # Example
//!
//! ```
//! use sms_backup::formatter::{RenderZone, format_records};
//! use sms_backup::parse_dump;
//!
//! let dump = "Row: 0 date=1609459200000, address=12345, type=1, body=\"Hello, world\"";
//! let records = parse_dump(dump);
//! let text = format_records(&records, RenderZone::Utc);
//! assert!(text.contains("De: 12345\nMessage: Hello, world\n"));
//! ```

pub mod backup;
pub mod cli;
pub mod device;
pub mod formatter;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use formatter::{OutputFormat, RenderZone, format_records};
pub use models::{Direction, MessageRecord};
pub use parsers::dump::{DumpParse, parse_dump, parse_dump_with_stats};
