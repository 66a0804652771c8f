//! Parsers for SMS provider dumps
//!
//! # Error Handling Strategy
//!
//! Dump parsing never fails. A provider dump is loosely structured text and any single
//! row can be malformed:
//!
//! - **Malformed rows**: A row without `date` or `address`, or with a `date` that is not
//!   a non-negative integer, is dropped. Parsing continues with the next row.
//!
//! - **Empty dumps**: Text without any `Row: N` marker yields zero records.
//!
//! - **Visibility**: [`parse_dump_with_stats`] reports how many rows were seen and dropped
//!   so the caller can warn when a whole dump fails to parse.
//!
//! Field extraction is split in two: [`fields::extract_field`] for scalar columns and
//! [`fields::extract_body`] for the body, which may be quoted and span lines. New columns
//! with structured values should get their own extractor.

pub mod dump;
pub mod fields;

pub use dump::{DumpParse, parse_dump, parse_dump_with_stats};
pub use fields::{extract_body, extract_field};
