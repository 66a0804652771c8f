//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Builder for `content query` dumps as printed by adb
pub struct DumpBuilder {
    banner: Option<String>,
    rows: Vec<RowBuilder>,
}

impl DumpBuilder {
    /// Create a new builder with no banner and no rows
    pub fn new() -> Self {
        Self { banner: None, rows: Vec::new() }
    }

    /// Text printed before the first row marker
    pub fn with_banner(mut self, banner: &str) -> Self {
        self.banner = Some(banner.to_string());
        self
    }

    pub fn with_row(mut self, row: RowBuilder) -> Self {
        self.rows.push(row);
        self
    }

    /// Render the dump text
    pub fn build(&self) -> String {
        let mut dump = String::new();
        if let Some(banner) = &self.banner {
            dump.push_str(banner);
            dump.push('\n');
        }
        for (index, row) in self.rows.iter().enumerate() {
            dump.push_str(&format!("Row: {} {}\n", index, row.to_columns()));
        }
        dump
    }

    /// Write the dump into a temp dir and return both
    pub fn write_to_temp(&self) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("sms_dump.txt");
        fs::write(&path, self.build()).expect("Failed to write dump");
        (dir, path)
    }
}

impl Default for DumpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one provider row
pub struct RowBuilder {
    date: Option<String>,
    address: Option<String>,
    message_type: Option<String>,
    body: Option<String>,
    quoted_body: bool,
}

impl RowBuilder {
    /// Create a row with default values
    pub fn new() -> Self {
        Self {
            date: Some("1609459200000".to_string()),
            address: Some("+33612345678".to_string()),
            message_type: Some("1".to_string()),
            body: Some("Test message".to_string()),
            quoted_body: true,
        }
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn no_date(mut self) -> Self {
        self.date = None;
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn no_address(mut self) -> Self {
        self.address = None;
        self
    }

    pub fn message_type(mut self, message_type: &str) -> Self {
        self.message_type = Some(message_type.to_string());
        self
    }

    pub fn no_type(mut self) -> Self {
        self.message_type = None;
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Emit the body without surrounding quotes
    pub fn unquoted(mut self) -> Self {
        self.quoted_body = false;
        self
    }

    /// Render the row columns in the order Android prints them
    pub fn to_columns(&self) -> String {
        let mut columns = vec!["_id=1".to_string(), "thread_id=1".to_string()];
        if let Some(address) = &self.address {
            columns.push(format!("address={}", address));
        }
        columns.push("person=NULL".to_string());
        if let Some(date) = &self.date {
            columns.push(format!("date={}", date));
        }
        columns.push("date_sent=0".to_string());
        columns.push("read=1".to_string());
        if let Some(message_type) = &self.message_type {
            columns.push(format!("type={}", message_type));
        }
        if let Some(body) = &self.body {
            if self.quoted_body {
                columns.push(format!("body=\"{}\"", body));
            } else {
                columns.push(format!("body={}", body));
            }
        }
        columns.push("service_center=NULL".to_string());
        columns.join(", ")
    }
}

impl Default for RowBuilder {
    fn default() -> Self {
        Self::new()
    }
}
