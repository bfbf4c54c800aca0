//! Record loading and delimited report emission.
//!
//! Records are JSON objects (the shape study exports arrive in); the report
//! repeats every record field under sorted headers, then appends the two
//! validation comments and a Y/N comments-match column. Every field is
//! quoted.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use veritax_core::types::Verdict;
use veritax_core::{VeritaxError, VeritaxResult};

/// One study record, field name to value
pub type Record = serde_json::Map<String, Value>;

/// Load a JSON array of records
pub fn load_records(path: &Path) -> VeritaxResult<Vec<Record>> {
    let contents = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;
    let Value::Array(items) = value else {
        return Err(VeritaxError::InvalidInput(
            "records file must contain a JSON array".to_string(),
        ));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(VeritaxError::InvalidInput(format!(
                "record {} is not a JSON object",
                index
            ))),
        })
        .collect()
}

/// Sorted header fields of a record
pub fn sorted_headers(record: &Record) -> Vec<String> {
    let mut headers: Vec<String> = record.keys().cloned().collect();
    headers.sort();
    headers
}

/// Extract a name field as text. Null becomes the empty string (classified
/// as unresolved downstream); a missing field is an input error.
pub fn field_text(record: &Record, field: &str) -> VeritaxResult<String> {
    match record.get(field) {
        None => Err(VeritaxError::InvalidInput(format!(
            "record has no field '{}'",
            field
        ))),
        Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
    }
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Writes the validation report with every field quoted
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl ReportWriter<Box<dyn Write>> {
    /// Write to the given file, or to stdout when no path is given
    pub fn create(path: Option<&Path>, delimiter: u8) -> VeritaxResult<Self> {
        let out: Box<dyn Write> = match path {
            Some(p) => Box::new(File::create(p)?),
            None => Box::new(io::stdout()),
        };
        Ok(Self::from_writer(out, delimiter))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn from_writer(out: W, delimiter: u8) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(out);
        Self { writer }
    }

    pub fn write_header(
        &mut self,
        headers: &[String],
        reported_field: &str,
        preferred_field: &str,
    ) -> VeritaxResult<()> {
        let mut row = headers.to_vec();
        row.push(format!("Comment on {}", reported_field));
        row.push(format!("Comment on {}", preferred_field));
        row.push("Comments match".to_string());
        self.write_record(&row)
    }

    pub fn write_row(
        &mut self,
        record: &Record,
        headers: &[String],
        reported: &Verdict,
        preferred: &Verdict,
    ) -> VeritaxResult<()> {
        let mut row: Vec<String> = headers
            .iter()
            .map(|header| display_value(record.get(header)))
            .collect();
        row.push(reported.comment_text().to_string());
        row.push(preferred.comment_text().to_string());
        row.push(if reported.matches(preferred) { "Y" } else { "N" }.to_string());
        self.write_record(&row)
    }

    pub fn flush(&mut self) -> VeritaxResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn write_record(&mut self, row: &[String]) -> VeritaxResult<()> {
        self.writer
            .write_record(row)
            .map_err(|e| VeritaxError::Serialization(e.to_string()))
    }
}
