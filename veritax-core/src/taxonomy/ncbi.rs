//! Line-level parsing of NCBI Taxonomy dump files.
//!
//! The taxdump format is pipe-delimited with tab padding around every
//! delimiter and a trailing `\t|` on each line, e.g.
//!
//! ```text
//! 10239\t|\t1\t|\tsuperkingdom\t|\t\t|
//! ```
//!
//! Download from <ftp://ftp.ncbi.nih.gov/pub/taxonomy/taxdmp.zip>.

use crate::error::{VeritaxError, VeritaxResult};

/// The `name class` value that marks a taxon's canonical name
pub const SCIENTIFIC_NAME_CLASS: &str = "scientific name";

/// One parsed `nodes.dmp` line; fields past the parent are ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLine {
    pub taxid: String,
    pub parent: String,
}

/// One parsed `names.dmp` line; fields past the name class are ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLine {
    pub taxid: String,
    pub name: String,
    pub unique_name: String,
    pub class: String,
}

impl NameLine {
    pub fn is_scientific(&self) -> bool {
        self.class == SCIENTIFIC_NAME_CLASS
    }
}

/// Strip the flanking `|`/whitespace/tabs and split on the pipe delimiter,
/// trimming each field.
fn split_fields(line: &str) -> Vec<&str> {
    line.trim_matches(['|', '\t', ' ', '\r', '\n'])
        .split('|')
        .map(|field| field.trim_matches(['\t', ' ']))
        .collect()
}

/// Parse one `nodes.dmp` line. `line_number` is 1-based, for diagnostics.
pub fn parse_node_line(line: &str, line_number: usize) -> VeritaxResult<NodeLine> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(VeritaxError::Parse(format!(
            "nodes.dmp line {}: expected at least 2 fields, found {}",
            line_number,
            fields.len()
        )));
    }
    Ok(NodeLine {
        taxid: fields[0].to_string(),
        parent: fields[1].to_string(),
    })
}

/// Parse one `names.dmp` line. `line_number` is 1-based, for diagnostics.
pub fn parse_name_line(line: &str, line_number: usize) -> VeritaxResult<NameLine> {
    let fields = split_fields(line);
    if fields.len() < 4 {
        return Err(VeritaxError::Parse(format!(
            "names.dmp line {}: expected at least 4 fields, found {}",
            line_number,
            fields.len()
        )));
    }
    Ok(NameLine {
        taxid: fields[0].to_string(),
        name: fields[1].to_string(),
        unique_name: fields[2].to_string(),
        class: fields[3].to_string(),
    })
}
