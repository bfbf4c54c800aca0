#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const NODES_DMP: &str = "1\t|\t1\t|\tno rank\t|\t\t|\n\
                             10239\t|\t1\t|\tsuperkingdom\t|\t\t|\n\
                             11320\t|\t10239\t|\tspecies\t|\t\t|\n\
                             562\t|\t1\t|\tspecies\t|\t\t|\n";

pub const NAMES_DMP: &str = "1\t|\troot\t|\t\t|\tscientific name\t|\n\
                             10239\t|\tViruses\t|\t\t|\tscientific name\t|\n\
                             11320\t|\tInfluenza A virus\t|\t\t|\tscientific name\t|\n\
                             11320\t|\tFlu A\t|\t\t|\tsynonym\t|\n\
                             562\t|\tEscherichia coli\t|\t\t|\tscientific name\t|\n";

pub const RECORDS_JSON: &str = r#"[
  {"studyAccession": "SDY1", "virusStrainReported": "influenza a virus", "virusStrainPreferred": "Influenza A virus"},
  {"studyAccession": "SDY1", "virusStrainReported": "influenza a virus", "virusStrainPreferred": "Influenza A virus"},
  {"studyAccession": "SDY2", "virusStrainReported": "Escherichia coli", "virusStrainPreferred": "Zika virus"}
]"#;

/// The veritax binary under test
pub fn veritax_cmd() -> Command {
    Command::cargo_bin("veritax").expect("veritax binary should build")
}

/// Write the standard taxonomy fixtures into `dir`, returning
/// (nodes_path, names_path)
pub fn write_taxonomy_fixtures(dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let nodes = dir.join("nodes.dmp");
    let names = dir.join("names.dmp");
    fs::write(&nodes, NODES_DMP)?;
    fs::write(&names, NAMES_DMP)?;
    Ok((nodes, names))
}

/// Write the standard records fixture into `dir`
pub fn write_records_fixture(dir: &Path) -> Result<PathBuf> {
    let records = dir.join("records.json");
    fs::write(&records, RECORDS_JSON)?;
    Ok(records)
}
