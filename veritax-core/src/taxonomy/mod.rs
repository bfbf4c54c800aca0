//! NCBI Taxonomy ingestion: dump-file parsing and the in-memory graph

pub mod graph;
pub mod ncbi;

pub use graph::TaxonomyGraph;
pub use ncbi::{parse_name_line, parse_node_line, NameLine, NodeLine, SCIENTIFIC_NAME_CLASS};
