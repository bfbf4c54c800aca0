//! In-memory taxonomy graph: parent pointers plus name indices.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::VeritaxResult;
use crate::resolver::normalize;
use crate::taxonomy::ncbi;
use crate::types::TaxonId;

/// Parent-pointer taxonomy graph with the four name indices needed for
/// resolution. Built once from `nodes.dmp` and `names.dmp`, immutable
/// afterward; safe to share by reference across threads.
#[derive(Debug, Default)]
pub struct TaxonomyGraph {
    parents: HashMap<TaxonId, TaxonId>,
    scientific_names: HashMap<TaxonId, String>,
    scientific_name_ids: HashMap<String, TaxonId>,
    synonym_ids: HashMap<String, TaxonId>,
    normalized_ids: HashMap<String, TaxonId>,
}

impl TaxonomyGraph {
    /// Build the graph from the two dump sources. Any malformed line aborts
    /// the build; no partial graph is returned.
    pub fn build<N: BufRead, M: BufRead>(nodes: N, names: M) -> VeritaxResult<Self> {
        let mut graph = TaxonomyGraph::default();

        for (index, line) in nodes.lines().enumerate() {
            let line = line?;
            let node = ncbi::parse_node_line(&line, index + 1)?;
            graph
                .parents
                .insert(TaxonId::new(node.taxid), TaxonId::new(node.parent));
        }

        for (index, line) in names.lines().enumerate() {
            let line = line?;
            let entry = ncbi::parse_name_line(&line, index + 1)?;
            let taxid = TaxonId::new(entry.taxid.clone());
            // Last write wins throughout; the reference data is expected to
            // be 1:1 and we do not enforce it.
            graph
                .normalized_ids
                .insert(normalize(&entry.name), taxid.clone());
            if entry.is_scientific() {
                graph
                    .scientific_names
                    .insert(taxid.clone(), entry.name.clone());
                graph.scientific_name_ids.insert(entry.name, taxid);
            } else {
                graph.synonym_ids.insert(entry.name, taxid);
            }
        }

        info!(
            nodes = graph.parents.len(),
            scientific_names = graph.scientific_name_ids.len(),
            synonyms = graph.synonym_ids.len(),
            "taxonomy graph built"
        );
        Ok(graph)
    }

    /// Build the graph from `nodes.dmp` and `names.dmp` files on disk.
    pub fn from_files<P: AsRef<Path>>(nodes_path: P, names_path: P) -> VeritaxResult<Self> {
        let nodes = BufReader::new(File::open(nodes_path)?);
        let names = BufReader::new(File::open(names_path)?);
        Self::build(nodes, names)
    }

    /// Parent of the given taxid, if the taxid is known
    pub fn parent_of(&self, taxid: &str) -> Option<&TaxonId> {
        self.parents.get(taxid)
    }

    /// Canonical scientific name of the given taxid
    pub fn scientific_name_of(&self, taxid: &str) -> Option<&str> {
        self.scientific_names.get(taxid).map(String::as_str)
    }

    /// Exact, case-sensitive scientific name lookup
    pub fn taxid_for_scientific_name(&self, name: &str) -> Option<&TaxonId> {
        self.scientific_name_ids.get(name)
    }

    /// Exact, case-sensitive synonym lookup
    pub fn taxid_for_synonym(&self, name: &str) -> Option<&TaxonId> {
        self.synonym_ids.get(name)
    }

    /// Lookup by pre-normalized name; covers names of every class
    pub fn taxid_for_normalized_name(&self, normalized: &str) -> Option<&TaxonId> {
        self.normalized_ids.get(normalized)
    }

    /// All scientific names, in index order
    pub fn scientific_names(&self) -> impl Iterator<Item = &str> {
        self.scientific_name_ids.keys().map(String::as_str)
    }

    /// Number of taxa in the parent map
    pub fn node_count(&self) -> usize {
        self.parents.len()
    }

    /// Number of distinct names across all indices
    pub fn name_count(&self) -> usize {
        self.scientific_name_ids.len() + self.synonym_ids.len()
    }
}
