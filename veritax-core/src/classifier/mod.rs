//! Virus classification by ancestor walk over the parent-pointer graph.

use std::collections::HashSet;

use crate::error::{VeritaxError, VeritaxResult};
use crate::taxonomy::TaxonomyGraph;
use crate::types::TaxonId;

/// Walk the parent chain from `taxid` and report whether it descends from
/// the Viruses node ("10239"). Reaching the root ("1") first means no.
///
/// The reference data is acyclic, but the walk does not rely on that: a
/// parent missing from the graph is a `GraphIntegrity` error and a revisited
/// taxid is a `Cycle` error, never an infinite loop.
pub fn is_virus<'a>(taxid: &'a str, graph: &'a TaxonomyGraph) -> VeritaxResult<bool> {
    if taxid.is_empty() {
        return Ok(false);
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = taxid;
    loop {
        if current == TaxonId::VIRUSES {
            return Ok(true);
        }
        if current == TaxonId::ROOT {
            return Ok(false);
        }
        if !visited.insert(current) {
            return Err(VeritaxError::Cycle(current.to_string()));
        }
        current = graph
            .parent_of(current)
            .ok_or_else(|| VeritaxError::GraphIntegrity(current.to_string()))?
            .as_str();
    }
}
