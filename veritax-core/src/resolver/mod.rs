//! Tiered resolution of free-text names against the taxonomy indices.

use tracing::{debug, warn};

use crate::taxonomy::TaxonomyGraph;
use crate::types::{MatchResult, MatchTier, TaxonId};

/// Normalize a reported name for case-insensitive lookup: trim, lowercase,
/// then collapse doubled spaces in a single left-to-right pass.
///
/// The narrow collapsing rule is deliberate. `replace("  ", " ")` rewrites
/// each non-overlapping doubled space once and does not touch tabs, so a run
/// of three spaces comes out as two. Matching depends on the index and the
/// lookup key being normalized the same way, not on full whitespace
/// squashing.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace("  ", " ")
}

/// Seam for name resolution, so callers can wrap the standard resolver
/// (e.g. with call counting in tests) without touching the engine.
pub trait Resolver {
    fn resolve(&self, name: &str, graph: &TaxonomyGraph) -> MatchResult;
}

/// The standard four-tier resolver.
///
/// Tiers, first hit wins:
/// 1. exact scientific name (case-sensitive)
/// 2. normalized name, any class
/// 3. exact synonym (case-sensitive)
/// 4. substring of exactly one scientific name
#[derive(Debug, Clone, Copy, Default)]
pub struct NameResolver;

impl NameResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a taxid to its scientific name, degrading to a non-hit when
    /// the names file recorded no scientific name for it (possible when a
    /// taxid is listed only under synonyms).
    fn scientific_name_for<'g>(
        &self,
        taxid: &TaxonId,
        graph: &'g TaxonomyGraph,
        tier: MatchTier,
    ) -> Option<&'g str> {
        let found = graph.scientific_name_of(taxid.as_str());
        if found.is_none() {
            warn!(
                taxid = %taxid,
                ?tier,
                "matched taxid has no scientific name; skipping tier"
            );
        }
        found
    }
}

impl Resolver for NameResolver {
    fn resolve(&self, name: &str, graph: &TaxonomyGraph) -> MatchResult {
        if name.is_empty() {
            return MatchResult::none(name);
        }

        // 1. Exact scientific name; never falls through to a weaker tier.
        if let Some(taxid) = graph.taxid_for_scientific_name(name) {
            return MatchResult {
                input: name.to_string(),
                taxid: Some(taxid.clone()),
                scientific_name: Some(name.to_string()),
                tier: MatchTier::Exact,
                auto_replaced: false,
            };
        }

        // 2. Case-insensitive match after normalization. The resolved name
        // is the taxid's canonical one, so this is an automatic replacement.
        let normalized = normalize(name);
        if let Some(taxid) = graph.taxid_for_normalized_name(&normalized) {
            if let Some(scientific) = self.scientific_name_for(taxid, graph, MatchTier::Normalized)
            {
                return MatchResult {
                    input: name.to_string(),
                    taxid: Some(taxid.clone()),
                    scientific_name: Some(scientific.to_string()),
                    tier: MatchTier::Normalized,
                    auto_replaced: true,
                };
            }
        }

        // 3. Exact synonym of some taxon.
        if let Some(taxid) = graph.taxid_for_synonym(name) {
            if let Some(scientific) = self.scientific_name_for(taxid, graph, MatchTier::Synonym) {
                return MatchResult {
                    input: name.to_string(),
                    taxid: Some(taxid.clone()),
                    scientific_name: Some(scientific.to_string()),
                    tier: MatchTier::Synonym,
                    auto_replaced: false,
                };
            }
        }

        // 4. Substring of exactly one scientific name. The scan stops as
        // soon as a second hit settles ambiguity, never after the first.
        let mut matches: Vec<&str> = Vec::with_capacity(2);
        for scientific in graph.scientific_names() {
            if scientific.contains(name) {
                matches.push(scientific);
                if matches.len() > 1 {
                    break;
                }
            }
        }
        if matches.len() == 1 {
            let resolved = matches[0];
            return MatchResult {
                input: name.to_string(),
                taxid: graph.taxid_for_scientific_name(resolved).cloned(),
                scientific_name: Some(resolved.to_string()),
                tier: MatchTier::Substring,
                auto_replaced: false,
            };
        }
        if matches.len() > 1 {
            debug!(name, "substring match is ambiguous");
        }

        MatchResult::none(name)
    }
}
