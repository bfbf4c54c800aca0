//! Classification engine: resolution + virus test + verdict mapping, with
//! per-pair memoization for record streams.

use dashmap::DashMap;
use tracing::debug;

use crate::classifier::is_virus;
use crate::error::VeritaxResult;
use crate::resolver::{NameResolver, Resolver};
use crate::taxonomy::TaxonomyGraph;
use crate::types::{MatchTier, Verdict};

/// Combines the resolver and the virus classifier into verdicts, memoizing
/// the verdict pair for each distinct `(reported, preferred)` name pair.
///
/// The graph is read-only and the cache only ever holds complete pairs, so
/// one engine can serve concurrent callers; racing classifications of the
/// same pair at worst duplicate work.
pub struct ClassificationEngine<'g, R: Resolver = NameResolver> {
    graph: &'g TaxonomyGraph,
    resolver: R,
    pair_cache: DashMap<(String, String), (Verdict, Verdict)>,
}

impl<'g> ClassificationEngine<'g> {
    pub fn new(graph: &'g TaxonomyGraph) -> Self {
        Self::with_resolver(graph, NameResolver::new())
    }
}

impl<'g, R: Resolver> ClassificationEngine<'g, R> {
    pub fn with_resolver(graph: &'g TaxonomyGraph, resolver: R) -> Self {
        Self {
            graph,
            resolver,
            pair_cache: DashMap::new(),
        }
    }

    /// Classify one name into a verdict.
    pub fn classify(&self, name: &str) -> VeritaxResult<Verdict> {
        let matched = self.resolver.resolve(name, self.graph);

        let Some(taxid) = matched.taxid.as_ref() else {
            debug!(name, "no match at any tier");
            return Ok(Verdict::unresolved());
        };
        if !is_virus(taxid.as_str(), self.graph)? {
            debug!(name, %taxid, "matched a non-virus taxon");
            return Ok(Verdict::not_a_virus());
        }

        let resolved = matched.scientific_name.as_deref().unwrap_or(&matched.input);
        let verdict = match matched.tier {
            MatchTier::Exact => Verdict::confirmed(),
            MatchTier::Normalized => Verdict::auto_corrected(&matched.input, resolved),
            MatchTier::Synonym | MatchTier::Substring => Verdict::suggested(resolved),
            // A taxid without a tier cannot arise from the resolver; treat
            // it as unmatched rather than panic.
            MatchTier::None => Verdict::unresolved(),
        };
        debug!(name, outcome = %verdict.outcome, "classified");
        Ok(verdict)
    }

    /// Classify a `(reported, preferred)` pair, computing each distinct pair
    /// at most once per engine lifetime. Errors are not cached.
    pub fn classify_pair(
        &self,
        reported: &str,
        preferred: &str,
    ) -> VeritaxResult<(Verdict, Verdict)> {
        let key = (reported.to_string(), preferred.to_string());
        if let Some(cached) = self.pair_cache.get(&key) {
            return Ok(cached.value().clone());
        }

        let pair = (self.classify(reported)?, self.classify(preferred)?);
        self.pair_cache.insert(key, pair.clone());
        Ok(pair)
    }

    /// Number of distinct pairs classified so far
    pub fn cached_pair_count(&self) -> usize {
        self.pair_cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MatchResult, Outcome};
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn virus_graph() -> TaxonomyGraph {
        TaxonomyGraph::build(
            Cursor::new(
                "1\t|\t1\t|\n10239\t|\t1\t|\n11320\t|\t10239\t|\n562\t|\t1\t|\n",
            ),
            Cursor::new(
                "1\t|\troot\t|\t\t|\tscientific name\t|\n\
                 10239\t|\tViruses\t|\t\t|\tscientific name\t|\n\
                 11320\t|\tInfluenza A virus\t|\t\t|\tscientific name\t|\n\
                 11320\t|\tFlu A\t|\t\t|\tsynonym\t|\n\
                 562\t|\tEscherichia coli\t|\t\t|\tscientific name\t|\n",
            ),
        )
        .unwrap()
    }

    #[test]
    fn test_confirmed_has_no_comment() {
        let g = virus_graph();
        let engine = ClassificationEngine::new(&g);
        let verdict = engine.classify("Influenza A virus").unwrap();
        assert_eq!(verdict.outcome, Outcome::Confirmed);
        assert_eq!(verdict.comment, None);
    }

    #[test]
    fn test_auto_corrected_comment() {
        let g = virus_graph();
        let engine = ClassificationEngine::new(&g);
        let verdict = engine.classify("influenza a virus").unwrap();
        assert_eq!(verdict.outcome, Outcome::AutoCorrected);
        assert_eq!(
            verdict.comment.as_deref(),
            Some("Automatically replaced \"influenza a virus\" with \"Influenza A virus\".")
        );
        assert_eq!(verdict.corrected_name.as_deref(), Some("Influenza A virus"));
    }

    #[test]
    fn test_substring_suggestion() {
        let g = virus_graph();
        let engine = ClassificationEngine::new(&g);
        let verdict = engine.classify("enza A").unwrap();
        assert_eq!(verdict.outcome, Outcome::Suggested);
        assert_eq!(verdict.comment.as_deref(), Some("Suggestion: Influenza A virus"));
    }

    #[test]
    fn test_non_virus_taxon() {
        let g = virus_graph();
        let engine = ClassificationEngine::new(&g);
        let verdict = engine.classify("Escherichia coli").unwrap();
        assert_eq!(verdict.outcome, Outcome::NotAVirus);
        assert_eq!(verdict.comment.as_deref(), Some("Not the name of a virus"));
    }

    #[test]
    fn test_unmatched_name() {
        let g = virus_graph();
        let engine = ClassificationEngine::new(&g);
        let verdict = engine.classify("Zika virus").unwrap();
        assert_eq!(verdict.outcome, Outcome::Unresolved);
        assert_eq!(verdict.comment.as_deref(), Some("Not found in NCBI Taxonomy"));
    }

    #[test]
    fn test_empty_name_is_unresolved_not_error() {
        let g = virus_graph();
        let engine = ClassificationEngine::new(&g);
        let verdict = engine.classify("").unwrap();
        assert_eq!(verdict.outcome, Outcome::Unresolved);
    }

    /// Resolver wrapper that counts calls, for observing memoization.
    struct CountingResolver {
        inner: NameResolver,
        calls: AtomicUsize,
    }

    impl CountingResolver {
        fn new() -> Self {
            Self {
                inner: NameResolver::new(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Resolver for &CountingResolver {
        fn resolve(&self, name: &str, graph: &TaxonomyGraph) -> MatchResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.resolve(name, graph)
        }
    }

    #[test]
    fn test_pair_memoization_resolves_each_pair_once() {
        let g = virus_graph();
        let resolver = CountingResolver::new();
        let engine = ClassificationEngine::with_resolver(&g, &resolver);

        let first = engine
            .classify_pair("influenza a virus", "Influenza A virus")
            .unwrap();
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 2);

        let second = engine
            .classify_pair("influenza a virus", "Influenza A virus")
            .unwrap();
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 2, "cached pair re-ran");
        assert_eq!(first, second);
        assert_eq!(engine.cached_pair_count(), 1);

        engine.classify_pair("Flu A", "Influenza A virus").unwrap();
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 4);
        assert_eq!(engine.cached_pair_count(), 2);
    }

    #[test]
    fn test_pair_comments_match_flag() {
        let g = virus_graph();
        let engine = ClassificationEngine::new(&g);

        // Both confirmed: no comments, so they agree
        let (a, b) = engine
            .classify_pair("Influenza A virus", "Influenza A virus")
            .unwrap();
        assert!(a.matches(&b));

        // Auto-corrected vs confirmed: comments differ
        let (a, b) = engine
            .classify_pair("influenza a virus", "Influenza A virus")
            .unwrap();
        assert!(!a.matches(&b));
    }

    #[test]
    fn test_integrity_error_surfaces_at_classification() {
        let g = TaxonomyGraph::build(
            Cursor::new("1\t|\t1\t|\n77\t|\t78\t|\n"),
            Cursor::new("77\t|\tOrphan virus\t|\t\t|\tscientific name\t|\n"),
        )
        .unwrap();
        let engine = ClassificationEngine::new(&g);
        let err = engine.classify("Orphan virus").unwrap_err();
        assert!(matches!(err, crate::error::VeritaxError::GraphIntegrity(_)));
    }
}
