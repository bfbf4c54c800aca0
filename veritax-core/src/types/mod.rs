//! Shared types for taxonomy lookups and classification verdicts

pub mod taxonomy;
pub mod verdict;

pub use taxonomy::TaxonId;
pub use verdict::{
    MatchResult, MatchTier, Outcome, Verdict, COMMENT_NOT_A_VIRUS, COMMENT_NOT_FOUND,
};
