//! Taxonomic name resolution and virus classification against the NCBI
//! Taxonomy reference.
//!
//! The pipeline: two taxdump sources build an immutable [`TaxonomyGraph`];
//! the [`resolver`] matches free-text names against its indices through a
//! four-tier policy; the [`classifier`] walks parent pointers to decide
//! whether a matched taxon descends from Viruses; the
//! [`engine::ClassificationEngine`] combines both into per-name verdicts and
//! memoizes them per reported/preferred pair.

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod taxonomy;
pub mod types;

// Re-export commonly used types
pub use classifier::is_virus;
pub use config::{load_config, save_config, Config};
pub use engine::ClassificationEngine;
pub use error::{VeritaxError, VeritaxResult};
pub use resolver::{normalize, NameResolver, Resolver};
pub use taxonomy::TaxonomyGraph;
pub use types::{MatchResult, MatchTier, Outcome, TaxonId, Verdict};

/// Version information for the Veritax project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
