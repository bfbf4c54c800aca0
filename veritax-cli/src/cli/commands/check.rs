use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::collections::HashSet;
use std::path::PathBuf;

use veritax_core::types::{Outcome, Verdict};
use veritax_core::{ClassificationEngine, TaxonomyGraph};

#[derive(Args)]
pub struct CheckArgs {
    /// The NCBI nodes.dmp file
    #[arg(value_name = "NODES")]
    pub nodes: PathBuf,

    /// The NCBI names.dmp file
    #[arg(value_name = "NAMES")]
    pub names: PathBuf,

    /// Names to check
    #[arg(value_name = "NAME")]
    pub queries: Vec<String>,

    /// Read names from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Tally of verdicts across one check run
#[derive(Debug, Default)]
struct Tally {
    matched: usize,
    replaced: usize,
    suggested: usize,
    not_a_virus: usize,
    unmatched: usize,
}

impl Tally {
    fn record(&mut self, verdict: &Verdict) {
        match verdict.outcome {
            Outcome::Confirmed => self.matched += 1,
            Outcome::AutoCorrected => self.replaced += 1,
            Outcome::Suggested => self.suggested += 1,
            Outcome::NotAVirus => self.not_a_virus += 1,
            Outcome::Unresolved => self.unmatched += 1,
        }
    }

    fn total(&self) -> usize {
        self.matched + self.replaced + self.suggested + self.not_a_virus + self.unmatched
    }
}

pub fn run(args: CheckArgs) -> Result<()> {
    let graph = TaxonomyGraph::from_files(&args.nodes, &args.names)
        .context("failed to load NCBI Taxonomy data")?;
    let engine = ClassificationEngine::new(&graph);

    let mut names = args.queries.clone();
    if let Some(path) = &args.input {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read names from {}", path.display()))?;
        names.extend(contents.lines().map(str::to_string));
    }
    if names.is_empty() {
        anyhow::bail!("no names to check; pass names as arguments or via --input");
    }

    // Report each distinct value once, in first-seen order
    let mut seen = HashSet::new();
    let mut tally = Tally::default();
    for name in &names {
        if !seen.insert(name.as_str()) {
            continue;
        }
        let verdict = engine.classify(name)?;
        print_verdict(name, &verdict);
        tally.record(&verdict);
    }

    eprintln!(
        "{} distinct names: {} matched, {} replaced, {} suggested, {} not a virus, {} unmatched",
        tally.total(),
        tally.matched,
        tally.replaced,
        tally.suggested,
        tally.not_a_virus,
        tally.unmatched
    );
    Ok(())
}

fn print_verdict(name: &str, verdict: &Verdict) {
    match verdict.outcome {
        Outcome::Confirmed => {
            println!("{} \"{}\"", "MATCHED VIRUS".green().bold(), name);
        }
        Outcome::AutoCorrected => {
            let replacement = verdict.corrected_name.as_deref().unwrap_or(name);
            println!(
                "{} \"{}\" WITH \"{}\"",
                "REPLACED".blue().bold(),
                name,
                replacement
            );
        }
        Outcome::Suggested => {
            let suggestion = verdict
                .comment_text()
                .strip_prefix("Suggestion: ")
                .unwrap_or(verdict.comment_text());
            println!(
                "{} \"{}\" INSTEAD OF \"{}\"",
                "SUGGEST".yellow().bold(),
                suggestion,
                name
            );
        }
        Outcome::NotAVirus => {
            println!("{} \"{}\"", "NOT A VIRUS".red().bold(), name);
        }
        Outcome::Unresolved => {
            println!("{} \"{}\"", "NO MATCH FOR".red().bold(), name);
        }
    }
}
