use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use veritax_core::config::{load_config, Config};
use veritax_core::{ClassificationEngine, TaxonomyGraph};

use crate::report::{self, ReportWriter};

#[derive(Args)]
pub struct ValidateArgs {
    /// The NCBI nodes.dmp file
    #[arg(value_name = "NODES")]
    pub nodes: PathBuf,

    /// The NCBI names.dmp file
    #[arg(value_name = "NAMES")]
    pub names: PathBuf,

    /// JSON file holding an array of study records
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Output report file (STDOUT if unspecified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Record field holding the reported strain name
    #[arg(long, value_name = "FIELD")]
    pub reported_field: Option<String>,

    /// Record field holding the preferred strain name
    #[arg(long, value_name = "FIELD")]
    pub preferred_field: Option<String>,

    /// Report delimiter: "tab" or "comma"
    #[arg(long, value_name = "DELIMITER")]
    pub delimiter: Option<String>,

    /// TOML configuration file with defaults for the options above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let start = Instant::now();

    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(field) = args.reported_field {
        config.report.reported_field = field;
    }
    if let Some(field) = args.preferred_field {
        config.report.preferred_field = field;
    }
    if let Some(delimiter) = args.delimiter {
        config.report.delimiter = delimiter;
    }
    let delimiter = config.report.delimiter_byte()?;

    info!(nodes = %args.nodes.display(), names = %args.names.display(), "loading taxonomy");
    let graph = TaxonomyGraph::from_files(&args.nodes, &args.names)
        .context("failed to load NCBI Taxonomy data")?;
    eprintln!(
        "Loaded {} taxa and {} names from NCBI Taxonomy",
        graph.node_count(),
        graph.name_count()
    );

    let records = report::load_records(&args.records)
        .with_context(|| format!("failed to load records from {}", args.records.display()))?;
    if records.is_empty() {
        warn!("records file contains no records; nothing to validate");
        eprintln!("No records found in {}", args.records.display());
        return Ok(());
    }

    // Every record in an export carries the same fields, so the first one
    // determines the header row.
    let headers = report::sorted_headers(&records[0]);

    let engine = ClassificationEngine::new(&graph);
    let mut writer = ReportWriter::create(args.output.as_deref(), delimiter)?;
    writer.write_header(
        &headers,
        &config.report.reported_field,
        &config.report.preferred_field,
    )?;

    let progress = if args.output.is_some() && records.len() > 1000 {
        ProgressBar::new(records.len() as u64).with_style(ProgressStyle::default_bar())
    } else {
        ProgressBar::hidden()
    };

    for record in &records {
        let reported = report::field_text(record, &config.report.reported_field)?;
        let preferred = report::field_text(record, &config.report.preferred_field)?;
        let (reported_verdict, preferred_verdict) = engine.classify_pair(&reported, &preferred)?;
        writer.write_row(record, &headers, &reported_verdict, &preferred_verdict)?;
        progress.inc(1);
    }
    progress.finish_and_clear();
    writer.flush()?;

    eprintln!(
        "Validated {} records ({} distinct name pairs) in {:.2}s",
        records.len(),
        engine.cached_pair_count(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
