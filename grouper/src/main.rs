//! Main entry point for the grouper binary

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use grouper::{
    services::{FileRecordSource, FileResultSink},
    Grouper, GrouperConfig, SinkConfig, SourceConfig, TableFormat,
};
use shared::{logging, TrackingMode};

/// Assign people to team heads, by college when both tables have one
#[derive(Parser)]
#[command(name = "grouper")]
#[command(about = "Groups people under team heads from two CSV/JSON tables")]
pub struct Args {
    /// People table (.csv or .json); the first column identifies each person
    #[arg(long, env = "GROUPER_PEOPLE")]
    pub people: PathBuf,

    /// Team heads table (.csv or .json); the first column identifies each head
    #[arg(long, env = "GROUPER_HEADS")]
    pub heads: PathBuf,

    /// Output table path
    #[arg(long, default_value = "grouped_teams.csv")]
    pub output: PathBuf,

    /// Output format (csv or json); inferred from the output extension if omitted
    #[arg(long)]
    pub format: Option<TableFormat>,

    /// Also write a JSON run summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Grouping column in the people table (skips auto-detection)
    #[arg(long)]
    pub people_group_column: Option<String>,

    /// Grouping column in the heads table (skips auto-detection)
    #[arg(long)]
    pub heads_group_column: Option<String>,

    /// Comma-separated header keywords used to detect grouping columns
    #[arg(long, value_delimiter = ',')]
    pub group_keywords: Vec<String>,

    /// Ignore grouping columns and split people evenly across all heads
    #[arg(long)]
    pub no_grouping: bool,

    /// How placed people are tracked (identifier or position)
    #[arg(long, default_value = "identifier")]
    pub tracking: TrackingMode,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "GROUPER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment fallbacks for the arguments above
    let _ = dotenv::dotenv();

    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let source_config = SourceConfig::new(args.people, args.heads)
        .with_group_columns(args.people_group_column, args.heads_group_column)
        .with_keywords(args.group_keywords);
    source_config.validate().context("Invalid input configuration")?;

    let sink_config = SinkConfig::new(args.output)
        .with_format(args.format)
        .with_summary(args.summary);
    sink_config.validate().context("Invalid output configuration")?;

    let config = GrouperConfig {
        tracking: args.tracking,
        grouping_enabled: !args.no_grouping,
    };

    let grouper = Grouper::new(
        FileRecordSource::new(source_config),
        FileResultSink::new(sink_config),
        config,
    );

    let summary = grouper.run().await.context("Grouping run failed")?;
    tracing::info!(
        "Grouped {} people under {} heads ({} rows)",
        summary.people_total,
        summary.heads_total,
        summary.rows_written
    );

    Ok(())
}
