//! Command line entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use driftsum::aggregate::{merge_documents, CoverageSummary};
use driftsum::ingest::{find_scan_files, load_scan_documents};
use driftsum::logging::RunContext;
use driftsum::report::{create_renderer, write_report, OutputTarget, Report, ReportFormat};

/// Scan driftctl scan json output and combine results.
#[derive(Debug, Parser)]
#[command(name = "driftsum", version, about)]
struct Cli {
    /// Root directory searched recursively for scan result files.
    #[arg(short = 'i', long = "input-dir", default_value = ".")]
    input_dir: PathBuf,

    /// Name of the scan result files to look for.
    #[arg(short = 'f', long = "file-name", default_value = "driftctl-result.json")]
    file_name: String,

    /// Print the per-resource detail table after the summary.
    #[arg(long)]
    detailed: bool,

    /// Write the report to this file instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Report format.
    #[arg(short = 'p', long = "output-format", value_enum, default_value = "table")]
    output_format: ReportFormat,
}

fn main() -> Result<()> {
    driftsum::init_logger();
    let cli = Cli::parse();

    let ctx = RunContext::new(false);
    let log_ctx = ctx.log_context();
    log::info!(
        "{} RUN_START started_at={} input_dir={:?} file_name={:?}",
        log_ctx,
        ctx.started_at.to_rfc3339(),
        cli.input_dir,
        cli.file_name
    );

    let files = find_scan_files(&cli.input_dir, &cli.file_name, &log_ctx)?;
    if files.is_empty() {
        log::warn!("{} NO_SCAN_FILES input_dir={:?}", log_ctx, cli.input_dir);
    }

    let documents = load_scan_documents(&ctx, &files);
    let result = merge_documents(&ctx, &documents);
    let summary = CoverageSummary::from_aggregate(&result);
    let report = Report::build(&result, &summary, cli.detailed);

    let renderer = create_renderer(cli.output_format);
    let rendered = renderer.render(&report);

    let target = match cli.output {
        Some(path) => OutputTarget::File(path),
        None => OutputTarget::Stdout,
    };
    write_report(&rendered, &target, cli.output_format, &log_ctx)?;

    Ok(())
}
