use anyhow::Result;
use log::{debug, info, warn};

use crate::config::RunConfig;
use crate::data::aggregate::{scan_directory, FileOutcome};
use crate::output::chart::render_bar_chart;
use crate::output::table::write_table;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_counted: usize,
    pub files_skipped: usize,
    pub distinct_keywords: usize,
    pub total_keywords: u64,
    pub chart_written: bool,
}

/// Scan, count, write the table and try the chart.
///
/// Only a failure to write the table is returned; unreadable input files and
/// chart failures are logged as warnings.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let shown_dir = config
        .input_dir
        .canonicalize()
        .unwrap_or_else(|_| config.input_dir.clone());
    info!("Scanning directory: {}", shown_dir.display());

    let report = scan_directory(&config.input_dir, &config.extension, config.normalize);
    for outcome in &report.outcomes {
        if let FileOutcome::Counted { path, tokens } = outcome {
            debug!("{}: {tokens} keywords", path.display());
        }
    }
    let mut summary = RunSummary {
        files_counted: report.files_counted(),
        files_skipped: report.files_skipped(),
        distinct_keywords: report.counts.len(),
        total_keywords: report.counts.total(),
        chart_written: false,
    };

    if report.counts.is_empty() {
        info!("No keywords found. Writing empty CSV and exiting.");
        write_table(&report.counts, &config.table_path)?;
        return Ok(summary);
    }

    let table = write_table(&report.counts, &config.table_path)?;
    debug!(
        "{} distinct keywords, {} tokens, most frequent {}",
        table.len(),
        table.total(),
        table.records()[0]
    );
    match render_bar_chart(&table, &config.chart_path, config.top) {
        Ok(()) => summary.chart_written = true,
        Err(e) => warn!("Plot generation failed: {e}"),
    }

    Ok(summary)
}
