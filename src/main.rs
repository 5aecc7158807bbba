mod color;
mod config;
mod data;
mod error;
mod output;
mod pipeline;

use std::io::Write;

use config::RunConfig;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let summary = pipeline::run(&RunConfig::default())?;
    log::info!(
        "Counted {} keywords ({} distinct) in {} files, {} skipped{}",
        summary.total_keywords,
        summary.distinct_keywords,
        summary.files_counted,
        summary.files_skipped,
        if summary.chart_written { "" } else { ", no chart" }
    );
    Ok(())
}
