use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Recoverable component errors
// ---------------------------------------------------------------------------

/// Failure while reading a single input file.  Never fatal: the aggregator
/// logs it and moves on to the next file.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ScanError::Read { path, .. } => path,
        }
    }
}

/// Failure while drawing or saving the bar chart.  The driver logs it as a
/// warning; the table has already been written by then.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("nothing to plot: the frequency table is empty")]
    NoData,

    #[error("top count must be at least 1")]
    ZeroTop,

    #[error("failed to load chart font: {0}")]
    Font(&'static str),

    #[error("failed to save chart to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
