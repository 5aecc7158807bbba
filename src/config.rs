use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

pub const TABLE_FILE: &str = "keyword_frequency.csv";
pub const CHART_FILE: &str = "top_keywords_bar_chart.png";
pub const DEFAULT_TOP: usize = 20;

/// Everything one run needs to know.  There are no CLI flags; `main` always
/// uses [`RunConfig::default`].
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory scanned (non-recursively) for input files.
    pub input_dir: PathBuf,
    /// Extension of input files, without the dot.
    pub extension: String,
    /// Where the CSV frequency table is written.
    pub table_path: PathBuf,
    /// Where the PNG bar chart is written.
    pub chart_path: PathBuf,
    /// Number of keywords shown in the chart.
    pub top: usize,
    /// Lowercase keywords before counting.
    pub normalize: bool,
}

impl Default for RunConfig {
    /// Read from and write to the current directory.
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl RunConfig {
    /// Fixed defaults with input and outputs all in `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            table_path: dir.join(TABLE_FILE),
            chart_path: dir.join(CHART_FILE),
            input_dir: dir,
            extension: "txt".to_string(),
            top: DEFAULT_TOP,
            normalize: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_use_current_directory() {
        let config = RunConfig::default();
        assert_eq!(config.input_dir, Path::new("."));
        assert_eq!(config.table_path, Path::new("./keyword_frequency.csv"));
        assert_eq!(config.chart_path, Path::new("./top_keywords_bar_chart.png"));
        assert_eq!(config.top, 20);
        assert!(config.normalize);
    }
}
