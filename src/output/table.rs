use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::data::model::{FrequencyMap, FrequencyTable};

pub const HEADER: [&str; 2] = ["Keyword", "Frequency"];

/// Serialize `table` as CSV: `Keyword,Frequency` header, one row per
/// keyword, no index column.
pub fn write_records<W: Write>(table: &FrequencyTable, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    // Written by hand so an empty table still gets its header row.
    wtr.write_record(HEADER).context("writing CSV header")?;
    for record in table.records() {
        wtr.serialize(record)
            .with_context(|| format!("writing CSV row for '{}'", record.keyword))?;
    }
    wtr.flush().context("flushing CSV writer")?;
    Ok(())
}

/// Sort `counts` into a [`FrequencyTable`], write it to `path` (creating
/// or truncating the file) and return the table.
pub fn write_table(counts: &FrequencyMap, path: &Path) -> Result<FrequencyTable> {
    let table = FrequencyTable::from_map(counts);
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_records(&table, std::io::BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Saved CSV: {}", path.display());
    Ok(table)
}
