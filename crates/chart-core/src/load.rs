// File: crates/chart-core/src/load.rs
// Summary: CSV loading into typed records; any unreadable file or bad row fails the whole load.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ChartError, Result};

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(true).trim(csv::Trim::All);
    b
}

/// Read every row of `path` as `T`, preserving file order.
pub fn load_csv<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let wrap = |source: csv::Error| ChartError::Load { path: path.to_path_buf(), source };
    let mut rdr = reader_builder().from_path(path).map_err(wrap)?;
    let rows = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(wrap)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded csv");
    Ok(rows)
}

/// Same as [`load_csv`] for an in-memory or already-open source.
pub fn read_csv<T: DeserializeOwned, R: Read>(source: R) -> Result<Vec<T>> {
    let mut rdr = reader_builder().from_reader(source);
    let rows = rdr.deserialize().collect::<std::result::Result<Vec<T>, csv::Error>>()?;
    Ok(rows)
}
