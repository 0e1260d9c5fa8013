// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy shared by loaders, scales and chart passes.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The data file is missing, unreadable, or a row failed to coerce.
    #[error("failed to load '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A mark or annotation referenced a key the data or scale does not contain.
    #[error("no record or domain slot for key '{key}'")]
    LookupMiss { key: String },

    #[error("dataset '{what}' has no rows")]
    EmptyDataset { what: String },

    #[error("band scale domain is empty")]
    EmptyDomain,
}

impl ChartError {
    pub fn lookup_miss(key: impl ToString) -> Self {
        Self::LookupMiss { key: key.to_string() }
    }

    pub fn empty(what: impl Into<String>) -> Self {
        Self::EmptyDataset { what: what.into() }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
