use crate::types::dataset::Dataset;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentalDataError {
    #[error("Failed to open data file '{0}'")]
    FileAccess(PathBuf, #[source] std::io::Error),

    // CSV reading, strict casts and date parsing (inside blocking task)
    #[error("Failed to parse {dataset} data from '{path}'")]
    Parse {
        path: PathBuf,
        dataset: Dataset,
        #[source]
        source: PolarsError,
    },

    #[error("Missing required column '{column}' in {dataset} data file '{path}'")]
    MissingColumn {
        path: PathBuf,
        dataset: Dataset,
        column: String,
    },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
