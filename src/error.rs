use crate::rental_data::error::RentalDataError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BikeShareError {
    #[error(transparent)]
    RentalData(#[from] RentalDataError),

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),

    #[error("Failed to determine data directory")]
    DataDirResolution(#[source] std::io::Error),

    #[error("Failed to serialize dashboard summary")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write chart file '{0}'")]
    ChartWrite(PathBuf, #[source] std::io::Error),
}
