use crate::rental_data::error::RentalDataError;
use crate::types::dataset::{Dataset, DATE_COLUMN, DATE_FORMAT};
use log::{debug, info, warn};
use polars::frame::DataFrame;
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tokio::task;

/// Reads rental tables from delimited text files with a header row.
#[derive(Debug, Default, Clone, Copy)]
pub struct RentalDataLoader;

impl RentalDataLoader {
    pub fn new() -> Self {
        Self
    }

    /// Loads one table into memory.
    ///
    /// The file is parsed on the blocking pool. Required columns are checked,
    /// integer and float columns are cast strictly and `dteday` is parsed into a
    /// `Date` column, so malformed values fail here instead of at render time.
    pub async fn load(&self, path: &Path, dataset: Dataset) -> Result<DataFrame, RentalDataError> {
        let path_buf = path.to_path_buf();
        info!("Loading {} data from {:?}", dataset, path_buf);
        let df = task::spawn_blocking(move || Self::read_csv(path_buf, dataset)).await??;
        info!("Loaded {} {} rows from {:?}", df.height(), dataset, path);
        Ok(df)
    }

    fn read_csv(path: PathBuf, dataset: Dataset) -> Result<DataFrame, RentalDataError> {
        let file = File::open(&path).map_err(|e| RentalDataError::FileAccess(path.clone(), e))?;

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(file)
            .finish()
            .map_err(|e| RentalDataError::Parse {
                path: path.clone(),
                dataset,
                source: e,
            })?;

        for column in dataset.required_columns() {
            if df.get_column_index(column).is_none() {
                warn!(
                    "{} data file {:?} is missing required column '{}'",
                    dataset, path, column
                );
                return Err(RentalDataError::MissingColumn {
                    path,
                    dataset,
                    column: column.to_string(),
                });
            }
        }

        let df = Self::normalize(df, dataset).map_err(|e| RentalDataError::Parse {
            path: path.clone(),
            dataset,
            source: e,
        })?;

        match Self::distinct_keys(&df, dataset) {
            Ok(distinct) if distinct != df.height() => warn!(
                "{} data file {:?} has {} rows but only {} distinct ({}) keys",
                dataset,
                path,
                df.height(),
                distinct,
                dataset.key_columns().join(", ")
            ),
            Ok(_) => {}
            Err(e) => debug!("Could not check {} keys for duplicates: {}", dataset, e),
        }
        debug!("Normalized {} schema: {:?}", dataset, df.schema());

        Ok(df)
    }

    /// Number of distinct row keys, see [`Dataset::key_columns`].
    fn distinct_keys(df: &DataFrame, dataset: Dataset) -> PolarsResult<usize> {
        let keys: Vec<Expr> = dataset.key_columns().into_iter().map(col).collect();
        let unique = df
            .clone()
            .lazy()
            .select(keys)
            .unique(None, UniqueKeepStrategy::First)
            .collect()?;
        Ok(unique.height())
    }

    /// Casts the known columns to their expected types and parses the date column.
    fn normalize(df: DataFrame, dataset: Dataset) -> PolarsResult<DataFrame> {
        let mut exprs: Vec<Expr> = dataset
            .integer_columns()
            .into_iter()
            .map(|name| col(name).strict_cast(DataType::Int64))
            .collect();
        exprs.extend(
            dataset
                .float_columns()
                .into_iter()
                .map(|name| col(name).strict_cast(DataType::Float64)),
        );
        exprs.push(col(DATE_COLUMN).str().to_date(StrptimeOptions {
            format: Some(DATE_FORMAT.into()),
            strict: true,
            exact: true,
            cache: true,
        }));

        df.lazy().with_columns(exprs).collect()
    }
}
