use chrono::{Duration, NaiveDate};
use polars::prelude::{PolarsError, PolarsResult};
use std::env;
use std::path::PathBuf;

const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

/// Folder holding `day.csv` and `hour.csv` when none is given explicitly.
///
/// Uses `BIKESHARE_DATA_DIR` if set, otherwise the current working directory.
pub fn get_data_dir() -> std::io::Result<PathBuf> {
    match env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => env::current_dir(),
    }
}

/// Polars stores dates as days since the Unix epoch.
pub(crate) fn days_to_date(days: i32) -> PolarsResult<NaiveDate> {
    NaiveDate::default()
        .checked_add_signed(Duration::days(days as i64))
        .ok_or_else(|| {
            PolarsError::ComputeError(format!("{days} days since epoch is not a valid date").into())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_to_date() -> PolarsResult<()> {
        assert_eq!(days_to_date(0)?, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(days_to_date(14975)?, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        Ok(())
    }

    #[test]
    fn test_days_to_date_out_of_range_is_error() {
        assert!(days_to_date(i32::MAX).is_err());
        assert!(days_to_date(i32::MIN).is_err());
    }
}
