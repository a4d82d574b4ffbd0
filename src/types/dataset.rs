//! Defines the two rental tables the dashboard works with and the columns each
//! of them must provide.

use std::fmt;

/// Name of the calendar date column shared by both tables.
pub const DATE_COLUMN: &str = "dteday";
/// Name of the hour-of-day column of the hourly table.
pub const HOUR_COLUMN: &str = "hr";
/// Name of the rental count column shared by both tables.
pub const COUNT_COLUMN: &str = "cnt";
/// Name of the year indicator column (0 = 2011, 1 = 2012).
pub const YEAR_COLUMN: &str = "yr";
/// Name of the working-day indicator column.
pub const WORKING_DAY_COLUMN: &str = "workingday";
/// Name of the weather situation code column.
pub const WEATHER_COLUMN: &str = "weathersit";
/// Name of the derived, human readable weather label column.
pub const WEATHER_LABEL_COLUMN: &str = "weather";

/// Date format used by the `dteday` column.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifies one of the two bike-sharing tables.
///
/// The kind decides which columns are required when the table is loaded and
/// which of them are normalized to integer or float types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// One row per calendar date (`day.csv`).
    Daily,
    /// One row per (date, hour) pair (`hour.csv`).
    Hourly,
}

impl Dataset {
    /// File name used when tables are resolved relative to a data folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Daily => "day.csv",
            Dataset::Hourly => "hour.csv",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Dataset::Daily => "daily",
            Dataset::Hourly => "hourly",
        }
    }

    /// Integer columns, cast strictly to `Int64` on load.
    pub(crate) fn integer_columns(&self) -> Vec<&'static str> {
        match self {
            Dataset::Daily => vec![YEAR_COLUMN, WORKING_DAY_COLUMN, WEATHER_COLUMN, COUNT_COLUMN],
            Dataset::Hourly => vec![
                HOUR_COLUMN,
                YEAR_COLUMN,
                WORKING_DAY_COLUMN,
                WEATHER_COLUMN,
                COUNT_COLUMN,
            ],
        }
    }

    /// Float columns, cast strictly to `Float64` on load.
    pub(crate) fn float_columns(&self) -> Vec<&'static str> {
        vec!["temp", "hum", "windspeed"]
    }

    /// Columns that identify one row: the date, plus the hour for the hourly table.
    pub(crate) fn key_columns(&self) -> Vec<&'static str> {
        match self {
            Dataset::Daily => vec![DATE_COLUMN],
            Dataset::Hourly => vec![DATE_COLUMN, HOUR_COLUMN],
        }
    }

    /// Every column the table must contain.
    pub(crate) fn required_columns(&self) -> Vec<&'static str> {
        let mut columns = vec![DATE_COLUMN];
        columns.extend(self.integer_columns());
        columns.extend(self.float_columns());
        columns
    }
}

/// Formats a `Dataset` using its short label.
///
/// # Examples
///
/// ```
/// use bikeshare::Dataset;
///
/// assert_eq!(Dataset::Hourly.to_string(), "hourly");
/// ```
impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_requires_hour_column() {
        assert!(Dataset::Hourly.required_columns().contains(&HOUR_COLUMN));
        assert!(!Dataset::Daily.required_columns().contains(&HOUR_COLUMN));
    }

    #[test]
    fn test_required_columns_start_with_date() {
        for dataset in [Dataset::Daily, Dataset::Hourly] {
            let columns = dataset.required_columns();
            assert_eq!(columns[0], DATE_COLUMN);
            assert!(columns.contains(&COUNT_COLUMN));
        }
    }
}
