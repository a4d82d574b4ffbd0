// daily_frame.rs

//! Contains the `DailyLazyFrame` structure for lazy operations on the daily rental table.

use crate::aggregation::{AggregateExt, DailyTotals};
use crate::filtering::RentalFrameFilterExt;
use crate::types::dataset::{COUNT_COLUMN, DATE_COLUMN};
use crate::types::records::DailyRecord;
use crate::types::selection::FilterSelection;
use crate::BikeShareError;
use polars::prelude::{Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding the daily rental table.
///
/// Filtering returns new frames; the cached table underneath is never changed.
/// Instances are obtained via [`crate::BikeShare::daily`].
///
/// # Errors
///
/// Operations that collect the frame return [`BikeShareError::Polars`] if the
/// computation fails.
#[derive(Clone)]
pub struct DailyLazyFrame {
    /// The underlying Polars LazyFrame containing the daily data.
    pub frame: LazyFrame,
}

impl DailyLazyFrame {
    /// Creates a new `DailyLazyFrame` wrapping the given Polars `LazyFrame`.
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Filters the daily data based on a Polars predicate expression.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use bikeshare::BikeShare;
    /// use polars::prelude::{col, lit};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = BikeShare::with_data_folder("data".into());
    /// let busy_days = client.daily().await?.filter(col("cnt").gt(lit(5000i64)));
    /// println!("{}", busy_days.frame.collect()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> DailyLazyFrame {
        DailyLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps the days matching a dashboard selection.
    pub fn for_selection(&self, selection: FilterSelection) -> DailyLazyFrame {
        DailyLazyFrame::new(self.frame.clone().filter_selection(selection))
    }

    /// Total rentals per date, ascending by date.
    pub fn rentals_by_date(&self) -> Result<DailyTotals, BikeShareError> {
        let grouped = self
            .frame
            .clone()
            .sum_by(DATE_COLUMN, COUNT_COLUMN)
            .collect()?;
        Ok(DailyTotals::from_frame(&grouped, DATE_COLUMN, COUNT_COLUMN)?)
    }

    /// Collects the frame into typed rows.
    pub fn collect_days(&self) -> Result<Vec<DailyRecord>, BikeShareError> {
        let df = self.frame.clone().collect()?;
        Ok(DailyRecord::from_frame(&df)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::selection::{DayType, YearChoice};
    use chrono::NaiveDate;
    use polars::prelude::*;

    fn test_daily_frame() -> PolarsResult<DailyLazyFrame> {
        let df = df!(
            "dteday" => ["2011-01-01", "2011-01-03", "2012-01-01", "2012-01-02"],
            "yr" => [0i64, 0, 1, 1],
            "workingday" => [0i64, 1, 0, 1],
            "weathersit" => [2i64, 1, 1, 3],
            "temp" => [0.34f64, 0.19, 0.37, 0.27],
            "hum" => [0.80f64, 0.43, 0.69, 0.59],
            "windspeed" => [0.16f64, 0.24, 0.19, 0.12],
            "cnt" => [985i64, 1349, 2294, 1951],
        )?
        .lazy()
        .with_column(col("dteday").str().to_date(StrptimeOptions::default()))
        .collect()?;
        Ok(DailyLazyFrame::new(df.lazy()))
    }

    #[test]
    fn test_collect_days_typed() -> Result<(), Box<dyn std::error::Error>> {
        let days = test_daily_frame()?
            .for_selection(FilterSelection::new(YearChoice::Y2012, DayType::WorkingDay))
            .collect_days()?;

        assert_eq!(days.len(), 1);
        let day = &days[0];
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2012, 1, 2).unwrap());
        assert_eq!(day.year, Some(YearChoice::Y2012));
        assert_eq!(day.working_day, Some(1));
        assert_eq!(day.count, 1951);
        Ok(())
    }

    #[test]
    fn test_rentals_by_date_sorted() -> Result<(), Box<dyn std::error::Error>> {
        let totals = test_daily_frame()?.rentals_by_date()?;
        let keys = totals.keys();
        assert_eq!(keys.len(), 4);
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(totals.grand_total(), 985 + 1349 + 2294 + 1951);
        Ok(())
    }

    #[test]
    fn test_filter_predicate() -> Result<(), Box<dyn std::error::Error>> {
        let df = test_daily_frame()?
            .filter(col("cnt").gt(lit(2000i64)))
            .frame
            .collect()?;
        assert_eq!(df.height(), 1);
        Ok(())
    }
}
