// hourly_frame.rs

//! Contains the `HourlyLazyFrame` structure for lazy operations on the hourly rental table.

use crate::aggregation::{AggregateExt, HourlyTotals};
use crate::filtering::RentalFrameFilterExt;
use crate::types::dataset::{COUNT_COLUMN, DATE_COLUMN, HOUR_COLUMN};
use crate::types::records::HourlyRecord;
use crate::types::selection::FilterSelection;
use crate::BikeShareError;
use chrono::NaiveDate;
use polars::prelude::{col, lit, Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding the hourly rental table.
///
/// Instances are obtained via [`crate::BikeShare::hourly`].
#[derive(Clone)]
pub struct HourlyLazyFrame {
    /// The underlying Polars LazyFrame containing the hourly data.
    pub frame: LazyFrame,
}

impl HourlyLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    pub fn filter(&self, predicate: Expr) -> HourlyLazyFrame {
        HourlyLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps the hours matching a dashboard selection.
    ///
    /// The hourly table carries the same `yr` and `workingday` columns as the
    /// daily table, so the same constraints apply.
    pub fn for_selection(&self, selection: FilterSelection) -> HourlyLazyFrame {
        HourlyLazyFrame::new(self.frame.clone().filter_selection(selection))
    }

    /// Keeps the hours of one calendar date.
    pub fn on_date(&self, date: NaiveDate) -> HourlyLazyFrame {
        self.filter(col(DATE_COLUMN).eq(lit(date)))
    }

    /// Total rentals per hour of day, ascending by hour.
    pub fn rentals_by_hour(&self) -> Result<HourlyTotals, BikeShareError> {
        let grouped = self
            .frame
            .clone()
            .sum_by(HOUR_COLUMN, COUNT_COLUMN)
            .collect()?;
        Ok(HourlyTotals::from_frame(&grouped, HOUR_COLUMN, COUNT_COLUMN)?)
    }

    /// Collects the frame into typed rows.
    pub fn collect_hours(&self) -> Result<Vec<HourlyRecord>, BikeShareError> {
        let df = self.frame.clone().collect()?;
        Ok(HourlyRecord::from_frame(&df)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::selection::{DayType, YearChoice};
    use polars::prelude::*;

    fn test_hourly_frame() -> PolarsResult<HourlyLazyFrame> {
        let df = df!(
            "dteday" => ["2011-01-01", "2011-01-01", "2011-01-01", "2011-01-03", "2012-01-02"],
            "hr" => [0i64, 8, 17, 17, 8],
            "yr" => [0i64, 0, 0, 0, 1],
            "workingday" => [0i64, 0, 0, 1, 1],
            "weathersit" => [1i64, 1, 2, 1, 1],
            "temp" => [0.24f64, 0.22, 0.40, 0.20, 0.30],
            "hum" => [0.81f64, 0.80, 0.62, 0.44, 0.55],
            "windspeed" => [0.0f64, 0.0, 0.19, 0.28, 0.10],
            "cnt" => [16i64, 3, 93, 176, 290],
        )?
        .lazy()
        .with_column(col("dteday").str().to_date(StrptimeOptions::default()))
        .collect()?;
        Ok(HourlyLazyFrame::new(df.lazy()))
    }

    #[test]
    fn test_rentals_by_hour_and_peak() -> Result<(), Box<dyn std::error::Error>> {
        let totals = test_hourly_frame()?.rentals_by_hour()?;
        assert_eq!(totals.keys(), vec![0, 8, 17]);
        assert_eq!(totals.get(8), Some(293));
        let peak = totals.peak_hour().unwrap();
        assert_eq!((peak.hour, peak.count), (8, 293));
        Ok(())
    }

    #[test]
    fn test_selection_narrows_hours() -> Result<(), Box<dyn std::error::Error>> {
        let totals = test_hourly_frame()?
            .for_selection(FilterSelection::new(YearChoice::Y2011, DayType::Holiday))
            .rentals_by_hour()?;
        assert_eq!(totals.grand_total(), 16 + 3 + 93);
        Ok(())
    }

    #[test]
    fn test_on_date_and_collect_hours() -> Result<(), Box<dyn std::error::Error>> {
        let date = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        let hours = test_hourly_frame()?.on_date(date).collect_hours()?;
        assert_eq!(hours.len(), 3);
        assert!(hours.iter().all(|h| h.date == date));
        assert_eq!(hours[2].hour, 17);
        Ok(())
    }
}
