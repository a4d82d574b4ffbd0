//! One run of the dashboard pipeline: filter the daily table for a selection,
//! aggregate hourly and daily rentals, and find the peak hour.

use crate::aggregation::{AggregateExt, DailyTotals, HourlyTotals, PeakHour};
use crate::types::dataset::{
    COUNT_COLUMN, DATE_COLUMN, HOUR_COLUMN, WEATHER_COLUMN, WEATHER_LABEL_COLUMN,
};
use crate::types::frames::daily_frame::DailyLazyFrame;
use crate::types::frames::hourly_frame::HourlyLazyFrame;
use crate::types::language::Language;
use crate::types::selection::FilterSelection;
use crate::types::weather_situation::WeatherSituation;
use crate::BikeShareError;
use log::{info, warn};
use polars::prelude::{ChunkAgg, DataFrame, NamedFrom, PolarsResult, Series};
use serde::Serialize;

/// Which rows feed the hourly and daily trend lines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrendScope {
    /// Trend lines cover the complete tables; the selection only drives the
    /// weather scatter plots.
    #[default]
    AllRecords,
    /// Trend lines use the same year and day-type constraints as the scatter plots.
    Selection,
}

/// Everything the presentation layer needs to draw one dashboard state.
///
/// Recomputed for every selection and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub trend_scope: TrendScope,
    pub language: Language,
    /// Daily rows matching the selection, with an extra `weather` label column.
    pub filtered_days: DataFrame,
    /// Sum of `cnt` over `filtered_days`.
    pub filtered_rentals: i64,
    /// Two columns, `hr` and `cnt`, ascending by hour.
    pub hourly_frame: DataFrame,
    /// Two columns, `dteday` and `cnt`, ascending by date.
    pub daily_frame: DataFrame,
    pub hourly_totals: HourlyTotals,
    pub daily_totals: DailyTotals,
    pub peak_hour: Option<PeakHour>,
}

impl DashboardView {
    /// Runs filter and aggregation over already loaded tables.
    pub fn build(
        days: &DailyLazyFrame,
        hours: &HourlyLazyFrame,
        selection: FilterSelection,
        trend_scope: TrendScope,
        language: Language,
    ) -> Result<DashboardView, BikeShareError> {
        let filtered = days.for_selection(selection).frame.collect()?;
        if filtered.height() == 0 {
            warn!("Selection {} matched no days", selection);
        }
        let filtered_rentals = filtered.column(COUNT_COLUMN)?.i64()?.sum().unwrap_or(0);
        let filtered_days = with_weather_labels(filtered, language)?;

        let (trend_days, trend_hours) = match trend_scope {
            TrendScope::AllRecords => (days.clone(), hours.clone()),
            TrendScope::Selection => (days.for_selection(selection), hours.for_selection(selection)),
        };

        let hourly_frame = trend_hours
            .frame
            .sum_by(HOUR_COLUMN, COUNT_COLUMN)
            .collect()?;
        let daily_frame = trend_days
            .frame
            .sum_by(DATE_COLUMN, COUNT_COLUMN)
            .collect()?;

        let hourly_totals = HourlyTotals::from_frame(&hourly_frame, HOUR_COLUMN, COUNT_COLUMN)?;
        let daily_totals = DailyTotals::from_frame(&daily_frame, DATE_COLUMN, COUNT_COLUMN)?;
        let peak_hour = hourly_totals.peak_hour();

        info!(
            "Dashboard for {}: {} days, {} hourly buckets, {} dates, peak {:?}",
            selection,
            filtered_days.height(),
            hourly_totals.len(),
            daily_totals.len(),
            peak_hour
        );

        Ok(DashboardView {
            selection,
            trend_scope,
            language,
            filtered_days,
            filtered_rentals,
            hourly_frame,
            daily_frame,
            hourly_totals,
            daily_totals,
            peak_hour,
        })
    }

    /// `"<hour>:00 with <count> rentals"`, or the "no data" label when the
    /// hourly trend is empty.
    pub fn peak_hour_text(&self) -> String {
        match self.peak_hour {
            Some(peak) => peak.text(self.language),
            None => self.language.labels().no_data.to_string(),
        }
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            year: self.selection.year.year(),
            day_type: self.selection.day_type.label(self.language),
            trend_scope: self.trend_scope,
            filtered_days: self.filtered_days.height(),
            filtered_rentals: self.filtered_rentals,
            hourly_totals: self.hourly_totals.clone(),
            daily_totals: self.daily_totals.clone(),
            peak_hour: self.peak_hour,
            peak_hour_text: self.peak_hour_text(),
        }
    }

    /// Pretty printed JSON of [`DashboardView::summary`].
    pub fn to_json(&self) -> Result<String, BikeShareError> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }
}

/// Serializable digest of a [`DashboardView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub year: i32,
    pub day_type: &'static str,
    pub trend_scope: TrendScope,
    pub filtered_days: usize,
    pub filtered_rentals: i64,
    pub hourly_totals: HourlyTotals,
    pub daily_totals: DailyTotals,
    pub peak_hour: Option<PeakHour>,
    pub peak_hour_text: String,
}

fn with_weather_labels(mut df: DataFrame, language: Language) -> PolarsResult<DataFrame> {
    let labels: Vec<Option<&str>> = df
        .column(WEATHER_COLUMN)?
        .i64()?
        .into_iter()
        .map(|code| {
            code.and_then(WeatherSituation::from_i64)
                .map(|situation| situation.label(language))
        })
        .collect();
    df.with_column(Series::new(WEATHER_LABEL_COLUMN.into(), labels))?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::selection::{DayType, YearChoice};
    use polars::prelude::*;

    fn frames() -> PolarsResult<(DailyLazyFrame, HourlyLazyFrame)> {
        let parse_date = col("dteday").str().to_date(StrptimeOptions::default());
        let days = df!(
            "dteday" => ["2011-01-01", "2011-01-03", "2012-01-01"],
            "yr" => [0i64, 0, 1],
            "workingday" => [0i64, 1, 0],
            "weathersit" => [2i64, 1, 3],
            "temp" => [0.34f64, 0.19, 0.37],
            "hum" => [0.80f64, 0.43, 0.69],
            "windspeed" => [0.16f64, 0.24, 0.19],
            "cnt" => [985i64, 1349, 2294],
        )?
        .lazy()
        .with_column(parse_date.clone())
        .collect()?;
        let hours = df!(
            "dteday" => ["2011-01-01", "2011-01-01", "2011-01-03", "2012-01-01"],
            "hr" => [0i64, 17, 17, 8],
            "yr" => [0i64, 0, 0, 1],
            "workingday" => [0i64, 0, 1, 0],
            "weathersit" => [1i64, 2, 1, 1],
            "temp" => [0.24f64, 0.40, 0.20, 0.30],
            "hum" => [0.81f64, 0.62, 0.44, 0.55],
            "windspeed" => [0.0f64, 0.19, 0.28, 0.10],
            "cnt" => [120i64, 700, 500, 980],
        )?
        .lazy()
        .with_column(parse_date)
        .collect()?;
        Ok((DailyLazyFrame::new(days.lazy()), HourlyLazyFrame::new(hours.lazy())))
    }

    #[test]
    fn test_build_default_scope_uses_full_tables() -> Result<(), Box<dyn std::error::Error>> {
        let (days, hours) = frames()?;
        let selection = FilterSelection::new(YearChoice::Y2011, DayType::WorkingDay);

        let view = DashboardView::build(&days, &hours, selection, TrendScope::AllRecords, Language::English)?;

        assert_eq!(view.filtered_days.height(), 1);
        assert_eq!(view.filtered_rentals, 1349);
        assert_eq!(view.hourly_totals.grand_total(), 120 + 700 + 500 + 980);
        assert_eq!(view.daily_totals.len(), 3);
        assert_eq!(view.peak_hour_text(), "17:00 with 1200 rentals");

        let labels = view.filtered_days.column("weather")?.str()?;
        assert_eq!(labels.get(0), Some("Clear"));
        Ok(())
    }

    #[test]
    fn test_build_selection_scope_and_empty_result() -> Result<(), Box<dyn std::error::Error>> {
        let (days, hours) = frames()?;
        let selection = FilterSelection::new(YearChoice::Y2012, DayType::WorkingDay);

        let view = DashboardView::build(&days, &hours, selection, TrendScope::Selection, Language::Indonesian)?;

        assert_eq!(view.filtered_days.height(), 0);
        assert!(view.hourly_totals.is_empty());
        assert!(view.daily_totals.is_empty());
        assert_eq!(view.peak_hour, None);
        assert_eq!(view.peak_hour_text(), "tidak ada data");
        Ok(())
    }

    #[test]
    fn test_build_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let (days, hours) = frames()?;
        let selection = FilterSelection::new(YearChoice::Y2011, DayType::All);

        let first = DashboardView::build(&days, &hours, selection, TrendScope::Selection, Language::English)?;
        let second = DashboardView::build(&days, &hours, selection, TrendScope::Selection, Language::English)?;

        assert_eq!(first.summary(), second.summary());
        assert!(first.filtered_days.equals(&second.filtered_days));
        Ok(())
    }

    #[test]
    fn test_summary_json() -> Result<(), Box<dyn std::error::Error>> {
        let (days, hours) = frames()?;
        let view = DashboardView::build(
            &days,
            &hours,
            FilterSelection::default(),
            TrendScope::AllRecords,
            Language::English,
        )?;

        let json: serde_json::Value = serde_json::from_str(&view.to_json()?)?;
        assert_eq!(json["year"], 2011);
        assert_eq!(json["peak_hour"]["hour"], 17);
        assert_eq!(json["hourly_totals"][0]["key"], 0);
        assert_eq!(json["daily_totals"][0]["key"], "2011-01-01");
        Ok(())
    }
}
