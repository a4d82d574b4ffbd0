//! Typed rows of the daily and hourly tables.

use crate::types::dataset::{
    COUNT_COLUMN, DATE_COLUMN, HOUR_COLUMN, WEATHER_COLUMN, WORKING_DAY_COLUMN, YEAR_COLUMN,
};
use crate::types::selection::YearChoice;
use crate::types::weather_situation::WeatherSituation;
use crate::utils::days_to_date;
use chrono::NaiveDate;
use polars::prelude::{DataFrame, PolarsError, PolarsResult};
use serde::{Deserialize, Serialize};

/// One row of the daily table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub year: Option<YearChoice>,
    /// `0` for holidays and weekends, `1` for working days.
    pub working_day: Option<i64>,
    pub weather: Option<WeatherSituation>,
    /// Normalized temperature.
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub count: i64,
}

/// One row of the hourly table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hour: u32,
    pub year: Option<YearChoice>,
    pub working_day: Option<i64>,
    pub weather: Option<WeatherSituation>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub count: i64,
}

fn required<T>(value: Option<T>, column: &str, row: usize) -> PolarsResult<T> {
    value.ok_or_else(|| {
        PolarsError::ComputeError(format!("null value in column '{column}' at row {row}").into())
    })
}

impl DailyRecord {
    /// Converts a collected daily frame into records, in frame order.
    pub fn from_frame(df: &DataFrame) -> PolarsResult<Vec<DailyRecord>> {
        let dates = df.column(DATE_COLUMN)?.date()?;
        let years = df.column(YEAR_COLUMN)?.i64()?;
        let working_days = df.column(WORKING_DAY_COLUMN)?.i64()?;
        let weather = df.column(WEATHER_COLUMN)?.i64()?;
        let temps = df.column("temp")?.f64()?;
        let hums = df.column("hum")?.f64()?;
        let winds = df.column("windspeed")?.f64()?;
        let counts = df.column(COUNT_COLUMN)?.i64()?;

        (0..df.height())
            .map(|i| {
                Ok(DailyRecord {
                    date: days_to_date(required(dates.get(i), DATE_COLUMN, i)?)?,
                    year: years.get(i).and_then(YearChoice::from_code),
                    working_day: working_days.get(i),
                    weather: weather.get(i).and_then(WeatherSituation::from_i64),
                    temperature: temps.get(i),
                    humidity: hums.get(i),
                    wind_speed: winds.get(i),
                    count: required(counts.get(i), COUNT_COLUMN, i)?,
                })
            })
            .collect()
    }
}

impl HourlyRecord {
    /// Converts a collected hourly frame into records, in frame order.
    pub fn from_frame(df: &DataFrame) -> PolarsResult<Vec<HourlyRecord>> {
        let dates = df.column(DATE_COLUMN)?.date()?;
        let hours = df.column(HOUR_COLUMN)?.i64()?;
        let years = df.column(YEAR_COLUMN)?.i64()?;
        let working_days = df.column(WORKING_DAY_COLUMN)?.i64()?;
        let weather = df.column(WEATHER_COLUMN)?.i64()?;
        let temps = df.column("temp")?.f64()?;
        let hums = df.column("hum")?.f64()?;
        let winds = df.column("windspeed")?.f64()?;
        let counts = df.column(COUNT_COLUMN)?.i64()?;

        (0..df.height())
            .map(|i| {
                let hour = required(hours.get(i), HOUR_COLUMN, i)?;
                Ok(HourlyRecord {
                    date: days_to_date(required(dates.get(i), DATE_COLUMN, i)?)?,
                    hour: u32::try_from(hour).map_err(|_| {
                        PolarsError::ComputeError(
                            format!("hour {hour} out of range at row {i}").into(),
                        )
                    })?,
                    year: years.get(i).and_then(YearChoice::from_code),
                    working_day: working_days.get(i),
                    weather: weather.get(i).and_then(WeatherSituation::from_i64),
                    temperature: temps.get(i),
                    humidity: hums.get(i),
                    wind_speed: winds.get(i),
                    count: required(counts.get(i), COUNT_COLUMN, i)?,
                })
            })
            .collect()
    }
}
