//! Defines the `WeatherSituation` enum, mapping the numeric `weathersit` codes
//! of the bike-sharing tables to descriptive variants.

use crate::types::language::Language;
use serde::{Deserialize, Serialize};

/// Weather situation recorded for a day or an hour.
///
/// The `weathersit` column stores one of four codes, from clear weather (1)
/// to heavy precipitation (4). The scatter plots use it as their color
/// dimension.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum WeatherSituation {
    /// Code 1: Clear, few clouds, partly cloudy.
    Clear = 1,
    /// Code 2: Mist, cloudy, broken clouds.
    Mist = 2,
    /// Code 3: Light snow, light rain, thunderstorm with scattered clouds.
    LightPrecipitation = 3,
    /// Code 4: Heavy rain, ice pellets, snow with fog.
    HeavyPrecipitation = 4,
}

impl WeatherSituation {
    pub const ALL: [WeatherSituation; 4] = [
        WeatherSituation::Clear,
        WeatherSituation::Mist,
        WeatherSituation::LightPrecipitation,
        WeatherSituation::HeavyPrecipitation,
    ];

    /// Attempts to convert a `weathersit` code into a `WeatherSituation`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bikeshare::WeatherSituation;
    ///
    /// assert_eq!(WeatherSituation::from_i64(2), Some(WeatherSituation::Mist));
    /// assert_eq!(WeatherSituation::from_i64(0), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(WeatherSituation::Clear),
            2 => Some(WeatherSituation::Mist),
            3 => Some(WeatherSituation::LightPrecipitation),
            4 => Some(WeatherSituation::HeavyPrecipitation),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        *self as i64
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (WeatherSituation::Clear, Language::English) => "Clear",
            (WeatherSituation::Mist, Language::English) => "Mist",
            (WeatherSituation::LightPrecipitation, Language::English) => "Light precipitation",
            (WeatherSituation::HeavyPrecipitation, Language::English) => "Heavy precipitation",
            (WeatherSituation::Clear, Language::Indonesian) => "Cerah",
            (WeatherSituation::Mist, Language::Indonesian) => "Berkabut",
            (WeatherSituation::LightPrecipitation, Language::Indonesian) => "Hujan ringan",
            (WeatherSituation::HeavyPrecipitation, Language::Indonesian) => "Hujan lebat",
        }
    }
}
