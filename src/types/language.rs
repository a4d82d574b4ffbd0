//! Human visible text for the dashboard, in each supported language.

use serde::{Deserialize, Serialize};

/// Language used for every label shown to the user.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Indonesian,
}

/// Fixed set of titles and axis names the presentation layer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub page_title: &'static str,
    pub subtitle: &'static str,
    pub filter_header: &'static str,
    pub year_selector: &'static str,
    pub day_type_selector: &'static str,
    pub weather_section: &'static str,
    pub temperature_title: &'static str,
    pub humidity_title: &'static str,
    pub wind_title: &'static str,
    pub temperature_axis: &'static str,
    pub humidity_axis: &'static str,
    pub wind_axis: &'static str,
    pub count_axis: &'static str,
    pub weather_legend: &'static str,
    pub hourly_section: &'static str,
    pub hour_axis: &'static str,
    pub daily_section: &'static str,
    pub daily_title: &'static str,
    pub date_axis: &'static str,
    pub peak_hour_prefix: &'static str,
    pub no_data: &'static str,
}

const ENGLISH: Labels = Labels {
    page_title: "Bike Rentals Dashboard",
    subtitle: "Weather impact and hourly bike rental patterns",
    filter_header: "Filter Data",
    year_selector: "Year",
    day_type_selector: "Day type",
    weather_section: "Weather impact on bike rentals",
    temperature_title: "Temperature vs Rentals",
    humidity_title: "Humidity vs Rentals",
    wind_title: "Wind Speed vs Rentals",
    temperature_axis: "Temperature (normalized)",
    humidity_axis: "Humidity",
    wind_axis: "Wind speed",
    count_axis: "Rentals",
    weather_legend: "Weather",
    hourly_section: "Bike rentals by hour",
    hour_axis: "Hour",
    daily_section: "Daily rental trend",
    daily_title: "Daily Bike Rental Trend",
    date_axis: "Date",
    peak_hour_prefix: "Peak rental hour:",
    no_data: "no data",
};

const INDONESIAN: Labels = Labels {
    page_title: "Bike Rentals Dashboard",
    subtitle: "Analisis Pengaruh Cuaca dan Pola Penyewaan Sepeda Berdasarkan Jam",
    filter_header: "Filter Data",
    year_selector: "Pilih Tahun",
    day_type_selector: "Pilih Jenis Hari",
    weather_section: "Pengaruh Cuaca terhadap Penyewaan Sepeda",
    temperature_title: "Suhu vs Jumlah Penyewaan",
    humidity_title: "Kelembapan vs Jumlah Penyewaan",
    wind_title: "Kecepatan Angin vs Jumlah Penyewaan",
    temperature_axis: "Suhu (Normalized)",
    humidity_axis: "Kelembapan",
    wind_axis: "Kecepatan Angin",
    count_axis: "Jumlah Penyewaan",
    weather_legend: "Kondisi Cuaca",
    hourly_section: "Pola Penyewaan Sepeda Berdasarkan Jam",
    hour_axis: "Jam",
    daily_section: "Tren Penyewaan Harian",
    daily_title: "Tren Penyewaan Sepeda Harian",
    date_axis: "Tanggal",
    peak_hour_prefix: "Jam puncak penyewaan sepeda:",
    no_data: "tidak ada data",
};

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Indonesian];

    /// Returns the label table for this language.
    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Indonesian => &INDONESIAN,
        }
    }
}
