mod aggregation;
mod bikeshare;
#[cfg(feature = "plotting")]
mod charts;
mod dashboard;
mod error;
mod filtering;
mod rental_data;
mod types;
mod utils;

pub use bikeshare::*;
pub use error::BikeShareError;

pub use aggregation::{
    AggregateExt, DailyTotals, HourlyTotals, KeyedTotal, KeyedTotals, PeakHour,
};
#[cfg(feature = "plotting")]
pub use charts::{Chart, DashboardCharts};
pub use dashboard::{DashboardSummary, DashboardView, TrendScope};
pub use filtering::RentalFrameFilterExt;

pub use rental_data::data_loader::RentalDataLoader;
pub use rental_data::error::RentalDataError;
pub use rental_data::frame_cache::FrameCache;

pub use types::dataset::*;
pub use types::frames::daily_frame::DailyLazyFrame;
pub use types::frames::hourly_frame::HourlyLazyFrame;
pub use types::language::{Labels, Language};
pub use types::records::{DailyRecord, HourlyRecord};
pub use types::selection::{DayType, FilterSelection, YearChoice};
pub use types::weather_situation::WeatherSituation;

pub use utils::get_data_dir;
