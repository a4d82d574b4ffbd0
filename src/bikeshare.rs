//! Main entry point: resolves where the two rental tables live, loads them
//! through a shared [`FrameCache`] and runs the dashboard pipeline.

use crate::dashboard::{DashboardView, TrendScope};
use crate::error::BikeShareError;
use crate::rental_data::frame_cache::FrameCache;
use crate::types::dataset::Dataset;
use crate::types::frames::daily_frame::DailyLazyFrame;
use crate::types::frames::hourly_frame::HourlyLazyFrame;
use crate::types::language::Language;
use crate::types::selection::{DayType, FilterSelection, YearChoice};
use crate::utils::get_data_dir;
use bon::bon;
use polars::prelude::IntoLazy;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The client for loading and summarizing bike-sharing rentals.
///
/// Tables are read on first use and kept in the client's [`FrameCache`].
/// Several clients (one per session) can share a cache by passing the same
/// `Arc<FrameCache>` to [`BikeShare::from_files`].
///
/// # Examples
///
/// ```no_run
/// # use bikeshare::{BikeShare, BikeShareError, DayType, YearChoice};
/// # #[tokio::main]
/// # async fn main() -> Result<(), BikeShareError> {
/// let client = BikeShare::with_data_folder("data".into());
/// let view = client
///     .dashboard()
///     .year(YearChoice::Y2012)
///     .day_type(DayType::WorkingDay)
///     .call()
///     .await?;
/// println!("{}", view.peak_hour_text());
/// # Ok(())
/// # }
/// ```
pub struct BikeShare {
    day_file: PathBuf,
    hour_file: PathBuf,
    cache: Arc<FrameCache>,
}

#[bon]
impl BikeShare {
    /// Creates a client reading `day.csv` and `hour.csv` from `folder`.
    pub fn with_data_folder(folder: PathBuf) -> Self {
        Self {
            day_file: folder.join(Dataset::Daily.file_name()),
            hour_file: folder.join(Dataset::Hourly.file_name()),
            cache: Arc::new(FrameCache::new()),
        }
    }

    /// Creates a client using the default data folder.
    ///
    /// The folder is taken from the `BIKESHARE_DATA_DIR` environment variable,
    /// falling back to the current working directory.
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::DataDirResolution`] if neither is available.
    pub fn new() -> Result<Self, BikeShareError> {
        let folder = get_data_dir().map_err(BikeShareError::DataDirResolution)?;
        Ok(Self::with_data_folder(folder))
    }

    /// Creates a client from explicit table paths.
    ///
    /// * `.day_file(path)`: **Required.** Daily table.
    /// * `.hour_file(path)`: **Required.** Hourly table.
    /// * `.cache(Arc<FrameCache>)`: Optional. Cache shared with other clients;
    ///   a fresh one is created when omitted.
    ///
    /// ```no_run
    /// # use bikeshare::{BikeShare, FrameCache};
    /// # use std::sync::Arc;
    /// let cache = Arc::new(FrameCache::new());
    /// let session_a = BikeShare::from_files()
    ///     .day_file("data/day.csv")
    ///     .hour_file("data/hour.csv")
    ///     .cache(Arc::clone(&cache))
    ///     .call();
    /// let session_b = BikeShare::from_files()
    ///     .day_file("data/day.csv")
    ///     .hour_file("data/hour.csv")
    ///     .cache(cache)
    ///     .call();
    /// ```
    #[builder]
    pub fn from_files(
        #[builder(into)] day_file: PathBuf,
        #[builder(into)] hour_file: PathBuf,
        cache: Option<Arc<FrameCache>>,
    ) -> Self {
        Self {
            day_file,
            hour_file,
            cache: cache.unwrap_or_default(),
        }
    }

    pub fn day_file(&self) -> &Path {
        &self.day_file
    }

    pub fn hour_file(&self) -> &Path {
        &self.hour_file
    }

    /// The cache backing this client, for sharing with other sessions.
    pub fn cache(&self) -> Arc<FrameCache> {
        Arc::clone(&self.cache)
    }

    /// The daily table.
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::RentalData`] if the file cannot be read or parsed.
    pub async fn daily(&self) -> Result<DailyLazyFrame, BikeShareError> {
        let df = self
            .cache
            .get_or_load(&self.day_file, Dataset::Daily)
            .await?;
        Ok(DailyLazyFrame::new(df.lazy()))
    }

    /// The hourly table.
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::RentalData`] if the file cannot be read or parsed.
    pub async fn hourly(&self) -> Result<HourlyLazyFrame, BikeShareError> {
        let df = self
            .cache
            .get_or_load(&self.hour_file, Dataset::Hourly)
            .await?;
        Ok(HourlyLazyFrame::new(df.lazy()))
    }

    /// Runs load, filter and aggregation for one selection.
    ///
    /// * `.year(YearChoice)`: **Required.**
    /// * `.day_type(DayType)`: **Required.**
    /// * `.trend_scope(TrendScope)`: Optional. Defaults to [`TrendScope::AllRecords`].
    /// * `.language(Language)`: Optional. Defaults to [`Language::English`].
    ///
    /// A selection that matches no rows is not an error: the view holds empty
    /// frames and [`DashboardView::peak_hour_text`] reports "no data".
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::RentalData`] if either table cannot be loaded
    /// and [`BikeShareError::Polars`] if a query fails.
    #[builder]
    pub async fn dashboard(
        &self,
        year: YearChoice,
        day_type: DayType,
        trend_scope: Option<TrendScope>,
        language: Option<Language>,
    ) -> Result<DashboardView, BikeShareError> {
        let days = self.daily().await?;
        let hours = self.hourly().await?;
        DashboardView::build(
            &days,
            &hours,
            FilterSelection::new(year, day_type),
            trend_scope.unwrap_or_default(),
            language.unwrap_or_default(),
        )
    }
}
