use crate::types::dataset::{WORKING_DAY_COLUMN, YEAR_COLUMN};
use crate::types::selection::{DayType, FilterSelection, YearChoice};
use polars::prelude::{col, lit, LazyFrame};

pub trait RentalFrameFilterExt {
    /// Keeps rows whose `yr` column equals the year's code.
    fn filter_year(self, year: YearChoice) -> LazyFrame;

    /// Keeps rows whose `workingday` column equals the day type's code.
    /// For [`DayType::All`] the frame is returned unchanged.
    fn filter_day_type(self, day_type: DayType) -> LazyFrame;

    /// Applies both the year and the day-type constraint of a selection.
    ///
    /// An empty result is valid; it propagates through aggregation as empty totals.
    fn filter_selection(self, selection: FilterSelection) -> LazyFrame;
}

impl RentalFrameFilterExt for LazyFrame {
    fn filter_year(self, year: YearChoice) -> LazyFrame {
        self.filter(col(YEAR_COLUMN).eq(lit(year.code())))
    }

    fn filter_day_type(self, day_type: DayType) -> LazyFrame {
        match day_type.working_day_code() {
            Some(code) => self.filter(col(WORKING_DAY_COLUMN).eq(lit(code))),
            None => self,
        }
    }

    fn filter_selection(self, selection: FilterSelection) -> LazyFrame {
        self.filter_year(selection.year)
            .filter_day_type(selection.day_type)
    }
}
