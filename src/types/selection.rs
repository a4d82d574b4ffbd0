//! User selections that drive the dashboard filters.
//!
//! Each selector is an enum with an explicit code (the value stored in the
//! data tables) and an explicit label per [`Language`].

use crate::types::language::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The year selector. The tables encode the year as `0` (2011) or `1` (2012).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearChoice {
    #[default]
    Y2011,
    Y2012,
}

impl YearChoice {
    /// Every option, in the order the selector lists them.
    pub const ALL: [YearChoice; 2] = [YearChoice::Y2011, YearChoice::Y2012];

    /// Value of the `yr` column for this year.
    pub fn code(&self) -> i64 {
        match self {
            YearChoice::Y2011 => 0,
            YearChoice::Y2012 => 1,
        }
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        match self {
            YearChoice::Y2011 => 2011,
            YearChoice::Y2012 => 2012,
        }
    }

    /// Attempts to convert a `yr` column value into a `YearChoice`.
    ///
    /// ```
    /// use bikeshare::YearChoice;
    ///
    /// assert_eq!(YearChoice::from_code(1), Some(YearChoice::Y2012));
    /// assert_eq!(YearChoice::from_code(2), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(YearChoice::Y2011),
            1 => Some(YearChoice::Y2012),
            _ => None,
        }
    }

    /// Label shown in the selector. Years read the same in every language.
    pub fn label(&self, _language: Language) -> &'static str {
        match self {
            YearChoice::Y2011 => "2011",
            YearChoice::Y2012 => "2012",
        }
    }
}

impl fmt::Display for YearChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

/// The day-type selector.
///
/// `Holiday` and `WorkingDay` match the `workingday` column exactly. `All`
/// applies no working-day constraint; the year constraint still holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    Holiday,
    WorkingDay,
    #[default]
    All,
}

impl DayType {
    /// Every option, in the order the selector lists them.
    pub const ALL: [DayType; 3] = [DayType::Holiday, DayType::WorkingDay, DayType::All];

    /// Selector code (`0`, `1` or `2`).
    pub fn code(&self) -> i64 {
        match self {
            DayType::Holiday => 0,
            DayType::WorkingDay => 1,
            DayType::All => 2,
        }
    }

    /// Attempts to convert a selector code into a `DayType`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(DayType::Holiday),
            1 => Some(DayType::WorkingDay),
            2 => Some(DayType::All),
            _ => None,
        }
    }

    /// Value the `workingday` column must have, or `None` when any value passes.
    pub fn working_day_code(&self) -> Option<i64> {
        match self {
            DayType::Holiday => Some(0),
            DayType::WorkingDay => Some(1),
            DayType::All => None,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (DayType::Holiday, Language::English) => "Holiday",
            (DayType::WorkingDay, Language::English) => "Working day",
            (DayType::All, Language::English) => "All",
            (DayType::Holiday, Language::Indonesian) => "Libur",
            (DayType::WorkingDay, Language::Indonesian) => "Hari Kerja",
            (DayType::All, Language::Indonesian) => "Semua",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(Language::English))
    }
}

/// A complete filter selection: one year and one day type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSelection {
    pub year: YearChoice,
    pub day_type: DayType,
}

impl FilterSelection {
    pub fn new(year: YearChoice, day_type: DayType) -> Self {
        Self { year, day_type }
    }

    /// Every valid combination of year and day type.
    pub fn all() -> impl Iterator<Item = FilterSelection> {
        YearChoice::ALL.into_iter().flat_map(|year| {
            DayType::ALL
                .into_iter()
                .map(move |day_type| FilterSelection::new(year, day_type))
        })
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.year, self.day_type)
    }
}
