//! Group-and-sum aggregation over rental tables and peak detection on the result.

use crate::types::language::Language;
use crate::utils::days_to_date;
use chrono::NaiveDate;
use polars::prelude::{col, DataFrame, DataType, LazyFrame, PolarsError, PolarsResult, SortMultipleOptions};
use serde::Serialize;
use std::fmt;

pub trait AggregateExt {
    /// Groups by `key`, sums `metric` as `Int64` and sorts ascending by `key`.
    ///
    /// The output has exactly two columns, `key` and `metric`, with one row per
    /// distinct non-null key present in the input. Rows with a null key are
    /// dropped. Empty input gives an empty frame.
    fn sum_by(self, key: &str, metric: &str) -> LazyFrame;
}

impl AggregateExt for LazyFrame {
    fn sum_by(self, key: &str, metric: &str) -> LazyFrame {
        self.filter(col(key).is_not_null())
            .group_by([col(key)])
            .agg([col(metric).cast(DataType::Int64).sum()])
            .sort([key], SortMultipleOptions::default())
    }
}

/// Summed metric for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyedTotal<K> {
    pub key: K,
    pub total: i64,
}

/// Read-only sequence of per-key totals, ordered by key ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyedTotals<K> {
    totals: Vec<KeyedTotal<K>>,
}

/// Rentals summed per hour of day.
pub type HourlyTotals = KeyedTotals<u32>;
/// Rentals summed per calendar date.
pub type DailyTotals = KeyedTotals<NaiveDate>;

impl<K: Ord + Copy> KeyedTotals<K> {
    /// Builds totals from `(key, value)` pairs, summing repeated keys.
    ///
    /// ```
    /// use bikeshare::HourlyTotals;
    ///
    /// let totals = HourlyTotals::from_pairs([(17, 700), (8, 980), (17, 500)]);
    /// assert_eq!(totals.keys(), vec![8, 17]);
    /// assert_eq!(totals.get(17), Some(1200));
    /// ```
    pub fn from_pairs(pairs: impl IntoIterator<Item = (K, i64)>) -> Self {
        let mut pairs: Vec<(K, i64)> = pairs.into_iter().collect();
        pairs.sort_by_key(|(key, _)| *key);

        let mut totals: Vec<KeyedTotal<K>> = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            match totals.last_mut() {
                Some(last) if last.key == key => last.total += value,
                _ => totals.push(KeyedTotal { key, total: value }),
            }
        }
        Self { totals }
    }

    /// The entry with the largest total. Ties go to the smallest key.
    pub fn peak(&self) -> Option<KeyedTotal<K>> {
        let mut best: Option<KeyedTotal<K>> = None;
        for entry in &self.totals {
            if best.map_or(true, |b| entry.total > b.total) {
                best = Some(*entry);
            }
        }
        best
    }

    /// Every key whose total equals the maximum, ascending.
    pub fn peaks(&self) -> Vec<K> {
        match self.peak() {
            Some(peak) => self
                .totals
                .iter()
                .filter(|entry| entry.total == peak.total)
                .map(|entry| entry.key)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn get(&self, key: K) -> Option<i64> {
        self.totals
            .binary_search_by_key(&key, |entry| entry.key)
            .ok()
            .map(|index| self.totals[index].total)
    }

    pub fn grand_total(&self) -> i64 {
        self.totals.iter().map(|entry| entry.total).sum()
    }

    pub fn keys(&self) -> Vec<K> {
        self.totals.iter().map(|entry| entry.key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyedTotal<K>> {
        self.totals.iter()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

fn null_key(column: &str, row: usize) -> PolarsError {
    PolarsError::ComputeError(format!("null key in column '{column}' at row {row}").into())
}

impl HourlyTotals {
    /// Reads totals from the output of [`AggregateExt::sum_by`] with an integer key.
    pub fn from_frame(df: &DataFrame, key: &str, metric: &str) -> PolarsResult<Self> {
        let keys = df.column(key)?.cast(&DataType::Int64)?;
        let keys = keys.i64()?;
        let values = df.column(metric)?.i64()?;

        let mut pairs = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let raw = keys.get(i).ok_or_else(|| null_key(key, i))?;
            let hour = u32::try_from(raw).map_err(|_| {
                PolarsError::ComputeError(format!("key {raw} in column '{key}' is not an hour").into())
            })?;
            pairs.push((hour, values.get(i).unwrap_or(0)));
        }
        Ok(Self::from_pairs(pairs))
    }

    /// The hour with the most rentals, first by ascending hour on ties.
    pub fn peak_hour(&self) -> Option<PeakHour> {
        self.peak().map(|peak| PeakHour {
            hour: peak.key,
            count: peak.total,
        })
    }
}

impl DailyTotals {
    /// Reads totals from the output of [`AggregateExt::sum_by`] with a `Date` key.
    pub fn from_frame(df: &DataFrame, key: &str, metric: &str) -> PolarsResult<Self> {
        let keys = df.column(key)?.date()?;
        let values = df.column(metric)?.i64()?;

        let mut pairs = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let days = keys.get(i).ok_or_else(|| null_key(key, i))?;
            pairs.push((days_to_date(days)?, values.get(i).unwrap_or(0)));
        }
        Ok(Self::from_pairs(pairs))
    }
}

/// The busiest hour of the day and its summed rental count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakHour {
    pub hour: u32,
    pub count: i64,
}

impl PeakHour {
    /// Peak line in the given language, e.g. `"17:00 with 1200 rentals"`.
    pub fn text(&self, language: Language) -> String {
        match language {
            Language::English => format!("{}:00 with {} rentals", self.hour, self.count),
            Language::Indonesian => format!("{}:00 dengan {} penyewaan", self.hour, self.count),
        }
    }
}

impl fmt::Display for PeakHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text(Language::English))
    }
}
