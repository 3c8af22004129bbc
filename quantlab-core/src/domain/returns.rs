//! Dated daily-return series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily simple returns with their observation dates.
///
/// `dates` and `values` are parallel vectors; dates are strictly increasing
/// because the series is derived from a validated `PriceSeries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl ReturnSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Inner-join two return series on date. Both inputs are sorted, so a
    /// single merge pass suffices.
    pub fn align(&self, other: &ReturnSeries) -> (Vec<f64>, Vec<f64>) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.len() && j < other.len() {
            match self.dates[i].cmp(&other.dates[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    left.push(self.values[i]);
                    right.push(other.values[j]);
                    i += 1;
                    j += 1;
                }
            }
        }
        (left, right)
    }
}
