//! Price bars and the per-ticker price series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::returns::ReturnSeries;
use crate::error::AnalyticsError;

/// OHLCV bar for a single ticker on a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceBar {
    /// OHLC sanity: high caps everything, low floors everything, all finite
    /// and positive.
    pub fn is_sane(&self) -> bool {
        let finite = self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite();
        finite
            && self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > 0.0
            && self.close > 0.0
    }
}

/// Ordered price history for one ticker.
///
/// Immutable once produced: the engines read it, derive returns and
/// indicator series from it, and never mutate or cache it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub ticker: String,
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(ticker: impl Into<String>, bars: Vec<PriceBar>) -> Self {
        Self {
            ticker: ticker.into(),
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Entry check applied by every engine: non-empty, strictly increasing
    /// dates, sane OHLC on each bar.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.bars.is_empty() {
            return Err(AnalyticsError::invalid(format!(
                "empty price series for '{}'",
                self.ticker
            )));
        }
        for pair in self.bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(AnalyticsError::invalid(format!(
                    "price series for '{}' is not strictly increasing at {} -> {}",
                    self.ticker, pair[0].date, pair[1].date
                )));
            }
        }
        for bar in &self.bars {
            if !bar.is_sane() {
                return Err(AnalyticsError::invalid(format!(
                    "insane OHLC bar for '{}' on {}",
                    self.ticker, bar.date
                )));
            }
        }
        Ok(())
    }

    /// Close prices in bar order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Daily simple returns: r_t = (close_t - close_{t-1}) / close_{t-1},
    /// dated by the later bar. One element shorter than the series.
    pub fn daily_returns(&self) -> ReturnSeries {
        let mut dates = Vec::new();
        let mut values = Vec::new();
        for pair in self.bars.windows(2) {
            dates.push(pair[1].date);
            values.push((pair[1].close - pair[0].close) / pair[0].close);
        }
        ReturnSeries { dates, values }
    }

    /// First and last bar dates. `None` on an empty series.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.bars.first(), self.bars.last()) {
            (Some(a), Some(b)) => Some((a.date, b.date)),
            _ => None,
        }
    }
}
