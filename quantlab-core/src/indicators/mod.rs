//! Technical indicator calculator.
//!
//! Indicators are pure functions: price series in, aligned output series out.
//! Every output series has the input length, with warm-up entries explicitly
//! absent (`None`) rather than zero or NaN. Inputs shorter than the window
//! degrade to an all-absent series; only an empty series or a nonsensical
//! window is an error.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::PriceSeries;
use crate::error::AnalyticsError;

pub use bollinger::{bollinger, BollingerSeries};
pub use ema::ema;
pub use macd::{macd, MacdSeries};
pub use rsi::rsi;
pub use sma::sma;

/// Windows and parameters for one indicator pass. Caller-supplied; there are
/// no hidden defaults inside the calculator itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub sma_windows: Vec<usize>,
    pub ema_windows: Vec<usize>,
    pub rsi_window: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_window: usize,
    pub bollinger_k: f64,
    /// Bars of trailing history used for the momentum reading.
    pub momentum_lookback: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_windows: vec![20, 50, 200],
            ema_windows: vec![12, 26],
            rsi_window: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_window: 20,
            bollinger_k: 2.0,
            momentum_lookback: 20,
        }
    }
}

/// Broad market posture read off the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Neutral,
}

/// Latest-bar trend summary: close vs. the two shortest moving averages
/// (close > short MA > long MA reads bullish, the inverse bearish), plus
/// trailing momentum over the configured lookback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSnapshot {
    pub direction: TrendDirection,
    /// Percent change over `momentum_lookback` bars; absent when the series
    /// is shorter than the lookback.
    pub momentum_pct: Option<f64>,
    pub latest_close: f64,
}

/// Aligned output of the technical engine for one series.
///
/// Moving-average maps are keyed by window so a single pass can carry several
/// horizons (the classic 20/50/200 stack).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub len: usize,
    pub sma: BTreeMap<usize, Vec<Option<f64>>>,
    pub ema: BTreeMap<usize, Vec<Option<f64>>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: MacdSeries,
    pub bollinger: BollingerSeries,
    /// Absent when fewer than two SMA windows are defined at the last bar.
    pub trend: Option<TrendSnapshot>,
}

/// Run every configured indicator over the series.
pub fn compute_indicators(
    series: &PriceSeries,
    config: &IndicatorConfig,
) -> Result<IndicatorSet, AnalyticsError> {
    series.validate()?;
    if config.sma_windows.is_empty() {
        return Err(AnalyticsError::invalid("at least one SMA window is required"));
    }

    let mut sma_out = BTreeMap::new();
    for &window in &config.sma_windows {
        sma_out.insert(window, sma(series, window)?);
    }
    let mut ema_out = BTreeMap::new();
    for &window in &config.ema_windows {
        ema_out.insert(window, ema(series, window)?);
    }

    let rsi_out = rsi(series, config.rsi_window)?;
    let macd_out = macd(series, config.macd_fast, config.macd_slow, config.macd_signal)?;
    let bollinger_out = bollinger(series, config.bollinger_window, config.bollinger_k)?;
    let trend = trend_snapshot(series, &sma_out, config.momentum_lookback);

    Ok(IndicatorSet {
        len: series.len(),
        sma: sma_out,
        ema: ema_out,
        rsi: rsi_out,
        macd: macd_out,
        bollinger: bollinger_out,
        trend,
    })
}

fn trend_snapshot(
    series: &PriceSeries,
    sma_out: &BTreeMap<usize, Vec<Option<f64>>>,
    momentum_lookback: usize,
) -> Option<TrendSnapshot> {
    let closes = series.closes();
    let latest_close = *closes.last()?;
    let last = closes.len() - 1;

    // The two shortest configured windows, both defined at the last bar.
    let mut defined = sma_out
        .iter()
        .filter_map(|(&w, values)| values[last].map(|v| (w, v)));
    let (_, short_ma) = defined.next()?;
    let (_, long_ma) = defined.next()?;

    let direction = if latest_close > short_ma && short_ma > long_ma {
        TrendDirection::Bullish
    } else if latest_close < short_ma && short_ma < long_ma {
        TrendDirection::Bearish
    } else {
        TrendDirection::Neutral
    };

    let momentum_pct = if momentum_lookback > 0 && closes.len() > momentum_lookback {
        let base = closes[last - momentum_lookback];
        Some((latest_close - base) / base * 100.0)
    } else {
        None
    };

    Some(TrendSnapshot {
        direction,
        momentum_pct,
        latest_close,
    })
}
