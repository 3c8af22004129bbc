//! Simple Moving Average (SMA).
//!
//! Rolling mean of close prices over a lookback window.
//! First defined value at index window - 1; earlier entries are `None`.

use crate::domain::PriceSeries;
use crate::error::AnalyticsError;

/// SMA of the series' closes. Shorter-than-window input yields an all-`None`
/// sequence; empty input or a zero window is an error.
pub fn sma(series: &PriceSeries, window: usize) -> Result<Vec<Option<f64>>, AnalyticsError> {
    series.validate()?;
    check_window(window)?;
    Ok(sma_of_values(&series.closes(), window))
}

pub(crate) fn check_window(window: usize) -> Result<(), AnalyticsError> {
    if window == 0 {
        return Err(AnalyticsError::invalid("indicator window must be >= 1"));
    }
    Ok(())
}

/// Rolling mean over a raw value slice. Shared with EMA seeding, Bollinger
/// middles, and the MACD signal line.
pub(crate) fn sma_of_values(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];
    if n < window {
        return result;
    }

    let mut sum: f64 = values[..window].iter().sum();
    result[window - 1] = Some(sum / window as f64);
    for i in window..n {
        sum += values[i] - values[i - window];
        result[i] = Some(sum / window as f64);
    }
    result
}
