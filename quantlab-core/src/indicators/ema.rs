//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * close[t] + (1 - alpha) * EMA[t-1],
//! alpha = 2 / (window + 1). Seed: SMA of the first `window` closes,
//! landing at index window - 1.

use crate::domain::PriceSeries;
use crate::error::AnalyticsError;
use crate::indicators::sma::check_window;

/// EMA of the series' closes. Same absence/error contract as `sma`.
pub fn ema(series: &PriceSeries, window: usize) -> Result<Vec<Option<f64>>, AnalyticsError> {
    series.validate()?;
    check_window(window)?;
    Ok(ema_of_values(&series.closes(), window))
}

/// EMA over a raw value slice. The MACD line and signal line reuse this.
pub(crate) fn ema_of_values(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];
    if n < window {
        return result;
    }

    let alpha = 2.0 / (window as f64 + 1.0);
    let seed = values[..window].iter().sum::<f64>() / window as f64;
    result[window - 1] = Some(seed);

    let mut prev = seed;
    for i in window..n {
        let next = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = Some(next);
        prev = next;
    }
    result
}
