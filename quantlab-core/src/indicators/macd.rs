//! Moving Average Convergence/Divergence (MACD).
//!
//! MACD line = EMA(fast) - EMA(slow), defined once both EMAs are.
//! Signal line = EMA(signal) of the defined MACD region.
//! Histogram = MACD - signal.

use serde::{Deserialize, Serialize};

use crate::domain::PriceSeries;
use crate::error::AnalyticsError;
use crate::indicators::ema::ema_of_values;
use crate::indicators::sma::check_window;

/// The three aligned MACD output series, each the input length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// MACD of the series' closes. `fast` must be shorter than `slow`.
pub fn macd(
    series: &PriceSeries,
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdSeries, AnalyticsError> {
    series.validate()?;
    check_window(fast)?;
    check_window(slow)?;
    check_window(signal)?;
    if fast >= slow {
        return Err(AnalyticsError::invalid(format!(
            "MACD fast window ({fast}) must be shorter than slow window ({slow})"
        )));
    }

    let closes = series.closes();
    let n = closes.len();
    let ema_fast = ema_of_values(&closes, fast);
    let ema_slow = ema_of_values(&closes, slow);

    let mut macd_line = vec![None; n];
    for i in 0..n {
        if let (Some(f), Some(s)) = (ema_fast[i], ema_slow[i]) {
            macd_line[i] = Some(f - s);
        }
    }

    // The MACD line is contiguous from index slow - 1; run the signal EMA
    // over that region and map it back to full-length indices.
    let mut signal_line = vec![None; n];
    if n >= slow {
        let offset = slow - 1;
        let region: Vec<f64> = macd_line[offset..].iter().flatten().copied().collect();
        for (j, v) in ema_of_values(&region, signal).into_iter().enumerate() {
            signal_line[offset + j] = v;
        }
    }

    let mut histogram = vec![None; n];
    for i in 0..n {
        if let (Some(m), Some(s)) = (macd_line[i], signal_line[i]) {
            histogram[i] = Some(m - s);
        }
    }

    Ok(MacdSeries {
        macd: macd_line,
        signal: signal_line,
        histogram,
    })
}
