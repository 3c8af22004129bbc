//! Relative Strength Index (RSI).
//!
//! Wilder smoothing of average gains and losses:
//! seed = simple averages over the first `window` changes, then
//! avg = (prev * (window - 1) + current) / window.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss); avg_loss == 0 => RSI = 100.
//! First defined value at index `window`.

use crate::domain::PriceSeries;
use crate::error::AnalyticsError;
use crate::indicators::sma::check_window;

/// RSI of the series' closes. Needs window + 1 bars for the first value;
/// shorter input yields an all-`None` sequence.
pub fn rsi(series: &PriceSeries, window: usize) -> Result<Vec<Option<f64>>, AnalyticsError> {
    series.validate()?;
    check_window(window)?;

    let closes = series.closes();
    let n = closes.len();
    let mut result = vec![None; n];
    if n < window + 1 {
        return Ok(result);
    }

    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    // Seed averages over the initial window of changes.
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for &ch in &changes[..window] {
        if ch > 0.0 {
            avg_gain += ch;
        } else {
            avg_loss -= ch;
        }
    }
    avg_gain /= window as f64;
    avg_loss /= window as f64;
    result[window] = Some(rsi_value(avg_gain, avg_loss));

    // Wilder smoothing for the rest.
    for (i, &ch) in changes.iter().enumerate().skip(window) {
        let gain = ch.max(0.0);
        let loss = (-ch).max(0.0);
        avg_gain = (avg_gain * (window as f64 - 1.0) + gain) / window as f64;
        avg_loss = (avg_loss * (window as f64 - 1.0) + loss) / window as f64;
        result[i + 1] = Some(rsi_value(avg_gain, avg_loss));
    }

    Ok(result)
}

/// With no losses in the window the ratio degenerates; RSI is defined as 100
/// (a flat window counts as "no losses").
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testing::{assert_approx, make_series};

    #[test]
    fn rsi_all_gains_is_100() {
        let series = make_series(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0]);
        let result = rsi(&series, 3).unwrap();
        assert_approx(result[3].unwrap(), 100.0, 1e-9);
        assert_approx(result[5].unwrap(), 100.0, 1e-9);
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let series = make_series(&[105.0, 104.0, 103.0, 102.0, 101.0, 100.0]);
        let result = rsi(&series, 3).unwrap();
        assert_approx(result[3].unwrap(), 0.0, 1e-9);
    }

    #[test]
    fn rsi_flat_series_is_100() {
        // No losses at all, so the zero-loss guard applies.
        let series = make_series(&[100.0; 20]);
        let result = rsi(&series, 14).unwrap();
        assert_approx(result[14].unwrap(), 100.0, 1e-9);
        assert_approx(result[19].unwrap(), 100.0, 1e-9);
    }

    #[test]
    fn rsi_seed_value_mixed() {
        // Closes: 44, 44.34, 44.09, 43.61, 44.33
        // Changes: +0.34, -0.25, -0.48, +0.72
        // Seed over first 3 changes: avg_gain = 0.34/3, avg_loss = 0.73/3
        // RSI[3] = 100 - 100/(1 + 0.34/0.73) = 31.7757...
        let series = make_series(&[44.0, 44.34, 44.09, 43.61, 44.33]);
        let result = rsi(&series, 3).unwrap();
        assert!(result[2].is_none());
        assert_approx(result[3].unwrap(), 100.0 - 100.0 / (1.0 + 0.34 / 0.73), 1e-9);
    }

    #[test]
    fn rsi_bounded_0_100() {
        let series = make_series(&[100.0, 105.0, 98.0, 110.0, 95.0, 115.0, 90.0, 120.0]);
        let result = rsi(&series, 3).unwrap();
        for v in result.into_iter().flatten() {
            assert!((0.0..=100.0).contains(&v), "RSI out of bounds: {v}");
        }
    }

    #[test]
    fn rsi_warm_up_is_absent() {
        let series = make_series(&[100.0, 101.0, 102.0, 103.0]);
        let result = rsi(&series, 3).unwrap();
        assert!(result[0].is_none());
        assert!(result[1].is_none());
        assert!(result[2].is_none());
        assert!(result[3].is_some());
    }

    #[test]
    fn rsi_short_input_all_absent() {
        let series = make_series(&[100.0, 101.0, 102.0]);
        let result = rsi(&series, 14).unwrap();
        assert!(result.iter().all(|v| v.is_none()));
    }
}
