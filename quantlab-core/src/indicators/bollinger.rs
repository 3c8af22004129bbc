//! Bollinger Bands.
//!
//! Middle = SMA(window); band width = k * sample standard deviation
//! (n - 1 denominator) of the trailing window.
//! Upper = middle + width, lower = middle - width.

use serde::{Deserialize, Serialize};

use crate::domain::PriceSeries;
use crate::error::AnalyticsError;
use crate::indicators::sma::{check_window, sma_of_values};

/// The three aligned band series, each the input length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub middle: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Bollinger Bands of the series' closes. `k` must be positive and finite.
pub fn bollinger(
    series: &PriceSeries,
    window: usize,
    k: f64,
) -> Result<BollingerSeries, AnalyticsError> {
    series.validate()?;
    check_window(window)?;
    if !k.is_finite() || k <= 0.0 {
        return Err(AnalyticsError::invalid(format!(
            "Bollinger multiplier must be positive and finite, got {k}"
        )));
    }

    let closes = series.closes();
    let n = closes.len();
    let middle = sma_of_values(&closes, window);
    let mut upper = vec![None; n];
    let mut lower = vec![None; n];

    for i in 0..n {
        let Some(mean) = middle[i] else { continue };
        let window_slice = &closes[i + 1 - window..=i];
        let width = k * sample_std(window_slice, mean);
        upper[i] = Some(mean + width);
        lower[i] = Some(mean - width);
    }

    Ok(BollingerSeries {
        middle,
        upper,
        lower,
    })
}

/// Sample standard deviation around a precomputed mean. A single-element
/// window has no dispersion.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testing::{assert_approx, make_series, DEFAULT_EPSILON};

    #[test]
    fn middle_is_sma() {
        let series = make_series(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let out = bollinger(&series, 3, 2.0).unwrap();
        assert!(out.middle[1].is_none());
        assert_approx(out.middle[2].unwrap(), 11.0, DEFAULT_EPSILON);
        assert_approx(out.middle[3].unwrap(), 12.0, DEFAULT_EPSILON);
    }

    #[test]
    fn bands_use_sample_stddev() {
        // Window [10, 11, 12]: mean 11, sample variance (1+0+1)/2 = 1, std 1.
        let series = make_series(&[10.0, 11.0, 12.0]);
        let out = bollinger(&series, 3, 2.0).unwrap();
        assert_approx(out.upper[2].unwrap(), 13.0, DEFAULT_EPSILON);
        assert_approx(out.lower[2].unwrap(), 9.0, DEFAULT_EPSILON);
    }

    #[test]
    fn bands_symmetric_about_middle() {
        let series = make_series(&[10.0, 11.0, 12.0, 13.0, 14.0, 13.0, 12.0]);
        let out = bollinger(&series, 3, 2.0).unwrap();
        for i in 2..7 {
            let up = out.upper[i].unwrap() - out.middle[i].unwrap();
            let down = out.middle[i].unwrap() - out.lower[i].unwrap();
            assert_approx(up, down, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn flat_series_has_zero_width() {
        let series = make_series(&[100.0; 20]);
        let out = bollinger(&series, 20, 2.0).unwrap();
        assert_approx(out.upper[19].unwrap(), 100.0, DEFAULT_EPSILON);
        assert_approx(out.middle[19].unwrap(), 100.0, DEFAULT_EPSILON);
        assert_approx(out.lower[19].unwrap(), 100.0, DEFAULT_EPSILON);
    }

    #[test]
    fn short_input_all_absent() {
        let series = make_series(&[100.0; 5]);
        let out = bollinger(&series, 20, 2.0).unwrap();
        assert!(out.middle.iter().all(|v| v.is_none()));
        assert!(out.upper.iter().all(|v| v.is_none()));
        assert!(out.lower.iter().all(|v| v.is_none()));
    }

    #[test]
    fn rejects_bad_multiplier() {
        let series = make_series(&[100.0; 25]);
        assert!(bollinger(&series, 20, 0.0).is_err());
        assert!(bollinger(&series, 20, -1.0).is_err());
        assert!(bollinger(&series, 20, f64::NAN).is_err());
    }
}
