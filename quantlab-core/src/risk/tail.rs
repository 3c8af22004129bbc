//! Distribution-shape statistics that complement the headline risk numbers.
//!
//! Skewness and kurtosis describe the tails, the downside-deviation ratio
//! flags asymmetric volatility, and the capture means summarize the average
//! up-day and down-day. Each is `Option` so degenerate inputs surface as
//! "undefined" rather than NaN.

use serde::{Deserialize, Serialize};

use crate::risk::stats::{mean, sample_std};

const STD_FLOOR: f64 = 1e-15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailStats {
    /// Third standardized moment; negative means a heavier loss tail.
    pub skewness: Option<f64>,
    /// Fourth standardized moment minus 3; positive means fatter tails
    /// than a normal distribution.
    pub excess_kurtosis: Option<f64>,
    /// Downside deviation / total deviation; above 1 means the variance is
    /// concentrated on the downside.
    pub downside_deviation_ratio: Option<f64>,
    /// Mean return over positive days; `None` when there are no up days.
    pub mean_up_day: Option<f64>,
    /// Mean return over negative days; `None` when there are no down days.
    pub mean_down_day: Option<f64>,
}

/// Compute all tail statistics from a daily-return slice.
pub fn compute_tail_stats(returns: &[f64]) -> TailStats {
    let n = returns.len() as f64;
    let m = mean(returns);
    let std = sample_std(returns);

    let (skewness, excess_kurtosis, downside_deviation_ratio) = if std < STD_FLOOR {
        (None, None, None)
    } else {
        let m3 = returns.iter().map(|r| ((r - m) / std).powi(3)).sum::<f64>() / n;
        let m4 = returns.iter().map(|r| ((r - m) / std).powi(4)).sum::<f64>() / n;
        // Downside variance uses the full n denominator, matching the
        // Sortino convention.
        let downside_var =
            returns.iter().filter(|&&r| r < 0.0).map(|r| r * r).sum::<f64>() / n;
        (Some(m3), Some(m4 - 3.0), Some(downside_var.sqrt() / std))
    };

    let ups: Vec<f64> = returns.iter().copied().filter(|r| *r > 0.0).collect();
    let downs: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();

    TailStats {
        skewness,
        excess_kurtosis,
        downside_deviation_ratio,
        mean_up_day: (!ups.is_empty()).then(|| mean(&ups)),
        mean_down_day: (!downs.is_empty()).then(|| mean(&downs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_returns_are_undefined() {
        let stats = compute_tail_stats(&[0.001; 100]);
        assert!(stats.skewness.is_none());
        assert!(stats.excess_kurtosis.is_none());
        assert!(stats.downside_deviation_ratio.is_none());
        // But the capture means are well-defined.
        assert_eq!(stats.mean_up_day, Some(0.001));
        assert_eq!(stats.mean_down_day, None);
    }

    #[test]
    fn left_skewed_returns_negative_skewness() {
        let mut returns = vec![0.001; 100];
        for i in (0..100).step_by(10) {
            returns[i] = -0.05;
        }
        let stats = compute_tail_stats(&returns);
        assert!(stats.skewness.unwrap() < 0.0);
    }

    #[test]
    fn fat_tails_positive_excess_kurtosis() {
        let mut returns = vec![0.0005; 200];
        for i in (0..200).step_by(25) {
            returns[i] = if i % 50 == 0 { 0.08 } else { -0.08 };
        }
        let stats = compute_tail_stats(&returns);
        assert!(stats.excess_kurtosis.unwrap() > 0.0);
    }

    #[test]
    fn capture_means_split_by_sign() {
        let returns = [0.02, -0.01, 0.04, -0.03, 0.0];
        let stats = compute_tail_stats(&returns);
        assert!((stats.mean_up_day.unwrap() - 0.03).abs() < 1e-12);
        assert!((stats.mean_down_day.unwrap() + 0.02).abs() < 1e-12);
    }

    #[test]
    fn mostly_down_days_high_ddr() {
        let returns: Vec<f64> = (0..120)
            .map(|i| if i % 3 == 0 { 0.001 } else { -0.01 })
            .collect();
        let stats = compute_tail_stats(&returns);
        assert!(stats.downside_deviation_ratio.unwrap() > 0.5);
    }
}
