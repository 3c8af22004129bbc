//! Market sensitivity: beta against a benchmark and pairwise correlation.

use serde::{Deserialize, Serialize};

use crate::domain::ReturnSeries;
use crate::error::AnalyticsError;
use crate::risk::stats::{sample_covariance, sample_std, sample_variance};

/// Beta = cov(asset, benchmark) / var(benchmark), over the date-aligned
/// overlap of the two series.
///
/// Overlap below `min_observations` is an `InsufficientData` error; a
/// zero-variance benchmark makes beta undefined (`None`), never infinite.
pub fn beta(
    asset: &ReturnSeries,
    benchmark: &ReturnSeries,
    min_observations: usize,
) -> Result<Option<f64>, AnalyticsError> {
    let (asset_aligned, bench_aligned) = asset.align(benchmark);
    if asset_aligned.len() < min_observations {
        return Err(AnalyticsError::InsufficientData {
            statistic: "beta",
            required: min_observations,
            actual: asset_aligned.len(),
        });
    }

    let bench_variance = sample_variance(&bench_aligned);
    if bench_variance == 0.0 {
        return Ok(None);
    }
    Ok(Some(
        sample_covariance(&asset_aligned, &bench_aligned) / bench_variance,
    ))
}

/// Pairwise Pearson correlations across N labeled return series.
///
/// Symmetric with a unit diagonal. An off-diagonal entry is `None` when the
/// pair's date overlap is shorter than two points or either side has zero
/// variance over the overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Entry by label pair.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        self.values[i][j]
    }
}

/// Build the correlation matrix for a set of labeled return series.
pub fn correlation_matrix(
    series: &[(String, ReturnSeries)],
) -> Result<CorrelationMatrix, AnalyticsError> {
    if series.is_empty() {
        return Err(AnalyticsError::invalid(
            "correlation matrix needs at least one return series",
        ));
    }

    let n = series.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        values[i][i] = Some(1.0);
        for j in (i + 1)..n {
            let r = pearson(&series[i].1, &series[j].1);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        labels: series.iter().map(|(label, _)| label.clone()).collect(),
        values,
    })
}

fn pearson(a: &ReturnSeries, b: &ReturnSeries) -> Option<f64> {
    let (left, right) = a.align(b);
    if left.len() < 2 {
        return None;
    }
    let std_left = sample_std(&left);
    let std_right = sample_std(&right);
    if std_left == 0.0 || std_right == 0.0 {
        return None;
    }
    Some(sample_covariance(&left, &right) / (std_left * std_right))
}
