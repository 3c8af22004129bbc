//! Maximum drawdown over a cumulative growth curve.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ReturnSeries;
use crate::error::AnalyticsError;

/// The deepest peak-to-trough decline, with its dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownStats {
    /// Fractional decline in [0, 1]; 0 for a monotone rising curve.
    pub magnitude: f64,
    pub peak_date: NaiveDate,
    pub trough_date: NaiveDate,
    /// First date the curve exceeds the prior peak again, if it ever does.
    pub recovery_date: Option<NaiveDate>,
}

/// Compound the returns into a growth curve (starting at 1.0), track the
/// running peak, and report the deepest decline from it.
pub fn max_drawdown(returns: &ReturnSeries) -> Result<DrawdownStats, AnalyticsError> {
    if returns.is_empty() {
        return Err(AnalyticsError::invalid("empty return series for drawdown"));
    }

    let mut curve = Vec::with_capacity(returns.len());
    let mut value = 1.0;
    for r in &returns.values {
        value *= 1.0 + r;
        curve.push(value);
    }

    let mut running_peak = curve[0];
    let mut running_peak_idx = 0;
    let mut magnitude = 0.0;
    let mut peak_idx = 0;
    let mut trough_idx = 0;

    for (i, &v) in curve.iter().enumerate() {
        if v > running_peak {
            running_peak = v;
            running_peak_idx = i;
        }
        let dd = (running_peak - v) / running_peak;
        if dd > magnitude {
            magnitude = dd;
            peak_idx = running_peak_idx;
            trough_idx = i;
        }
    }

    let recovery_date = if magnitude > 0.0 {
        let peak_value = curve[peak_idx];
        curve[trough_idx..]
            .iter()
            .position(|&v| v > peak_value)
            .map(|offset| returns.dates[trough_idx + offset])
    } else {
        None
    };

    Ok(DrawdownStats {
        magnitude,
        peak_date: returns.dates[peak_idx],
        trough_date: returns.dates[trough_idx],
        recovery_date,
    })
}
