//! Single-ticker analysis — wires together the three engines.
//!
//! The engines are independent: indicators, score, and risk read only their
//! own inputs, so composition order is irrelevant. This module validates the
//! inputs once, runs all three, and assembles the unified report.

use quantlab_core::domain::{FundamentalSnapshot, PriceSeries};
use quantlab_core::error::AnalyticsError;
use quantlab_core::indicators::compute_indicators;
use quantlab_core::risk::compute_risk;
use quantlab_core::scoring::compute_score;

use crate::config::AnalysisConfig;
use crate::report::{AnalysisPeriod, AnalysisReport, SCHEMA_VERSION};

/// Analyze one ticker: price history plus fundamentals, optionally against a
/// benchmark series for beta/correlation.
pub fn analyze(
    ticker: &str,
    series: &PriceSeries,
    snapshot: &FundamentalSnapshot,
    benchmark: Option<&PriceSeries>,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalyticsError> {
    series.validate()?;
    if let Some(bench) = benchmark {
        bench.validate()?;
    }
    tracing::debug!(ticker, bars = series.len(), "analyzing");

    let indicators = compute_indicators(series, &config.indicators)?;
    let score = compute_score(snapshot, &config.scoring)?;

    let returns = series.daily_returns();
    let benchmark_returns = benchmark.map(|b| b.daily_returns());
    let risk = compute_risk(&returns, benchmark_returns.as_ref(), &config.risk)?;

    let (start, end) = series
        .period()
        .expect("validated series is non-empty");

    Ok(AnalysisReport {
        schema_version: SCHEMA_VERSION,
        ticker: ticker.to_string(),
        indicators,
        score,
        risk,
        period: AnalysisPeriod {
            start,
            end,
            bar_count: series.len(),
        },
    })
}
