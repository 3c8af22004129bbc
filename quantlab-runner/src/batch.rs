//! Batch analysis — embarrassingly parallel per-ticker evaluation.
//!
//! Each ticker is independent: no shared mutable state, no cross-ticker
//! ordering constraints. The batch fans out over rayon's thread pool and
//! collects a per-ticker outcome list; one ticker's failure is recorded
//! against that ticker and never aborts its siblings.

use rayon::prelude::*;

use quantlab_core::domain::{FundamentalSnapshot, PriceSeries};
use quantlab_core::error::AnalyticsError;
use quantlab_core::risk::{correlation_matrix, CorrelationMatrix};

use crate::analyzer::analyze;
use crate::config::AnalysisConfig;
use crate::report::AnalysisReport;

/// Inputs for one ticker in a batch.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub ticker: String,
    pub series: PriceSeries,
    pub snapshot: FundamentalSnapshot,
}

/// Per-ticker result: the report, or the typed error that ticker produced.
#[derive(Debug, Clone)]
pub struct TickerOutcome {
    pub ticker: String,
    pub outcome: Result<AnalysisReport, AnalyticsError>,
}

/// Analyze a collection of tickers in parallel.
///
/// Outcomes come back in input order regardless of completion order. The
/// optional benchmark is shared across all tickers.
pub fn analyze_batch(
    items: &[BatchItem],
    benchmark: Option<&PriceSeries>,
    config: &AnalysisConfig,
) -> Vec<TickerOutcome> {
    items
        .par_iter()
        .map(|item| {
            let outcome = analyze(&item.ticker, &item.series, &item.snapshot, benchmark, config);
            if let Err(error) = &outcome {
                tracing::warn!(ticker = %item.ticker, %error, "ticker analysis failed");
            }
            TickerOutcome {
                ticker: item.ticker.clone(),
                outcome,
            }
        })
        .collect()
}

/// Pairwise return correlation across a set of tickers (portfolio mode).
///
/// Validates every series, derives daily returns, and delegates to the risk
/// engine's correlation matrix.
pub fn portfolio_correlation(
    series: &[PriceSeries],
) -> Result<CorrelationMatrix, AnalyticsError> {
    for s in series {
        s.validate()?;
    }
    let labeled: Vec<_> = series
        .iter()
        .map(|s| (s.ticker.clone(), s.daily_returns()))
        .collect();
    correlation_matrix(&labeled)
}
