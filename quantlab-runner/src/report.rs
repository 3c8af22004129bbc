//! The assembled per-ticker analysis report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use quantlab_core::indicators::IndicatorSet;
use quantlab_core::risk::RiskReport;
use quantlab_core::scoring::ScoreBreakdown;

/// Current schema version for persisted reports.
pub const SCHEMA_VERSION: u32 = 1;

/// The lookback window the report was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub bar_count: usize,
}

/// Unified output of the three engines for one ticker.
///
/// A fresh value object per invocation: the engines keep no state, and the
/// caller (dashboard, exporter, batch runner) owns the report after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub ticker: String,
    pub indicators: IndicatorSet,
    pub score: ScoreBreakdown,
    pub risk: RiskReport,
    pub period: AnalysisPeriod,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}
