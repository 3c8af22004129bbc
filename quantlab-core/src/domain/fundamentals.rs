//! Point-in-time fundamental ratio snapshot.

use serde::{Deserialize, Serialize};

/// Named fundamental ratios for one ticker at one point in time.
///
/// Every field is independently optional: market-data providers routinely
/// return partial coverage (no P/E for loss-makers, no PEG without growth
/// estimates), and a missing ratio must not block scoring of the others.
/// Margins, returns, and growth rates are fractions (0.42 = 42%); the
/// valuation ratios (P/E, PEG, D/E, current ratio) are plain multiples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    pub gross_margin: Option<f64>,
    pub operating_margin: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub fcf_margin: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub current_ratio: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub earnings_growth: Option<f64>,
}

/// Selector for one snapshot field, used by the scoring table so that
/// alternate schemes can score any ratio without touching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    GrossMargin,
    OperatingMargin,
    ReturnOnEquity,
    ReturnOnAssets,
    FcfMargin,
    TrailingPe,
    ForwardPe,
    PegRatio,
    DebtToEquity,
    CurrentRatio,
    RevenueGrowth,
    EarningsGrowth,
}

impl FundamentalSnapshot {
    /// Exhaustive field lookup; the match keeps missing-metric handling
    /// type-checked when fields are added.
    pub fn get(&self, key: MetricKey) -> Option<f64> {
        match key {
            MetricKey::GrossMargin => self.gross_margin,
            MetricKey::OperatingMargin => self.operating_margin,
            MetricKey::ReturnOnEquity => self.return_on_equity,
            MetricKey::ReturnOnAssets => self.return_on_assets,
            MetricKey::FcfMargin => self.fcf_margin,
            MetricKey::TrailingPe => self.trailing_pe,
            MetricKey::ForwardPe => self.forward_pe,
            MetricKey::PegRatio => self.peg_ratio,
            MetricKey::DebtToEquity => self.debt_to_equity,
            MetricKey::CurrentRatio => self.current_ratio,
            MetricKey::RevenueGrowth => self.revenue_growth,
            MetricKey::EarningsGrowth => self.earnings_growth,
        }
    }
}
