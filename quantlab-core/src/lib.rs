//! QuantLab Core — domain types, technical indicators, fundamental scoring,
//! risk statistics.
//!
//! This crate is the pure-computation heart of the analytics stack:
//! - Domain value objects (price bars, series, returns, fundamental snapshots)
//! - Technical indicator calculator (SMA/EMA/RSI/MACD/Bollinger + trend)
//! - Fundamental composite scoring against a caller-supplied tier table
//! - Risk engine (volatility, VaR/CVaR, Sharpe/Sortino, drawdown, beta,
//!   correlation, tail shape)
//!
//! Everything is a deterministic function over immutable inputs: no I/O, no
//! caching, no shared mutable state. Orchestration and parallel batch
//! evaluation live in `quantlab-runner`.

pub mod domain;
pub mod error;
pub mod indicators;
pub mod risk;
pub mod scoring;

pub use domain::{FundamentalSnapshot, MetricKey, PriceBar, PriceSeries, ReturnSeries};
pub use error::AnalyticsError;
pub use indicators::{
    compute_indicators, IndicatorConfig, IndicatorSet, TrendDirection, TrendSnapshot,
};
pub use risk::{
    compute_risk, CorrelationMatrix, DrawdownStats, RiskConfig, RiskReport, TailStats,
};
pub use scoring::{compute_score, ComponentScore, ComponentSpec, ScoreBreakdown, ScoringConfig, Tier};
