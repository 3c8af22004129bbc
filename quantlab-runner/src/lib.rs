//! QuantLab Runner — analysis orchestration on top of `quantlab-core`.
//!
//! This crate provides:
//! - Single-ticker `analyze()`: indicators + score + risk in one report
//! - Parallel `analyze_batch()` with per-ticker failure isolation
//! - Portfolio-level return correlation
//! - TOML-loadable `AnalysisConfig`

pub mod analyzer;
pub mod batch;
pub mod config;
pub mod report;

pub use analyzer::analyze;
pub use batch::{analyze_batch, portfolio_correlation, BatchItem, TickerOutcome};
pub use config::{AnalysisConfig, ConfigError};
pub use report::{AnalysisPeriod, AnalysisReport, SCHEMA_VERSION};
