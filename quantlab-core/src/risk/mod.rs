//! Risk and performance analytics.
//!
//! Every statistic is a pure function: daily returns in, scalar (or dated
//! stat) out. `compute_risk` bundles them into one `RiskReport`. Statistics
//! that degenerate (zero variance, no downside days) come back as `None`;
//! statistics that would be statistically meaningless on the given sample
//! (beta on a thin overlap, VaR on a handful of points) are errors.

pub mod beta;
pub mod drawdown;
pub mod stats;
pub mod tail;
pub mod var;

use serde::{Deserialize, Serialize};

use crate::domain::ReturnSeries;
use crate::error::AnalyticsError;
use crate::risk::stats::{mean, sample_std};

pub use beta::{beta, correlation_matrix, CorrelationMatrix};
pub use drawdown::{max_drawdown, DrawdownStats};
pub use tail::{compute_tail_stats, TailStats};
pub use var::{conditional_var, historical_var};

/// Risk-engine parameters. Caller-supplied; defaults follow daily-equity
/// conventions (252 trading days, zero risk-free rate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Trading periods per year used to scale daily statistics.
    pub annualization_factor: f64,
    /// Annual risk-free rate; divided by the annualization factor to get
    /// the per-day hurdle for Sharpe/Sortino.
    pub risk_free_rate: f64,
    /// Tail probability for the headline VaR/CVaR (0.05 = 95% level).
    pub var_confidence: f64,
    /// Tail probability for the extreme VaR (0.01 = 99% level).
    pub var_tail_confidence: f64,
    /// Minimum return observations before VaR is considered meaningful.
    pub min_var_observations: usize,
    /// Minimum date-aligned overlap before beta is considered meaningful.
    pub min_beta_observations: usize,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            annualization_factor: 252.0,
            risk_free_rate: 0.0,
            var_confidence: 0.05,
            var_tail_confidence: 0.01,
            min_var_observations: 10,
            min_beta_observations: 30,
        }
    }
}

impl RiskConfig {
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if !self.annualization_factor.is_finite() || self.annualization_factor <= 0.0 {
            return Err(AnalyticsError::invalid(format!(
                "annualization factor must be positive, got {}",
                self.annualization_factor
            )));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(AnalyticsError::invalid("risk-free rate must be finite"));
        }
        for confidence in [self.var_confidence, self.var_tail_confidence] {
            if !(confidence > 0.0 && confidence < 1.0) {
                return Err(AnalyticsError::invalid(format!(
                    "VaR confidence must be in (0, 1), got {confidence}"
                )));
            }
        }
        Ok(())
    }

    fn daily_risk_free(&self) -> f64 {
        self.risk_free_rate / self.annualization_factor
    }
}

/// Full risk/performance profile for one return series.
///
/// `var_95`/`var_99`/`cvar_95` are named for the default confidence levels;
/// they are computed at whatever levels the config carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub annualized_volatility: f64,
    pub var_95: f64,
    pub var_99: f64,
    pub cvar_95: f64,
    pub sharpe_ratio: Option<f64>,
    pub sortino_ratio: Option<f64>,
    pub max_drawdown: DrawdownStats,
    /// Present only when a benchmark was supplied and its variance is
    /// non-degenerate.
    pub beta: Option<f64>,
    /// Asset/benchmark correlation, when a benchmark was supplied.
    pub correlation: Option<CorrelationMatrix>,
    pub tail: TailStats,
    pub sample_size: usize,
}

/// Annualized volatility: sample stdDev of returns scaled by the square root
/// of the annualization factor.
pub fn volatility(returns: &[f64], annualization_factor: f64) -> f64 {
    sample_std(returns) * annualization_factor.sqrt()
}

/// Annualized Sharpe ratio; `None` when the return variance is zero.
pub fn sharpe_ratio(returns: &[f64], daily_risk_free: f64, annualization_factor: f64) -> Option<f64> {
    let std = sample_std(returns);
    if std == 0.0 {
        return None;
    }
    Some((mean(returns) - daily_risk_free) / std * annualization_factor.sqrt())
}

/// Annualized Sortino ratio: Sharpe numerator over the deviation of returns
/// below the daily target. `None` when there are too few downside
/// observations or the downside deviation is zero.
pub fn sortino_ratio(
    returns: &[f64],
    daily_risk_free: f64,
    annualization_factor: f64,
) -> Option<f64> {
    let downside: Vec<f64> = returns
        .iter()
        .copied()
        .filter(|r| *r < daily_risk_free)
        .collect();
    if downside.len() < 2 {
        return None;
    }
    let downside_std = sample_std(&downside);
    if downside_std == 0.0 {
        return None;
    }
    Some((mean(returns) - daily_risk_free) / downside_std * annualization_factor.sqrt())
}

/// Compute the full risk report for one return series, optionally against a
/// benchmark for beta/correlation.
pub fn compute_risk(
    returns: &ReturnSeries,
    benchmark: Option<&ReturnSeries>,
    config: &RiskConfig,
) -> Result<RiskReport, AnalyticsError> {
    config.validate()?;

    let n = returns.len();
    if n < 2 {
        return Err(AnalyticsError::InsufficientData {
            statistic: "daily returns",
            required: 2,
            actual: n,
        });
    }
    if n < config.min_var_observations {
        return Err(AnalyticsError::InsufficientData {
            statistic: "historical VaR",
            required: config.min_var_observations,
            actual: n,
        });
    }

    let values = &returns.values;
    let daily_rf = config.daily_risk_free();

    let (beta_value, correlation) = match benchmark {
        Some(bench) => {
            let beta_value = beta::beta(returns, bench, config.min_beta_observations)?;
            let matrix = correlation_matrix(&[
                ("asset".to_string(), returns.clone()),
                ("benchmark".to_string(), bench.clone()),
            ])?;
            (beta_value, Some(matrix))
        }
        None => (None, None),
    };

    Ok(RiskReport {
        annualized_volatility: volatility(values, config.annualization_factor),
        var_95: historical_var(values, config.var_confidence)?,
        var_99: historical_var(values, config.var_tail_confidence)?,
        cvar_95: conditional_var(values, config.var_confidence)?,
        sharpe_ratio: sharpe_ratio(values, daily_rf, config.annualization_factor),
        sortino_ratio: sortino_ratio(values, daily_rf, config.annualization_factor),
        max_drawdown: max_drawdown(returns)?,
        beta: beta_value,
        correlation,
        tail: compute_tail_stats(values),
        sample_size: n,
    })
}
