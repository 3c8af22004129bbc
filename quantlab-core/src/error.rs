//! Error taxonomy shared by all three engines.
//!
//! Two failure classes exist at the call level:
//! - `InvalidInput`: the caller handed us something structurally broken
//!   (empty series, unordered dates, zero window). Always fatal to that call.
//! - `InsufficientData`: the input is well-formed but too short for a
//!   specific statistic to be meaningful.
//!
//! Numeric degeneracy (zero variance, no downside observations) is NOT an
//! error: the affected statistic is reported as `None` so NaN/Infinity never
//! reach callers. Missing fundamental ratios are likewise not errors; the
//! scoring engine records them via the completeness flag.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// Structurally invalid input; never silently corrected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Too few observations for a statistic to be computed meaningfully.
    #[error("insufficient data for {statistic}: need {required}, got {actual}")]
    InsufficientData {
        statistic: &'static str,
        required: usize,
        actual: usize,
    },
}

impl AnalyticsError {
    /// Shorthand used throughout the engines.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
