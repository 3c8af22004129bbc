//! Historical-simulation Value at Risk and expected shortfall.
//!
//! No distributional assumption: the empirical return distribution is sorted
//! and read at the requested tail quantile. Both statistics are reported as
//! positive loss magnitudes (floored at zero when the tail is positive).

use crate::error::AnalyticsError;

/// VaR at `confidence` (e.g. 0.05 for the 95% level): the loss magnitude at
/// the empirical `confidence`-quantile of the return distribution.
pub fn historical_var(returns: &[f64], confidence: f64) -> Result<f64, AnalyticsError> {
    Ok(loss_magnitude(tail_quantile(returns, confidence)?))
}

/// Expected shortfall at `confidence`: the mean of all returns at or below
/// the VaR threshold, as a positive loss magnitude.
pub fn conditional_var(returns: &[f64], confidence: f64) -> Result<f64, AnalyticsError> {
    let threshold = tail_quantile(returns, confidence)?;
    let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= threshold).collect();
    let mean = tail.iter().sum::<f64>() / tail.len() as f64;
    Ok(loss_magnitude(mean))
}

/// The raw return at the `confidence`-quantile (ascending empirical
/// distribution, index ceil(p * n) - 1).
fn tail_quantile(returns: &[f64], confidence: f64) -> Result<f64, AnalyticsError> {
    if !(0.0..1.0).contains(&confidence) || confidence == 0.0 {
        return Err(AnalyticsError::invalid(format!(
            "VaR confidence must be in (0, 1), got {confidence}"
        )));
    }
    if returns.is_empty() {
        return Err(AnalyticsError::invalid("empty return series for VaR"));
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let rank = ((confidence * sorted.len() as f64).ceil() as usize).clamp(1, sorted.len());
    Ok(sorted[rank - 1])
}

fn loss_magnitude(quantile: f64) -> f64 {
    (-quantile).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 100 returns: 0.01 everywhere except five crash days.
    fn crash_returns() -> Vec<f64> {
        let mut returns = vec![0.01; 100];
        let crashes = [-0.10, -0.08, -0.06, -0.04, -0.02];
        for (i, c) in crashes.iter().enumerate() {
            returns[i * 20] = *c;
        }
        returns
    }

    #[test]
    fn var_95_reads_the_fifth_worst() {
        let returns = crash_returns();
        // Ascending: -0.10, -0.08, -0.06, -0.04, -0.02, 0.01...
        // rank = ceil(0.05 * 100) = 5 -> -0.02, magnitude 0.02.
        let var = historical_var(&returns, 0.05).unwrap();
        assert!((var - 0.02).abs() < 1e-12);
    }

    #[test]
    fn var_99_at_least_var_95() {
        let returns = crash_returns();
        let var_95 = historical_var(&returns, 0.05).unwrap();
        let var_99 = historical_var(&returns, 0.01).unwrap();
        assert!(var_99 >= var_95, "var_99={var_99} var_95={var_95}");
        // rank = ceil(0.01 * 100) = 1 -> -0.10.
        assert!((var_99 - 0.10).abs() < 1e-12);
    }

    #[test]
    fn cvar_at_least_var() {
        let returns = crash_returns();
        let var = historical_var(&returns, 0.05).unwrap();
        let cvar = conditional_var(&returns, 0.05).unwrap();
        assert!(cvar >= var, "cvar={cvar} var={var}");
        // Tail at or below -0.02: mean of the five crashes = -0.06.
        assert!((cvar - 0.06).abs() < 1e-12);
    }

    #[test]
    fn all_positive_returns_floor_at_zero() {
        let returns = vec![0.005; 50];
        assert_eq!(historical_var(&returns, 0.05).unwrap(), 0.0);
        assert_eq!(conditional_var(&returns, 0.05).unwrap(), 0.0);
    }

    #[test]
    fn flat_returns_are_zero_loss() {
        let returns = vec![0.0; 30];
        assert_eq!(historical_var(&returns, 0.05).unwrap(), 0.0);
        assert_eq!(conditional_var(&returns, 0.05).unwrap(), 0.0);
    }

    #[test]
    fn rejects_bad_confidence() {
        let returns = vec![0.01; 10];
        assert!(historical_var(&returns, 0.0).is_err());
        assert!(historical_var(&returns, 1.0).is_err());
        assert!(historical_var(&returns, -0.05).is_err());
    }

    #[test]
    fn rejects_empty_returns() {
        assert!(historical_var(&[], 0.05).is_err());
        assert!(conditional_var(&[], 0.05).is_err());
    }

    #[test]
    fn deterministic() {
        let returns = crash_returns();
        assert_eq!(
            historical_var(&returns, 0.05).unwrap(),
            historical_var(&returns, 0.05).unwrap()
        );
    }
}
