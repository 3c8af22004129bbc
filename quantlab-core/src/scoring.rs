//! Fundamental composite scoring.
//!
//! Maps a `FundamentalSnapshot` to a 0-100 score through a caller-supplied
//! table of tiered components. Components are independent and order-agnostic;
//! a missing metric earns zero for its component and clears the completeness
//! flag instead of failing the call.

use serde::{Deserialize, Serialize};

use crate::domain::{FundamentalSnapshot, MetricKey};
use crate::error::AnalyticsError;

/// One scoring band. A value matches when it is above `min` (exclusive) and
/// at or below `max` (inclusive); an unbounded tier matches everything and
/// serves as the fallback. Tiers are evaluated in order, first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub points: f64,
}

impl Tier {
    pub fn above(min: f64, points: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
            points,
        }
    }

    pub fn between(min: f64, max: f64, points: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            points,
        }
    }

    pub fn fallback(points: f64) -> Self {
        Self {
            min: None,
            max: None,
            points,
        }
    }

    fn matches(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value > min) && self.max.map_or(true, |max| value <= max)
    }
}

/// One component of the composite: which ratio it reads, how many points it
/// is worth, and its tier ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub name: String,
    pub metric: MetricKey,
    pub max_points: f64,
    pub tiers: Vec<Tier>,
}

/// The full scoring table. `Default` is the five-component, 100-point scheme;
/// alternate schemes substitute their own table without touching the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub components: Vec<ComponentSpec>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        // Margins and growth are fractions of 1.0; P/E is a plain multiple.
        Self {
            components: vec![
                ComponentSpec {
                    name: "profitability".into(),
                    metric: MetricKey::GrossMargin,
                    max_points: 25.0,
                    tiers: vec![
                        Tier::above(0.60, 25.0),
                        Tier::between(0.40, 0.60, 15.0),
                        Tier::between(0.20, 0.40, 10.0),
                        Tier::fallback(5.0),
                    ],
                },
                ComponentSpec {
                    name: "returns".into(),
                    metric: MetricKey::ReturnOnEquity,
                    max_points: 20.0,
                    tiers: vec![
                        Tier::above(0.20, 20.0),
                        Tier::between(0.15, 0.20, 15.0),
                        Tier::between(0.10, 0.15, 10.0),
                        Tier::fallback(5.0),
                    ],
                },
                ComponentSpec {
                    name: "cash_generation".into(),
                    metric: MetricKey::FcfMargin,
                    max_points: 20.0,
                    tiers: vec![
                        Tier::above(0.15, 20.0),
                        Tier::between(0.10, 0.15, 15.0),
                        Tier::between(0.05, 0.10, 10.0),
                        Tier::fallback(5.0),
                    ],
                },
                ComponentSpec {
                    name: "valuation".into(),
                    metric: MetricKey::TrailingPe,
                    max_points: 20.0,
                    tiers: vec![
                        Tier::between(10.0, 25.0, 20.0),
                        Tier::between(5.0, 35.0, 15.0),
                        Tier::between(35.0, 50.0, 10.0),
                        // Negative P/E (loss-maker) lands here, never a fault.
                        Tier::fallback(5.0),
                    ],
                },
                ComponentSpec {
                    name: "growth".into(),
                    metric: MetricKey::RevenueGrowth,
                    max_points: 15.0,
                    tiers: vec![
                        Tier::above(0.20, 15.0),
                        Tier::between(0.10, 0.20, 10.0),
                        Tier::above(0.0, 5.0),
                        Tier::fallback(0.0),
                    ],
                },
            ],
        }
    }
}

impl ScoringConfig {
    /// Table invariants: at least one component, every component has tiers,
    /// no tier exceeds its component's maximum, maxima sum to 100.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.components.is_empty() {
            return Err(AnalyticsError::invalid("scoring table has no components"));
        }
        let mut total_max = 0.0;
        for component in &self.components {
            if component.tiers.is_empty() {
                return Err(AnalyticsError::invalid(format!(
                    "scoring component '{}' has no tiers",
                    component.name
                )));
            }
            if component.max_points <= 0.0 {
                return Err(AnalyticsError::invalid(format!(
                    "scoring component '{}' has non-positive max points",
                    component.name
                )));
            }
            for tier in &component.tiers {
                if tier.points < 0.0 || tier.points > component.max_points {
                    return Err(AnalyticsError::invalid(format!(
                        "tier points {} outside [0, {}] for component '{}'",
                        tier.points, component.max_points, component.name
                    )));
                }
            }
            total_max += component.max_points;
        }
        if (total_max - 100.0).abs() > 1e-9 {
            return Err(AnalyticsError::invalid(format!(
                "scoring component maxima must sum to 100, got {total_max}"
            )));
        }
        Ok(())
    }
}

/// Earned/maximum points for one component of the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub name: String,
    pub earned_points: f64,
    pub max_points: f64,
}

/// The composite score with its per-component breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of earned component points, in [0, 100].
    pub total_score: f64,
    pub components: Vec<ComponentScore>,
    /// False when any scored metric was missing from the snapshot.
    pub data_complete: bool,
}

/// Score a snapshot against the table.
pub fn compute_score(
    snapshot: &FundamentalSnapshot,
    config: &ScoringConfig,
) -> Result<ScoreBreakdown, AnalyticsError> {
    config.validate()?;

    let mut components = Vec::with_capacity(config.components.len());
    let mut total_score = 0.0;
    let mut data_complete = true;

    for spec in &config.components {
        let earned = match snapshot.get(spec.metric) {
            Some(value) => spec
                .tiers
                .iter()
                .find(|tier| tier.matches(value))
                .map(|tier| tier.points)
                .unwrap_or(0.0),
            None => {
                data_complete = false;
                0.0
            }
        };
        total_score += earned;
        components.push(ComponentScore {
            name: spec.name.clone(),
            earned_points: earned,
            max_points: spec.max_points,
        });
    }

    Ok(ScoreBreakdown {
        total_score,
        components,
        data_complete,
    })
}
