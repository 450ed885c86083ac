use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::category::Component;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    weights: BTreeMap<Component, f64>,
}

impl WeightTable {
    pub fn new(entries: &[(Component, f64)]) -> Self {
        Self {
            weights: entries.iter().copied().collect(),
        }
    }

    pub fn weight(&self, component: Component) -> Option<f64> {
        self.weights.get(&component).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        self.weights.iter().map(|(c, w)| (*c, *w))
    }

    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    fn validate(&self, table: &'static str) -> Result<(), ProfileError> {
        for (component, weight) in self.entries() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ProfileError::InvalidWeight {
                    table,
                    component: component.name(),
                    weight,
                });
            }
        }
        let sum = self.total();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ProfileError::WeightSum { table, sum });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueAssumptions {
    pub conversion_rate: f64,
    pub avg_order_value: f64,
    pub default_monthly_traffic: f64,
}

impl Default for RevenueAssumptions {
    fn default() -> Self {
        Self {
            conversion_rate: 0.02,
            avg_order_value: 50.0,
            default_monthly_traffic: 1000.0,
        }
    }
}

impl RevenueAssumptions {
    pub fn revenue_for(&self, monthly_traffic: f64) -> f64 {
        monthly_traffic * self.conversion_rate * self.avg_order_value
    }

    /// Revenue at the default traffic, before any uplift.
    pub fn baseline_revenue(&self) -> f64 {
        self.revenue_for(self.default_monthly_traffic)
    }
}

/// Colour banding for 0-100 scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThresholds {
    pub green_min: f64,
    pub yellow_min: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            green_min: 80.0,
            yellow_min: 60.0,
        }
    }
}

/// Per-deployment tuning for the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    pub overall_weights: WeightTable,
    pub technical_weights: WeightTable,
    pub include_simulated: bool,
    pub dns_records_score: f64,
    pub mobile_placeholder_score: f64,
    pub bands: BandThresholds,
    pub revenue: RevenueAssumptions,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("{table}: weight for {component} must be a finite non-negative number, got {weight}")]
    InvalidWeight {
        table: &'static str,
        component: &'static str,
        weight: f64,
    },
    #[error("{table}: weights must sum to 1.0, got {sum}")]
    WeightSum { table: &'static str, sum: f64 },
    #[error("{field} must be a finite non-negative number, got {value}")]
    InvalidValue { field: &'static str, value: f64 },
    #[error("bands: yellow_min ({yellow_min}) must not exceed green_min ({green_min})")]
    BandOrder { green_min: f64, yellow_min: f64 },
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            overall_weights: WeightTable::new(&[
                (Component::Performance, 0.30),
                (Component::Seo, 0.30),
                (Component::Security, 0.20),
                (Component::DomainAuthority, 0.20),
            ]),
            technical_weights: WeightTable::new(&[
                (Component::Performance, 0.30),
                (Component::Seo, 0.30),
                (Component::Security, 0.20),
                (Component::Dns, 0.10),
                (Component::Mobile, 0.10),
            ]),
            include_simulated: true,
            dns_records_score: 80.0,
            mobile_placeholder_score: 75.0,
            bands: BandThresholds::default(),
            revenue: RevenueAssumptions::default(),
        }
    }

    /// Same as `default_v1` but simulated components never enter a composite.
    pub fn measured_only_v1() -> Self {
        let mut base = Self::default_v1();
        base.include_simulated = false;
        base
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        self.overall_weights.validate("overall_weights")?;
        self.technical_weights.validate("technical_weights")?;

        let fields = [
            ("dns_records_score", self.dns_records_score),
            ("mobile_placeholder_score", self.mobile_placeholder_score),
            ("bands.green_min", self.bands.green_min),
            ("bands.yellow_min", self.bands.yellow_min),
            ("revenue.conversion_rate", self.revenue.conversion_rate),
            ("revenue.avg_order_value", self.revenue.avg_order_value),
            (
                "revenue.default_monthly_traffic",
                self.revenue.default_monthly_traffic,
            ),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::InvalidValue { field, value });
            }
        }
        for (field, value, max) in [
            ("dns_records_score", self.dns_records_score, 100.0),
            (
                "mobile_placeholder_score",
                self.mobile_placeholder_score,
                100.0,
            ),
            ("revenue.conversion_rate", self.revenue.conversion_rate, 1.0),
        ] {
            if value > max {
                return Err(ProfileError::InvalidValue { field, value });
            }
        }
        let baseline = self.revenue.baseline_revenue();
        if !baseline.is_finite() {
            return Err(ProfileError::InvalidValue {
                field: "revenue (default_monthly_traffic * conversion_rate * avg_order_value)",
                value: baseline,
            });
        }
        if self.bands.yellow_min > self.bands.green_min {
            return Err(ProfileError::BandOrder {
                green_min: self.bands.green_min,
                yellow_min: self.bands.yellow_min,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
