use serde::Serialize;

use crate::model::category::Component;
use crate::model::insights::{ExecutiveSummary, HealthTrend, Insight, SeoRecommendation};
use crate::model::matrix::ActionItem;
use crate::model::snapshot::UnavailableReason;
use crate::model::thresholds::BandThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Measured,
    /// Placeholder value standing in for a measurement that does not exist.
    Simulated,
}

/// A normalized 0-100 component score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScore {
    pub value: f64,
    pub provenance: Provenance,
    /// Coarse heuristic rather than a graded scale.
    pub low_confidence: bool,
}

impl SubScore {
    pub fn measured(value: f64) -> Self {
        Self {
            value: clip100(value),
            provenance: Provenance::Measured,
            low_confidence: false,
        }
    }

    pub fn coarse(value: f64) -> Self {
        Self {
            low_confidence: true,
            ..Self::measured(value)
        }
    }

    pub fn simulated(value: f64) -> Self {
        Self {
            value: clip100(value),
            provenance: Provenance::Simulated,
            low_confidence: true,
        }
    }

    pub fn is_simulated(&self) -> bool {
        self.provenance == Provenance::Simulated
    }
}

pub fn clip100(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Green,
    Yellow,
    Red,
}

impl Band {
    pub fn classify(score: f64, bands: &BandThresholds) -> Self {
        if score >= bands.green_min {
            Band::Green
        } else if score >= bands.yellow_min {
            Band::Yellow
        } else {
            Band::Red
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::Green => "green",
            Band::Yellow => "yellow",
            Band::Red => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ComponentState {
    Scored {
        score: f64,
        provenance: Provenance,
        low_confidence: bool,
        band: Band,
    },
    Unavailable {
        reason: UnavailableReason,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentScore {
    pub component: Component,
    #[serde(flatten)]
    pub state: ComponentState,
}

impl ComponentScore {
    pub fn score(&self) -> Option<f64> {
        match &self.state {
            ComponentState::Scored { score, .. } => Some(*score),
            ComponentState::Unavailable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightingPolicy {
    /// Present weights are divided by their sum.
    Renormalized,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedComponent {
    pub component: Component,
    pub score: f64,
    pub weight: f64,
    pub normalized_weight: f64,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CompositeValue {
    Determinate {
        score: f64,
        band: Band,
        /// Share of the table's weight that was actually present.
        coverage: f64,
        policy: WeightingPolicy,
        components: Vec<WeightedComponent>,
        excluded: Vec<Component>,
    },
    /// No measured component was available.
    Indeterminate { excluded: Vec<Component> },
}

impl CompositeValue {
    pub fn score(&self) -> Option<f64> {
        match self {
            CompositeValue::Determinate { score, .. } => Some(*score),
            CompositeValue::Indeterminate { .. } => None,
        }
    }

    pub fn band(&self) -> Option<Band> {
        match self {
            CompositeValue::Determinate { band, .. } => Some(*band),
            CompositeValue::Indeterminate { .. } => None,
        }
    }

    pub fn components(&self) -> &[WeightedComponent] {
        match self {
            CompositeValue::Determinate { components, .. } => components,
            CompositeValue::Indeterminate { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficBucket {
    Low,
    Medium,
    High,
}

impl TrafficBucket {
    pub fn loss_range(self) -> &'static str {
        match self {
            TrafficBucket::Low => "<5%",
            TrafficBucket::Medium => "5-15%",
            TrafficBucket::High => "15-25%",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TrafficBucket::Low => "low",
            TrafficBucket::Medium => "medium",
            TrafficBucket::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrafficImpact {
    pub bucket: TrafficBucket,
    pub loss_range: &'static str,
}

impl From<TrafficBucket> for TrafficImpact {
    fn from(bucket: TrafficBucket) -> Self {
        Self {
            bucket,
            loss_range: bucket.loss_range(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficSource {
    Ranking,
    ProfileDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueEstimate {
    pub monthly_traffic: f64,
    pub traffic_source: TrafficSource,
    /// `None` when SEO was not scored; no uplift is assumed then.
    pub traffic_potential_pct: Option<f64>,
    /// `None` when performance was not scored.
    pub conversion_lift_pct: Option<f64>,
    pub current_revenue: f64,
    pub revenue: f64,
    pub revenue_increase: f64,
}

/// Everything the presentation layer renders for one audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeScore {
    pub target: Option<String>,
    pub overall_health: CompositeValue,
    pub technical_health: CompositeValue,
    pub sub_scores: Vec<ComponentScore>,
    pub traffic_impact: Option<TrafficImpact>,
    pub seo_opportunity: Option<f64>,
    pub conversion_loss_estimate: Option<f64>,
    pub revenue_estimate: Option<RevenueEstimate>,
    pub action_priority_matrix: Vec<ActionItem>,
    pub executive: ExecutiveSummary,
    pub insights: Vec<Insight>,
    pub seo_recommendations: Vec<SeoRecommendation>,
    pub critical_issues: usize,
    pub health_trend: HealthTrend,
}

impl CompositeScore {
    pub fn sub_score(&self, component: Component) -> Option<f64> {
        self.sub_scores
            .iter()
            .find(|s| s.component == component)
            .and_then(ComponentScore::score)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
