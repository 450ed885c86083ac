use crate::model::insights::{
    ExecutiveSummary, HealthTrend, Insight, OpportunityLevel, SecurityRisk, SeoRecommendation,
    insight_order,
};
use crate::model::matrix::{ActionArea, ActionItem};
use crate::model::scores::{CompositeValue, RevenueEstimate, TrafficSource};
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage2_categories::Stage2Output;
use crate::pipeline::stage3_composite::count_below;

const PERFORMANCE_IMPACT_DIVISOR: f64 = 100.0;
const PERFORMANCE_EFFORT: f64 = 6.0;
const SEO_IMPACT_DIVISOR: f64 = 5.0;
const SEO_EFFORT: f64 = 4.0;
const SSL_INVALID_IMPACT: f64 = 9.0;
const SECURITY_EFFORT: f64 = 2.0;
const CONTENT_IMPACT: f64 = 7.0;
const CONTENT_EFFORT: f64 = 5.0;
const TECHNICAL_SEO_IMPACT: f64 = 6.0;
const TECHNICAL_SEO_EFFORT: f64 = 7.0;

const TRAFFIC_POTENTIAL_FACTOR: f64 = 0.5;
const TRAFFIC_POTENTIAL_CAP: f64 = 50.0;
const CONVERSION_LIFT_CEILING_MS: f64 = 1000.0;
const CONVERSION_LIFT_DIVISOR: f64 = 40.0;
const CONVERSION_LIFT_CAP: f64 = 25.0;

const SLOW_RESPONSE_MS: f64 = 1000.0;
const IMPROVABLE_RESPONSE_MS: f64 = 500.0;
const SEO_HIGH_OPPORTUNITY_BELOW: f64 = 70.0;
const SEO_MEDIUM_OPPORTUNITY_BELOW: f64 = 85.0;
const LOW_AUTHORITY_BELOW: f64 = 30.0;
const SEO_RECOMMENDATION_BELOW: f64 = 80.0;
const CRITICAL_COMPONENT_BELOW: f64 = 50.0;
const IMPROVING_HEALTH_MIN: f64 = 70.0;

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub categories: &'a Stage2Output,
    pub technical_health: &'a CompositeValue,
    pub profile: &'a ScoringProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stage4Output {
    pub action_priority_matrix: Vec<ActionItem>,
    pub revenue_estimate: Option<RevenueEstimate>,
    pub executive: ExecutiveSummary,
    pub insights: Vec<Insight>,
    pub seo_recommendations: Vec<SeoRecommendation>,
    pub critical_issues: usize,
    pub health_trend: HealthTrend,
}

pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> Stage4Output {
    Stage4Output {
        action_priority_matrix: action_priority_matrix(inputs.categories),
        revenue_estimate: revenue_estimate(inputs.categories, inputs.profile),
        executive: executive_summary(inputs.categories),
        insights: collect_insights(inputs.categories),
        seo_recommendations: seo_recommendations(inputs.categories),
        critical_issues: count_below(inputs.technical_health, CRITICAL_COMPONENT_BELOW),
        health_trend: health_trend(inputs.technical_health),
    }
}

pub fn action_priority_matrix(categories: &Stage2Output) -> Vec<ActionItem> {
    let mut items = Vec::with_capacity(5);

    if let Some(perf) = categories.performance() {
        items.push(ActionItem::new(
            ActionArea::Performance,
            perf.response_time_ms / PERFORMANCE_IMPACT_DIVISOR,
            PERFORMANCE_EFFORT,
        ));
    }
    if let Some(seo) = categories.seo() {
        items.push(ActionItem::new(
            ActionArea::Seo,
            (100.0 - seo.score.value) / SEO_IMPACT_DIVISOR,
            SEO_EFFORT,
        ));
    }
    if let Some(security) = categories.security() {
        let impact = if security.ssl_valid {
            0.0
        } else {
            SSL_INVALID_IMPACT
        };
        items.push(ActionItem::new(ActionArea::Security, impact, SECURITY_EFFORT));
    }
    items.push(ActionItem::new(
        ActionArea::Content,
        CONTENT_IMPACT,
        CONTENT_EFFORT,
    ));
    items.push(ActionItem::new(
        ActionArea::TechnicalSeo,
        TECHNICAL_SEO_IMPACT,
        TECHNICAL_SEO_EFFORT,
    ));

    items
}

pub fn traffic_potential(seo_score: f64) -> f64 {
    ((100.0 - seo_score) * TRAFFIC_POTENTIAL_FACTOR).clamp(0.0, TRAFFIC_POTENTIAL_CAP)
}

pub fn conversion_lift(response_time_ms: f64) -> f64 {
    ((CONVERSION_LIFT_CEILING_MS - response_time_ms) / CONVERSION_LIFT_DIVISOR)
        .clamp(0.0, CONVERSION_LIFT_CAP)
}

/// `None` when the traffic and profile assumptions overflow `f64`.
pub fn revenue_estimate(
    categories: &Stage2Output,
    profile: &ScoringProfile,
) -> Option<RevenueEstimate> {
    let assumptions = &profile.revenue;
    let (monthly_traffic, traffic_source) =
        match categories.ranking().and_then(|r| r.organic_traffic) {
            Some(traffic) => (traffic, TrafficSource::Ranking),
            None => (
                assumptions.default_monthly_traffic,
                TrafficSource::ProfileDefault,
            ),
        };

    let traffic_potential_pct = categories.seo().map(|s| traffic_potential(s.score.value));
    let conversion_lift_pct = categories
        .performance()
        .map(|p| conversion_lift(p.response_time_ms));

    let current_revenue = assumptions.revenue_for(monthly_traffic);
    let uplift =
        (traffic_potential_pct.unwrap_or(0.0) + conversion_lift_pct.unwrap_or(0.0)) / 100.0;
    let revenue = current_revenue * (1.0 + uplift);
    if !revenue.is_finite() {
        tracing::warn!(
            monthly_traffic,
            current_revenue,
            "revenue estimate overflows; omitting it"
        );
        return None;
    }

    Some(RevenueEstimate {
        monthly_traffic,
        traffic_source,
        traffic_potential_pct,
        conversion_lift_pct,
        current_revenue,
        revenue,
        revenue_increase: revenue - current_revenue,
    })
}

pub fn opportunity_level(seo_score: f64) -> OpportunityLevel {
    if seo_score < SEO_HIGH_OPPORTUNITY_BELOW {
        OpportunityLevel::High
    } else if seo_score < SEO_MEDIUM_OPPORTUNITY_BELOW {
        OpportunityLevel::Medium
    } else {
        OpportunityLevel::Low
    }
}

pub fn executive_summary(categories: &Stage2Output) -> ExecutiveSummary {
    ExecutiveSummary {
        performance_impact: categories.performance().map(|p| p.traffic_impact.bucket),
        seo_opportunity_level: categories.seo().map(|s| opportunity_level(s.score.value)),
        security_risk: match categories.security() {
            Some(s) if s.ssl_valid => SecurityRisk::Low,
            Some(_) => SecurityRisk::High,
            None => SecurityRisk::Unknown,
        },
    }
}

pub fn collect_insights(categories: &Stage2Output) -> Vec<Insight> {
    let mut found = Vec::new();

    if let Some(perf) = categories.performance() {
        if perf.response_time_ms > SLOW_RESPONSE_MS {
            found.push(Insight::SlowResponse);
        } else if perf.response_time_ms > IMPROVABLE_RESPONSE_MS {
            found.push(Insight::ResponseImprovable);
        }
    }
    if let Some(seo) = categories.seo() {
        match opportunity_level(seo.score.value) {
            OpportunityLevel::High => found.push(Insight::SeoHighImpact),
            OpportunityLevel::Medium => found.push(Insight::SeoGrowth),
            OpportunityLevel::Low => {}
        }
    }
    if categories.security().is_some_and(|s| !s.ssl_valid) {
        found.push(Insight::SslIssue);
    }
    if categories
        .ranking()
        .is_some_and(|r| r.domain_authority < LOW_AUTHORITY_BELOW)
    {
        found.push(Insight::LowAuthority);
    }

    // stable ordering
    insight_order()
        .iter()
        .copied()
        .filter(|i| found.contains(i))
        .collect()
}

pub fn seo_recommendations(categories: &Stage2Output) -> Vec<SeoRecommendation> {
    let Some(seo) = categories.seo() else {
        return Vec::new();
    };
    [
        (seo.content.title_tag, SeoRecommendation::TitleTags),
        (
            seo.content.meta_description,
            SeoRecommendation::MetaDescriptions,
        ),
        (seo.content.headings, SeoRecommendation::HeadingStructure),
        (seo.content.images, SeoRecommendation::Images),
    ]
    .into_iter()
    .filter_map(|(score, rec)| score.filter(|s| *s < SEO_RECOMMENDATION_BELOW).map(|_| rec))
    .collect()
}

pub fn health_trend(technical_health: &CompositeValue) -> HealthTrend {
    match technical_health.score() {
        Some(score) if score >= IMPROVING_HEALTH_MIN => HealthTrend::Improving,
        Some(_) => HealthTrend::NeedsAttention,
        None => HealthTrend::Unknown,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_insights.rs"]
mod tests;
