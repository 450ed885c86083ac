use serde::Serialize;

use crate::model::scores::TrafficBucket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    SlowResponse,
    ResponseImprovable,
    SeoHighImpact,
    SeoGrowth,
    SslIssue,
    LowAuthority,
}

impl Insight {
    pub fn severity(self) -> Severity {
        match self {
            Insight::SlowResponse | Insight::SslIssue => Severity::Critical,
            Insight::SeoHighImpact => Severity::High,
            Insight::ResponseImprovable | Insight::SeoGrowth | Insight::LowAuthority => {
                Severity::Opportunity
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Insight::SlowResponse => {
                "Slow server response time is hurting user experience and SEO rankings"
            }
            Insight::ResponseImprovable => {
                "Response time could be improved for better performance"
            }
            Insight::SeoHighImpact => "Significant SEO optimization opportunities available",
            Insight::SeoGrowth => "Good SEO foundation with room for improvement",
            Insight::SslIssue => "SSL certificate issues need immediate attention",
            Insight::LowAuthority => {
                "Focus on building domain authority through quality backlinks"
            }
        }
    }
}

pub fn insight_order() -> &'static [Insight] {
    &[
        Insight::SlowResponse,
        Insight::ResponseImprovable,
        Insight::SeoHighImpact,
        Insight::SeoGrowth,
        Insight::SslIssue,
        Insight::LowAuthority,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Opportunity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoRecommendation {
    TitleTags,
    MetaDescriptions,
    HeadingStructure,
    Images,
}

impl SeoRecommendation {
    pub fn message(self) -> &'static str {
        match self {
            SeoRecommendation::TitleTags => "Optimize title tags for better click-through rates",
            SeoRecommendation::MetaDescriptions => {
                "Improve meta descriptions for higher search visibility"
            }
            SeoRecommendation::HeadingStructure => {
                "Enhance heading structure for better content hierarchy"
            }
            SeoRecommendation::Images => "Optimize images with alt text and compression",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityRisk {
    High,
    Low,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTrend {
    Improving,
    NeedsAttention,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecutiveSummary {
    pub performance_impact: Option<TrafficBucket>,
    pub seo_opportunity_level: Option<OpportunityLevel>,
    pub security_risk: SecurityRisk,
}
