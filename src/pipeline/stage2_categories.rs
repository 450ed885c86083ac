use std::collections::BTreeMap;

use crate::model::category::{Category, Component};
use crate::model::scores::{SubScore, TrafficBucket, TrafficImpact, clip100};
use crate::model::snapshot::{AuditSnapshot, CategoryResult, UnavailableReason};
use crate::model::thresholds::ScoringProfile;

pub const RESPONSE_TIME_DIVISOR: f64 = 20.0;
pub const TRAFFIC_MEDIUM_MS: f64 = 500.0;
pub const TRAFFIC_HIGH_MS: f64 = 1000.0;
pub const CONVERSION_BASELINE_MS: f64 = 500.0;
pub const SEO_OPPORTUNITY_BUFFER: f64 = 20.0;
pub const AUTHORITY_MULTIPLIER: f64 = 2.0;

const TITLE_LENGTH_RANGE: (f64, f64) = (30.0, 60.0);
const META_DESCRIPTION_LENGTH_RANGE: (f64, f64) = (120.0, 160.0);
const DNS_RECORD_LISTS: &[&str] = &[
    "a_records",
    "aaaa_records",
    "mx_records",
    "ns_records",
    "txt_records",
];

pub fn perf_score(response_time_ms: f64) -> f64 {
    clip100(100.0 - response_time_ms.max(0.0) / RESPONSE_TIME_DIVISOR)
}

pub fn traffic_bucket(response_time_ms: f64) -> TrafficBucket {
    if response_time_ms > TRAFFIC_HIGH_MS {
        TrafficBucket::High
    } else if response_time_ms >= TRAFFIC_MEDIUM_MS {
        TrafficBucket::Medium
    } else {
        TrafficBucket::Low
    }
}

/// Estimated conversion loss in percent. Floored at 0, unbounded above.
pub fn conversion_loss(response_time_ms: f64) -> f64 {
    ((response_time_ms - CONVERSION_BASELINE_MS) / RESPONSE_TIME_DIVISOR).max(0.0)
}

pub fn seo_opportunity(seo_score: f64) -> f64 {
    (100.0 - clip100(seo_score) + SEO_OPPORTUNITY_BUFFER).min(100.0)
}

pub fn rank_score(domain_authority: f64) -> f64 {
    clip100(domain_authority * AUTHORITY_MULTIPLIER)
}

/// 100 inside `[lo, hi]`, linear ramp up from 0 below it and down to 0 above.
pub fn length_score(len: f64, lo: f64, hi: f64) -> f64 {
    if len <= 0.0 {
        0.0
    } else if len < lo {
        clip100(100.0 * len / lo)
    } else if len <= hi {
        100.0
    } else {
        clip100(100.0 - 100.0 * (len - hi) / hi)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    pub response_time_ms: f64,
    pub score: SubScore,
    pub traffic_impact: TrafficImpact,
    pub conversion_loss_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeoScoreSource {
    OverallScore,
    ContentMean,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoContentScores {
    pub title_tag: Option<f64>,
    pub meta_description: Option<f64>,
    pub headings: Option<f64>,
    pub images: Option<f64>,
    pub content_depth: Option<f64>,
    pub readability: Option<f64>,
}

impl SeoContentScores {
    fn read(result: &CategoryResult) -> Self {
        let title_tag = lenient(result, "title_tag_score").or_else(|| {
            lenient(result, "title_length")
                .map(|len| length_score(len, TITLE_LENGTH_RANGE.0, TITLE_LENGTH_RANGE.1))
        });
        let meta_description = lenient(result, "meta_description_score").or_else(|| {
            lenient(result, "meta_description_length").map(|len| {
                length_score(
                    len,
                    META_DESCRIPTION_LENGTH_RANGE.0,
                    META_DESCRIPTION_LENGTH_RANGE.1,
                )
            })
        });
        Self {
            title_tag,
            meta_description,
            headings: lenient(result, "headings_score"),
            images: lenient(result, "images_score"),
            content_depth: lenient(result, "content_depth_score"),
            readability: lenient(result, "readability_score"),
        }
    }

    fn present(&self) -> Vec<f64> {
        [
            self.title_tag,
            self.meta_description,
            self.headings,
            self.images,
            self.content_depth,
            self.readability,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeoMetrics {
    pub score: SubScore,
    pub source: SeoScoreSource,
    pub opportunity: f64,
    pub content: SeoContentScores,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityMetrics {
    pub ssl_valid: bool,
    pub score: SubScore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DnsMetrics {
    pub has_records: bool,
    pub score: SubScore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingMetrics {
    pub domain_authority: f64,
    pub score: SubScore,
    pub organic_traffic: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryOutcome {
    Performance(PerformanceMetrics),
    Seo(SeoMetrics),
    Security(SecurityMetrics),
    Dns(DnsMetrics),
    Ranking(RankingMetrics),
}

impl CategoryOutcome {
    pub fn sub_score(&self) -> SubScore {
        match self {
            CategoryOutcome::Performance(m) => m.score,
            CategoryOutcome::Seo(m) => m.score,
            CategoryOutcome::Security(m) => m.score,
            CategoryOutcome::Dns(m) => m.score,
            CategoryOutcome::Ranking(m) => m.score,
        }
    }
}

type Scorer = fn(&CategoryResult, &ScoringProfile) -> Result<CategoryOutcome, UnavailableReason>;

struct ScorerDef {
    category: Category,
    scorer: Scorer,
}

const SCORERS: &[ScorerDef] = &[
    ScorerDef {
        category: Category::Performance,
        scorer: score_performance,
    },
    ScorerDef {
        category: Category::SeoMarketing,
        scorer: score_seo,
    },
    ScorerDef {
        category: Category::Ssl,
        scorer: score_security,
    },
    ScorerDef {
        category: Category::Dns,
        scorer: score_dns,
    },
    ScorerDef {
        category: Category::Ranking,
        scorer: score_ranking,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Stage2Output {
    outcomes: BTreeMap<Category, Result<CategoryOutcome, UnavailableReason>>,
    pub mobile: SubScore,
}

impl Stage2Output {
    pub fn outcome(&self, category: Category) -> Result<&CategoryOutcome, UnavailableReason> {
        match self.outcomes.get(&category) {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(reason)) => Err(reason.clone()),
            None => Err(UnavailableReason::NotCollected),
        }
    }

    pub fn component(&self, component: Component) -> Result<SubScore, UnavailableReason> {
        match component.source() {
            None => Ok(self.mobile),
            Some(category) => self.outcome(category).map(CategoryOutcome::sub_score),
        }
    }

    pub fn performance(&self) -> Option<&PerformanceMetrics> {
        match self.outcome(Category::Performance) {
            Ok(CategoryOutcome::Performance(m)) => Some(m),
            _ => None,
        }
    }

    pub fn seo(&self) -> Option<&SeoMetrics> {
        match self.outcome(Category::SeoMarketing) {
            Ok(CategoryOutcome::Seo(m)) => Some(m),
            _ => None,
        }
    }

    pub fn security(&self) -> Option<&SecurityMetrics> {
        match self.outcome(Category::Ssl) {
            Ok(CategoryOutcome::Security(m)) => Some(m),
            _ => None,
        }
    }

    pub fn dns(&self) -> Option<&DnsMetrics> {
        match self.outcome(Category::Dns) {
            Ok(CategoryOutcome::Dns(m)) => Some(m),
            _ => None,
        }
    }

    pub fn ranking(&self) -> Option<&RankingMetrics> {
        match self.outcome(Category::Ranking) {
            Ok(CategoryOutcome::Ranking(m)) => Some(m),
            _ => None,
        }
    }
}

pub fn run_stage2(snapshot: &AuditSnapshot, profile: &ScoringProfile) -> Stage2Output {
    let mut outcomes = BTreeMap::new();

    for def in SCORERS {
        let outcome = snapshot
            .result(def.category)
            .and_then(|result| (def.scorer)(result, profile));
        match &outcome {
            Ok(o) => tracing::debug!(
                category = def.category.key(),
                score = o.sub_score().value,
                "scored category"
            ),
            Err(UnavailableReason::NotRequested) => tracing::debug!(
                category = def.category.key(),
                "category not requested"
            ),
            Err(reason) => tracing::warn!(
                category = def.category.key(),
                %reason,
                "category unavailable; excluded from composites"
            ),
        }
        outcomes.insert(def.category, outcome);
    }

    Stage2Output {
        outcomes,
        mobile: SubScore::simulated(profile.mobile_placeholder_score),
    }
}

fn score_performance(
    result: &CategoryResult,
    _profile: &ScoringProfile,
) -> Result<CategoryOutcome, UnavailableReason> {
    let raw = result.number("response_time")?;
    if raw < 0.0 {
        tracing::debug!(response_time = raw, "clamping negative response time to 0");
    }
    let response_time_ms = raw.max(0.0);
    Ok(CategoryOutcome::Performance(PerformanceMetrics {
        response_time_ms,
        score: SubScore::measured(perf_score(response_time_ms)),
        traffic_impact: traffic_bucket(response_time_ms).into(),
        conversion_loss_pct: conversion_loss(response_time_ms),
    }))
}

fn score_seo(
    result: &CategoryResult,
    _profile: &ScoringProfile,
) -> Result<CategoryOutcome, UnavailableReason> {
    let content = SeoContentScores::read(result);
    let (raw, source) = match result.optional_number("overall_score")? {
        Some(v) => (v, SeoScoreSource::OverallScore),
        None => {
            let present = content.present();
            if present.is_empty() {
                return Err(UnavailableReason::MissingMetric("overall_score"));
            }
            let mean = present.iter().map(|v| clip100(*v)).sum::<f64>() / present.len() as f64;
            (mean, SeoScoreSource::ContentMean)
        }
    };
    let score = SubScore::measured(raw);
    Ok(CategoryOutcome::Seo(SeoMetrics {
        score,
        source,
        opportunity: seo_opportunity(score.value),
        content,
    }))
}

fn score_security(
    result: &CategoryResult,
    _profile: &ScoringProfile,
) -> Result<CategoryOutcome, UnavailableReason> {
    let ssl_valid = result.flag("ssl_valid")?;
    let value = if ssl_valid { 100.0 } else { 0.0 };
    Ok(CategoryOutcome::Security(SecurityMetrics {
        ssl_valid,
        score: SubScore::measured(value),
    }))
}

fn score_dns(
    result: &CategoryResult,
    profile: &ScoringProfile,
) -> Result<CategoryOutcome, UnavailableReason> {
    let has_records = match result.flag("has_records") {
        Ok(flag) => flag,
        Err(UnavailableReason::MissingMetric(_)) => {
            let lists = DNS_RECORD_LISTS
                .iter()
                .filter_map(|key| result.list_len(key))
                .collect::<Vec<_>>();
            if lists.is_empty() {
                return Err(UnavailableReason::MissingMetric("has_records"));
            }
            lists.iter().any(|&n| n > 0)
        }
        Err(other) => return Err(other),
    };
    let value = if has_records {
        profile.dns_records_score
    } else {
        0.0
    };
    Ok(CategoryOutcome::Dns(DnsMetrics {
        has_records,
        score: SubScore::coarse(value),
    }))
}

fn score_ranking(
    result: &CategoryResult,
    _profile: &ScoringProfile,
) -> Result<CategoryOutcome, UnavailableReason> {
    let domain_authority = clip100(result.number("domain_authority")?);
    let organic_traffic = lenient(result, "organic_traffic")
        .or_else(|| lenient(result, "organic_traffic_estimate"))
        .map(|v| v.max(0.0));
    Ok(CategoryOutcome::Ranking(RankingMetrics {
        domain_authority,
        score: SubScore::measured(rank_score(domain_authority)),
        organic_traffic,
    }))
}

/// Optional auxiliary metric; malformed values are treated as absent.
fn lenient(result: &CategoryResult, key: &'static str) -> Option<f64> {
    match result.optional_number(key) {
        Ok(v) => v,
        Err(reason) => {
            tracing::debug!(%reason, "ignoring auxiliary metric");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_categories.rs"]
mod tests;
