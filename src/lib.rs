//! Scoring and aggregation core for website audits.
//!
//! Raw per-category measurements go in as an [`AuditSnapshot`]; a
//! [`CompositeScore`] comes out. Every stage is a pure function of its
//! inputs, so identical snapshots score bit-identically and independent
//! snapshots can be scored from any number of threads.

pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;

pub use crate::input::InputError;
pub use crate::model::category::{Category, Component};
pub use crate::model::modes::AuditMode;
pub use crate::model::scores::{Band, CompositeScore, CompositeValue};
pub use crate::model::snapshot::{AuditSnapshot, CategoryResult, UnavailableReason};
pub use crate::model::thresholds::{ProfileError, ScoringProfile};
pub use crate::report::ReportError;

use crate::pipeline::stage1_intake::apply_mode;
use crate::pipeline::stage2_categories::run_stage2;
use crate::pipeline::stage3_composite::run_stage3;
use crate::pipeline::stage4_insights::{Stage4Inputs, run_stage4};

/// Scores every category present in `snapshot`.
pub fn score_snapshot(snapshot: &AuditSnapshot, profile: &ScoringProfile) -> CompositeScore {
    let categories = run_stage2(snapshot, profile);
    let composite = run_stage3(&categories, profile);
    let insights = run_stage4(&Stage4Inputs {
        categories: &categories,
        technical_health: &composite.technical_health,
        profile,
    });

    let performance = categories.performance();
    let score = CompositeScore {
        target: snapshot.target().map(str::to_string),
        overall_health: composite.overall_health,
        technical_health: composite.technical_health,
        sub_scores: composite.sub_scores,
        traffic_impact: performance.map(|p| p.traffic_impact),
        seo_opportunity: categories.seo().map(|s| s.opportunity),
        conversion_loss_estimate: performance.map(|p| p.conversion_loss_pct),
        revenue_estimate: insights.revenue_estimate,
        action_priority_matrix: insights.action_priority_matrix,
        executive: insights.executive,
        insights: insights.insights,
        seo_recommendations: insights.seo_recommendations,
        critical_issues: insights.critical_issues,
        health_trend: insights.health_trend,
    };

    tracing::info!(
        target_url = score.target.as_deref().unwrap_or("-"),
        overall_health = ?score.overall_health.score(),
        technical_health = ?score.technical_health.score(),
        critical_issues = score.critical_issues,
        "scored audit"
    );
    score
}

/// Restricts `snapshot` to the categories `mode` requests, then scores it.
pub fn score_with_mode(
    snapshot: &AuditSnapshot,
    mode: AuditMode,
    profile: &ScoringProfile,
) -> CompositeScore {
    score_snapshot(&apply_mode(snapshot, mode), profile)
}
