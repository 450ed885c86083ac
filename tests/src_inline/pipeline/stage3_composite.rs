use super::*;
use crate::model::category::{Category, Component};
use crate::model::scores::Provenance;
use crate::model::snapshot::{AuditSnapshot, CategoryResult};
use crate::pipeline::stage2_categories::run_stage2;

fn reference_snapshot() -> AuditSnapshot {
    AuditSnapshot::new()
        .with_result(
            Category::Performance,
            CategoryResult::new().with("response_time", 300.0),
        )
        .with_result(
            Category::SeoMarketing,
            CategoryResult::new().with("overall_score", 90),
        )
        .with_result(Category::Ssl, CategoryResult::new().with("ssl_valid", true))
        .with_result(
            Category::Ranking,
            CategoryResult::new().with("domain_authority", 40),
        )
}

fn stage3(snapshot: &AuditSnapshot, profile: &ScoringProfile) -> Stage3Output {
    run_stage3(&run_stage2(snapshot, profile), profile)
}

fn weight_sum(value: &CompositeValue) -> f64 {
    value.components().iter().map(|c| c.normalized_weight).sum()
}

#[test]
fn test_overall_health_reference_scenario() {
    let profile = ScoringProfile::default_v1();
    let out = stage3(&reference_snapshot(), &profile);
    let score = out.overall_health.score().unwrap();
    assert!((score - 88.5).abs() < 1e-9);
    assert!((weight_sum(&out.overall_health) - 1.0).abs() < 1e-9);
    assert_eq!(out.overall_health.band(), Some(Band::Green));
    match &out.overall_health {
        CompositeValue::Determinate {
            coverage, excluded, policy, ..
        } => {
            assert!((coverage - 1.0).abs() < 1e-9);
            assert!(excluded.is_empty());
            assert_eq!(*policy, WeightingPolicy::Renormalized);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_missing_ssl_renormalizes() {
    let profile = ScoringProfile::default_v1();
    let snapshot = AuditSnapshot::new()
        .with_result(
            Category::Performance,
            CategoryResult::new().with("response_time", 300.0),
        )
        .with_result(
            Category::SeoMarketing,
            CategoryResult::new().with("overall_score", 90),
        )
        .with_result(
            Category::Ranking,
            CategoryResult::new().with("domain_authority", 40),
        );
    let out = stage3(&snapshot, &profile);
    let score = out.overall_health.score().unwrap();

    let expected = 85.0 * (0.3 / 0.8) + 90.0 * (0.3 / 0.8) + 80.0 * (0.2 / 0.8);
    assert!((score - expected).abs() < 1e-9);
    assert!((weight_sum(&out.overall_health) - 1.0).abs() < 1e-9);

    let as_zero = 85.0 * 0.3 + 90.0 * 0.3 + 0.0 * 0.2 + 80.0 * 0.2;
    assert!((score - as_zero).abs() > 1.0);

    match &out.overall_health {
        CompositeValue::Determinate {
            coverage, excluded, ..
        } => {
            assert!((coverage - 0.8).abs() < 1e-9);
            assert_eq!(excluded, &vec![Component::Security]);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_all_missing_is_indeterminate() {
    let profile = ScoringProfile::default_v1();
    let out = stage3(&AuditSnapshot::new(), &profile);
    assert_eq!(out.overall_health.score(), None);
    // mobile alone is only a placeholder
    assert_eq!(out.technical_health.score(), None);
    assert!(matches!(
        out.technical_health,
        CompositeValue::Indeterminate { .. }
    ));
}

#[test]
fn test_technical_health_includes_simulated_mobile() {
    let profile = ScoringProfile::default_v1();
    let snapshot = reference_snapshot().with_result(
        Category::Dns,
        CategoryResult::new().with("has_records", true),
    );
    let out = stage3(&snapshot, &profile);
    let score = out.technical_health.score().unwrap();
    let expected = 85.0 * 0.3 + 90.0 * 0.3 + 100.0 * 0.2 + 80.0 * 0.1 + 75.0 * 0.1;
    assert!((score - expected).abs() < 1e-9);
    let mobile = out
        .technical_health
        .components()
        .iter()
        .find(|c| c.component == Component::Mobile)
        .unwrap();
    assert_eq!(mobile.provenance, Provenance::Simulated);
}

#[test]
fn test_measured_only_profile_excludes_mobile() {
    let profile = ScoringProfile::measured_only_v1();
    let snapshot = reference_snapshot().with_result(
        Category::Dns,
        CategoryResult::new().with("has_records", true),
    );
    let out = stage3(&snapshot, &profile);
    let score = out.technical_health.score().unwrap();
    let expected = (85.0 * 0.3 + 90.0 * 0.3 + 100.0 * 0.2 + 80.0 * 0.1) / 0.9;
    assert!((score - expected).abs() < 1e-9);
    assert!((weight_sum(&out.technical_health) - 1.0).abs() < 1e-9);
}

#[test]
fn test_sub_scores_cover_every_component() {
    let profile = ScoringProfile::default_v1();
    let out = stage3(&reference_snapshot(), &profile);
    assert_eq!(out.sub_scores.len(), 6);
    let perf = &out.sub_scores[0];
    assert_eq!(perf.component, Component::Performance);
    assert_eq!(perf.score(), Some(85.0));
    let dns = out
        .sub_scores
        .iter()
        .find(|s| s.component == Component::Dns)
        .unwrap();
    assert!(matches!(dns.state, ComponentState::Unavailable { .. }));
}

#[test]
fn test_count_below() {
    let profile = ScoringProfile::default_v1();
    let snapshot = reference_snapshot()
        .with_result(Category::Ssl, CategoryResult::new().with("ssl_valid", false));
    let out = stage3(&snapshot, &profile);
    assert_eq!(count_below(&out.technical_health, 50.0), 1);
}

#[test]
fn test_determinism_bits() {
    let profile = ScoringProfile::default_v1();
    let a = stage3(&reference_snapshot(), &profile);
    let b = stage3(&reference_snapshot(), &profile);
    assert_eq!(
        a.overall_health.score().unwrap().to_bits(),
        b.overall_health.score().unwrap().to_bits()
    );
    assert_eq!(
        a.technical_health.score().unwrap().to_bits(),
        b.technical_health.score().unwrap().to_bits()
    );
}
