use super::*;

#[test]
fn test_default_profile_is_valid() {
    let profile = ScoringProfile::default_v1();
    assert_eq!(profile.validate(), Ok(()));
    assert!((profile.overall_weights.total() - 1.0).abs() < 1e-12);
    assert!((profile.technical_weights.total() - 1.0).abs() < 1e-12);
}

#[test]
fn test_default_weight_tables() {
    let profile = ScoringProfile::default_v1();
    assert_eq!(profile.overall_weights.weight(Component::Performance), Some(0.30));
    assert_eq!(profile.overall_weights.weight(Component::DomainAuthority), Some(0.20));
    assert_eq!(profile.overall_weights.weight(Component::Dns), None);
    assert_eq!(profile.technical_weights.weight(Component::Mobile), Some(0.10));
    assert_eq!(profile.technical_weights.weight(Component::DomainAuthority), None);
}

#[test]
fn test_weight_sum_rejected() {
    let mut profile = ScoringProfile::default_v1();
    profile.overall_weights = WeightTable::new(&[
        (Component::Performance, 0.5),
        (Component::Seo, 0.3),
    ]);
    match profile.validate() {
        Err(ProfileError::WeightSum { table, sum }) => {
            assert_eq!(table, "overall_weights");
            assert!((sum - 0.8).abs() < 1e-12);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_negative_weight_rejected() {
    let mut profile = ScoringProfile::default_v1();
    profile.technical_weights = WeightTable::new(&[
        (Component::Performance, 1.2),
        (Component::Seo, -0.2),
    ]);
    assert!(matches!(
        profile.validate(),
        Err(ProfileError::InvalidWeight { component: "seo", .. })
    ));
}

#[test]
fn test_revenue_assumptions_validated() {
    let mut profile = ScoringProfile::default_v1();
    profile.revenue.avg_order_value = -1.0;
    assert!(matches!(
        profile.validate(),
        Err(ProfileError::InvalidValue {
            field: "revenue.avg_order_value",
            ..
        })
    ));
}

#[test]
fn test_conversion_rate_above_one_rejected() {
    let mut profile = ScoringProfile::default_v1();
    profile.revenue.conversion_rate = 1.5;
    assert_eq!(
        profile.validate(),
        Err(ProfileError::InvalidValue {
            field: "revenue.conversion_rate",
            value: 1.5,
        })
    );
}

#[test]
fn test_overflowing_revenue_assumptions_rejected() {
    let mut profile = ScoringProfile::default_v1();
    profile.revenue.conversion_rate = 1.0;
    profile.revenue.avg_order_value = 1e306;
    let err = profile.validate().unwrap_err();
    assert!(matches!(
        err,
        ProfileError::InvalidValue { value, .. } if value.is_infinite()
    ));
}

#[test]
fn test_partial_profile_json_keeps_defaults() {
    let json = r#"{"revenue": {"avg_order_value": 120.0}, "include_simulated": false}"#;
    let profile: ScoringProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.revenue.avg_order_value, 120.0);
    assert_eq!(profile.revenue.conversion_rate, 0.02);
    assert!(!profile.include_simulated);
    assert_eq!(profile.overall_weights, ScoringProfile::default_v1().overall_weights);
}

#[test]
fn test_weight_table_json_shape() {
    let json = r#"{"overall_weights": {"performance": 0.5, "seo": 0.5}}"#;
    let profile: ScoringProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.overall_weights.weight(Component::Seo), Some(0.5));
    assert_eq!(profile.validate(), Ok(()));
}

#[test]
fn test_measured_only_profile() {
    let profile = ScoringProfile::measured_only_v1();
    assert!(!profile.include_simulated);
    assert_eq!(profile.validate(), Ok(()));
}
