use super::*;

#[test]
fn test_clip100_bounds() {
    assert_eq!(clip100(-5.0), 0.0);
    assert_eq!(clip100(42.5), 42.5);
    assert_eq!(clip100(150.0), 100.0);
    assert_eq!(clip100(f64::NAN), 0.0);
}

#[test]
fn test_band_thresholds() {
    let bands = BandThresholds::default();
    assert_eq!(Band::classify(80.0, &bands), Band::Green);
    assert_eq!(Band::classify(79.9, &bands), Band::Yellow);
    assert_eq!(Band::classify(60.0, &bands), Band::Yellow);
    assert_eq!(Band::classify(59.9, &bands), Band::Red);
}

#[test]
fn test_simulated_subscore_tagged() {
    let s = SubScore::simulated(75.0);
    assert!(s.is_simulated());
    assert!(s.low_confidence);
    let m = SubScore::measured(120.0);
    assert_eq!(m.value, 100.0);
    assert!(!m.is_simulated());
    assert!(SubScore::coarse(80.0).low_confidence);
}

#[test]
fn test_indeterminate_has_no_score() {
    let value = CompositeValue::Indeterminate {
        excluded: vec![Component::Performance],
    };
    assert_eq!(value.score(), None);
    assert_eq!(value.band(), None);
    assert!(value.components().is_empty());
}

#[test]
fn test_composite_value_serializes_state_tag() {
    let value = CompositeValue::Indeterminate { excluded: vec![] };
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json["state"], "indeterminate");
}

#[test]
fn test_traffic_impact_from_bucket() {
    let impact = TrafficImpact::from(TrafficBucket::Medium);
    assert_eq!(impact.loss_range, "5-15%");
    assert_eq!(TrafficBucket::High.name(), "high");
}
