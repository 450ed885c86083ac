use super::*;
use crate::model::category::Component;
use crate::model::scores::{Band, WeightingPolicy};

#[test]
fn test_formatting() {
    assert_eq!(format_score(88.5), "88.5");
    assert_eq!(format_score(85.0), "85.0");
    assert_eq!(format_opt_score(None), "NA");
    assert_eq!(format_money(1225.0), "$1225.00");
    assert_eq!(format_pct(17.5), "17.5%");
}

#[test]
fn test_format_composite() {
    let determinate = CompositeValue::Determinate {
        score: 88.5,
        band: Band::Green,
        coverage: 1.0,
        policy: WeightingPolicy::Renormalized,
        components: Vec::new(),
        excluded: Vec::new(),
    };
    assert_eq!(format_composite(&determinate), "88.5 (green)");

    let indeterminate = CompositeValue::Indeterminate {
        excluded: vec![Component::Performance],
    };
    assert_eq!(format_composite(&indeterminate), "indeterminate");
}
