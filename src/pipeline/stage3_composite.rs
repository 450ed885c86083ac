use crate::model::category::component_order;
use crate::model::scores::{
    Band, ComponentScore, ComponentState, CompositeValue, WeightedComponent, WeightingPolicy,
    clip100,
};
use crate::model::thresholds::{ScoringProfile, WeightTable};
use crate::pipeline::stage2_categories::Stage2Output;

#[derive(Debug, Clone, PartialEq)]
pub struct Stage3Output {
    pub overall_health: CompositeValue,
    pub technical_health: CompositeValue,
    pub sub_scores: Vec<ComponentScore>,
}

pub fn run_stage3(categories: &Stage2Output, profile: &ScoringProfile) -> Stage3Output {
    let overall_health = compose(&profile.overall_weights, categories, profile);
    let technical_health = compose(&profile.technical_weights, categories, profile);

    let sub_scores = component_order()
        .iter()
        .map(|&component| ComponentScore {
            component,
            state: match categories.component(component) {
                Ok(score) => ComponentState::Scored {
                    score: score.value,
                    provenance: score.provenance,
                    low_confidence: score.low_confidence,
                    band: Band::classify(score.value, &profile.bands),
                },
                Err(reason) => ComponentState::Unavailable { reason },
            },
        })
        .collect();

    Stage3Output {
        overall_health,
        technical_health,
        sub_scores,
    }
}

/// Weighted mean over the components that are present, with their weights
/// rescaled to sum to 1.0.
pub fn compose(
    table: &WeightTable,
    categories: &Stage2Output,
    profile: &ScoringProfile,
) -> CompositeValue {
    let mut present = Vec::new();
    let mut excluded = Vec::new();

    for (component, weight) in table.entries() {
        match categories.component(component) {
            Ok(score) if score.is_simulated() && !profile.include_simulated => {
                excluded.push(component)
            }
            Ok(score) if weight > 0.0 => present.push((component, score, weight)),
            Ok(_) => {}
            Err(_) => excluded.push(component),
        }
    }

    let measured = present.iter().any(|(_, score, _)| !score.is_simulated());
    let present_weight: f64 = present.iter().map(|(_, _, w)| w).sum();
    if !measured || present_weight <= 0.0 {
        return CompositeValue::Indeterminate { excluded };
    }

    let mut score = 0.0;
    let mut components = Vec::with_capacity(present.len());
    for (component, sub, weight) in present {
        let normalized_weight = weight / present_weight;
        score += sub.value * normalized_weight;
        components.push(WeightedComponent {
            component,
            score: sub.value,
            weight,
            normalized_weight,
            provenance: sub.provenance,
        });
    }
    let score = clip100(score);

    let total = table.total();
    CompositeValue::Determinate {
        score,
        band: Band::classify(score, &profile.bands),
        coverage: if total > 0.0 { present_weight / total } else { 0.0 },
        policy: WeightingPolicy::Renormalized,
        components,
        excluded,
    }
}

/// Components scoring below `threshold` in a composite.
pub fn count_below(value: &CompositeValue, threshold: f64) -> usize {
    value
        .components()
        .iter()
        .filter(|c| c.score < threshold)
        .count()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_composite.rs"]
mod tests;
