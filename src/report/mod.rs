pub mod json;
pub mod text;

use thiserror::Error;

use crate::model::scores::{ComponentState, CompositeValue};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn format_score(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn format_opt_score(v: Option<f64>) -> String {
    v.map(format_score).unwrap_or_else(|| "NA".to_string())
}

pub fn format_money(v: f64) -> String {
    format!("${:.2}", v)
}

pub fn format_pct(v: f64) -> String {
    format!("{:.1}%", v)
}

/// `"88.5 (green)"`, or `"indeterminate"` when nothing could be scored.
pub fn format_composite(value: &CompositeValue) -> String {
    match value {
        CompositeValue::Determinate { score, band, .. } => {
            format!("{} ({})", format_score(*score), band.name())
        }
        CompositeValue::Indeterminate { .. } => "indeterminate".to_string(),
    }
}

pub fn state_name(state: &ComponentState) -> &'static str {
    match state {
        ComponentState::Scored { .. } => "scored",
        ComponentState::Unavailable { .. } => "unavailable",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
