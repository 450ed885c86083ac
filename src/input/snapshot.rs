use serde_json::{Map, Value};

use crate::input::InputError;
use crate::model::category::{Category, category_order};
use crate::model::snapshot::{AuditSnapshot, CategoryResult, UnavailableReason};

/// Builds a snapshot from the collectors' JSON mapping.
///
/// Accepts either the bare mapping (`{"performance": {...}, ...}`) or the
/// dashboard export shape with the mapping nested under `results`. Only the
/// top level has to be an object; a malformed category value marks that
/// category unavailable instead of failing the whole snapshot.
pub fn snapshot_from_value(value: &Value) -> Result<AuditSnapshot, InputError> {
    let root = value.as_object().ok_or(InputError::NotAnObject("snapshot"))?;
    let results = match root.get("results") {
        Some(Value::Object(inner)) => inner,
        Some(_) => return Err(InputError::NotAnObject("results")),
        None => root,
    };

    let mut snapshot = AuditSnapshot::new();
    if let Some(target) = target_of(root) {
        snapshot = snapshot.with_target(target);
    }

    for &category in category_order() {
        match results.get(category.key()) {
            None | Some(Value::Null) => {}
            Some(Value::Object(metrics)) => {
                snapshot = match collector_error(metrics) {
                    Some(message) => snapshot
                        .with_unavailable(category, UnavailableReason::CollectorError(message)),
                    None => snapshot.with_result(category, result_from(metrics)),
                };
            }
            Some(other) => {
                tracing::debug!(
                    category = category.key(),
                    kind = json_kind(other),
                    "category value is not an object"
                );
                snapshot = snapshot.with_unavailable(
                    category,
                    UnavailableReason::CollectorError(format!(
                        "expected an object, got {}",
                        json_kind(other)
                    )),
                );
            }
        }
    }

    for key in results.keys() {
        if Category::from_key(key).is_none() && !is_metadata_key(key) {
            tracing::debug!(key = key.as_str(), "ignoring unknown snapshot key");
        }
    }

    Ok(snapshot)
}

pub fn snapshot_from_str(text: &str) -> Result<AuditSnapshot, InputError> {
    let value: Value = serde_json::from_str(text)?;
    snapshot_from_value(&value)
}

impl AuditSnapshot {
    pub fn from_json_value(value: &Value) -> Result<Self, InputError> {
        snapshot_from_value(value)
    }

    pub fn from_json_str(text: &str) -> Result<Self, InputError> {
        snapshot_from_str(text)
    }
}

fn target_of(root: &Map<String, Value>) -> Option<String> {
    ["url", "domain"]
        .iter()
        .find_map(|k| root.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

fn collector_error(metrics: &Map<String, Value>) -> Option<String> {
    match metrics.get("error") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(msg)) => Some(msg.clone()),
        Some(other) => Some(other.to_string()),
    }
}

fn result_from(metrics: &Map<String, Value>) -> CategoryResult {
    CategoryResult::from_map(
        metrics
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    )
}

fn is_metadata_key(key: &str) -> bool {
    matches!(key, "url" | "domain" | "timestamp" | "audit_mode" | "results")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
