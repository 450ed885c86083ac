use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::model::category::{Category, category_order};

/// Why a category (or one of its metrics) could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum UnavailableReason {
    NotCollected,
    NotRequested,
    CollectorError(String),
    MissingMetric(&'static str),
    MalformedMetric(&'static str),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::NotCollected => write!(f, "not collected"),
            UnavailableReason::NotRequested => write!(f, "not requested by audit mode"),
            UnavailableReason::CollectorError(msg) => write!(f, "collector error: {msg}"),
            UnavailableReason::MissingMetric(name) => write!(f, "missing metric: {name}"),
            UnavailableReason::MalformedMetric(name) => write!(f, "malformed metric: {name}"),
        }
    }
}

/// Named sub-metrics reported by one collector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryResult {
    metrics: BTreeMap<String, Value>,
}

impl CategoryResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metrics.insert(key.to_string(), value.into());
        self
    }

    pub fn from_map(metrics: BTreeMap<String, Value>) -> Self {
        Self { metrics }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metrics.get(key).filter(|v| !v.is_null())
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn number(&self, key: &'static str) -> Result<f64, UnavailableReason> {
        self.optional_number(key)?
            .ok_or(UnavailableReason::MissingMetric(key))
    }

    /// `Ok(None)` when the metric is absent or null.
    pub fn optional_number(&self, key: &'static str) -> Result<Option<f64>, UnavailableReason> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(UnavailableReason::MalformedMetric(key)),
            },
            Some(_) => Err(UnavailableReason::MalformedMetric(key)),
        }
    }

    pub fn flag(&self, key: &'static str) -> Result<bool, UnavailableReason> {
        match self.get(key) {
            None => Err(UnavailableReason::MissingMetric(key)),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(UnavailableReason::MalformedMetric(key)),
        }
    }

    pub fn list_len(&self, key: &str) -> Option<usize> {
        match self.get(key) {
            Some(Value::Array(items)) => Some(items.len()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum CategoryEntry {
    Collected(CategoryResult),
    Unavailable(UnavailableReason),
}

/// Everything the collectors reported for one audit run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditSnapshot {
    target: Option<String>,
    entries: BTreeMap<Category, CategoryEntry>,
}

impl AuditSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_result(mut self, category: Category, result: CategoryResult) -> Self {
        self.entries
            .insert(category, CategoryEntry::Collected(result));
        self
    }

    pub fn with_unavailable(mut self, category: Category, reason: UnavailableReason) -> Self {
        self.entries
            .insert(category, CategoryEntry::Unavailable(reason));
        self
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn result(&self, category: Category) -> Result<&CategoryResult, UnavailableReason> {
        match self.entries.get(&category) {
            Some(CategoryEntry::Collected(result)) => Ok(result),
            Some(CategoryEntry::Unavailable(reason)) => Err(reason.clone()),
            None => Err(UnavailableReason::NotCollected),
        }
    }

    pub fn collected(&self) -> Vec<Category> {
        category_order()
            .iter()
            .copied()
            .filter(|c| self.result(*c).is_ok())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/snapshot.rs"]
mod tests;
