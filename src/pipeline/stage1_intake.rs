use crate::model::category::category_order;
use crate::model::modes::AuditMode;
use crate::model::snapshot::{AuditSnapshot, UnavailableReason};

/// Restricts a snapshot to the categories the audit mode asks for.
///
/// Categories outside the mode become `NotRequested`; whatever the mode does
/// request is carried over untouched, including collector failures.
pub fn apply_mode(snapshot: &AuditSnapshot, mode: AuditMode) -> AuditSnapshot {
    let mut out = AuditSnapshot::new();
    if let Some(target) = snapshot.target() {
        out = out.with_target(target);
    }

    for &category in category_order() {
        if !mode.requests(category) {
            if snapshot.result(category).is_ok() {
                tracing::debug!(
                    category = category.key(),
                    mode = mode.label(),
                    "dropping category outside audit mode"
                );
            }
            out = out.with_unavailable(category, UnavailableReason::NotRequested);
            continue;
        }
        out = match snapshot.result(category) {
            Ok(result) => out.with_result(category, result.clone()),
            Err(UnavailableReason::NotCollected) => out,
            Err(reason) => out.with_unavailable(category, reason),
        };
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_intake.rs"]
mod tests;
