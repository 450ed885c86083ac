use serde::Serialize;

use crate::model::modes::AuditMode;
use crate::model::scores::CompositeScore;

#[derive(Debug, Serialize)]
struct Scorecard<'a> {
    tool: &'static str,
    version: &'static str,
    audit_mode: AuditMode,
    #[serde(flatten)]
    score: &'a CompositeScore,
}

pub fn render_scorecard_json(
    score: &CompositeScore,
    mode: AuditMode,
) -> Result<String, serde_json::Error> {
    let card = Scorecard {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        audit_mode: mode,
        score,
    };
    let mut out = serde_json::to_string_pretty(&card)?;
    out.push('\n');
    Ok(out)
}
