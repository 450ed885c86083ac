use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::modes::AuditMode;
use crate::model::scores::{ComponentScore, ComponentState, CompositeScore, Provenance};
use crate::report::json::render_scorecard_json;
use crate::report::text::render_report_text;
use crate::report::{ReportError, format_score, state_name};

pub const SCORECARD_FILE: &str = "scorecard.json";
pub const REPORT_FILE: &str = "report.txt";
pub const COMPONENTS_FILE: &str = "components.tsv";

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub score: &'a CompositeScore,
    pub mode: AuditMode,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let json = render_scorecard_json(input.score, input.mode)?;
    write_text(&out_dir.join(SCORECARD_FILE), &json)?;

    let report = render_report_text(input.score, input.mode);
    write_text(&out_dir.join(REPORT_FILE), &report)?;

    write_components_tsv(&input.score.sub_scores, &out_dir.join(COMPONENTS_FILE))?;

    tracing::info!(out_dir = %out_dir.display(), "wrote reports");
    Ok(())
}

fn write_components_tsv(sub_scores: &[ComponentScore], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "component",
        "state",
        "score",
        "band",
        "provenance",
        "low_confidence",
        "reason",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for sub in sub_scores {
        let row = match &sub.state {
            ComponentState::Scored {
                score,
                provenance,
                low_confidence,
                band,
            } => [
                sub.component.name().to_string(),
                state_name(&sub.state).to_string(),
                format_score(*score),
                band.name().to_string(),
                provenance_name(*provenance).to_string(),
                low_confidence.to_string(),
                String::new(),
            ],
            ComponentState::Unavailable { reason } => [
                sub.component.name().to_string(),
                state_name(&sub.state).to_string(),
                "NA".to_string(),
                String::new(),
                String::new(),
                String::new(),
                reason.to_string(),
            ],
        };
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn provenance_name(provenance: Provenance) -> &'static str {
    match provenance {
        Provenance::Measured => "measured",
        Provenance::Simulated => "simulated",
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
