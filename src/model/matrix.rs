use serde::Serialize;

/// Midpoint of both 0-10 axes. Values equal to it count as high.
pub const MATRIX_MIDPOINT: f64 = 5.0;
pub const MATRIX_MAX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    QuickWin,
    MajorProject,
    NiceToHave,
    LowImpact,
}

impl Quadrant {
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::QuickWin => "Quick Win",
            Quadrant::MajorProject => "Major Project",
            Quadrant::NiceToHave => "Nice to Have",
            Quadrant::LowImpact => "Low Impact",
        }
    }
}

pub fn quadrant(impact: f64, effort: f64) -> Quadrant {
    let high_impact = impact >= MATRIX_MIDPOINT;
    let high_effort = effort >= MATRIX_MIDPOINT;
    match (high_impact, high_effort) {
        (true, false) => Quadrant::QuickWin,
        (true, true) => Quadrant::MajorProject,
        (false, false) => Quadrant::NiceToHave,
        (false, true) => Quadrant::LowImpact,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionArea {
    Performance,
    Seo,
    Security,
    Content,
    TechnicalSeo,
}

impl ActionArea {
    pub fn label(self) -> &'static str {
        match self {
            ActionArea::Performance => "Performance",
            ActionArea::Seo => "SEO Optimization",
            ActionArea::Security => "SSL Security",
            ActionArea::Content => "Content Enhancement",
            ActionArea::TechnicalSeo => "Technical SEO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionItem {
    pub area: ActionArea,
    pub impact_score: f64,
    pub effort_score: f64,
    pub quadrant: Quadrant,
}

impl ActionItem {
    pub fn new(area: ActionArea, impact: f64, effort: f64) -> Self {
        let impact_score = clip10(impact);
        let effort_score = clip10(effort);
        Self {
            area,
            impact_score,
            effort_score,
            quadrant: quadrant(impact_score, effort_score),
        }
    }
}

pub fn clip10(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, MATRIX_MAX)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
