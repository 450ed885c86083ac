use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::category::{Category, category_order};

/// Named subsets of collectors run by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AuditMode {
    QuickScan,
    #[default]
    Standard,
    Deep,
    SecurityFocus,
    SeoFocus,
    PerformanceFocus,
}

impl AuditMode {
    pub fn categories(self) -> &'static [Category] {
        match self {
            AuditMode::QuickScan => &[Category::Dns, Category::Ssl],
            AuditMode::Standard => &[
                Category::Dns,
                Category::Ssl,
                Category::SeoMarketing,
                Category::Performance,
            ],
            AuditMode::Deep => category_order(),
            AuditMode::SecurityFocus => &[Category::Ssl, Category::Dns],
            AuditMode::SeoFocus => &[Category::SeoMarketing, Category::Ranking],
            AuditMode::PerformanceFocus => &[Category::Performance, Category::Dns],
        }
    }

    pub fn requests(self, category: Category) -> bool {
        self.categories().contains(&category)
    }

    pub fn label(self) -> &'static str {
        match self {
            AuditMode::QuickScan => "Quick Scan",
            AuditMode::Standard => "Standard Audit",
            AuditMode::Deep => "Deep Analysis",
            AuditMode::SecurityFocus => "Security Focus",
            AuditMode::SeoFocus => "SEO Focus",
            AuditMode::PerformanceFocus => "Performance Focus",
        }
    }
}
