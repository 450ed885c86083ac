use serde::{Deserialize, Serialize};

/// One analysis dimension produced by an external collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Performance,
    SeoMarketing,
    Ssl,
    Dns,
    Ranking,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Performance => "performance",
            Category::SeoMarketing => "seo_marketing",
            Category::Ssl => "ssl",
            Category::Dns => "dns",
            Category::Ranking => "ranking",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        category_order().iter().copied().find(|c| c.key() == key)
    }
}

pub fn category_order() -> &'static [Category] {
    &[
        Category::Performance,
        Category::SeoMarketing,
        Category::Ssl,
        Category::Dns,
        Category::Ranking,
    ]
}

/// An entry in a composite weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Performance,
    Seo,
    Security,
    Dns,
    DomainAuthority,
    Mobile,
}

impl Component {
    pub fn name(self) -> &'static str {
        match self {
            Component::Performance => "performance",
            Component::Seo => "seo",
            Component::Security => "security",
            Component::Dns => "dns",
            Component::DomainAuthority => "domain_authority",
            Component::Mobile => "mobile",
        }
    }

    /// Collector category backing this component. Mobile has none.
    pub fn source(self) -> Option<Category> {
        match self {
            Component::Performance => Some(Category::Performance),
            Component::Seo => Some(Category::SeoMarketing),
            Component::Security => Some(Category::Ssl),
            Component::Dns => Some(Category::Dns),
            Component::DomainAuthority => Some(Category::Ranking),
            Component::Mobile => None,
        }
    }
}

pub fn component_order() -> &'static [Component] {
    &[
        Component::Performance,
        Component::Seo,
        Component::Security,
        Component::Dns,
        Component::DomainAuthority,
        Component::Mobile,
    ]
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
