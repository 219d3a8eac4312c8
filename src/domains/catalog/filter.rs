//! Catalog filters: the active category tab and the free-text query.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domains::tools::{ToolCategory, ToolError, ToolManifest};

/// Category tab selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ToolCategory),
}

impl CategoryFilter {
    pub fn admits(&self, category: ToolCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Everything that narrows the main catalog section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogFilter {
    pub category: CategoryFilter,
    pub query: String,
}

impl CatalogFilter {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Whether the query holds anything but whitespace.
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Whether any filtering is in effect.
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || self.has_query()
    }

    /// Category filter first, then a case-insensitive substring match of
    /// the query against name, description and tags.
    pub fn matches(&self, tool: &ToolManifest) -> bool {
        if !self.category.admits(tool.category) {
            return false;
        }
        if !self.has_query() {
            return true;
        }

        let needle = self.query.to_lowercase();
        tool.name.to_lowercase().contains(&needle)
            || tool.description.to_lowercase().contains(&needle)
            || tool.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{DefinitionLoader, definitions::WordCounterTool};
    use std::sync::Arc;

    fn tool(name: &str, category: ToolCategory, tags: &[&str]) -> ToolManifest {
        ToolManifest::new(
            name.to_lowercase(),
            name,
            "Does a thing",
            category,
            Arc::new(DefinitionLoader::<WordCounterTool>::new()),
        )
        .with_tags(tags.iter().copied())
    }

    #[test]
    fn test_parse_category_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Encoders".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ToolCategory::Encoders)
        );
        assert!("widgets".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_filter_serializes_as_string() {
        let value = serde_json::to_value(CatalogFilter::new(
            CategoryFilter::Only(ToolCategory::Text),
            "x",
        ))
        .unwrap();
        assert_eq!(value["category"], "text");
        assert_eq!(
            serde_json::to_value(CategoryFilter::All).unwrap(),
            serde_json::json!("all")
        );
    }

    #[test]
    fn test_whitespace_query_is_inactive() {
        let filter = CatalogFilter::new(CategoryFilter::All, "   ");
        assert!(!filter.has_query());
        assert!(!filter.is_active());
        assert!(CatalogFilter::new(CategoryFilter::Only(ToolCategory::Text), "").is_active());
    }

    #[test]
    fn test_matches_name_description_and_tags() {
        let t = tool("Base64", ToolCategory::Encoders, &["Encode"]);
        assert!(CatalogFilter::new(CategoryFilter::All, "BASE").matches(&t));
        assert!(CatalogFilter::new(CategoryFilter::All, "a thing").matches(&t));
        assert!(CatalogFilter::new(CategoryFilter::All, "enc").matches(&t));
        assert!(!CatalogFilter::new(CategoryFilter::All, "json").matches(&t));
    }

    #[test]
    fn test_category_applies_before_query() {
        let t = tool("Base64", ToolCategory::Encoders, &[]);
        let text_only = CategoryFilter::Only(ToolCategory::Text);
        assert!(!CatalogFilter::new(text_only, "").matches(&t));
        assert!(!CatalogFilter::new(text_only, "base").matches(&t));
    }
}
