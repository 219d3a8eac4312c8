//! Tool manifest and category taxonomy.
//!
//! A manifest is the static description of one tool. It carries display
//! metadata used by the catalog and a loader that produces the tool's
//! module when the tool is activated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::error::ToolError;
use super::loader::ToolLoader;

// ============================================================================
// Categories
// ============================================================================

/// Closed set of categories a tool can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Text,
    Encoders,
    Formatters,
    Generators,
    Converters,
}

impl ToolCategory {
    /// Every category, in display order.
    pub const ALL: [ToolCategory; 5] = [
        ToolCategory::Text,
        ToolCategory::Encoders,
        ToolCategory::Formatters,
        ToolCategory::Generators,
        ToolCategory::Converters,
    ];

    /// Machine name used in parameters and stored records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Encoders => "encoders",
            Self::Formatters => "formatters",
            Self::Generators => "generators",
            Self::Converters => "converters",
        }
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Encoders => "Encoders",
            Self::Formatters => "Formatters",
            Self::Generators => "Generators",
            Self::Converters => "Converters",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| ToolError::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Manifest
// ============================================================================

/// Static description of one tool.
///
/// Manifests are built once at startup and never mutated. The `id` is
/// stable across sessions: it is the key stored in favorites and recents
/// and the route segment of the tool's detail destination.
#[derive(Clone, Serialize)]
pub struct ToolManifest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ToolCategory,
    pub tags: Vec<String>,
    pub icon: String,

    #[serde(skip)]
    loader: Arc<dyn ToolLoader>,
}

impl ToolManifest {
    /// Create a manifest with no tags and no icon.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: ToolCategory,
        loader: Arc<dyn ToolLoader>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            tags: Vec::new(),
            icon: String::new(),
            loader,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// The capability that produces this tool's module.
    pub fn loader(&self) -> Arc<dyn ToolLoader> {
        self.loader.clone()
    }
}

impl fmt::Debug for ToolManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolManifest")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
