//! Catalog view model.
//!
//! Projects the registry and the preference stores into the sections the
//! catalog shows: favorites, recently used, and a main section that holds
//! either every tool or the filtered results.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::filter::CatalogFilter;
use crate::domains::tools::{ToolCategory, ToolManifest, ToolRegistry};

/// A titled list of tools.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSection {
    pub title: &'static str,
    pub tools: Vec<Arc<ToolManifest>>,
}

impl CatalogSection {
    pub fn ids(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.id.as_str()).collect()
    }
}

/// The main section: everything, the filtered results, or nothing at all.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MainSection {
    AllTools { tools: Vec<Arc<ToolManifest>> },
    Results { tools: Vec<Arc<ToolManifest>> },
    /// The filter matched nothing; carries the query as typed.
    NoResults { query: String },
}

impl MainSection {
    pub fn tools(&self) -> &[Arc<ToolManifest>] {
        match self {
            Self::AllTools { tools } | Self::Results { tools } => tools,
            Self::NoResults { .. } => &[],
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.tools().iter().map(|t| t.id.as_str()).collect()
    }
}

/// Everything needed to render the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub filter: CatalogFilter,
    pub categories: &'static [ToolCategory],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorites: Option<CatalogSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recents: Option<CatalogSection>,
    pub main: MainSection,
}

/// Build the catalog view.
///
/// The favorites and recents sections only appear while no filter is
/// active, and only when at least one of their ids still resolves.
pub fn build_catalog_view<F, R>(
    registry: &ToolRegistry,
    filter: &CatalogFilter,
    favorites: &[F],
    recents: &[R],
) -> CatalogView
where
    F: AsRef<str>,
    R: AsRef<str>,
{
    let filtered = filter.is_active();

    let (favorites, recents) = if filtered {
        (None, None)
    } else {
        (
            personal_section("Favorites", registry, favorites),
            personal_section("Recently used", registry, recents),
        )
    };

    let tools: Vec<_> = registry
        .all()
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();

    let main = if tools.is_empty() {
        MainSection::NoResults {
            query: filter.query.clone(),
        }
    } else if filtered {
        MainSection::Results { tools }
    } else {
        MainSection::AllTools { tools }
    };
    debug!("Catalog view for {:?}: {} tools", filter, main.tools().len());

    CatalogView {
        filter: filter.clone(),
        categories: registry.categories(),
        favorites,
        recents,
        main,
    }
}

fn personal_section<S: AsRef<str>>(
    title: &'static str,
    registry: &ToolRegistry,
    ids: &[S],
) -> Option<CatalogSection> {
    let tools = registry.resolve(ids);
    if tools.is_empty() {
        None
    } else {
        Some(CatalogSection { title, tools })
    }
}
