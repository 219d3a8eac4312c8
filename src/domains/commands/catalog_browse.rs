//! Catalog browse command.
//!
//! Returns the catalog view for a category tab and search query.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::fmt::Write;
use std::sync::Arc;
use tracing::{info, instrument};

use super::structured_result;
use crate::core::state::AppState;
use crate::domains::catalog::{
    CatalogFilter, CatalogSection, CatalogView, CategoryFilter, MainSection, build_catalog_view,
};
use crate::domains::tools::{ToolError, ToolManifest};

// ============================================================================
// Command Parameters
// ============================================================================

/// Parameters for the catalog browse command.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CatalogBrowseParams {
    /// Category tab: "all" (default), "text", "encoders", "formatters",
    /// "generators" or "converters".
    #[serde(default)]
    pub category: Option<String>,

    /// Free-text search over names, descriptions and tags.
    #[serde(default)]
    pub query: Option<String>,
}

impl CatalogBrowseParams {
    pub fn filter(&self) -> Result<CatalogFilter, ToolError> {
        let category = match &self.category {
            Some(category) => category.parse()?,
            None => CategoryFilter::All,
        };
        Ok(CatalogFilter::new(
            category,
            self.query.clone().unwrap_or_default(),
        ))
    }
}

// ============================================================================
// Command Definition
// ============================================================================

/// Catalog browse command - lists tools with favorites and recents.
pub struct CatalogBrowseCommand;

impl CatalogBrowseCommand {
    /// Command name as registered in MCP.
    pub const NAME: &'static str = "catalog_browse";

    /// Command description shown to clients.
    pub const DESCRIPTION: &'static str = "Browse the tool catalog. Without filters, favorites and recently used tools are listed first. A category or query narrows the list to matching tools.";

    /// Execute the command logic.
    #[instrument(skip_all, fields(category = %filter.category, query = %filter.query))]
    pub async fn execute(filter: &CatalogFilter, state: &AppState) -> CallToolResult {
        info!("Catalog browse called");
        let view = {
            let prefs = state.preferences.lock().await;
            build_catalog_view(
                &state.registry,
                filter,
                prefs.favorites.ids(),
                prefs.recents.ids(),
            )
        };
        catalog_result(&view)
    }

    /// Create a Tool model for this command (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CatalogBrowseParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(state: Arc<AppState>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let state = state.clone();
            async move {
                let params: CatalogBrowseParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let filter = params
                    .filter()
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&filter, &state).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a catalog view as a text summary plus the view itself.
fn catalog_result(view: &CatalogView) -> CallToolResult {
    structured_result(render_view(view), view)
}

pub(crate) fn render_view(view: &CatalogView) -> String {
    let mut out = String::new();

    for section in [&view.favorites, &view.recents].into_iter().flatten() {
        render_section(&mut out, section);
    }

    match &view.main {
        MainSection::AllTools { tools } => {
            let _ = writeln!(out, "All tools ({}):", tools.len());
            render_tools(&mut out, tools);
        }
        MainSection::Results { tools } => {
            let _ = writeln!(out, "Results ({}):", tools.len());
            render_tools(&mut out, tools);
        }
        MainSection::NoResults { query } if query.trim().is_empty() => {
            let _ = writeln!(out, "No tools in {}", view.filter.category);
        }
        MainSection::NoResults { query } => {
            let _ = writeln!(out, "No results for \"{}\"", query);
        }
    }

    out.trim_end().to_string()
}

fn render_section(out: &mut String, section: &CatalogSection) {
    let _ = writeln!(out, "{}:", section.title);
    render_tools(out, &section.tools);
    out.push('\n');
}

fn render_tools(out: &mut String, tools: &[Arc<ToolManifest>]) {
    for tool in tools {
        let _ = writeln!(
            out,
            "- {} {} ({}) [{}]: {}",
            tool.icon, tool.name, tool.id, tool.category, tool.description
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
