//! Navigate command.
//!
//! Resolves a path to a destination and shows it: the catalog (with the
//! search query carried by the path) or a tool's detail view. Going to
//! the catalog closes any open tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::catalog_browse::CatalogBrowseCommand;
use super::tool_open::{ToolOpenCommand, redirect_result};
use crate::core::state::AppState;
use crate::domains::activation::Destination;
use crate::domains::catalog::{CatalogFilter, CategoryFilter};

/// Parameters for the navigate command.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NavigateParams {
    /// Path such as "/", "/?q=json" or "/tools/base64".
    pub path: String,
}

/// Navigate command - follows a catalog or tool path.
pub struct NavigateCommand;

impl NavigateCommand {
    /// Command name as registered in MCP.
    pub const NAME: &'static str = "navigate";

    /// Command description shown to clients.
    pub const DESCRIPTION: &'static str = "Go to a path: \"/\" for the catalog, \"/?q=<query>\" to search it, or \"/tools/<id>\" to open a tool. Unknown paths and tools lead to the catalog.";

    /// Execute the command logic.
    #[instrument(skip_all, fields(path = %path))]
    pub async fn execute(path: &str, state: &AppState) -> CallToolResult {
        info!("Navigate called");

        let requested = Destination::parse(path);
        let destination = requested.clone().resolve(&state.registry);

        match (&requested, &destination) {
            (_, Destination::Tool { id }) => ToolOpenCommand::execute(id, state).await,
            (Destination::Tool { id }, Destination::Catalog { .. }) => {
                state.tool_view.leave().await;
                redirect_result(id, destination.clone(), state).await
            }
            (Destination::Catalog { .. }, Destination::Catalog { query }) => {
                state.tool_view.leave().await;
                let filter =
                    CatalogFilter::new(CategoryFilter::All, query.clone().unwrap_or_default());
                CatalogBrowseCommand::execute(&filter, state).await
            }
        }
    }

    /// Create a Tool model for this command (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<NavigateParams>().into(),
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
                let params: NavigateParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params.path, &state).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::commands::test_support::{state, structured};

    #[tokio::test]
    async fn test_navigate_to_tool() {
        let state = state();
        let result = NavigateCommand::execute("/tools/json-formatter", &state).await;
        assert_eq!(structured(&result)["tool"]["id"], "json-formatter");
        assert_eq!(structured(&result)["state"]["status"], "ready");
    }

    #[tokio::test]
    async fn test_navigate_to_unknown_tool_redirects() {
        let state = state();
        let result = NavigateCommand::execute("/tools/removed", &state).await;
        let value = structured(&result);
        assert_eq!(value["requested"], "removed");
        assert_eq!(value["redirect"], "/");
        assert!(state.preferences.lock().await.recents.load().is_empty());
    }

    #[tokio::test]
    async fn test_navigate_to_search_closes_tool() {
        let state = state();
        NavigateCommand::execute("/tools/base64", &state).await;
        assert!(state.tool_view.snapshot().await.is_some());

        let result = NavigateCommand::execute("/?q=json", &state).await;
        let value = structured(&result);
        assert_eq!(value["filter"]["query"], "json");
        assert_eq!(value["main"]["kind"], "results");
        let ids: Vec<_> = value["main"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&"json-formatter"));
        assert!(ids.contains(&"csv-to-json"));
        assert!(!ids.contains(&"base64"));
        assert!(state.tool_view.snapshot().await.is_none());
    }

    #[tokio::test]
    async fn test_unrecognised_path_shows_catalog() {
        let state = state();
        let result = NavigateCommand::execute("/settings/advanced", &state).await;
        assert_eq!(structured(&result)["main"]["kind"], "all_tools");
    }
}
