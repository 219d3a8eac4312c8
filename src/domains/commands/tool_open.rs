//! Tool open command.
//!
//! Enters the detail view of one tool: records it as recently used, loads
//! its module and reports the resulting state. Unknown ids redirect to the
//! catalog root instead.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::sync::Arc;
use tracing::{info, instrument};

use super::catalog_browse::render_view;
use super::structured_result;
use crate::core::state::AppState;
use crate::domains::activation::{ActivationState, Destination, ToolViewSnapshot};
use crate::domains::catalog::{CatalogFilter, CatalogView, build_catalog_view};

// ============================================================================
// Command Parameters
// ============================================================================

/// Parameters for the tool open command.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ToolOpenParams {
    /// Identifier of the tool to open (e.g. "base64").
    pub id: String,
}

// ============================================================================
// Output Structure
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenedTool {
    path: String,
    favorite: bool,
    #[serde(flatten)]
    view: ToolViewSnapshot,
}

#[derive(Debug, Serialize)]
struct Redirected<'a> {
    requested: &'a str,
    redirect: String,
    catalog: CatalogView,
}

#[derive(Debug, Serialize)]
struct Superseded<'a> {
    requested: &'a str,
    superseded: bool,
}

// ============================================================================
// Command Definition
// ============================================================================

/// Tool open command - activates a tool's detail view.
pub struct ToolOpenCommand;

impl ToolOpenCommand {
    /// Command name as registered in MCP.
    pub const NAME: &'static str = "tool_open";

    /// Command description shown to clients.
    pub const DESCRIPTION: &'static str = "Open a tool by id. Loads the tool, records it as recently used and lists the options it accepts. Unknown ids return the catalog instead.";

    /// Execute the command logic.
    #[instrument(skip_all, fields(tool_id = %id))]
    pub async fn execute(id: &str, state: &AppState) -> CallToolResult {
        info!("Tool open called");

        let entered = {
            let mut prefs = state.preferences.lock().await;
            state
                .tool_view
                .enter(id, &state.registry, &mut prefs.recents)
                .await
        };
        let activation = match entered {
            Ok(activation) => activation,
            Err(destination) => return redirect_result(id, destination, state).await,
        };

        if state.tool_view.load(&activation).await.is_none() {
            info!("Opening '{}' was superseded", id);
            return structured_result(
                format!("Opening {} was interrupted by another navigation", id),
                &Superseded {
                    requested: id,
                    superseded: true,
                },
            );
        }

        match state.tool_view.snapshot().await {
            Some(view) => {
                let favorite = state.preferences.lock().await.favorites.contains(id);
                let opened = OpenedTool {
                    path: Destination::tool(id).path(),
                    favorite,
                    view,
                };
                structured_result(render_opened(&opened), &opened)
            }
            None => redirect_result(id, Destination::catalog_root(), state).await,
        }
    }

    /// Create a Tool model for this command (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ToolOpenParams>().into(),
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
                let params: ToolOpenParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params.id, &state).await)
            }
            .boxed()
        })
    }
}

/// Show the catalog in place of a tool that does not exist.
pub(crate) async fn redirect_result(
    requested: &str,
    destination: Destination,
    state: &AppState,
) -> CallToolResult {
    let filter = match &destination {
        Destination::Catalog { query } => {
            CatalogFilter::new(Default::default(), query.clone().unwrap_or_default())
        }
        Destination::Tool { .. } => CatalogFilter::default(),
    };
    let catalog = {
        let prefs = state.preferences.lock().await;
        build_catalog_view(
            &state.registry,
            &filter,
            prefs.favorites.ids(),
            prefs.recents.ids(),
        )
    };

    let summary = format!(
        "No tool '{}', showing the catalog instead\n\n{}",
        requested,
        render_view(&catalog)
    );
    structured_result(
        summary,
        &Redirected {
            requested,
            redirect: destination.path(),
            catalog,
        },
    )
}

fn render_opened(opened: &OpenedTool) -> String {
    let tool = &opened.view.tool;
    let mut out = format!("{} {} ({})", tool.icon, tool.name, tool.id);
    if opened.favorite {
        out.push_str(" ★");
    }
    out.push('\n');
    out.push_str(&tool.description);
    out.push('\n');

    match &opened.view.state {
        ActivationState::Pending => out.push_str("Loading..."),
        ActivationState::Ready => {
            out.push_str("Ready");
            if !opened.view.options.is_empty() {
                out.push_str("\nOptions:");
                for option in opened.view.options {
                    let _ = write!(
                        out,
                        "\n- {}: {} (default: {})",
                        option.name, option.description, option.default
                    );
                    if !option.choices.is_empty() {
                        let _ = write!(out, " [{}]", option.choices.join(", "));
                    }
                }
            }
        }
        ActivationState::Failed { message } => {
            let _ = write!(out, "Failed to load: {}", message);
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::commands::test_support::{is_error, state, structured, text};

    #[tokio::test]
    async fn test_open_known_tool() {
        let state = state();
        let result = ToolOpenCommand::execute("base64", &state).await;

        assert!(!is_error(&result));
        let value = structured(&result);
        assert_eq!(value["tool"]["id"], "base64");
        assert_eq!(value["state"]["status"], "ready");
        assert_eq!(value["path"], "/tools/base64");
        assert_eq!(value["favorite"], false);
        assert!(text(&result).contains("Options:\n- mode:"));

        let prefs = state.preferences.lock().await;
        assert_eq!(prefs.recents.load(), vec!["base64"]);
    }

    #[tokio::test]
    async fn test_open_unknown_tool_redirects() {
        let state = state();
        let result = ToolOpenCommand::execute("deleted-tool", &state).await;

        assert!(!is_error(&result));
        let value = structured(&result);
        assert_eq!(value["requested"], "deleted-tool");
        assert_eq!(value["redirect"], "/");
        assert_eq!(value["catalog"]["main"]["kind"], "all_tools");
        assert!(state.tool_view.snapshot().await.is_none());
        assert!(state.preferences.lock().await.recents.load().is_empty());
    }

    #[tokio::test]
    async fn test_open_marks_favorites() {
        let state = state();
        state.preferences.lock().await.favorites.toggle("timestamp");

        let result = ToolOpenCommand::execute("timestamp", &state).await;
        assert_eq!(structured(&result)["favorite"], true);
        assert!(text(&result).lines().next().unwrap().ends_with('★'));
    }

    #[tokio::test]
    async fn test_reopening_records_use_each_time() {
        let state = state();
        for id in ["base64", "timestamp", "base64"] {
            ToolOpenCommand::execute(id, &state).await;
        }
        let prefs = state.preferences.lock().await;
        assert_eq!(prefs.recents.load(), vec!["base64", "timestamp"]);
    }
}
