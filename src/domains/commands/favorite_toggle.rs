//! Favorite toggle command.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{error_result, structured_result};
use crate::core::state::AppState;
use crate::domains::preferences::{MAX_FAVORITES, ToggleOutcome};

// ============================================================================
// Command Parameters
// ============================================================================

/// Parameters for the favorite toggle command.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FavoriteToggleParams {
    /// Identifier of the tool to pin or unpin.
    pub id: String,
}

// ============================================================================
// Output Structure
// ============================================================================

#[derive(Debug, Serialize)]
struct Toggled<'a> {
    id: &'a str,
    outcome: ToggleOutcome,
    favorites: Vec<String>,
    at_capacity: bool,
}

// ============================================================================
// Command Definition
// ============================================================================

/// Favorite toggle command - pins or unpins a tool.
pub struct FavoriteToggleCommand;

impl FavoriteToggleCommand {
    /// Command name as registered in MCP.
    pub const NAME: &'static str = "favorite_toggle";

    /// Command description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a tool to favorites, or remove it if already there. At most 8 favorites are kept; adding beyond that is rejected until one is removed.";

    /// Execute the command logic.
    #[instrument(skip_all, fields(tool_id = %id))]
    pub async fn execute(id: &str, state: &AppState) -> CallToolResult {
        info!("Favorite toggle called");
        let mut prefs = state.preferences.lock().await;

        // Stale ids can still be unpinned; only known tools can be pinned.
        if !state.registry.contains(id) && !prefs.favorites.contains(id) {
            return error_result(&format!("Tool not found: {}", id));
        }

        let outcome = prefs.favorites.toggle(id);
        let toggled = Toggled {
            id,
            outcome,
            favorites: prefs.favorites.load(),
            at_capacity: prefs.favorites.at_capacity(),
        };

        let summary = match outcome {
            ToggleOutcome::Added => format!("Added {} to favorites", id),
            ToggleOutcome::Removed => format!("Removed {} from favorites", id),
            ToggleOutcome::Rejected => format!(
                "Favorites are full ({} of {}); remove one before adding {}",
                toggled.favorites.len(),
                MAX_FAVORITES,
                id
            ),
        };
        structured_result(summary, &toggled)
    }

    /// Create a Tool model for this command (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<FavoriteToggleParams>().into(),
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
                let params: FavoriteToggleParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params.id, &state).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
