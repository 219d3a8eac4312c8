//! Tool close command.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{NoParams, structured_result};
use crate::core::state::AppState;

#[derive(Debug, Serialize)]
struct Closed {
    #[serde(skip_serializing_if = "Option::is_none")]
    closed: Option<String>,
}

/// Tool close command - leaves the tool view.
pub struct ToolCloseCommand;

impl ToolCloseCommand {
    /// Command name as registered in MCP.
    pub const NAME: &'static str = "tool_close";

    /// Command description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Close the open tool and return to the catalog. A load still in progress is abandoned.";

    /// Execute the command logic.
    #[instrument(skip_all)]
    pub async fn execute(state: &AppState) -> CallToolResult {
        info!("Tool close called");
        match state.tool_view.leave().await {
            Some(manifest) => structured_result(
                format!("Closed {}", manifest.name),
                &Closed {
                    closed: Some(manifest.id.clone()),
                },
            ),
            None => structured_result("No tool is open".to_string(), &Closed { closed: None }),
        }
    }

    /// Create a Tool model for this command (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<NoParams>().into(),
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
                let _: NoParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&state).await)
            }
            .boxed()
        })
    }
}
