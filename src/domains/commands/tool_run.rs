//! Tool run command.
//!
//! Runs a tool's module against an input. The tool is opened first when
//! it is not the one currently shown.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::tool_open::redirect_result;
use super::{error_result, structured_result};
use crate::core::state::AppState;
use crate::domains::activation::ActivationState;
use crate::domains::tools::{ToolModule, ToolRequest};

// ============================================================================
// Command Parameters
// ============================================================================

/// Parameters for the tool run command.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ToolRunParams {
    /// Identifier of the tool to run (e.g. "json-formatter").
    pub id: String,

    /// Main text input.
    #[serde(default)]
    pub input: String,

    /// Tool options, as listed by tool_open (e.g. {"mode": "decode"}).
    #[serde(default)]
    pub options: Option<Map<String, Value>>,
}

// ============================================================================
// Output Structure
// ============================================================================

#[derive(Debug, Serialize)]
struct RunOutput<'a> {
    tool: &'a str,
    output: &'a str,
}

// ============================================================================
// Command Definition
// ============================================================================

/// Tool run command - executes a tool on some input.
pub struct ToolRunCommand;

impl ToolRunCommand {
    /// Command name as registered in MCP.
    pub const NAME: &'static str = "tool_run";

    /// Command description shown to clients.
    pub const DESCRIPTION: &'static str = "Run a tool on an input. Opens the tool first if it is not already open. Use tool_open to see which options a tool accepts.";

    /// Execute the command logic.
    #[instrument(skip_all, fields(tool_id = %params.id))]
    pub async fn execute(params: &ToolRunParams, state: &AppState) -> CallToolResult {
        info!("Tool run called");

        let module = match ready_module(&params.id, state).await {
            Ok(module) => module,
            Err(result) => return result,
        };

        let request = ToolRequest::new(params.input.as_str())
            .with_options(params.options.clone().unwrap_or_default());

        match module.run(&request) {
            Ok(output) => {
                debug!("Tool produced {} bytes", output.len());
                structured_result(
                    output.clone(),
                    &RunOutput {
                        tool: &params.id,
                        output: &output,
                    },
                )
            }
            Err(e) => {
                warn!("Tool rejected input: {}", e);
                error_result(&e.to_string())
            }
        }
    }

    /// Create a Tool model for this command (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ToolRunParams>().into(),
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
                let params: ToolRunParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &state).await)
            }
            .boxed()
        })
    }
}

/// The module for `id`, opening the tool if it is not the active one.
///
/// A tool that already failed to load in the current view reports that
/// failure rather than retrying; opening it again is the retry.
async fn ready_module(id: &str, state: &AppState) -> Result<Arc<dyn ToolModule>, CallToolResult> {
    if let Some(module) = state.tool_view.module(id).await {
        return Ok(module);
    }

    if let Some((active, ActivationState::Failed { message })) = state.tool_view.state().await {
        if active == id {
            return Err(error_result(&format!("{} failed to load: {}", id, message)));
        }
    }

    let entered = {
        let mut prefs = state.preferences.lock().await;
        state
            .tool_view
            .enter(id, &state.registry, &mut prefs.recents)
            .await
    };
    let activation = match entered {
        Ok(activation) => activation,
        Err(destination) => return Err(redirect_result(id, destination, state).await),
    };

    match state.tool_view.load(&activation).await {
        Some(ActivationState::Ready) => match state.tool_view.module(id).await {
            Some(module) => Ok(module),
            None => Err(error_result(&format!("{} was closed while running", id))),
        },
        Some(ActivationState::Failed { message }) => {
            Err(error_result(&format!("{} failed to load: {}", id, message)))
        }
        Some(ActivationState::Pending) | None => Err(error_result(&format!(
            "Opening {} was interrupted by another navigation",
            id
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::commands::test_support::{is_error, state, structured, text};
    use serde_json::json;

    fn params(id: &str, input: &str, options: Value) -> ToolRunParams {
        serde_json::from_value(json!({ "id": id, "input": input, "options": options })).unwrap()
    }

    #[tokio::test]
    async fn test_run_opens_tool_first() {
        let state = state();
        let result =
            ToolRunCommand::execute(&params("base64", "hello", json!({})), &state).await;

        assert!(!is_error(&result));
        assert_eq!(text(&result), "aGVsbG8=");
        assert_eq!(structured(&result)["tool"], "base64");

        let (active, status) = state.tool_view.state().await.unwrap();
        assert_eq!(active, "base64");
        assert_eq!(status, ActivationState::Ready);
        assert_eq!(state.preferences.lock().await.recents.load(), vec!["base64"]);
    }

    #[tokio::test]
    async fn test_run_reuses_open_tool() {
        let state = state();
        ToolRunCommand::execute(&params("base64", "hi", json!({})), &state).await;
        let result = ToolRunCommand::execute(
            &params("base64", "aGk=", json!({ "mode": "decode" })),
            &state,
        )
        .await;

        assert_eq!(text(&result), "hi");
        // Running again does not count as another use.
        assert_eq!(state.preferences.lock().await.recents.load(), vec!["base64"]);
    }

    #[tokio::test]
    async fn test_invalid_input_is_inline_error() {
        let state = state();
        let result =
            ToolRunCommand::execute(&params("json-formatter", "{oops", json!({})), &state).await;
        assert!(is_error(&result));

        // The tool itself stays loaded.
        let (_, status) = state.tool_view.state().await.unwrap();
        assert_eq!(status, ActivationState::Ready);
    }

    #[tokio::test]
    async fn test_run_unknown_tool_redirects() {
        let state = state();
        let result = ToolRunCommand::execute(&params("nope", "x", json!({})), &state).await;
        assert_eq!(structured(&result)["redirect"], "/");
        assert!(state.tool_view.state().await.is_none());
    }

    #[test]
    fn test_params_defaults() {
        let params: ToolRunParams = serde_json::from_value(json!({ "id": "uuid-generator" })).unwrap();
        assert!(params.input.is_empty());
        assert!(params.options.is_none());

        let unknown: Result<ToolRunParams, _> =
            serde_json::from_value(json!({ "id": "x", "extra": 1 }));
        assert!(unknown.is_err());
    }
}
