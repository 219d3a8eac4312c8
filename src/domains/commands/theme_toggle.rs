//! Theme toggle command.

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
use crate::domains::preferences::Theme;

#[derive(Debug, Serialize)]
struct ThemeChanged {
    theme: Theme,
}

/// Theme toggle command - switches between light and dark.
pub struct ThemeToggleCommand;

impl ThemeToggleCommand {
    /// Command name as registered in MCP.
    pub const NAME: &'static str = "theme_toggle";

    /// Command description shown to clients.
    pub const DESCRIPTION: &'static str = "Switch between the light and dark theme.";

    /// Execute the command logic.
    #[instrument(skip_all)]
    pub async fn execute(state: &AppState) -> CallToolResult {
        info!("Theme toggle called");
        let theme = state.preferences.lock().await.theme.toggle();
        structured_result(format!("Theme: {}", theme), &ThemeChanged { theme })
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::commands::test_support::{state, structured, text};

    #[tokio::test]
    async fn test_toggle_twice_restores_theme() {
        let state = state();

        let result = ThemeToggleCommand::execute(&state).await;
        assert_eq!(text(&result), "Theme: dark");
        assert_eq!(structured(&result)["theme"], "dark");

        let result = ThemeToggleCommand::execute(&state).await;
        assert_eq!(structured(&result)["theme"], "light");
    }
}
