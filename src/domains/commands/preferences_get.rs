//! Preferences get command.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{NoParams, structured_result};
use crate::core::state::AppState;
use crate::domains::preferences::{MAX_FAVORITES, PreferenceSnapshot};

/// Preferences get command - reports favorites, recents and theme.
pub struct PreferencesGetCommand;

impl PreferencesGetCommand {
    /// Command name as registered in MCP.
    pub const NAME: &'static str = "preferences_get";

    /// Command description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Show favorites, recently used tools, the theme, and whether favorites are full.";

    /// Execute the command logic.
    #[instrument(skip_all)]
    pub async fn execute(state: &AppState) -> CallToolResult {
        info!("Preferences get called");
        let snapshot = state.preferences.lock().await.snapshot();
        structured_result(render(&snapshot), &snapshot)
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

fn render(snapshot: &PreferenceSnapshot) -> String {
    let list = |ids: &[String]| {
        if ids.is_empty() {
            "(none)".to_string()
        } else {
            ids.join(", ")
        }
    };
    format!(
        "Favorites ({}/{}): {}\nRecently used: {}\nTheme: {}",
        snapshot.favorites.len(),
        MAX_FAVORITES,
        list(&snapshot.favorites),
        list(&snapshot.recents),
        snapshot.theme
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::commands::test_support::{state, structured, text};

    #[tokio::test]
    async fn test_empty_preferences() {
        let state = state();
        let result = PreferencesGetCommand::execute(&state).await;
        assert_eq!(
            text(&result),
            "Favorites (0/8): (none)\nRecently used: (none)\nTheme: light"
        );
        assert_eq!(structured(&result)["at_capacity"], false);
    }

    #[tokio::test]
    async fn test_reflects_store_changes() {
        let state = state();
        {
            let mut prefs = state.preferences.lock().await;
            prefs.favorites.toggle("base64");
            prefs.recents.record_use("timestamp");
            prefs.recents.record_use("base64");
        }

        let result = PreferencesGetCommand::execute(&state).await;
        let value = structured(&result);
        assert_eq!(value["favorites"], serde_json::json!(["base64"]));
        assert_eq!(value["recents"], serde_json::json!(["base64", "timestamp"]));
        assert!(text(&result).contains("Recently used: base64, timestamp"));
    }
}
