//! Commands domain module.
//!
//! The MCP surface of the catalog: each command is one file defining its
//! parameters, its `execute()` logic and the route that wires it into the
//! rmcp `ToolRouter`.
//!
//! ## Adding a New Command
//!
//! 1. Create a new file in this directory
//! 2. Define `NAME`, `DESCRIPTION`, a parameters struct, `execute()`,
//!    `to_tool()` and `create_route()`
//! 3. Register the route in `router.rs`

mod catalog_browse;
mod favorite_toggle;
mod navigate;
mod preferences_get;
mod router;
mod theme_toggle;
mod tool_close;
mod tool_open;
mod tool_run;

pub use catalog_browse::{CatalogBrowseCommand, CatalogBrowseParams};
pub use favorite_toggle::{FavoriteToggleCommand, FavoriteToggleParams};
pub use navigate::{NavigateCommand, NavigateParams};
pub use preferences_get::PreferencesGetCommand;
pub use router::{build_command_router, command_names};
pub use theme_toggle::ThemeToggleCommand;
pub use tool_close::ToolCloseCommand;
pub use tool_open::{ToolOpenCommand, ToolOpenParams};
pub use tool_run::{ToolRunCommand, ToolRunParams};

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Parameters for commands that take none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NoParams {}

/// Create an error result with a formatted message.
pub(crate) fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a result with a text summary plus structured content.
pub(crate) fn structured_result<T: Serialize>(summary: String, value: &T) -> CallToolResult {
    match serde_json::to_value(value) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}
