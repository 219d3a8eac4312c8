//! MCP Server implementation and lifecycle management.
//!
//! The server holds the shared application state and exposes it through
//! the command router built in `domains/commands/router.rs`. Adding a
//! command does not require modifying this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Result as CoreResult;
use super::state::AppState;
use crate::domains::commands::build_command_router;

const INSTRUCTIONS: &str = "A catalog of small developer utilities. Use catalog_browse to list or search tools, tool_open to open one and see its options, and tool_run to run it on some input. favorite_toggle pins tools to the top of the catalog; recently opened tools are listed automatically.";

/// The main MCP server handler.
///
/// Cloning is cheap and every clone shares the same state, so all
/// sessions see the same favorites, recents, theme and open tool.
#[derive(Clone)]
pub struct McpServer {
    state: Arc<AppState>,

    /// Tool router for handling command calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> CoreResult<Self> {
        Ok(Self::with_state(Arc::new(AppState::new(config)?)))
    }

    /// Create a server over existing state.
    pub fn with_state(state: Arc<AppState>) -> Self {
        info!("Serving {} tools", state.registry.len());
        Self {
            tool_router: build_command_router::<Self>(state.clone()),
            state,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.state.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.state.config.server.version
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
