//! Command Router - builds the rmcp ToolRouter from the command definitions.
//!
//! Each command knows how to create its own route; this module only lists
//! them. All routes share one `AppState`.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::{
    CatalogBrowseCommand, FavoriteToggleCommand, NavigateCommand, PreferencesGetCommand,
    ThemeToggleCommand, ToolCloseCommand, ToolOpenCommand, ToolRunCommand,
};
use crate::core::state::AppState;

/// Build the router with every command.
pub fn build_command_router<S>(state: Arc<AppState>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CatalogBrowseCommand::create_route(state.clone()))
        .with_route(ToolOpenCommand::create_route(state.clone()))
        .with_route(ToolRunCommand::create_route(state.clone()))
        .with_route(ToolCloseCommand::create_route(state.clone()))
        .with_route(FavoriteToggleCommand::create_route(state.clone()))
        .with_route(ThemeToggleCommand::create_route(state.clone()))
        .with_route(PreferencesGetCommand::create_route(state.clone()))
        .with_route(NavigateCommand::create_route(state))
}

/// Names of every command, in registration order.
pub fn command_names() -> Vec<&'static str> {
    vec![
        CatalogBrowseCommand::NAME,
        ToolOpenCommand::NAME,
        ToolRunCommand::NAME,
        ToolCloseCommand::NAME,
        FavoriteToggleCommand::NAME,
        ThemeToggleCommand::NAME,
        PreferencesGetCommand::NAME,
        NavigateCommand::NAME,
    ]
}
