//! Process-wide application state shared by every command.
//!
//! The registry is immutable and shared without locking. The preference
//! stores sit behind one async mutex so that every mutation goes through
//! their own entry points one at a time. The tool view synchronizes
//! itself.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use super::config::Config;
use super::error::Result;
use crate::domains::activation::ToolView;
use crate::domains::preferences::PreferenceService;
use crate::domains::tools::ToolRegistry;

pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<ToolRegistry>,
    pub preferences: Mutex<PreferenceService>,
    pub tool_view: ToolView,
}

impl AppState {
    /// Build the registry and open the preference stores.
    pub fn new(config: Config) -> Result<Self> {
        let registry = ToolRegistry::builtin()?;
        let preferences = PreferenceService::new(&config.preferences);
        Ok(Self::from_parts(config, registry, preferences))
    }

    pub fn from_parts(
        config: Config,
        registry: ToolRegistry,
        preferences: PreferenceService,
    ) -> Self {
        info!("Application state ready with {} tools", registry.len());
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            preferences: Mutex::new(preferences),
            tool_view: ToolView::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_uses_builtin_registry_and_default_theme() {
        let state = AppState::new(Config::default()).unwrap();
        assert_eq!(state.registry.len(), 15);

        let prefs = state.preferences.lock().await;
        assert_eq!(prefs.theme.theme(), state.config.preferences.default_theme);
        assert!(prefs.favorites.load().is_empty());
        assert!(state.tool_view.snapshot().await.is_none());
    }
}
