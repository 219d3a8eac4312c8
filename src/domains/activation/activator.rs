//! Tool view activation.
//!
//! A [`ToolView`] holds at most one active tool. Entering a tool starts a
//! new activation identified by a generation token; the load started for
//! that activation only applies its result while the token is still
//! current. Leaving or re-entering the view supersedes the token, so a
//! late load result is discarded instead of overwriting newer state.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::navigation::Destination;
use super::state::ActivationState;
use crate::domains::preferences::RecentsStore;
use crate::domains::tools::{OptionSpec, ToolManifest, ToolModule, ToolRegistry};

/// Handle for one activation, returned by [`ToolView::enter`].
#[derive(Debug, Clone)]
pub struct Activation {
    token: u64,
    manifest: Arc<ToolManifest>,
}

impl Activation {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn manifest(&self) -> &Arc<ToolManifest> {
        &self.manifest
    }
}

struct ActiveTool {
    token: u64,
    manifest: Arc<ToolManifest>,
    state: ActivationState,
    module: Option<Arc<dyn ToolModule>>,
}

/// What the tool view currently shows.
#[derive(Debug, Clone, Serialize)]
pub struct ToolViewSnapshot {
    pub tool: Arc<ToolManifest>,
    pub state: ActivationState,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [OptionSpec],
}

fn no_options(options: &&'static [OptionSpec]) -> bool {
    options.is_empty()
}

#[derive(Default)]
pub struct ToolView {
    generation: AtomicU64,
    current: Mutex<Option<ActiveTool>>,
}

impl ToolView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the view for `id`.
    ///
    /// An unknown id never starts an activation: the caller gets the
    /// catalog root to redirect to, and recents are left alone. A known id
    /// is recorded as used and a new `Pending` activation replaces
    /// whatever was shown before.
    #[instrument(skip_all, fields(tool_id = %id))]
    pub async fn enter(
        &self,
        id: &str,
        registry: &ToolRegistry,
        recents: &mut RecentsStore,
    ) -> Result<Activation, Destination> {
        let manifest = match registry.by_id(id) {
            Ok(manifest) => manifest,
            Err(e) => {
                info!("{}, redirecting to catalog", e);
                return Err(Destination::catalog_root());
            }
        };

        recents.record_use(id);

        let mut current = self.current.lock().await;
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *current = Some(ActiveTool {
            token,
            manifest: manifest.clone(),
            state: ActivationState::Pending,
            module: None,
        });
        debug!("Started activation {}", token);

        Ok(Activation { token, manifest })
    }

    /// Run the loader for `activation` and apply its outcome.
    ///
    /// Returns `None` when the activation was superseded while loading;
    /// the outcome is then dropped. An activation settles at most once, so
    /// a second call on a settled activation returns the settled state
    /// without loading again.
    #[instrument(skip_all, fields(tool_id = %activation.manifest.id, token = activation.token))]
    pub async fn load(&self, activation: &Activation) -> Option<ActivationState> {
        {
            let current = self.current.lock().await;
            match current.as_ref() {
                Some(active) if active.token == activation.token => {
                    if active.state.is_terminal() {
                        return Some(active.state.clone());
                    }
                }
                _ => {
                    debug!("Activation superseded before loading");
                    return None;
                }
            }
        }

        let outcome = activation.manifest.loader().load().await;

        let mut current = self.current.lock().await;
        let active = match current.as_mut() {
            Some(active) if active.token == activation.token => active,
            _ => {
                debug!("Discarding load result of a superseded activation");
                return None;
            }
        };
        if active.state.is_terminal() {
            return Some(active.state.clone());
        }

        match outcome {
            Ok(module) => {
                active.state = ActivationState::Ready;
                active.module = Some(module);
                info!("Tool ready");
            }
            Err(e) => {
                warn!("Tool failed to load: {}", e);
                active.state = ActivationState::from(&e);
            }
        }
        Some(active.state.clone())
    }

    /// Enter and load in one step.
    pub async fn activate(
        &self,
        id: &str,
        registry: &ToolRegistry,
        recents: &mut RecentsStore,
    ) -> Result<Option<ActivationState>, Destination> {
        let activation = self.enter(id, registry, recents).await?;
        Ok(self.load(&activation).await)
    }

    /// Leave the view, superseding any in-flight load.
    pub async fn leave(&self) -> Option<Arc<ToolManifest>> {
        let mut current = self.current.lock().await;
        self.generation.fetch_add(1, Ordering::SeqCst);
        let left = current.take().map(|active| active.manifest);
        if let Some(manifest) = &left {
            debug!("Left tool view: {}", manifest.id);
        }
        left
    }

    pub async fn snapshot(&self) -> Option<ToolViewSnapshot> {
        let current = self.current.lock().await;
        current.as_ref().map(|active| ToolViewSnapshot {
            tool: active.manifest.clone(),
            state: active.state.clone(),
            options: active.module.as_ref().map(|m| m.options()).unwrap_or(&[]),
        })
    }

    /// Id and state of the active tool, if any.
    pub async fn state(&self) -> Option<(String, ActivationState)> {
        let current = self.current.lock().await;
        current
            .as_ref()
            .map(|active| (active.manifest.id.clone(), active.state.clone()))
    }

    /// The loaded module, if the active tool is `id` and ready.
    pub async fn module(&self, id: &str) -> Option<Arc<dyn ToolModule>> {
        let current = self.current.lock().await;
        current
            .as_ref()
            .filter(|active| active.manifest.id == id)
            .and_then(|active| active.module.clone())
    }
}
