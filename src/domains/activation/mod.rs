//! Activation domain module.
//!
//! Resolving a tool id to a loaded module: destinations and redirects,
//! the per-activation load state machine, and the tool view that guards
//! late load results with activation tokens.

mod activator;
mod navigation;
mod state;

pub use activator::{Activation, ToolView, ToolViewSnapshot};
pub use navigation::Destination;
pub use state::{ActivationState, LOAD_FAILED_FALLBACK};
