//! Tools domain module.
//!
//! This module owns the catalog of utility tools: their manifests, the
//! registry that orders and indexes them, and the loader capability that
//! turns a manifest into a runnable module on activation.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `manifest.rs` - Tool manifest and category taxonomy
//! - `loader.rs` - Loader capability and the runnable module contract
//! - `registry.rs` - Central, ordered, read-only tool registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/<category>/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolModule` and `ToolDefinition`
//! 3. Export in the category's `mod.rs`
//! 4. Register in `registry.rs` in `get_all_tools()`

pub mod definitions;
mod error;
pub mod loader;
pub mod manifest;
mod registry;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use loader::{DefinitionLoader, OptionSpec, ToolLoader, ToolModule, ToolRequest};
pub use manifest::{ToolCategory, ToolManifest};
pub use registry::{ToolRegistry, get_all_tools, tool_ids};
