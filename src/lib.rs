//! Toolpanda MCP Server Library
//!
//! A catalog of small developer utilities (encoders, formatters,
//! generators, converters, text tools) served over the Model Context
//! Protocol, with favorites, recently used tools and a theme preference.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, shared state, the server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool manifests, the registry and the built-in tools
//!   - **preferences**: persisted favorites, recents and theme
//!   - **catalog**: the catalog view model
//!   - **activation**: navigation and tool activation
//!   - **commands**: MCP commands
//!
//! # Example
//!
//! ```rust,no_run
//! use toolpanda_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
