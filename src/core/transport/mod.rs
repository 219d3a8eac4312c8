//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output (default) - feature: `stdio`
//! - **TCP**: line-delimited JSON-RPC over TCP - feature: `tcp`

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
