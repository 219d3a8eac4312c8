//! Domains module containing business logic organized by bounded contexts.
//!
//! - `tools`: manifests, the registry and the built-in tools
//! - `preferences`: favorites, recents and theme stores
//! - `catalog`: the filtered, sectioned catalog view
//! - `activation`: navigation and the tool view state machine
//! - `commands`: the MCP command surface over all of the above

pub mod activation;
pub mod catalog;
pub mod commands;
pub mod preferences;
pub mod tools;
