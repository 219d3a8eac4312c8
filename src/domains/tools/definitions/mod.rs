//! Tool definitions module.
//!
//! Each tool is defined in its own file, grouped by category, with:
//! - Metadata (id, name, description, category, icon, tags)
//! - A `ToolModule` implementation holding the tool's logic
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file under the matching category directory
//! 2. Implement `ToolModule` and `ToolDefinition`
//! 3. Export it from the category's `mod.rs` and here
//! 4. Register in `registry.rs`

pub mod converters;
pub mod encoders;
pub mod formatters;
pub mod generators;
pub mod text;

pub use converters::{ColorConverterTool, CsvToJsonTool, NumberBaseTool, TimestampTool};
pub use encoders::{Base64Tool, HtmlEntitiesTool, JwtDecoderTool};
pub use formatters::JsonFormatterTool;
pub use generators::{LoremIpsumTool, PasswordGeneratorTool, UuidGeneratorTool};
pub use text::{CaseConverterTool, RegexTesterTool, TextDiffTool, WordCounterTool};

use super::loader::ToolModule;
use super::manifest::ToolCategory;

/// Trait for built-in tool definitions.
///
/// Each tool must implement this trait to provide its catalog metadata.
/// The registry turns a definition into a manifest whose loader builds a
/// fresh `Self::default()` on every activation.
pub trait ToolDefinition: ToolModule + Default + 'static {
    /// Stable identifier, used as storage key and route segment.
    const ID: &'static str;

    /// Display name.
    const NAME: &'static str;

    /// One-line description shown on the tool card.
    const DESCRIPTION: &'static str;

    const CATEGORY: ToolCategory;

    const ICON: &'static str;

    /// Extra search terms.
    const TAGS: &'static [&'static str];
}

/// Build an `InvalidInput` error for an option outside its allowed values.
pub(crate) fn unsupported_choice(option: &str, value: &str, choices: &[&str]) -> super::ToolError {
    super::ToolError::invalid_input(format!(
        "Unsupported {} '{}' (expected one of: {})",
        option,
        value,
        choices.join(", ")
    ))
}
