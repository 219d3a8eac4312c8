//! JSON formatter tool definition.
//!
//! Pretty-prints or minifies JSON documents. Key order is preserved.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: "indent",
        description: "Spaces per indentation level",
        default: "2",
        choices: &["2", "4"],
    },
    OptionSpec {
        name: "minify",
        description: "Emit compact single-line JSON instead",
        default: "false",
        choices: &["true", "false"],
    },
];

/// JSON formatter tool - validates, pretty-prints and minifies JSON.
#[derive(Debug, Default)]
pub struct JsonFormatterTool;

impl ToolDefinition for JsonFormatterTool {
    const ID: &'static str = "json-formatter";
    const NAME: &'static str = "JSON Formatter";
    const DESCRIPTION: &'static str = "Format, validate and minify JSON";
    const CATEGORY: ToolCategory = ToolCategory::Formatters;
    const ICON: &'static str = "📋";
    const TAGS: &'static [&'static str] = &["json", "format", "pretty", "minify", "validate"];
}

impl ToolModule for JsonFormatterTool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        if request.input.trim().is_empty() {
            return Ok(String::new());
        }

        let value: Value = serde_json::from_str(&request.input)
            .map_err(|e| ToolError::invalid_input(e.to_string()))?;

        if request.option_bool("minify").unwrap_or(false) {
            return Ok(value.to_string());
        }

        let indent = match request.option_u64("indent").unwrap_or(2) {
            n @ (2 | 4) => n as usize,
            other => {
                return Err(ToolError::invalid_input(format!(
                    "Unsupported indent {} (expected 2 or 4)",
                    other
                )));
            }
        };

        pretty(&value, indent)
    }
}

fn pretty(value: &Value, indent: usize) -> Result<String, ToolError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|e| ToolError::invalid_input(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ToolError::invalid_input(e.to_string()))
}
