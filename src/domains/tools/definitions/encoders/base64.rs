//! Base64 encoder/decoder tool definition.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domains::tools::definitions::{ToolDefinition, unsupported_choice};
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

const MODES: &[&str] = &["encode", "decode"];

const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "mode",
    description: "Whether to encode plain text or decode a Base64 string",
    default: "encode",
    choices: MODES,
}];

/// Base64 tool - encodes UTF-8 text and decodes it back.
#[derive(Debug, Default)]
pub struct Base64Tool;

impl ToolDefinition for Base64Tool {
    const ID: &'static str = "base64";
    const NAME: &'static str = "Base64";
    const DESCRIPTION: &'static str = "Encode text to Base64 or decode Base64 back to text";
    const CATEGORY: ToolCategory = ToolCategory::Encoders;
    const ICON: &'static str = "🔐";
    const TAGS: &'static [&'static str] = &["encode", "decode", "base64", "binary"];
}

impl ToolModule for Base64Tool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        if request.input.is_empty() {
            return Ok(String::new());
        }

        match request.option_str("mode").unwrap_or("encode") {
            "encode" => Ok(STANDARD.encode(request.input.as_bytes())),
            "decode" => decode(&request.input),
            other => Err(unsupported_choice("mode", other, MODES)),
        }
    }
}

fn decode(input: &str) -> Result<String, ToolError> {
    let bytes = STANDARD
        .decode(input.trim())
        .map_err(|_| ToolError::invalid_input("Invalid Base64 input"))?;
    String::from_utf8(bytes).map_err(|_| ToolError::invalid_input("Invalid Base64 input"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_utf8() {
        let output = Base64Tool.run(&ToolRequest::new("héllo")).unwrap();
        assert_eq!(output, "aMOpbGxv");
    }

    #[test]
    fn test_decode() {
        let request = ToolRequest::new(" SGVsbG8= ").with_option("mode", "decode");
        assert_eq!(Base64Tool.run(&request).unwrap(), "Hello");
    }

    #[test]
    fn test_decode_invalid() {
        let request = ToolRequest::new("%%%").with_option("mode", "decode");
        let err = Base64Tool.run(&request).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Invalid Base64 input");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(Base64Tool.run(&ToolRequest::new("")).unwrap(), "");
    }
}
