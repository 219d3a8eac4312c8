//! Number base converter tool definition.

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

/// Supported bases with their display label and literal prefix.
const BASES: &[(u32, &str, &str)] = &[
    (10, "Decimal", ""),
    (2, "Binary", "0b"),
    (8, "Octal", "0o"),
    (16, "Hexadecimal", "0x"),
];

const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "from",
    description: "Radix of the input. Inferred from a 0b/0o/0x prefix when omitted.",
    default: "10",
    choices: &["2", "8", "10", "16"],
}];

/// Number base tool - converts between decimal, binary, octal and hex.
#[derive(Debug, Default)]
pub struct NumberBaseTool;

impl ToolDefinition for NumberBaseTool {
    const ID: &'static str = "number-base";
    const NAME: &'static str = "Number Base Converter";
    const DESCRIPTION: &'static str = "Convert numbers between decimal, binary, octal and hex";
    const CATEGORY: ToolCategory = ToolCategory::Converters;
    const ICON: &'static str = "🔢";
    const TAGS: &'static [&'static str] = &["binary", "hex", "octal", "decimal", "radix"];
}

impl ToolModule for NumberBaseTool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        let radix = match request.option_u64("from") {
            Some(r) => u32::try_from(r)
                .ok()
                .filter(|r| BASES.iter().any(|(b, _, _)| b == r))
                .ok_or_else(|| {
                    ToolError::invalid_input(format!(
                        "Unsupported radix {} (expected 2, 8, 10 or 16)",
                        r
                    ))
                })?,
            None => infer_radix(&request.input),
        };

        let value = parse(&request.input, radix)?;

        Ok(BASES
            .iter()
            .map(|(base, label, _)| format!("{}: {}", label, format_radix(value, *base)))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn infer_radix(input: &str) -> u32 {
    let lower = input.trim().to_ascii_lowercase();
    BASES
        .iter()
        .find(|(_, _, prefix)| !prefix.is_empty() && lower.starts_with(prefix))
        .map(|(radix, _, _)| *radix)
        .unwrap_or(10)
}

/// Parse a non-negative integer, ignoring whitespace and the radix's own prefix.
pub fn parse(input: &str, radix: u32) -> Result<u64, ToolError> {
    let trimmed = input.trim();
    let prefix = BASES
        .iter()
        .find(|(base, _, _)| *base == radix)
        .map(|(_, _, prefix)| *prefix)
        .unwrap_or("");
    let unprefixed = match trimmed.get(..prefix.len()) {
        Some(head) if !prefix.is_empty() && head.eq_ignore_ascii_case(prefix) => {
            &trimmed[prefix.len()..]
        }
        _ => trimmed,
    };
    let clean: String = unprefixed.chars().filter(|c| !c.is_whitespace()).collect();

    if clean.is_empty() {
        return Err(ToolError::invalid_input("Enter a number to convert"));
    }

    u64::from_str_radix(&clean, radix).map_err(|_| {
        ToolError::invalid_input(format!("Could not parse '{}' as base {}", trimmed, radix))
    })
}

/// Render a value in the given radix, upper-case digits, no prefix.
pub fn format_radix(value: u64, radix: u32) -> String {
    match radix {
        2 => format!("{:b}", value),
        8 => format!("{:o}", value),
        16 => format!("{:X}", value),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_to_all() {
        let output = NumberBaseTool.run(&ToolRequest::new("255")).unwrap();
        assert_eq!(
            output,
            "Decimal: 255\nBinary: 11111111\nOctal: 377\nHexadecimal: FF"
        );
    }

    #[test]
    fn test_prefix_infers_radix() {
        let output = NumberBaseTool.run(&ToolRequest::new("0xff")).unwrap();
        assert!(output.starts_with("Decimal: 255"));
        let output = NumberBaseTool.run(&ToolRequest::new("0B1010")).unwrap();
        assert!(output.starts_with("Decimal: 10"));
    }

    #[test]
    fn test_explicit_radix_and_whitespace() {
        let request = ToolRequest::new("1111 0000").with_option("from", 2);
        assert!(NumberBaseTool.run(&request).unwrap().contains("Hexadecimal: F0"));
    }

    #[test]
    fn test_hex_digits_are_not_mistaken_for_a_prefix() {
        let request = ToolRequest::new("0b1").with_option("from", 16);
        assert!(NumberBaseTool.run(&request).unwrap().starts_with("Decimal: 177\n"));
    }

    #[test]
    fn test_invalid_digits() {
        let request = ToolRequest::new("129").with_option("from", 8);
        let err = NumberBaseTool.run(&request).unwrap_err();
        assert!(err.to_string().contains("base 8"));
    }

    #[test]
    fn test_unsupported_radix() {
        let request = ToolRequest::new("1").with_option("from", 7);
        assert!(NumberBaseTool.run(&request).is_err());
    }
}
