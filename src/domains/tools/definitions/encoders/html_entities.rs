//! HTML entities encoder/decoder tool definition.

use crate::domains::tools::definitions::{ToolDefinition, unsupported_choice};
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

const MODES: &[&str] = &["encode", "decode"];

const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "mode",
    description: "Whether to escape special characters or unescape entities",
    default: "encode",
    choices: MODES,
}];

/// Characters escaped on encode, with their entity.
const ESCAPES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
    ('`', "&#96;"),
];

/// Named entities understood on decode.
const NAMED: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '©'),
    ("reg", '®'),
    ("trade", '™'),
    ("hellip", '…'),
    ("mdash", '—'),
    ("ndash", '–'),
    ("euro", '€'),
];

/// Longest entity body we try to parse, e.g. `#x10FFFF`.
const MAX_ENTITY_LEN: usize = 10;

/// HTML entities tool - escapes and unescapes HTML special characters.
#[derive(Debug, Default)]
pub struct HtmlEntitiesTool;

impl ToolDefinition for HtmlEntitiesTool {
    const ID: &'static str = "html-entities";
    const NAME: &'static str = "HTML Entities";
    const DESCRIPTION: &'static str = "Escape and unescape HTML special characters";
    const CATEGORY: ToolCategory = ToolCategory::Encoders;
    const ICON: &'static str = "🏷️";
    const TAGS: &'static [&'static str] = &["html", "escape", "unescape", "entities", "encode"];
}

impl ToolModule for HtmlEntitiesTool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        match request.option_str("mode").unwrap_or("encode") {
            "encode" => Ok(encode(&request.input)),
            "decode" => Ok(decode(&request.input)),
            other => Err(unsupported_choice("mode", other, MODES)),
        }
    }
}

pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match ESCAPES.iter().find(|(ch, _)| *ch == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Unescape named and numeric entities. Unknown entities are left as-is.
pub fn decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let resolved = rest[1..]
            .find(';')
            .filter(|&end| end <= MAX_ENTITY_LEN)
            .and_then(|end| resolve_entity(&rest[1..=end]).map(|c| (c, end + 2)));

        match resolved {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn resolve_entity(body: &str) -> Option<char> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }
    NAMED.iter().find(|(name, _)| *name == body).map(|(_, c)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(
            encode(r#"<h1>Hello "World" & 'friends'</h1>"#),
            "&lt;h1&gt;Hello &quot;World&quot; &amp; &#39;friends&#39;&lt;/h1&gt;"
        );
        assert_eq!(encode("`x`"), "&#96;x&#96;");
    }

    #[test]
    fn test_decode_named_and_numeric() {
        assert_eq!(decode("&lt;b&gt; &amp; &#39;q&#39; &#x41;"), "<b> & 'q' A");
        assert_eq!(decode("&copy; 2024"), "© 2024");
    }

    #[test]
    fn test_decode_leaves_unknown_entities() {
        assert_eq!(decode("a & b &bogus; c&"), "a & b &bogus; c&");
    }

    #[test]
    fn test_run_modes() {
        let request = ToolRequest::new("&lt;").with_option("mode", "decode");
        assert_eq!(HtmlEntitiesTool.run(&request).unwrap(), "<");

        let request = ToolRequest::new("x").with_option("mode", "shout");
        assert!(HtmlEntitiesTool.run(&request).is_err());
    }
}
