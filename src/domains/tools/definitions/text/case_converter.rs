//! Case converter tool definition.
//!
//! Converts text between common letter-case conventions.

use crate::domains::tools::definitions::{ToolDefinition, unsupported_choice};
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

const CASES: &[&str] = &[
    "upper", "lower", "title", "sentence", "camel", "pascal", "snake", "kebab", "constant",
];

const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "case",
    description: "Target case. When omitted every conversion is listed.",
    default: "",
    choices: CASES,
}];

/// Case converter tool - upper, lower, title, camel, snake and friends.
#[derive(Debug, Default)]
pub struct CaseConverterTool;

impl ToolDefinition for CaseConverterTool {
    const ID: &'static str = "case-converter";
    const NAME: &'static str = "Case Converter";
    const DESCRIPTION: &'static str =
        "Convert text to camelCase, snake_case, kebab-case, Title Case and more";
    const CATEGORY: ToolCategory = ToolCategory::Text;
    const ICON: &'static str = "🔤";
    const TAGS: &'static [&'static str] = &["case", "camel", "snake", "kebab", "upper", "lower"];
}

impl ToolModule for CaseConverterTool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        match request.option_str("case") {
            Some(case) => convert(&request.input, case),
            None => {
                let mut lines = Vec::with_capacity(CASES.len());
                for case in CASES {
                    lines.push(format!("{}: {}", case, convert(&request.input, case)?));
                }
                Ok(lines.join("\n"))
            }
        }
    }
}

/// Convert `text` to the named case.
pub fn convert(text: &str, case: &str) -> Result<String, ToolError> {
    let words = || to_words(text);
    let converted = match case {
        "upper" => text.to_uppercase(),
        "lower" => text.to_lowercase(),
        "title" => words().iter().map(|w| capitalize(w)).collect::<Vec<_>>().join(" "),
        "sentence" => capitalize_first(&text.to_lowercase()),
        "camel" => words()
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
            .collect(),
        "pascal" => words().iter().map(|w| capitalize(w)).collect(),
        "snake" => join_mapped(&words(), "_", str::to_lowercase),
        "kebab" => join_mapped(&words(), "-", str::to_lowercase),
        "constant" => join_mapped(&words(), "_", str::to_uppercase),
        other => return Err(unsupported_choice("case", other, CASES)),
    };
    Ok(converted)
}

/// Split text into words on whitespace, `-`/`_` runs, and case boundaries.
///
/// A boundary is a lower-to-upper transition (`fooBar`) or the last capital
/// of an acronym followed by a lowercase letter (`XMLHttp`).
fn to_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    capitalize_first(&word.to_lowercase())
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn join_mapped(words: &[String], sep: &str, f: fn(&str) -> String) -> String {
    words.iter().map(|w| f(w)).collect::<Vec<_>>().join(sep)
}
