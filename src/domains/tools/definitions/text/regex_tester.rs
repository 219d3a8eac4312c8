//! Regex tester tool definition.
//!
//! The input is the text to search; the pattern and flags come in as
//! options. Flags use the familiar single letters: `g` for every match
//! (otherwise only the first), `i`, `m` and `s`.

use regex::RegexBuilder;

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: "pattern",
        description: "Regular expression to test",
        default: "",
        choices: &[],
    },
    OptionSpec {
        name: "flags",
        description: "Any of g (all matches), i (ignore case), m (multiline), s (dot matches newline)",
        default: "g",
        choices: &[],
    },
];

/// Regex tester tool - lists matches and capture groups.
#[derive(Debug, Default)]
pub struct RegexTesterTool;

impl ToolDefinition for RegexTesterTool {
    const ID: &'static str = "regex-tester";
    const NAME: &'static str = "Regex Tester";
    const DESCRIPTION: &'static str = "Test regular expressions and inspect matches and groups";
    const CATEGORY: ToolCategory = ToolCategory::Text;
    const ICON: &'static str = "🔍";
    const TAGS: &'static [&'static str] = &["regex", "regexp", "pattern", "match"];
}

impl ToolModule for RegexTesterTool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        let pattern = request.option_str("pattern").unwrap_or("");
        if pattern.is_empty() {
            return Err(ToolError::invalid_input("Enter a pattern to test"));
        }

        let flags = request.option_str("flags").unwrap_or("g");
        if let Some(bad) = flags.chars().find(|c| !"gims".contains(*c)) {
            return Err(ToolError::invalid_input(format!("Unknown flag '{}'", bad)));
        }

        let re = RegexBuilder::new(pattern)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|e| ToolError::invalid_input(e.to_string()))?;

        let limit = if flags.contains('g') { usize::MAX } else { 1 };
        let text = &request.input;

        let mut lines = Vec::new();
        for caps in re.captures_iter(text).take(limit) {
            let Some(whole) = caps.get(0) else { continue };
            let index = text[..whole.start()].chars().count();
            lines.push(format!("@{}: {:?}", index, whole.as_str()));

            for (i, name) in re.capture_names().enumerate().skip(1) {
                let value = caps.get(i).map_or("", |m| m.as_str());
                match name {
                    Some(name) => lines.push(format!("  {}: {:?}", name, value)),
                    None => lines.push(format!("  ${}: {:?}", i, value)),
                }
            }
        }

        let count = lines.iter().filter(|l| l.starts_with('@')).count();
        let header = format!("{} match{}", count, if count == 1 { "" } else { "es" });
        if lines.is_empty() {
            return Ok(header);
        }
        Ok(format!("{}\n{}", header, lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, pattern: &str, flags: &str) -> Result<String, ToolError> {
        let request = ToolRequest::new(text)
            .with_option("pattern", pattern)
            .with_option("flags", flags);
        RegexTesterTool.run(&request)
    }

    #[test]
    fn test_global_matches() {
        let output = run("the fox and the dog", r"the", "g").unwrap();
        assert_eq!(output, "2 matches\n@0: \"the\"\n@12: \"the\"");
    }

    #[test]
    fn test_first_match_only_without_g() {
        let output = run("the fox and the dog", r"the", "").unwrap();
        assert!(output.starts_with("1 match\n"));
    }

    #[test]
    fn test_flags_and_groups() {
        let output = run("Name: Ada", r"name: (?P<who>\w+)", "gi").unwrap();
        assert_eq!(output, "1 match\n@0: \"Name: Ada\"\n  who: \"Ada\"");
    }

    #[test]
    fn test_no_matches() {
        assert_eq!(run("abc", r"\d+", "g").unwrap(), "0 matches");
    }

    #[test]
    fn test_errors() {
        assert!(run("abc", "", "g").is_err());
        assert!(run("abc", "(", "g").is_err());
        assert!(run("abc", "a", "x").is_err());
    }
}
