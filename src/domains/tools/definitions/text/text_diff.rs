//! Text diff tool definition.
//!
//! Word-level diff between the input (original) and the `modified`
//! option. Whitespace runs are tokens of their own, so spacing changes
//! show up too. Removed text renders as `[-...-]`, added text as `{+...+}`.

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

/// Upper bound on tokens per side, keeping the LCS table small.
const MAX_TOKENS: usize = 2000;

const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "modified",
    description: "The modified text to compare against the input",
    default: "",
    choices: &[],
}];

/// Text diff tool - word-level comparison of two texts.
#[derive(Debug, Default)]
pub struct TextDiffTool;

impl ToolDefinition for TextDiffTool {
    const ID: &'static str = "text-diff";
    const NAME: &'static str = "Text Diff";
    const DESCRIPTION: &'static str = "Compare two texts and highlight added and removed words";
    const CATEGORY: ToolCategory = ToolCategory::Text;
    const ICON: &'static str = "🔀";
    const TAGS: &'static [&'static str] = &["diff", "compare", "changes", "difference"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Same,
    Added,
    Removed,
}

/// A run of consecutive tokens with the same change kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub change: Change,
    pub value: String,
}

/// Split into alternating word and whitespace tokens.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_ws: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let ws = c.is_whitespace();
        if prev_ws.is_some_and(|p| p != ws) {
            tokens.push(&text[start..i]);
            start = i;
        }
        prev_ws = Some(ws);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Diff two texts word by word using a longest common subsequence.
pub fn diff_words(original: &str, modified: &str) -> Result<Vec<Part>, ToolError> {
    let a = tokenize(original);
    let b = tokenize(modified);
    if a.len() > MAX_TOKENS || b.len() > MAX_TOKENS {
        return Err(ToolError::invalid_input(format!(
            "Texts are too long to compare (max {} words and spaces each)",
            MAX_TOKENS
        )));
    }

    // lcs[i][j] = LCS length of a[i..] and b[j..]
    let mut lcs = vec![vec![0u32; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut parts: Vec<Part> = Vec::new();
    let mut push = |change: Change, token: &str| {
        if let Some(last) = parts.last_mut().filter(|last| last.change == change) {
            last.value.push_str(token);
        } else {
            parts.push(Part {
                change,
                value: token.to_string(),
            });
        }
    };

    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            push(Change::Same, a[i]);
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            push(Change::Removed, a[i]);
            i += 1;
        } else {
            push(Change::Added, b[j]);
            j += 1;
        }
    }
    a[i..].iter().for_each(|t| push(Change::Removed, *t));
    b[j..].iter().for_each(|t| push(Change::Added, *t));

    Ok(parts)
}

impl ToolModule for TextDiffTool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        let modified = request.option_str("modified").unwrap_or("");
        let parts = diff_words(&request.input, modified)?;

        if parts.iter().all(|p| p.change == Change::Same) {
            return Ok("Texts are identical".to_string());
        }

        Ok(parts
            .iter()
            .map(|p| match p.change {
                Change::Same => p.value.clone(),
                Change::Removed => format!("[-{}-]", p.value),
                Change::Added => format!("{{+{}+}}", p.value),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(original: &str, modified: &str) -> String {
        let request = ToolRequest::new(original).with_option("modified", modified);
        TextDiffTool.run(&request).unwrap()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("a  bc\nd"), vec!["a", "  ", "bc", "\n", "d"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_identical() {
        assert_eq!(run("same text", "same text"), "Texts are identical");
        assert_eq!(run("", ""), "Texts are identical");
    }

    #[test]
    fn test_replaced_word() {
        assert_eq!(
            run("the quick fox", "the slow fox"),
            "the [-quick-]{+slow+} fox"
        );
    }

    #[test]
    fn test_insertion_and_deletion() {
        assert_eq!(run("a b", "a b c"), "a b{+ c+}");
        assert_eq!(run("a b c", "a c"), "a [-b -]c");
    }

    #[test]
    fn test_parts_merge_runs() {
        let parts = diff_words("x", "y z").unwrap();
        assert_eq!(
            parts,
            vec![
                Part {
                    change: Change::Removed,
                    value: "x".to_string()
                },
                Part {
                    change: Change::Added,
                    value: "y z".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_too_long() {
        let long = "w ".repeat(MAX_TOKENS);
        let request = ToolRequest::new(long).with_option("modified", "w");
        assert!(TextDiffTool.run(&request).is_err());
    }
}
