//! Word counter tool definition.

use serde::Serialize;

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolCategory, ToolError, ToolModule, ToolRequest};

/// Average reading speed used for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Word counter tool - words, characters, sentences, paragraphs.
#[derive(Debug, Default)]
pub struct WordCounterTool;

impl ToolDefinition for WordCounterTool {
    const ID: &'static str = "word-counter";
    const NAME: &'static str = "Word Counter";
    const DESCRIPTION: &'static str =
        "Count words, characters, sentences and paragraphs, with reading time";
    const CATEGORY: ToolCategory = ToolCategory::Text;
    const ICON: &'static str = "📝";
    const TAGS: &'static [&'static str] = &["count", "words", "characters", "length"];
}

/// Text statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_minutes: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let trimmed = text.trim();
        let words = trimmed.split_whitespace().count();

        let sentences = if trimmed.is_empty() {
            0
        } else {
            trimmed
                .split(['.', '!', '?'])
                .filter(|s| !s.is_empty())
                .count()
        };

        Self {
            words,
            characters: text.chars().count(),
            characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            sentences,
            paragraphs: count_paragraphs(text),
            reading_minutes: words.div_ceil(WORDS_PER_MINUTE).max(1),
        }
    }
}

/// Paragraphs are runs of non-blank lines separated by blank lines.
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            in_paragraph = true;
            count += 1;
        }
    }
    count
}

impl ToolModule for WordCounterTool {
    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        let stats = TextStats::of(&request.input);
        Ok(format!(
            "Words: {}\nCharacters: {}\nChars (no spaces): {}\nSentences: {}\nParagraphs: {}\nRead time (min): {}",
            stats.words,
            stats.characters,
            stats.characters_no_spaces,
            stats.sentences,
            stats.paragraphs,
            stats.reading_minutes
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = TextStats::of("   ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.sentences, 0);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.characters, 3);
        assert_eq!(stats.reading_minutes, 1);
    }

    #[test]
    fn test_counts() {
        let text = "Hello there. How are you?\n\nFine!!  Thanks";
        let stats = TextStats::of(text);
        assert_eq!(stats.words, 7);
        assert_eq!(stats.sentences, 4);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.characters_no_spaces, 33);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = vec!["word"; 201].join(" ");
        assert_eq!(TextStats::of(&text).reading_minutes, 2);
    }

    #[test]
    fn test_run_output() {
        let output = WordCounterTool.run(&ToolRequest::new("one two three")).unwrap();
        assert!(output.starts_with("Words: 3\n"));
        assert!(output.contains("Paragraphs: 1"));
    }
}
