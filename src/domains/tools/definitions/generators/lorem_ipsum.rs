//! Lorem ipsum generator tool definition.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domains::tools::definitions::{ToolDefinition, unsupported_choice};
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

const UNITS: &[&str] = &["words", "sentences", "paragraphs"];

const MAX_COUNT: u64 = 50;
const SENTENCE_WORDS: usize = 8;
const PARAGRAPH_SENTENCES: usize = 5;

const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: "unit",
        description: "What to generate",
        default: "paragraphs",
        choices: UNITS,
    },
    OptionSpec {
        name: "count",
        description: "How many units to generate (1-50)",
        default: "3",
        choices: &[],
    },
    OptionSpec {
        name: "seed",
        description: "Optional seed for reproducible output",
        default: "",
        choices: &[],
    },
];

/// Lorem ipsum tool - placeholder words, sentences or paragraphs.
#[derive(Debug, Default)]
pub struct LoremIpsumTool;

impl ToolDefinition for LoremIpsumTool {
    const ID: &'static str = "lorem-ipsum";
    const NAME: &'static str = "Lorem Ipsum";
    const DESCRIPTION: &'static str = "Generate placeholder words, sentences or paragraphs";
    const CATEGORY: ToolCategory = ToolCategory::Generators;
    const ICON: &'static str = "📄";
    const TAGS: &'static [&'static str] = &["lorem", "placeholder", "dummy", "text"];
}

impl ToolModule for LoremIpsumTool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        let count = request.option_u64("count").unwrap_or(3).clamp(1, MAX_COUNT) as usize;
        let mut rng = match request.option_u64("seed") {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let text = match request.option_str("unit").unwrap_or("paragraphs") {
            "words" => (0..count)
                .map(|_| word(&mut rng))
                .collect::<Vec<_>>()
                .join(" "),
            "sentences" => (0..count)
                .map(|_| sentence(&mut rng, SENTENCE_WORDS))
                .collect::<Vec<_>>()
                .join(" "),
            "paragraphs" => (0..count)
                .map(|_| paragraph(&mut rng))
                .collect::<Vec<_>>()
                .join("\n\n"),
            other => return Err(unsupported_choice("unit", other, UNITS)),
        };

        Ok(text)
    }
}

fn word(rng: &mut impl Rng) -> &'static str {
    WORDS[rng.gen_range(0..WORDS.len())]
}

fn sentence(rng: &mut impl Rng, word_count: usize) -> String {
    let mut text = (0..word_count)
        .map(|_| word(rng))
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(first) = text.get(..1) {
        let upper = first.to_uppercase();
        text.replace_range(..1, &upper);
    }
    text.push('.');
    text
}

fn paragraph(rng: &mut impl Rng) -> String {
    (0..PARAGRAPH_SENTENCES)
        .map(|_| {
            let words = 5 + rng.gen_range(0..8);
            sentence(rng, words)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
