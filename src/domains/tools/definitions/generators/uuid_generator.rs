//! UUID generator tool definition.

use uuid::Uuid;

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

const DEFAULT_COUNT: u64 = 5;
const MAX_COUNT: u64 = 50;

const OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "count",
    description: "Number of UUIDs to generate (1-50)",
    default: "5",
    choices: &[],
}];

/// UUID generator tool - random version 4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidGeneratorTool;

impl ToolDefinition for UuidGeneratorTool {
    const ID: &'static str = "uuid-generator";
    const NAME: &'static str = "UUID Generator";
    const DESCRIPTION: &'static str = "Generate random v4 UUIDs in bulk";
    const CATEGORY: ToolCategory = ToolCategory::Generators;
    const ICON: &'static str = "🆔";
    const TAGS: &'static [&'static str] = &["uuid", "guid", "random", "id"];
}

impl ToolModule for UuidGeneratorTool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        let count = request
            .option_u64("count")
            .unwrap_or(DEFAULT_COUNT)
            .clamp(1, MAX_COUNT);

        Ok((0..count)
            .map(|_| Uuid::new_v4().to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
