//! CSV to JSON tool definition.
//!
//! The first row is the header. Every following row becomes an object
//! keyed by header, in header order; missing cells become `""` and
//! surplus cells are dropped.

use csv::{ReaderBuilder, Trim};
use serde_json::{Map, Value};

use crate::domains::tools::definitions::{ToolDefinition, unsupported_choice};
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

const DELIMITERS: &[&str] = &["comma", "semicolon", "tab", "pipe"];

const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: "delimiter",
        description: "Field separator",
        default: "comma",
        choices: DELIMITERS,
    },
    OptionSpec {
        name: "minify",
        description: "Emit compact single-line JSON",
        default: "false",
        choices: &["true", "false"],
    },
];

/// CSV to JSON tool - rows to an array of objects.
#[derive(Debug, Default)]
pub struct CsvToJsonTool;

impl ToolDefinition for CsvToJsonTool {
    const ID: &'static str = "csv-to-json";
    const NAME: &'static str = "CSV to JSON";
    const DESCRIPTION: &'static str = "Convert CSV data with a header row to a JSON array";
    const CATEGORY: ToolCategory = ToolCategory::Converters;
    const ICON: &'static str = "📊";
    const TAGS: &'static [&'static str] = &["csv", "json", "table", "spreadsheet", "convert"];
}

fn delimiter(name: &str) -> Result<u8, ToolError> {
    match name {
        "comma" | "," => Ok(b','),
        "semicolon" | ";" => Ok(b';'),
        "tab" | "\t" => Ok(b'\t'),
        "pipe" | "|" => Ok(b'|'),
        other => Err(unsupported_choice("delimiter", other, DELIMITERS)),
    }
}

/// Parse CSV text into one JSON object per data row.
pub fn to_rows(input: &str, delimiter: u8) -> Result<Vec<Value>, ToolError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input.trim().as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ToolError::invalid_input(e.to_string()))?
        .clone();

    let rows = reader
        .records()
        .map(|record| {
            let record = record.map_err(|e| ToolError::invalid_input(e.to_string()))?;
            let row: Map<String, Value> = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let cell = record.get(i).unwrap_or("");
                    (header.to_string(), Value::String(cell.to_string()))
                })
                .collect();
            Ok(Value::Object(row))
        })
        .collect();
    rows
}

impl ToolModule for CsvToJsonTool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        if request.input.trim().is_empty() {
            return Ok(String::new());
        }

        let delimiter = delimiter(request.option_str("delimiter").unwrap_or("comma"))?;
        let rows = Value::Array(to_rows(&request.input, delimiter)?);

        let rendered = if request.option_bool("minify").unwrap_or(false) {
            serde_json::to_string(&rows)
        } else {
            serde_json::to_string_pretty(&rows)
        };
        rendered.map_err(|e| ToolError::invalid_input(e.to_string()))
    }
}
