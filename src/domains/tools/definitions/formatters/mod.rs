pub mod json_formatter;

pub use json_formatter::JsonFormatterTool;
