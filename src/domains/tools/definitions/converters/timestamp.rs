//! Unix timestamp converter tool definition.
//!
//! Converts between Unix timestamps and calendar dates, always in UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolCategory, ToolError, ToolModule, ToolRequest};

/// Numeric inputs with at least this many digits are read as milliseconds.
const MILLIS_DIGITS: usize = 13;

/// Timestamp tool - Unix seconds/milliseconds to and from dates.
#[derive(Debug, Default)]
pub struct TimestampTool;

impl ToolDefinition for TimestampTool {
    const ID: &'static str = "timestamp";
    const NAME: &'static str = "Timestamp Converter";
    const DESCRIPTION: &'static str = "Convert Unix timestamps to dates and back";
    const CATEGORY: ToolCategory = ToolCategory::Converters;
    const ICON: &'static str = "🕐";
    const TAGS: &'static [&'static str] = &["unix", "epoch", "date", "time", "iso"];
}

impl ToolModule for TimestampTool {
    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        let input = request.input.trim();
        let date = if input.is_empty() {
            Utc::now()
        } else {
            parse(input).ok_or_else(|| {
                ToolError::invalid_input(format!("Could not parse \"{}\" as a timestamp", input))
            })?
        };

        Ok(format!(
            "Unix (s): {}\nUnix (ms): {}\nISO 8601: {}\nUTC: {}",
            date.timestamp(),
            date.timestamp_millis(),
            date.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            date.format("%a, %d %b %Y %H:%M:%S GMT"),
        ))
    }
}

/// Parse a Unix timestamp or a date string.
pub fn parse(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(n) = input.parse::<i64>() {
        let digits = input.trim_start_matches(['-', '+']).len();
        let millis = if digits >= MILLIS_DIGITS {
            n
        } else {
            n.checked_mul(1000)?
        };
        return DateTime::from_timestamp_millis(millis);
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds() {
        let output = TimestampTool.run(&ToolRequest::new("1700000000")).unwrap();
        assert_eq!(
            output,
            "Unix (s): 1700000000\nUnix (ms): 1700000000000\nISO 8601: 2023-11-14T22:13:20.000Z\nUTC: Tue, 14 Nov 2023 22:13:20 GMT"
        );
    }

    #[test]
    fn test_milliseconds() {
        let date = parse("1700000000123").unwrap();
        assert_eq!(date.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_date_strings() {
        assert_eq!(parse("2024-11-15T00:00:00Z").unwrap().timestamp(), 1_731_628_800);
        assert_eq!(parse("2024-11-15").unwrap().timestamp(), 1_731_628_800);
        assert_eq!(parse("2024-11-15 01:00:00").unwrap().timestamp(), 1_731_632_400);
    }

    #[test]
    fn test_unparseable() {
        let err = TimestampTool.run(&ToolRequest::new("yesterday-ish")).unwrap_err();
        assert!(err.to_string().contains("yesterday-ish"));
    }

    #[test]
    fn test_empty_input_is_now() {
        let output = TimestampTool.run(&ToolRequest::new("")).unwrap();
        assert!(output.starts_with("Unix (s): "));
    }
}
