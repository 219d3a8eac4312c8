//! Password generator tool definition.

use rand::Rng;
use rand::rngs::OsRng;

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{OptionSpec, ToolCategory, ToolError, ToolModule, ToolRequest};

const DEFAULT_LENGTH: u64 = 16;
const MIN_LENGTH: u64 = 4;
const MAX_LENGTH: u64 = 64;

/// Character sets, in the order they are offered.
const CHARSETS: &[(&str, &str, bool)] = &[
    ("upper", "ABCDEFGHIJKLMNOPQRSTUVWXYZ", true),
    ("lower", "abcdefghijklmnopqrstuvwxyz", true),
    ("digits", "0123456789", true),
    ("symbols", "!@#$%^&*()-_=+[]{}|;:,.<>?", false),
];

const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: "length",
        description: "Password length (4-64)",
        default: "16",
        choices: &[],
    },
    OptionSpec {
        name: "upper",
        description: "Include uppercase letters",
        default: "true",
        choices: &["true", "false"],
    },
    OptionSpec {
        name: "lower",
        description: "Include lowercase letters",
        default: "true",
        choices: &["true", "false"],
    },
    OptionSpec {
        name: "digits",
        description: "Include digits",
        default: "true",
        choices: &["true", "false"],
    },
    OptionSpec {
        name: "symbols",
        description: "Include symbols",
        default: "false",
        choices: &["true", "false"],
    },
];

/// Password generator tool - random passwords from selectable character sets.
#[derive(Debug, Default)]
pub struct PasswordGeneratorTool;

impl ToolDefinition for PasswordGeneratorTool {
    const ID: &'static str = "password-generator";
    const NAME: &'static str = "Password Generator";
    const DESCRIPTION: &'static str = "Generate strong random passwords with a strength rating";
    const CATEGORY: ToolCategory = ToolCategory::Generators;
    const ICON: &'static str = "🔑";
    const TAGS: &'static [&'static str] = &["password", "random", "secure", "secret"];
}

/// Strength rating for a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    /// One point each for length >= 12, length >= 16, and every character class present.
    pub fn of(password: &str) -> Self {
        let len = password.chars().count();
        let score = [
            len >= 12,
            len >= 16,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ]
        .into_iter()
        .filter(|&hit| hit)
        .count();

        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Fair,
            5 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very strong",
        }
    }
}

impl ToolModule for PasswordGeneratorTool {
    fn options(&self) -> &'static [OptionSpec] {
        OPTIONS
    }

    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        let length = request
            .option_u64("length")
            .unwrap_or(DEFAULT_LENGTH)
            .clamp(MIN_LENGTH, MAX_LENGTH) as usize;

        let pool: Vec<char> = CHARSETS
            .iter()
            .filter(|(name, _, default)| request.option_bool(name).unwrap_or(*default))
            .flat_map(|(_, chars, _)| chars.chars())
            .collect();
        if pool.is_empty() {
            return Err(ToolError::invalid_input(
                "Select at least one character set",
            ));
        }

        let mut rng = OsRng;
        let password: String = (0..length)
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect();

        Ok(format!(
            "{}\nStrength: {}",
            password,
            Strength::of(&password).label()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(output: &str) -> &str {
        output.lines().next().unwrap()
    }

    #[test]
    fn test_defaults() {
        let output = PasswordGeneratorTool.run(&ToolRequest::default()).unwrap();
        let pw = password(&output);
        assert_eq!(pw.len(), 16);
        assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(output.contains("\nStrength: "));
    }

    #[test]
    fn test_length_is_clamped() {
        let request = ToolRequest::default().with_option("length", 1);
        let output = PasswordGeneratorTool.run(&request).unwrap();
        assert_eq!(password(&output).len(), 4);

        let request = ToolRequest::default().with_option("length", 500);
        let output = PasswordGeneratorTool.run(&request).unwrap();
        assert_eq!(password(&output).len(), 64);
    }

    #[test]
    fn test_single_charset() {
        let request = ToolRequest::default()
            .with_option("upper", false)
            .with_option("lower", false)
            .with_option("digits", true);
        let output = PasswordGeneratorTool.run(&request).unwrap();
        assert!(password(&output).chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_no_charset_is_an_error() {
        let request = ToolRequest::default()
            .with_option("upper", false)
            .with_option("lower", false)
            .with_option("digits", false);
        assert!(PasswordGeneratorTool.run(&request).is_err());
    }

    #[test]
    fn test_strength() {
        assert_eq!(Strength::of("abc"), Strength::Weak);
        assert_eq!(Strength::of("abcdefghijkA"), Strength::Fair);
        assert_eq!(Strength::of("abcdefghijkA1"), Strength::Fair);
        assert_eq!(Strength::of("abcdefghijklmnA1"), Strength::Strong);
        assert_eq!(Strength::of("abcdefghijklmnA1!"), Strength::VeryStrong);
    }
}
