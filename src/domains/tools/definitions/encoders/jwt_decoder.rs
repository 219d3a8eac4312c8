//! JWT decoder tool definition.
//!
//! Decodes the header and payload of a JSON Web Token. The signature is
//! shown as-is and never verified.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolCategory, ToolError, ToolModule, ToolRequest};

/// JWT decoder tool - header, payload and timing claims.
#[derive(Debug, Default)]
pub struct JwtDecoderTool;

impl ToolDefinition for JwtDecoderTool {
    const ID: &'static str = "jwt-decoder";
    const NAME: &'static str = "JWT Decoder";
    const DESCRIPTION: &'static str = "Decode JSON Web Tokens and inspect their claims";
    const CATEGORY: ToolCategory = ToolCategory::Encoders;
    const ICON: &'static str = "🎫";
    const TAGS: &'static [&'static str] = &["jwt", "token", "auth", "decode", "claims"];
}

/// A token split into its decoded parts.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedJwt {
    pub header: Value,
    pub payload: Value,
    pub signature: String,
}

impl DecodedJwt {
    pub fn parse(token: &str) -> Result<Self, ToolError> {
        let parts: Vec<&str> = token.trim().split('.').collect();
        let [header, payload, signature] = parts.as_slice() else {
            return Err(ToolError::invalid_input(
                "Invalid JWT format. Token must have 3 parts separated by dots.",
            ));
        };

        Ok(Self {
            header: decode_part("header", header)?,
            payload: decode_part("payload", payload)?,
            signature: signature.to_string(),
        })
    }

    /// A numeric-date claim (`iat`, `exp`, `nbf`) as a UTC time.
    pub fn time_claim(&self, name: &str) -> Option<DateTime<Utc>> {
        self.payload
            .get(name)
            .and_then(Value::as_i64)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

fn decode_part(name: &str, part: &str) -> Result<Value, ToolError> {
    let invalid = || ToolError::invalid_input(format!("Invalid JWT {}: not base64url-encoded JSON", name));
    let bytes = URL_SAFE_NO_PAD
        .decode(part.trim_end_matches('='))
        .map_err(|_| invalid())?;
    serde_json::from_slice(&bytes).map_err(|_| invalid())
}

fn pretty(value: &Value) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(|e| ToolError::invalid_input(e.to_string()))
}

impl ToolModule for JwtDecoderTool {
    fn run(&self, request: &ToolRequest) -> Result<String, ToolError> {
        if request.input.trim().is_empty() {
            return Ok(String::new());
        }

        let jwt = DecodedJwt::parse(&request.input)?;
        let mut out = format!(
            "Header:\n{}\n\nPayload:\n{}\n\nSignature: {}",
            pretty(&jwt.header)?,
            pretty(&jwt.payload)?,
            jwt.signature
        );

        if let Some(issued) = jwt.time_claim("iat") {
            out.push_str(&format!("\nIssued: {}", issued.to_rfc3339()));
        }
        if let Some(expires) = jwt.time_claim("exp") {
            let status = if expires < Utc::now() {
                "expired"
            } else {
                "valid"
            };
            out.push_str(&format!("\nExpires: {} ({})", expires.to_rfc3339(), status));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token(header: &Value, payload: &Value) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(header.to_string()),
            URL_SAFE_NO_PAD.encode(payload.to_string())
        )
    }

    #[test]
    fn test_parse() {
        let header = json!({ "alg": "HS256", "typ": "JWT" });
        let payload = json!({ "sub": "42", "iat": 1700000000 });
        let jwt = DecodedJwt::parse(&token(&header, &payload)).unwrap();

        assert_eq!(jwt.header, header);
        assert_eq!(jwt.payload, payload);
        assert_eq!(jwt.signature, "sig");
        assert_eq!(
            jwt.time_claim("iat").unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
        assert!(jwt.time_claim("exp").is_none());
    }

    #[test]
    fn test_run_reports_expiry() {
        let header = json!({ "alg": "none" });
        let expired = token(&header, &json!({ "exp": 1000 }));
        let output = JwtDecoderTool.run(&ToolRequest::new(expired)).unwrap();
        assert!(output.starts_with("Header:\n{\n  \"alg\": \"none\"\n}"));
        assert!(output.ends_with("(expired)"));

        let later = token(&header, &json!({ "exp": 32503680000i64 }));
        let output = JwtDecoderTool.run(&ToolRequest::new(later)).unwrap();
        assert!(output.ends_with("(valid)"));
    }

    #[test]
    fn test_padded_segments_are_accepted() {
        let header = URL_SAFE_NO_PAD.encode(r#"{"a":1}"#);
        let request = ToolRequest::new(format!("{}==.{}.x", header, header));
        assert!(JwtDecoderTool.run(&request).is_ok());
    }

    #[test]
    fn test_invalid_tokens() {
        let err = JwtDecoderTool.run(&ToolRequest::new("a.b")).unwrap_err();
        assert!(err.to_string().contains("3 parts"));
        assert!(JwtDecoderTool.run(&ToolRequest::new("!!.e30.x")).is_err());
        assert!(JwtDecoderTool.run(&ToolRequest::new("")).unwrap().is_empty());
    }
}
