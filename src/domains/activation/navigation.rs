//! Navigation destinations.
//!
//! Two logical places exist: the catalog root, optionally with a search
//! query, and the detail view of one tool. Paths look like `/`,
//! `/?q=json` and `/tools/base64`; anything else lands on the catalog.

use serde::Serialize;
use tracing::{debug, info};

use crate::domains::tools::ToolRegistry;

const TOOLS_PREFIX: &str = "/tools/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "destination", rename_all = "snake_case")]
pub enum Destination {
    Catalog {
        #[serde(skip_serializing_if = "Option::is_none")]
        query: Option<String>,
    },
    Tool {
        id: String,
    },
}

impl Destination {
    pub fn catalog_root() -> Self {
        Self::Catalog { query: None }
    }

    pub fn tool(id: impl Into<String>) -> Self {
        Self::Tool { id: id.into() }
    }

    /// Parse a path. Unrecognised paths map to the catalog root.
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let (route, query) = match path.split_once('?') {
            Some((route, query)) => (route, Some(query)),
            None => (path, None),
        };
        let route = route.trim_end_matches('/');

        if route.is_empty() {
            return Self::Catalog {
                query: query.and_then(search_query),
            };
        }

        if let Some(id) = route.strip_prefix(TOOLS_PREFIX) {
            if !id.is_empty() && !id.contains('/') {
                return Self::tool(id);
            }
        }

        debug!("Unrecognised path '{}', using catalog root", path);
        Self::catalog_root()
    }

    /// Redirect a tool destination with no registered tool to the catalog root.
    pub fn resolve(self, registry: &ToolRegistry) -> Self {
        match self {
            Self::Tool { id } if !registry.contains(&id) => {
                info!("Unknown tool '{}', redirecting to catalog", id);
                Self::catalog_root()
            }
            other => other,
        }
    }

    /// Path form of this destination.
    pub fn path(&self) -> String {
        match self {
            Self::Catalog { query: None } => "/".to_string(),
            Self::Catalog { query: Some(q) } => {
                match serde_urlencoded::to_string([("q", q.as_str())]) {
                    Ok(encoded) => format!("/?{}", encoded),
                    Err(_) => "/".to_string(),
                }
            }
            Self::Tool { id } => format!("{}{}", TOOLS_PREFIX, id),
        }
    }
}

/// Extract a non-blank `q` parameter.
fn search_query(raw: &str) -> Option<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value)
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        assert_eq!(Destination::parse("/"), Destination::catalog_root());
        assert_eq!(Destination::parse(""), Destination::catalog_root());
        assert_eq!(
            Destination::parse("/?q=json+format"),
            Destination::Catalog {
                query: Some("json format".to_string())
            }
        );
        assert_eq!(Destination::parse("/?q=%20"), Destination::catalog_root());
    }

    #[test]
    fn test_parse_tool() {
        assert_eq!(Destination::parse("/tools/base64"), Destination::tool("base64"));
        assert_eq!(Destination::parse("/tools/base64/"), Destination::tool("base64"));
        assert_eq!(Destination::parse("/tools/"), Destination::catalog_root());
        assert_eq!(Destination::parse("/tools/a/b"), Destination::catalog_root());
    }

    #[test]
    fn test_unknown_paths_land_on_catalog() {
        assert_eq!(Destination::parse("/settings"), Destination::catalog_root());
        assert_eq!(Destination::parse("/toolsbase64"), Destination::catalog_root());
    }

    #[test]
    fn test_resolve_redirects_unknown_tool() {
        let registry = ToolRegistry::builtin().unwrap();
        assert_eq!(
            Destination::tool("base64").resolve(&registry),
            Destination::tool("base64")
        );
        assert_eq!(
            Destination::tool("deleted").resolve(&registry),
            Destination::catalog_root()
        );
    }

    #[test]
    fn test_path_round_trip() {
        for dest in [
            Destination::catalog_root(),
            Destination::Catalog {
                query: Some("a&b c".to_string()),
            },
            Destination::tool("json-formatter"),
        ] {
            assert_eq!(Destination::parse(&dest.path()), dest);
        }
    }
}
