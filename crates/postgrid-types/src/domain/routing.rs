use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_ARTICLE_PREFIX: &str = "/article";
pub const DEFAULT_ID_PARAM: &str = "id";

/// Addressing scheme for article pages.
///
/// A site uses exactly one scheme: the same value generates article links and
/// resolves the id on the article page, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "lowercase")]
pub enum RoutingScheme {
    /// `/article?id=<id>`
    Query {
        #[serde(default = "default_param")]
        param: String,
        #[serde(default = "default_prefix")]
        prefix: String,
    },
    /// `/article/<id>`
    Path {
        #[serde(default = "default_prefix")]
        prefix: String,
    },
}

fn default_param() -> String {
    DEFAULT_ID_PARAM.to_string()
}

fn default_prefix() -> String {
    DEFAULT_ARTICLE_PREFIX.to_string()
}

impl Default for RoutingScheme {
    fn default() -> Self {
        RoutingScheme::Query {
            param: default_param(),
            prefix: default_prefix(),
        }
    }
}

impl RoutingScheme {
    pub fn path() -> Self {
        RoutingScheme::Path {
            prefix: default_prefix(),
        }
    }

    /// Article page location without a trailing slash
    pub fn prefix(&self) -> &str {
        match self {
            RoutingScheme::Query { prefix, .. } | RoutingScheme::Path { prefix } => {
                prefix.trim_end_matches('/')
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RoutingScheme::Query { .. } => "query",
            RoutingScheme::Path { .. } => "path",
        }
    }
}

impl fmt::Display for RoutingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingScheme::Query { param, .. } => write!(f, "{}?{}=<id>", self.prefix(), param),
            RoutingScheme::Path { .. } => write!(f, "{}/<id>", self.prefix()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_query_scheme() {
        let scheme = RoutingScheme::default();
        assert_eq!(scheme.name(), "query");
        assert_eq!(scheme.to_string(), "/article?id=<id>");
    }

    #[test]
    fn test_prefix_trims_trailing_slash() {
        let scheme = RoutingScheme::Path {
            prefix: "/posts/".to_string(),
        };
        assert_eq!(scheme.prefix(), "/posts");
        assert_eq!(scheme.to_string(), "/posts/<id>");
    }

    #[test]
    fn test_deserialize_fills_defaults() -> anyhow::Result<()> {
        let scheme: RoutingScheme = serde_json::from_str(r#"{"scheme": "path"}"#)?;
        assert_eq!(scheme, RoutingScheme::path());

        let scheme: RoutingScheme = serde_json::from_str(r#"{"scheme": "query", "param": "post"}"#)?;
        assert_eq!(
            scheme,
            RoutingScheme::Query {
                param: "post".to_string(),
                prefix: "/article".to_string(),
            }
        );
        Ok(())
    }
}
