//! Path patterns for the route table.

use std::fmt;

use serde::Serialize;

use crate::views::Page;

/// Token that declares the catch-all route.
pub const WILDCARD: &str = "*";

/// A path pattern: either an exact path or the catch-all wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "path")]
pub enum RoutePattern {
    /// Matches a path only when the strings are equal.
    Exact(String),
    /// Matches every path.
    Wildcard,
}

impl RoutePattern {
    /// Parses a pattern as written in a route table (`*` is the wildcard).
    pub fn parse(pattern: &str) -> Self {
        if pattern == WILDCARD {
            Self::Wildcard
        } else {
            Self::Exact(pattern.to_string())
        }
    }

    /// Returns true if this pattern matches `path`.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == path,
            Self::Wildcard => true,
        }
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(path) => f.write_str(path),
            Self::Wildcard => f.write_str(WILDCARD),
        }
    }
}

/// An association between a path pattern and the page it renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub pattern: RoutePattern,
    pub page: Page,
}

impl Route {
    pub fn new(pattern: RoutePattern, page: Page) -> Self {
        Self { pattern, page }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_star_is_wildcard() {
        assert_eq!(RoutePattern::parse("*"), RoutePattern::Wildcard);
    }

    #[test]
    fn parse_path_is_exact() {
        assert_eq!(
            RoutePattern::parse("/about"),
            RoutePattern::Exact("/about".into())
        );
    }

    #[test]
    fn exact_matches_only_equal_strings() {
        let pattern = RoutePattern::parse("/about");

        assert!(pattern.matches("/about"));
        assert!(!pattern.matches("/about/"));
        assert!(!pattern.matches("/About"));
        assert!(!pattern.matches("/about/team"));
        assert!(!pattern.matches(""));
    }

    #[test]
    fn wildcard_matches_anything() {
        let pattern = RoutePattern::Wildcard;

        assert!(pattern.matches(""));
        assert!(pattern.matches("/"));
        assert!(pattern.matches("/unknown-xyz"));
        assert!(pattern.matches("not a path at all"));
    }

    #[test]
    fn display_round_trips_table_notation() {
        assert_eq!(RoutePattern::parse("/dashboard").to_string(), "/dashboard");
        assert_eq!(RoutePattern::Wildcard.to_string(), "*");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&RoutePattern::Exact("/".into())).unwrap();
        assert_eq!(json, r#"{"kind":"exact","path":"/"}"#);

        let json = serde_json::to_string(&RoutePattern::Wildcard).unwrap();
        assert_eq!(json, r#"{"kind":"wildcard"}"#);
    }
}
