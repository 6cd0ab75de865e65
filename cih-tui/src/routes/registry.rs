//! Ordered route table with a guaranteed fallback.
//!
//! Routes are tested in declaration order and the first match wins. Every
//! registry carries exactly one wildcard route as its last entry, so
//! [`ViewRegistry::resolve`] is total: any string maps to some page.

use thiserror::Error;

use super::pattern::{Route, RoutePattern, WILDCARD};
use crate::views::Page;

/// Errors raised while assembling a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("route table has no fallback route")]
    MissingFallback,

    #[error("route table declares more than one fallback route")]
    DuplicateFallback,

    #[error("route `{0}` is declared more than once")]
    DuplicatePattern(String),

    #[error("route `{0}` must start with '/'")]
    InvalidPattern(String),

    #[error("route `{0}` is declared after the fallback and can never match")]
    UnreachableRoute(String),
}

/// Immutable route table resolving paths to pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRegistry {
    routes: Vec<Route>,
    fallback: Page,
}

impl ViewRegistry {
    /// Starts a new route table.
    pub fn builder() -> ViewRegistryBuilder {
        ViewRegistryBuilder::default()
    }

    /// The application's route table: Home, About, Dashboard and the 404 page.
    pub fn standard() -> Self {
        Self {
            routes: vec![
                Route::new(RoutePattern::parse("/"), Page::Home),
                Route::new(RoutePattern::parse("/about"), Page::About),
                Route::new(RoutePattern::parse("/dashboard"), Page::Dashboard),
                Route::new(RoutePattern::Wildcard, Page::NotFound),
            ],
            fallback: Page::NotFound,
        }
    }

    /// Resolves a path to exactly one page.
    ///
    /// Never fails: a path no exact route matches lands on the fallback page.
    pub fn resolve(&self, path: &str) -> Page {
        let page = self
            .routes
            .iter()
            .find(|route| route.pattern.matches(path))
            .map_or(self.fallback, |route| route.page);

        tracing::trace!(path, ?page, "resolved route");
        page
    }

    /// All routes in declaration order, fallback last.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The exact paths in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().filter_map(|route| match &route.pattern {
            RoutePattern::Exact(path) => Some(path.as_str()),
            RoutePattern::Wildcard => None,
        })
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Collects routes in order and validates them into a [`ViewRegistry`].
#[derive(Debug, Clone, Default)]
pub struct ViewRegistryBuilder {
    entries: Vec<(String, Page)>,
}

impl ViewRegistryBuilder {
    /// Adds a route. `"*"` declares the fallback.
    pub fn route(mut self, pattern: impl Into<String>, page: Page) -> Self {
        self.entries.push((pattern.into(), page));
        self
    }

    /// Adds the fallback route.
    pub fn fallback(self, page: Page) -> Self {
        self.route(WILDCARD, page)
    }

    /// Validates the table.
    pub fn build(self) -> Result<ViewRegistry, RegistryError> {
        let mut routes: Vec<Route> = Vec::with_capacity(self.entries.len());
        let mut fallback = None;

        for (raw, page) in self.entries {
            let pattern = RoutePattern::parse(&raw);

            match &pattern {
                RoutePattern::Wildcard => {
                    if fallback.is_some() {
                        return Err(RegistryError::DuplicateFallback);
                    }
                    fallback = Some(page);
                }
                RoutePattern::Exact(path) => {
                    if !path.starts_with('/') {
                        return Err(RegistryError::InvalidPattern(raw));
                    }
                    if fallback.is_some() {
                        return Err(RegistryError::UnreachableRoute(raw));
                    }
                    if routes.iter().any(|route| route.pattern == pattern) {
                        return Err(RegistryError::DuplicatePattern(raw));
                    }
                }
            }

            routes.push(Route::new(pattern, page));
        }

        let fallback = fallback.ok_or(RegistryError::MissingFallback)?;
        Ok(ViewRegistry { routes, fallback })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_resolves_known_paths() {
        let registry = ViewRegistry::standard();

        assert_eq!(registry.resolve("/"), Page::Home);
        assert_eq!(registry.resolve("/about"), Page::About);
        assert_eq!(registry.resolve("/dashboard"), Page::Dashboard);
    }

    #[test]
    fn standard_routes_everything_else_to_not_found() {
        let registry = ViewRegistry::standard();

        for path in [
            "",
            "/unknown-xyz",
            "/about/",
            "/About",
            "/dashboard/stats",
            "//",
            "about",
            "/ ",
            " /",
            "/about?tab=team",
            "/caf\u{e9}",
        ] {
            assert_eq!(registry.resolve(path), Page::NotFound, "path {path:?}");
        }
    }

    #[test]
    fn standard_matches_equivalent_builder_table() {
        let built = ViewRegistry::builder()
            .route("/", Page::Home)
            .route("/about", Page::About)
            .route("/dashboard", Page::Dashboard)
            .fallback(Page::NotFound)
            .build()
            .unwrap();

        assert_eq!(built, ViewRegistry::standard());
    }

    #[test]
    fn first_declared_route_wins() {
        let registry = ViewRegistry::builder()
            .route("/", Page::Dashboard)
            .route("/about", Page::About)
            .fallback(Page::NotFound)
            .build()
            .unwrap();

        assert_eq!(registry.resolve("/"), Page::Dashboard);
    }

    #[test]
    fn fallback_only_table_resolves_everything_to_fallback() {
        let registry = ViewRegistry::builder()
            .fallback(Page::Home)
            .build()
            .unwrap();

        assert_eq!(registry.resolve("/"), Page::Home);
        assert_eq!(registry.resolve("/anything"), Page::Home);
    }

    #[test]
    fn build_without_fallback_fails() {
        let result = ViewRegistry::builder().route("/", Page::Home).build();
        assert_eq!(result, Err(RegistryError::MissingFallback));
    }

    #[test]
    fn build_with_two_fallbacks_fails() {
        let result = ViewRegistry::builder()
            .route("/", Page::Home)
            .fallback(Page::NotFound)
            .route("*", Page::Home)
            .build();

        assert_eq!(result, Err(RegistryError::DuplicateFallback));
    }

    #[test]
    fn build_with_duplicate_pattern_fails() {
        let result = ViewRegistry::builder()
            .route("/about", Page::About)
            .route("/about", Page::Home)
            .fallback(Page::NotFound)
            .build();

        assert_eq!(
            result,
            Err(RegistryError::DuplicatePattern("/about".into()))
        );
    }

    #[test]
    fn build_with_relative_pattern_fails() {
        let result = ViewRegistry::builder()
            .route("about", Page::About)
            .fallback(Page::NotFound)
            .build();

        assert_eq!(result, Err(RegistryError::InvalidPattern("about".into())));
    }

    #[test]
    fn build_with_route_after_fallback_fails() {
        let result = ViewRegistry::builder()
            .fallback(Page::NotFound)
            .route("/about", Page::About)
            .build();

        assert_eq!(
            result,
            Err(RegistryError::UnreachableRoute("/about".into()))
        );
    }

    #[test]
    fn routes_keep_declaration_order_with_fallback_last() {
        let registry = ViewRegistry::standard();
        let patterns: Vec<String> = registry
            .routes()
            .iter()
            .map(|route| route.pattern.to_string())
            .collect();

        assert_eq!(patterns, ["/", "/about", "/dashboard", "*"]);
        assert_eq!(registry.routes()[3].page, Page::NotFound);
    }

    #[test]
    fn paths_lists_exact_patterns_only() {
        let registry = ViewRegistry::standard();
        let paths: Vec<&str> = registry.paths().collect();

        assert_eq!(paths, ["/", "/about", "/dashboard"]);
    }

    #[test]
    fn registry_error_messages_name_the_route() {
        assert_eq!(
            RegistryError::UnreachableRoute("/x".into()).to_string(),
            "route `/x` is declared after the fallback and can never match"
        );
        assert_eq!(
            RegistryError::MissingFallback.to_string(),
            "route table has no fallback route"
        );
    }
}
