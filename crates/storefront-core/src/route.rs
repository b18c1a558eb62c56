//! Routes served by the storefront.

use http::Method;

use crate::error::PageError;

const PAGE_METHODS: &str = "GET, HEAD";
const CART_METHODS: &str = "POST";

/// A page or endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page with the featured collection.
    Home,
    Privacy,
    Terms,
    Returns,
    /// Add-to-cart form endpoint.
    AddToCart,
}

impl Route {
    /// Every route that renders an HTML page.
    pub const PAGES: [Route; 4] = [Route::Home, Route::Privacy, Route::Terms, Route::Returns];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Privacy => "/privacy",
            Route::Terms => "/terms",
            Route::Returns => "/returns",
            Route::AddToCart => "/api/cart",
        }
    }

    /// Stable name used in logs and section markers.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Privacy => "privacy",
            Route::Terms => "terms",
            Route::Returns => "returns",
            Route::AddToCart => "add-to-cart",
        }
    }

    pub fn is_page(&self) -> bool {
        !matches!(self, Route::AddToCart)
    }

    /// File a static export writes this page to, relative to the output root.
    pub fn export_path(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("index.html"),
            Route::Privacy => Some("privacy/index.html"),
            Route::Terms => Some("terms/index.html"),
            Route::Returns => Some("returns/index.html"),
            Route::AddToCart => None,
        }
    }

    /// Match a route by path alone. Query strings and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = normalize(path);
        [
            Route::Home,
            Route::Privacy,
            Route::Terms,
            Route::Returns,
            Route::AddToCart,
        ]
        .into_iter()
        .find(|route| route.path() == path)
    }

    /// Resolve a request to a route, checking the method.
    pub fn resolve(method: &Method, path: &str) -> Result<Route, PageError> {
        let is_read = *method == Method::GET || *method == Method::HEAD;

        match Route::from_path(path) {
            Some(Route::AddToCart) if *method == Method::POST => Ok(Route::AddToCart),
            Some(Route::AddToCart) => Err(not_allowed(method, path, CART_METHODS)),
            Some(route) if is_read => Ok(route),
            Some(_) => Err(not_allowed(method, path, PAGE_METHODS)),
            None if is_read => Err(PageError::NotFound(normalize(path).to_string())),
            None => Err(not_allowed(method, path, PAGE_METHODS)),
        }
    }
}

fn not_allowed(method: &Method, path: &str, allowed: &'static str) -> PageError {
    PageError::MethodNotAllowed {
        method: method.to_string(),
        path: normalize(path).to_string(),
        allowed,
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_pages() {
        assert_eq!(Route::resolve(&Method::GET, "/"), Ok(Route::Home));
        assert_eq!(Route::resolve(&Method::GET, "/privacy"), Ok(Route::Privacy));
        assert_eq!(Route::resolve(&Method::HEAD, "/terms/"), Ok(Route::Terms));
        assert_eq!(Route::resolve(&Method::GET, "/returns?from=footer"), Ok(Route::Returns));
        assert_eq!(Route::resolve(&Method::GET, ""), Ok(Route::Home));
    }

    #[test]
    fn test_resolve_cart() {
        assert_eq!(Route::resolve(&Method::POST, "/api/cart"), Ok(Route::AddToCart));

        let err = Route::resolve(&Method::GET, "/api/cart").unwrap_err();
        assert_eq!(err.allow_header(), Some("POST"));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(
            Route::resolve(&Method::GET, "/shop/"),
            Err(PageError::NotFound("/shop".to_string()))
        );
        assert!(matches!(
            Route::resolve(&Method::DELETE, "/shop"),
            Err(PageError::MethodNotAllowed { .. })
        ));
    }

    #[test]
    fn test_page_rejects_post() {
        let err = Route::resolve(&Method::POST, "/").unwrap_err();
        assert_eq!(err.allow_header(), Some("GET, HEAD"));
    }

    #[test]
    fn test_export_paths() {
        let exported: Vec<&str> = Route::PAGES.iter().filter_map(|r| r.export_path()).collect();
        assert_eq!(
            exported,
            vec!["index.html", "privacy/index.html", "terms/index.html", "returns/index.html"]
        );
        assert!(Route::AddToCart.export_path().is_none());
        assert!(Route::PAGES.iter().all(Route::is_page));
    }
}
