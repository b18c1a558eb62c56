//! Request context.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use http::Method;

use crate::lifecycle::TimingContext;

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID from the clock and a process-wide counter.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);

        Self(format!("{:x}-{:04x}", nanos, seq))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string or form body parameters.
pub type Params = HashMap<String, String>;

/// Per-request context handed to page handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// Query string parameters.
    pub query: Params,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a context from a method and a path that may carry a query string.
    pub fn new(method: Method, path_with_query: impl AsRef<str>) -> Self {
        let (path, query) = match path_with_query.as_ref().split_once('?') {
            Some((path, query)) => (path, parse_form(query)),
            None => (path_with_query.as_ref(), Params::new()),
        };

        Self {
            request_id: RequestId::generate(),
            method,
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query,
            timing: TimingContext::new(),
        }
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }
}

/// Parse `application/x-www-form-urlencoded` text.
///
/// Later duplicates win. Invalid percent escapes are kept verbatim.
pub fn parse_form(input: &str) -> Params {
    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn test_context_splits_query() {
        let ctx = RequestContext::new(Method::GET, "/privacy?ref=footer");
        assert_eq!(ctx.path, "/privacy");
        assert_eq!(ctx.query_param("ref"), Some("footer"));
    }

    #[test]
    fn test_empty_path_is_root() {
        let ctx = RequestContext::new(Method::GET, "");
        assert_eq!(ctx.path, "/");
    }

    #[test]
    fn test_parse_form() {
        let params = parse_form("product_id=love-wins-mug&note=hello+world%21&empty=");
        assert_eq!(params.get("product_id").map(String::as_str), Some("love-wins-mug"));
        assert_eq!(params.get("note").map(String::as_str), Some("hello world!"));
        assert_eq!(params.get("empty").map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_form_keeps_bad_escapes() {
        let params = parse_form("a=100%&b=%zz");
        assert_eq!(params.get("a").map(String::as_str), Some("100%"));
        assert_eq!(params.get("b").map(String::as_str), Some("%zz"));
    }
}
