//! Route registry — map exact path patterns to handler functions.
//!
//! This module provides [`Routes`], a registry of REST-style routes consulted
//! before any static resource lookup. Matching is exact string equality on
//! the request path: no wildcards, no prefixes, no parameter captures. A
//! registered handler receives the raw query string of the request (which
//! may be empty or absent) and returns the response body.
//!
//! The registry is populated before the server starts and never mutated
//! afterwards; registering the same pattern twice replaces the earlier
//! handler (last registration wins).

use std::collections::HashMap;
use std::sync::Arc;

/// Type-erased, shared handler: takes the optional raw query string and
/// returns the response body.
///
/// Handlers are stored behind `Arc<dyn Fn(…)>` so the registry can be cloned
/// cheaply. You never construct this type directly — pass a closure to
/// [`Routes::register`].
pub type Handler = Arc<dyn Fn(Option<&str>) -> String + Send + Sync + 'static>;

/// Registry of exact-match routes.
///
/// # Examples
///
/// ```
/// use monoserve::router::Routes;
///
/// let mut routes = Routes::new();
/// routes.register("/hello", |_query| "world".to_owned());
///
/// let handler = routes.lookup("/hello").unwrap();
/// assert_eq!(handler(Some("x=1")), "world");
/// assert!(routes.lookup("/hello/extra").is_none());
/// ```
#[derive(Clone, Default)]
pub struct Routes {
    table: HashMap<String, Handler>,
}

impl Routes {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for requests whose path equals `pattern`.
    ///
    /// Registering the same pattern again replaces the earlier handler;
    /// the last registration wins.
    pub fn register(
        &mut self,
        pattern: impl Into<String>,
        handler: impl Fn(Option<&str>) -> String + Send + Sync + 'static,
    ) {
        self.table.insert(pattern.into(), Arc::new(handler));
    }

    /// Returns the handler registered for `path`, if any.
    ///
    /// Lookup is an exact string match against registered patterns.
    pub fn lookup(&self, path: &str) -> Option<&Handler> {
        self.table.get(path)
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no routes have been registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl std::fmt::Debug for Routes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Routes")
            .field("patterns", &self.table.keys().collect::<Vec<_>>())
            .finish()
    }
}
