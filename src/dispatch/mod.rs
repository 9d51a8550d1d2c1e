//! Response strategy selection — the decision core of the server.
//!
//! [`Selector::select`] turns a parsed request into exactly one [`Decision`]:
//! a registered route's body, a static text file, a static image file, or
//! not-found. Routes take priority over static resources, and a static
//! resource is only served when it exists *at decision time* and classifies
//! as a supported format.
//!
//! Selection has no side effects of its own — the outcome is a function of
//! the registered routes, the filesystem under the resource root, and the
//! fixed format sets — so it is tested directly, without a socket.

use std::path::PathBuf;

use crate::http::Request;
use crate::media::FileFormat;
use crate::resource::StaticResources;
use crate::router::Routes;

/// The response strategy chosen for a single request.
///
/// Exactly one variant is produced per request; the transport layer decides
/// how each variant goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// A registered route matched; carries the handler's response body.
    RouteMatch(String),
    /// An existing text asset (or directory index) to stream as text.
    StaticText(PathBuf),
    /// An existing image asset to stream as raw bytes.
    StaticImage(PathBuf),
    /// Nothing matched: no route, no file, or an unsupported format.
    NotFound,
}

/// Decides the response strategy for incoming requests.
///
/// Holds the route registry and the static resource root explicitly —
/// there is no process-wide state. Construct one per server.
///
/// # Examples
///
/// ```no_run
/// use monoserve::dispatch::{Decision, Selector};
/// use monoserve::http::Request;
/// use monoserve::resource::StaticResources;
/// use monoserve::router::Routes;
///
/// let mut routes = Routes::new();
/// routes.register("/hello", |_query| "world".to_owned());
///
/// let selector = Selector::new(routes, StaticResources::new("public"));
/// let raw = b"GET /hello?x=1 HTTP/1.1\r\nHost: localhost\r\n\r\n";
/// let request = Request::parse(raw).unwrap();
/// assert_eq!(selector.select(&request), Decision::RouteMatch("world".into()));
/// ```
#[derive(Debug, Clone)]
pub struct Selector {
    routes: Routes,
    resources: StaticResources,
}

impl Selector {
    /// Creates a selector over the given routes and resource root.
    pub fn new(routes: Routes, resources: StaticResources) -> Self {
        Self { routes, resources }
    }

    /// Returns the static resource view this selector consults.
    pub fn resources(&self) -> &StaticResources {
        &self.resources
    }

    /// Chooses the response strategy for `request`.
    ///
    /// Priority order, first match wins:
    ///
    /// 1. A route registered for the exact request path — the handler is
    ///    invoked with the raw query string and its body captured.
    /// 2. A static resource that exists under the root right now:
    ///    images become [`Decision::StaticImage`], text assets and
    ///    directory indexes become [`Decision::StaticText`].
    /// 3. Everything else — missing files, absent directory indexes,
    ///    unsupported formats — is [`Decision::NotFound`].
    pub fn select(&self, request: &Request) -> Decision {
        if let Some(handler) = self.routes.lookup(request.path()) {
            return Decision::RouteMatch(handler(request.query()));
        }

        match self.resources.resolve(request.path()) {
            Some(resolved) => match resolved.format {
                FileFormat::Image => Decision::StaticImage(resolved.path),
                FileFormat::Text => Decision::StaticText(resolved.path),
                FileFormat::Unsupported => Decision::NotFound,
            },
            None => Decision::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    fn request(target: &str) -> Request {
        let raw = format!("GET {target} HTTP/1.1\r\nHost: localhost\r\n\r\n");
        Request::parse(raw.as_bytes()).unwrap()
    }

    fn selector_with(routes: Routes, files: &[&str]) -> (TempDir, Selector) {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, b"content").unwrap();
        }
        let resources = StaticResources::new(dir.path());
        (dir, Selector::new(routes, resources))
    }

    #[test]
    fn route_match_forwards_the_query() {
        let mut routes = Routes::new();
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let record = Arc::clone(&seen);
        routes.register("/hello", move |query| {
            record.lock().unwrap().push(query.map(str::to_owned));
            "world".to_owned()
        });
        let (_dir, selector) = selector_with(routes, &[]);

        assert_eq!(
            selector.select(&request("/hello?x=1")),
            Decision::RouteMatch("world".into())
        );
        assert_eq!(
            selector.select(&request("/hello?")),
            Decision::RouteMatch("world".into())
        );
        assert_eq!(
            selector.select(&request("/hello")),
            Decision::RouteMatch("world".into())
        );

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![Some("x=1".to_owned()), Some(String::new()), None]
        );
    }

    #[test]
    fn route_takes_priority_over_static_file() {
        let mut routes = Routes::new();
        routes.register("/style.css", |_| "from-route".to_owned());
        let (_dir, selector) = selector_with(routes, &["style.css"]);
        assert_eq!(
            selector.select(&request("/style.css")),
            Decision::RouteMatch("from-route".into())
        );
    }

    #[test]
    fn duplicate_registration_uses_last_handler() {
        let mut routes = Routes::new();
        routes.register("/dup", |_| "first".to_owned());
        routes.register("/dup", |_| "second".to_owned());
        let (_dir, selector) = selector_with(routes, &[]);
        assert_eq!(
            selector.select(&request("/dup")),
            Decision::RouteMatch("second".into())
        );
    }

    #[test]
    fn css_file_is_static_text() {
        let (_dir, selector) = selector_with(Routes::new(), &["style.css"]);
        match selector.select(&request("/style.css")) {
            Decision::StaticText(path) => assert!(path.ends_with("style.css")),
            other => panic!("expected StaticText, got {other:?}"),
        }
    }

    #[test]
    fn png_file_is_static_image() {
        let (_dir, selector) = selector_with(Routes::new(), &["logo.png"]);
        match selector.select(&request("/logo.png")) {
            Decision::StaticImage(path) => assert!(path.ends_with("logo.png")),
            other => panic!("expected StaticImage, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let (_dir, selector) = selector_with(Routes::new(), &[]);
        assert_eq!(selector.select(&request("/about.html")), Decision::NotFound);
    }

    #[test]
    fn existing_file_with_unsupported_format_is_not_found() {
        let (_dir, selector) = selector_with(Routes::new(), &["video.mp4"]);
        assert_eq!(selector.select(&request("/video.mp4")), Decision::NotFound);
    }

    #[test]
    fn directory_request_serves_its_index() {
        let (_dir, selector) = selector_with(Routes::new(), &["docs/index.html"]);
        match selector.select(&request("/docs/")) {
            Decision::StaticText(path) => assert!(path.ends_with("docs/index.html")),
            other => panic!("expected StaticText, got {other:?}"),
        }
    }

    #[test]
    fn directory_request_without_index_is_not_found() {
        let (_dir, selector) = selector_with(Routes::new(), &["docs/other.html"]);
        assert_eq!(selector.select(&request("/docs/")), Decision::NotFound);
    }

    #[test]
    fn traversal_is_not_found() {
        let (_dir, selector) = selector_with(Routes::new(), &["ok.html"]);
        assert_eq!(
            selector.select(&request("/a/../ok.html")),
            Decision::NotFound
        );
    }

    #[test]
    fn selection_is_idempotent() {
        let mut routes = Routes::new();
        routes.register("/hello", |_| "world".to_owned());
        let (_dir, selector) = selector_with(routes, &["style.css"]);

        for target in ["/hello?x=1", "/style.css", "/missing.html"] {
            let req = request(target);
            assert_eq!(selector.select(&req), selector.select(&req));
        }
    }

    #[test]
    fn file_created_between_requests_becomes_visible() {
        let (dir, selector) = selector_with(Routes::new(), &[]);
        assert_eq!(selector.select(&request("/late.html")), Decision::NotFound);
        fs::write(dir.path().join("late.html"), b"<html></html>").unwrap();
        match selector.select(&request("/late.html")) {
            Decision::StaticText(_) => {}
            other => panic!("expected StaticText, got {other:?}"),
        }
    }

    #[test]
    fn handler_invoked_once_per_selection() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut routes = Routes::new();
        routes.register("/count", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            "ok".to_owned()
        });
        let (_dir, selector) = selector_with(routes, &[]);

        selector.select(&request("/count"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        selector.select(&request("/elsewhere"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
