//! Decision rendering — turns a [`Decision`] into a wire-ready [`Response`].
//!
//! This is the only place response bytes are shaped: route bodies go out as
//! 200s, static files are read and tagged with a content type derived from
//! their extension, and everything else becomes the 404 page. A file that
//! vanished between selection and rendering is reported here as a 404, not
//! a crash.

use std::path::Path;

use tokio::fs;
use tracing::warn;

use crate::dispatch::Decision;
use crate::http::{Response, StatusCode};
use crate::media;

const NOT_FOUND_BODY: &str = "\
<!DOCTYPE html>
<html>
<head><title>404 Not Found</title></head>
<body><h1>404 Not Found</h1><p>The requested resource could not be served.</p></body>
</html>
";

/// Renders `decision` into a complete [`Response`].
pub async fn render(decision: Decision) -> Response {
    match decision {
        Decision::RouteMatch(body) => Response::new(StatusCode::Ok).body(body),
        Decision::StaticText(path) | Decision::StaticImage(path) => serve_file(&path).await,
        Decision::NotFound => not_found(),
    }
}

/// The error response emitted for every unserveable request.
pub fn not_found() -> Response {
    Response::new(StatusCode::NotFound)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(NOT_FOUND_BODY)
}

/// Reads `path` and wraps its bytes with the extension's content type.
///
/// The existence check happened at selection time; if the file disappeared
/// since, the read fails and the request degrades to the 404 response.
async fn serve_file(path: &Path) -> Response {
    match fs::read(path).await {
        Ok(bytes) => {
            let content_type = media::content_type(&path.to_string_lossy());
            Response::new(StatusCode::Ok)
                .header("Content-Type", content_type)
                .body_bytes(bytes)
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "resolved file could not be read");
            not_found()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn route_match_renders_the_handler_body() {
        let response = render(Decision::RouteMatch("world".into())).await;
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body_ref(), b"world");
    }

    #[tokio::test]
    async fn static_text_carries_the_file_bytes_and_content_type() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("style.css");
        std_fs::write(&path, b"body { margin: 0; }").unwrap();

        let response = render(Decision::StaticText(path)).await;
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body_ref(), b"body { margin: 0; }");
        let wire = String::from_utf8(response.into_bytes().to_vec()).unwrap();
        assert!(wire.contains("Content-Type: text/css\r\n"));
    }

    #[tokio::test]
    async fn static_image_carries_raw_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.png");
        let payload = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
        std_fs::write(&path, payload).unwrap();

        let response = render(Decision::StaticImage(path)).await;
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body_ref(), &payload);
        let wire = response.into_bytes();
        let text = String::from_utf8_lossy(&wire);
        assert!(text.contains("Content-Type: image/png\r\n"));
    }

    #[tokio::test]
    async fn directory_index_renders_as_html() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        std_fs::write(&path, b"<html></html>").unwrap();

        let response = render(Decision::StaticText(path)).await;
        let wire = String::from_utf8(response.into_bytes().to_vec()).unwrap();
        assert!(wire.contains("Content-Type: text/html; charset=utf-8\r\n"));
    }

    #[tokio::test]
    async fn not_found_renders_404() {
        let response = render(Decision::NotFound).await;
        assert_eq!(response.status(), StatusCode::NotFound);
        let wire = String::from_utf8(response.into_bytes().to_vec()).unwrap();
        assert!(wire.starts_with("HTTP/1.1 404 Not Found\r\n"));
    }

    #[tokio::test]
    async fn vanished_file_renders_404() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.html");
        std_fs::write(&path, b"here for a moment").unwrap();
        std_fs::remove_file(&path).unwrap();

        let response = render(Decision::StaticText(path)).await;
        assert_eq!(response.status(), StatusCode::NotFound);
    }
}
