//! File format classification for static resources.
//!
//! The server delivers exactly two families of static content: text assets
//! (`html`, `css`, `js`) streamed as text, and images (`jpg`, `png`, `jpeg`)
//! streamed as raw bytes. Everything else is [`FileFormat::Unsupported`] and
//! never served.
//!
//! The extension of a path is the substring after its **final** dot, so
//! `a.b.html` is `html` and `archive.tar.gz` is `gz`. Matching is
//! case-sensitive: `INDEX.HTML` does not classify as text.

/// Serving family of a static resource, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Text asset — `html`, `css`, or `js`.
    Text,
    /// Image asset — `jpg`, `png`, or `jpeg`.
    Image,
    /// Anything else, including paths without an extension.
    Unsupported,
}

/// Extracts the extension of `path`: the substring after the final `.`.
///
/// Returns `None` for dot-less paths and for paths whose final segment ends
/// in a bare `.`. Never fails on malformed input.
fn extension(path: &str) -> Option<&str> {
    match path.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && !ext.contains('/') => Some(ext),
        _ => None,
    }
}

/// Classifies `path` into a [`FileFormat`] by its extension.
///
/// # Examples
///
/// ```
/// use monoserve::media::{classify, FileFormat};
///
/// assert_eq!(classify("/index.html"), FileFormat::Text);
/// assert_eq!(classify("/logo.png"), FileFormat::Image);
/// assert_eq!(classify("/archive.tar.gz"), FileFormat::Unsupported);
/// assert_eq!(classify("/README"), FileFormat::Unsupported);
/// ```
pub fn classify(path: &str) -> FileFormat {
    match extension(path) {
        Some("html" | "css" | "js") => FileFormat::Text,
        Some("jpg" | "png" | "jpeg") => FileFormat::Image,
        _ => FileFormat::Unsupported,
    }
}

/// Maps `path` to the `Content-Type` the transport writes for it.
///
/// Unrecognized extensions fall back to `application/octet-stream`; in
/// practice only classified paths and forced directory indexes reach the
/// transport, so the fallback is a safety net rather than a served case.
pub fn content_type(path: &str) -> &'static str {
    match extension(path) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
