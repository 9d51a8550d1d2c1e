//! Static resource resolution against a fixed on-disk root.
//!
//! A request path maps to a file under the resource root by stripping the
//! leading `/` and joining the remainder onto the root. Two extra rules
//! apply:
//!
//! - a path ending in `/` implicitly requests `index.html` within that
//!   directory, and the result is always treated as a text asset;
//! - any path containing a `..` segment resolves to nothing, so requests
//!   cannot escape the root.
//!
//! Existence is checked fresh on every call — nothing is cached, so a file
//! created between two requests is visible to the second one.

use std::path::{Path, PathBuf};

use crate::media::{self, FileFormat};

/// Name of the file implicitly served for directory-style requests.
const DIRECTORY_INDEX: &str = "index.html";

/// A request path resolved to an existing regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Location of the file on disk.
    pub path: PathBuf,
    /// Serving family of the file. Directory indexes are always
    /// [`FileFormat::Text`] regardless of extension rules.
    pub format: FileFormat,
}

/// Read-only view of the static resource root.
///
/// # Examples
///
/// ```no_run
/// use monoserve::resource::StaticResources;
///
/// let resources = StaticResources::new("public");
/// if let Some(resolved) = resources.resolve("/style.css") {
///     println!("serving {}", resolved.path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StaticResources {
    root: PathBuf,
}

impl StaticResources {
    /// Creates a resolver rooted at `root`. The directory does not need to
    /// exist yet; resolution simply finds nothing until it does.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the resource root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `request_path` to an existing regular file under the root.
    ///
    /// Returns `None` when the path contains a `..` segment, when the file
    /// does not exist, or when the directory-index rule applies and the
    /// index file is absent. Existence is re-checked on every call.
    pub fn resolve(&self, request_path: &str) -> Option<Resolved> {
        if request_path.split('/').any(|segment| segment == "..") {
            return None;
        }

        let (relative, format) = if request_path.ends_with('/') {
            let mut relative = request_path.trim_start_matches('/').to_owned();
            relative.push_str(DIRECTORY_INDEX);
            (relative, FileFormat::Text)
        } else {
            let relative = request_path.trim_start_matches('/').to_owned();
            let format = media::classify(request_path);
            (relative, format)
        };

        let path = self.root.join(relative);
        let is_file = std::fs::metadata(&path)
            .map(|meta| meta.is_file())
            .unwrap_or(false);

        is_file.then_some(Resolved { path, format })
    }
}
