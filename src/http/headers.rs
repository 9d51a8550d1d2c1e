//! Response header map with case-insensitive name lookup.
//!
//! Header names are case-insensitive per RFC 9110 §5; insertion order is
//! preserved so responses serialize deterministically.

use std::fmt;

/// A case-insensitive HTTP header map holding one value per name.
///
/// Response headers here are single-valued: inserting a name that is already
/// present replaces the previous value in place, keeping its position.
///
/// # Examples
///
/// ```
/// use monoserve::http::Headers;
///
/// let mut headers = Headers::new();
/// headers.set("Content-Type", "text/css");
/// headers.set("content-type", "text/html; charset=utf-8");
///
/// assert_eq!(headers.get("CONTENT-TYPE"), Some("text/html; charset=utf-8"));
/// assert_eq!(headers.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Headers {
    inner: Vec<(String, String)>,
}

impl Headers {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing any existing value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .inner
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.inner.push((name, value)),
        }
    }

    /// Returns the value for the given header name (case-insensitive), or `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the map contains an entry with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Returns the number of headers.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no headers.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over all `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.inner {
            write!(f, "{name}: {value}\r\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_get() {
        let mut h = Headers::new();
        h.set("Content-Type", "text/plain");
        assert_eq!(h.get("content-type"), Some("text/plain"));
        assert_eq!(h.get("CONTENT-TYPE"), Some("text/plain"));
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut h = Headers::new();
        h.set("Content-Type", "text/plain");
        h.set("content-type", "image/png");
        assert_eq!(h.get("Content-Type"), Some("image/png"));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn insertion_order_preserved() {
        let mut h = Headers::new();
        h.set("Content-Type", "text/html; charset=utf-8");
        h.set("Connection", "close");
        let pairs: Vec<_> = h.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("Content-Type", "text/html; charset=utf-8"),
                ("Connection", "close"),
            ]
        );
    }

    #[test]
    fn contains_and_empty() {
        let mut h = Headers::new();
        assert!(h.is_empty());
        h.set("Connection", "close");
        assert!(h.contains("connection"));
        assert!(!h.contains("content-type"));
        assert!(!h.is_empty());
    }
}
