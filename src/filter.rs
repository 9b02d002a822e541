//! Ignore predicate applied to remote asset listings.
//!
//! Parsing ignore files and glob patterns is left to the caller; the client
//! only needs a yes/no answer per key.

/// Decides whether an asset key is excluded from listings.
///
/// Any `Fn(&str) -> bool` closure is a filter:
///
/// ```rust
/// use theme_client::FileFilter;
///
/// let ignore_images = |key: &str| key.ends_with(".png");
/// assert!(ignore_images.is_ignored("assets/logo.png"));
/// assert!(!ignore_images.is_ignored("assets/theme.js"));
/// ```
pub trait FileFilter: Send + Sync {
    /// Returns `true` if `key` should be left out.
    fn is_ignored(&self, key: &str) -> bool;
}

/// A filter that keeps every key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoFilter;

impl FileFilter for NoFilter {
    fn is_ignored(&self, _key: &str) -> bool {
        false
    }
}

impl<F> FileFilter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_ignored(&self, key: &str) -> bool {
        self(key)
    }
}
