//! Which theme a client operates on.

use crate::config::ThemeId;

/// The theme a [`ThemeClient`](crate::ThemeClient) targets.
///
/// - `Unbound`: asset calls go to the live theme (`/admin/assets.json`);
///   theme-scoped calls (`get_theme_info`, `publish_theme`) are refused.
/// - `Bound(id)`: every call targets theme `id`.
///
/// The only transition is `create_theme`, which binds the client to the
/// theme it created.
///
/// ```rust
/// use theme_client::{ThemeId, ThemeSession};
///
/// assert_eq!(ThemeSession::from(None), ThemeSession::Unbound);
///
/// let id = ThemeId::new(5).unwrap();
/// let session = ThemeSession::from(Some(id));
/// assert_eq!(session.theme_id(), Some(id));
/// assert!(session.is_bound());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeSession {
    /// Operate on the live theme.
    #[default]
    Unbound,
    /// Operate on a specific theme.
    Bound(ThemeId),
}

impl ThemeSession {
    /// Returns the bound theme id, if any.
    #[must_use]
    pub const fn theme_id(self) -> Option<ThemeId> {
        match self {
            Self::Unbound => None,
            Self::Bound(id) => Some(id),
        }
    }

    /// Returns `true` when bound to a specific theme.
    #[must_use]
    pub const fn is_bound(self) -> bool {
        matches!(self, Self::Bound(_))
    }
}

impl From<Option<ThemeId>> for ThemeSession {
    fn from(id: Option<ThemeId>) -> Self {
        id.map_or(Self::Unbound, Self::Bound)
    }
}
