//! Relative placement for new collection entries.
//!
//! Legacy code passes `Before`/`After` as an untyped argument that is either a key string or a
//! position number. Here the two cases are separate variants of [`Anchor`], and the choice between
//! appending, inserting before, and inserting after is a [`Placement`].

/// An existing entry that a new entry is placed relative to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The entry stored under this key
    Key(String),
    /// The entry at this 1-based position
    Index(usize),
}

impl From<&str> for Anchor {
    fn from(key: &str) -> Self {
        Anchor::Key(key.to_string())
    }
}

impl From<String> for Anchor {
    fn from(key: String) -> Self {
        Anchor::Key(key)
    }
}

impl From<usize> for Anchor {
    fn from(index: usize) -> Self {
        Anchor::Index(index)
    }
}

/// Where a new entry is placed in a collection.
///
/// # Examples
///
/// ```
/// use vbcompat::collection::{Anchor, Placement};
///
/// assert_eq!(Placement::from_options(None, None), Placement::End);
/// assert_eq!(
///     Placement::from_options(Some("b".into()), Some(Anchor::Index(1))),
///     Placement::Before(Anchor::Key("b".to_string())),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Append after the last entry
    #[default]
    End,
    /// Immediately before the anchor entry
    ///
    /// `Before(Index(len + 1))` is accepted and appends.
    Before(Anchor),
    /// Immediately after the anchor entry
    ///
    /// `After(Index(0))` is accepted and prepends.
    After(Anchor),
}

impl Placement {
    /// Resolves the legacy optional `before`/`after` pair.
    ///
    /// Only one of the two is honored: `before` wins when both are given.
    pub fn from_options(before: Option<Anchor>, after: Option<Anchor>) -> Self {
        match (before, after) {
            (Some(anchor), _) => Placement::Before(anchor),
            (None, Some(anchor)) => Placement::After(anchor),
            (None, None) => Placement::End,
        }
    }

    /// Shorthand for `Placement::Before(anchor.into())`.
    pub fn before(anchor: impl Into<Anchor>) -> Self {
        Placement::Before(anchor.into())
    }

    /// Shorthand for `Placement::After(anchor.into())`.
    pub fn after(anchor: impl Into<Anchor>) -> Self {
        Placement::After(anchor.into())
    }
}
