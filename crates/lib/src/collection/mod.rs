//! Insertion-ordered collection addressable by key or 1-based position.
//!
//! [`Collection`] keeps the semantics of the Visual Basic `Collection` object that ported code
//! tends to rely on:
//!
//! - Entries keep the order they were placed in. Removing an entry and adding it again moves it
//!   to the end; nothing "fills the hole" the way a hash map's storage does.
//! - Positions start at 1.
//! - An entry may have a key. Non-null keys are unique; any number of entries may be keyless.
//! - New entries can be placed before or after an existing entry, named by key or by position.
//!
//! Keys are located by linear scan. The collections this replaces are small and their order
//! matters far more than lookup speed.

use tracing::{debug, trace};

use crate::Result;
use crate::constants::BASE_INDEX;

pub mod errors;
mod iter;
pub mod placement;
#[cfg(feature = "serde")]
mod serialization;

pub use errors::CollectionError;
pub use iter::Snapshot;
pub use placement::{Anchor, Placement};

/// An ordered set of values that can be referred to as a unit, by key, or by position.
///
/// Keys and values are stored in two parallel vectors of equal length; index `i` of each
/// refers to the same entry.
///
/// # Examples
///
/// ```
/// use vbcompat::collection::{Collection, Placement};
///
/// let mut col = Collection::new();
/// col.add("a", 1)?;
/// col.add("b", 2)?;
/// col.insert("c", 3, Placement::before("b"))?;
///
/// assert_eq!(col.values(), vec![1, 3, 2]);
/// assert!(col.remove_key("a"));
/// assert_eq!(*col.get_by_index(1)?, 3);
/// # Ok::<(), vbcompat::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Collection<V> {
    keys: Vec<Option<String>>,
    values: Vec<V>,
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Collection<V> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an empty collection with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the value at a 1-based position.
    ///
    /// # Errors
    /// [`CollectionError::IndexOutOfRange`] unless `1 <= index <= len()`.
    pub fn get_by_index(&self, index: usize) -> Result<&V> {
        let offset = self.offset_of_index(index)?;
        Ok(&self.values[offset])
    }

    /// Returns the value stored under `key`.
    ///
    /// Accepts a `&str` or an `Option<&str>`; `None` stands for the legacy null key.
    ///
    /// # Errors
    /// - [`CollectionError::NullKey`] if `key` is `None`.
    /// - [`CollectionError::KeyNotFound`] if no entry has this key.
    pub fn get_by_key<'a>(&self, key: impl Into<Option<&'a str>>) -> Result<&V> {
        let key = require_key(key.into(), "get_by_key")?;
        let offset = self.locate(key)?;
        Ok(&self.values[offset])
    }

    /// Returns the value stored under `key`, or `None` if it is absent.
    pub fn try_get(&self, key: &str) -> Option<&V> {
        self.find(key).map(|offset| &self.values[offset])
    }

    /// Returns the key of the entry at a 1-based position. Keyless entries yield `None`.
    ///
    /// # Errors
    /// [`CollectionError::IndexOutOfRange`] unless `1 <= index <= len()`.
    pub fn key_at(&self, index: usize) -> Result<Option<&str>> {
        let offset = self.offset_of_index(index)?;
        Ok(self.keys[offset].as_deref())
    }

    /// Returns the 1-based position of the entry stored under `key`.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.find(key).map(|offset| offset + BASE_INDEX)
    }

    /// Returns `true` if an entry is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Returns a copy of the keys in order. Keyless entries appear as `None`.
    ///
    /// The copy is independent of the collection; later mutation does not affect it.
    pub fn keys(&self) -> Vec<Option<String>> {
        self.keys.clone()
    }

    /// Appends a value under `key`. A `None` key is always accepted.
    ///
    /// # Errors
    /// [`CollectionError::DuplicateKey`] if `key` is already present.
    pub fn add<'a>(&mut self, key: impl Into<Option<&'a str>>, value: V) -> Result<()> {
        let key = key.into();
        self.ensure_absent(key)?;

        trace!(key = ?key, len = self.len(), "Appending entry");
        self.keys.push(key.map(str::to_string));
        self.values.push(value);
        Ok(())
    }

    /// Appends a keyless value.
    pub fn push(&mut self, value: V) {
        self.keys.push(None);
        self.values.push(value);
    }

    /// Adds a value using the legacy optional `before`/`after` arguments.
    ///
    /// `before` takes precedence when both are supplied; with neither, this is [`add`](Self::add).
    /// See [`insert`](Self::insert) for the placement rules.
    pub fn add_with<'a>(
        &mut self,
        key: impl Into<Option<&'a str>>,
        value: V,
        before: Option<Anchor>,
        after: Option<Anchor>,
    ) -> Result<()> {
        self.insert(key, value, Placement::from_options(before, after))
    }

    /// Places a value under `key` relative to an existing entry.
    ///
    /// - `Before(Key(k))` puts the entry immediately before `k`.
    /// - `Before(Index(i))` makes the entry occupy position `i`; `i == len() + 1` appends.
    /// - `After(Key(k))` puts the entry immediately after `k`.
    /// - `After(Index(i))` puts the entry immediately after position `i`; `i == 0` prepends.
    /// - `End` appends.
    ///
    /// # Errors
    /// - [`CollectionError::KeyNotFound`] if an anchor key is absent.
    /// - [`CollectionError::IndexOutOfRange`] if a before-index is outside `1..=len() + 1`, or an
    ///   after-index is neither `0` nor within `1..len()`.
    /// - [`CollectionError::DuplicateKey`] if `key` is already present.
    ///
    /// The anchor is validated before the new key. The collection is unchanged on error.
    pub fn insert<'a>(
        &mut self,
        key: impl Into<Option<&'a str>>,
        value: V,
        placement: Placement,
    ) -> Result<()> {
        let key = key.into();
        let offset = match &placement {
            Placement::End => self.len(),
            Placement::Before(Anchor::Key(anchor)) => self.locate(anchor)?,
            Placement::Before(Anchor::Index(index)) => {
                let len = self.len();
                if *index < BASE_INDEX || *index > len + 1 {
                    return Err(CollectionError::IndexOutOfRange {
                        index: *index,
                        min: BASE_INDEX,
                        max: len + 1,
                    }
                    .into());
                }
                *index - BASE_INDEX
            }
            Placement::After(Anchor::Key(anchor)) => self.locate(anchor)? + 1,
            Placement::After(Anchor::Index(index)) => {
                let len = self.len();
                if *index != 0 && *index >= len {
                    return Err(CollectionError::IndexOutOfRange {
                        index: *index,
                        min: 0,
                        max: len.saturating_sub(1),
                    }
                    .into());
                }
                *index
            }
        };
        self.ensure_absent(key)?;

        debug!(key = ?key, ?placement, position = offset + BASE_INDEX, "Inserting entry");
        self.keys.insert(offset, key.map(str::to_string));
        self.values.insert(offset, value);
        Ok(())
    }

    /// Removes the entry at a 1-based position.
    ///
    /// Always returns `true` on success, matching the legacy signature.
    ///
    /// # Errors
    /// [`CollectionError::IndexOutOfRange`] unless `1 <= index <= len()`.
    pub fn remove_index(&mut self, index: usize) -> Result<bool> {
        let offset = self.offset_of_index(index)?;

        debug!(index, "Removing entry by index");
        self.keys.remove(offset);
        self.values.remove(offset);
        Ok(true)
    }

    /// Removes the entry stored under `key`, returning whether one was removed.
    pub fn remove_key(&mut self, key: &str) -> bool {
        match self.find(key) {
            Some(offset) => {
                debug!(key, position = offset + BASE_INDEX, "Removing entry by key");
                self.keys.remove(offset);
                self.values.remove(offset);
                true
            }
            None => false,
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        debug!(len = self.len(), "Clearing collection");
        self.keys.clear();
        self.values.clear();
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Iterates over `(key, value)` pairs in order.
    pub fn entries(
        &self,
    ) -> impl DoubleEndedIterator<Item = (Option<&str>, &V)> + ExactSizeIterator {
        self.keys
            .iter()
            .map(Option::as_deref)
            .zip(self.values.iter())
    }

    /// Converts a 1-based position into a vector offset.
    fn offset_of_index(&self, index: usize) -> Result<usize> {
        if index < BASE_INDEX || index > self.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                min: BASE_INDEX,
                max: self.len(),
            }
            .into());
        }
        Ok(index - BASE_INDEX)
    }

    fn find(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k.as_deref() == Some(key))
    }

    fn locate(&self, key: &str) -> Result<usize> {
        self.find(key).ok_or_else(|| {
            CollectionError::KeyNotFound {
                key: key.to_string(),
            }
            .into()
        })
    }

    fn ensure_absent(&self, key: Option<&str>) -> Result<()> {
        match key {
            Some(key) if self.contains_key(key) => Err(CollectionError::DuplicateKey {
                key: key.to_string(),
            }
            .into()),
            _ => Ok(()),
        }
    }
}

impl<V: Clone> Collection<V> {
    /// Returns a copy of the values in order.
    ///
    /// The copy is independent of the collection; later mutation does not affect it.
    pub fn values(&self) -> Vec<V> {
        self.values.clone()
    }

    /// Returns an iterator over a copy of the values taken now.
    ///
    /// Unlike [`iter`](Self::iter), the snapshot does not borrow the collection, so the
    /// collection can be modified while the snapshot is being walked.
    ///
    /// ```
    /// use vbcompat::Collection;
    ///
    /// let mut col = Collection::new();
    /// col.add("x", 1)?;
    /// col.add("y", 2)?;
    ///
    /// for value in col.snapshot() {
    ///     col.push(value * 10);
    /// }
    /// assert_eq!(col.values(), vec![1, 2, 10, 20]);
    /// # Ok::<(), vbcompat::Error>(())
    /// ```
    pub fn snapshot(&self) -> Snapshot<V> {
        Snapshot::new(self.values.clone())
    }
}

impl<V: PartialEq> Collection<V> {
    /// Returns `true` if any entry holds `value`.
    pub fn contains_value(&self, value: &V) -> bool {
        self.values.contains(value)
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Collection<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<V> TryFrom<Vec<(Option<String>, V)>> for Collection<V> {
    type Error = crate::Error;

    /// Builds a collection from `(key, value)` pairs in order.
    ///
    /// Fails with [`CollectionError::DuplicateKey`] on the first repeated non-null key.
    fn try_from(entries: Vec<(Option<String>, V)>) -> Result<Self> {
        let mut collection = Self::with_capacity(entries.len());
        for (key, value) in entries {
            collection.add(key.as_deref(), value)?;
        }
        Ok(collection)
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

fn require_key<'a>(key: Option<&'a str>, operation: &str) -> Result<&'a str> {
    key.ok_or_else(|| {
        CollectionError::NullKey {
            operation: operation.to_string(),
        }
        .into()
    })
}
