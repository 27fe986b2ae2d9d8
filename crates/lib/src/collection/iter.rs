//! Owned snapshot iteration over collection values.

/// Iterator over a copy of a collection's values, taken by
/// [`Collection::snapshot`](super::Collection::snapshot).
///
/// A clone continues from the same point. Call `snapshot` again to start over from the
/// collection's current contents.
#[derive(Debug, Clone)]
pub struct Snapshot<V> {
    inner: std::vec::IntoIter<V>,
}

impl<V> Snapshot<V> {
    pub(super) fn new(values: Vec<V>) -> Self {
        Self {
            inner: values.into_iter(),
        }
    }

    /// Returns the values not yet yielded.
    pub fn as_slice(&self) -> &[V] {
        self.inner.as_slice()
    }
}

impl<V> Iterator for Snapshot<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Snapshot<V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Snapshot<V> {}

impl<V> std::iter::FusedIterator for Snapshot<V> {}
