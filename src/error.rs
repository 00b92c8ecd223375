use std::fmt;
use thiserror::Error;

/// Returned by [`MinMaxHeap::try_insert`](crate::MinMaxHeap::try_insert) when the heap has no free
/// slot left. Hands the rejected pair back so it isn't lost.
#[derive(Clone, PartialEq, Eq, Error)]
#[error("heap is full (capacity {capacity})")]
pub struct HeapFull<K, V> {
    key: K,
    value: V,
    capacity: usize,
}

impl<K, V> HeapFull<K, V> {
    #[inline]
    pub(crate) fn new(key: K, value: V, capacity: usize) -> Self {
        Self {
            key,
            value,
            capacity,
        }
    }

    /// Capacity of the heap that refused the pair.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Takes back the rejected `(key, value)` pair.
    #[inline]
    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}

// Not derived: printing the error shouldn't require `K: Debug` or `V: Debug`.
impl<K, V> fmt::Debug for HeapFull<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapFull")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
