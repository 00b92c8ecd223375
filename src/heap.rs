use crate::error::HeapFull;

#[inline]
fn parent(node: usize) -> usize {
    (node - 1) / 2
}

#[inline]
fn left_child(node: usize) -> usize {
    2 * node + 1
}

/// `floor(log2(i + 1))`, the depth of node `i`.
#[inline]
fn depth<I: num::PrimInt>(i: I) -> u32 {
    let bits = I::zero().count_zeros();
    bits - 1 - (i + I::one()).leading_zeros()
}

/// The role of a tree level. Even depths (the root included) are min levels, odd depths are max
/// levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// Every key is `<=` all the keys below it.
    Min,
    /// Every key is `>=` all the keys below it.
    Max,
}

impl Level {
    /// The level of the node stored at `index`.
    #[inline]
    pub fn of(index: usize) -> Self {
        if depth(index) % 2 == 0 {
            Level::Min
        } else {
            Level::Max
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Level::Min => Level::Max,
            Level::Max => Level::Min,
        }
    }

    /// Whether `a` strictly belongs above `b` on this level.
    #[inline]
    fn precedes<K: Ord>(self, a: &K, b: &K) -> bool {
        match self {
            Level::Min => a < b,
            Level::Max => a > b,
        }
    }
}

#[derive(Clone, Debug)]
struct Element<K, V> {
    key: K,
    value: V,
}

impl<K, V> Element<K, V> {
    #[inline]
    fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[inline]
    fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// A double-ended priority queue of `(key, value)` pairs with a capacity fixed at construction.
///
/// Stored as an implicit complete binary tree whose levels alternate between [`Level::Min`] and
/// [`Level::Max`], so both the smallest and the largest key sit in the top two levels.
///
/// ```
/// use minmax::MinMaxHeap;
///
/// let mut heap = MinMaxHeap::new(3);
/// assert!(heap.insert(78, "K"));
/// assert!(heap.insert(92, "G"));
/// assert!(heap.insert(43, "B"));
/// assert!(!heap.insert(50, "X"));
///
/// assert_eq!(heap.find_minimum(), Some((&43, &"B")));
/// assert_eq!(heap.find_maximum(), Some((&92, &"G")));
/// assert_eq!(heap.remove_maximum(), Some((92, "G")));
/// assert_eq!(heap.remove_minimum(), Some((43, "B")));
/// ```
#[derive(Clone, Debug)]
pub struct MinMaxHeap<K: Ord, V> {
    data: Vec<Element<K, V>>,
    capacity: usize,
}

impl<K: Ord, V> MinMaxHeap<K, V> {
    /// Allocates room for exactly `capacity` elements. The heap never grows past it.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// The element in slot `index` of the backing array, if that slot is occupied.
    ///
    /// O(1)
    #[inline]
    pub fn get(&self, index: usize) -> Option<(&K, &V)> {
        self.data.get(index).map(Element::as_pair)
    }

    /// Visits the elements in storage order, which is only ordered as far as the heap invariant
    /// goes.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.data.iter().map(Element::as_pair)
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns `false` and leaves the heap untouched if it's full.
    ///
    /// O(log n)
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.try_insert(key, value).is_ok()
    }

    /// Like [`insert`](Self::insert), but a full heap gives the pair back inside the error.
    ///
    /// O(log n)
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), HeapFull<K, V>> {
        if self.is_full() {
            return Err(HeapFull::new(key, value, self.capacity));
        }

        self.data.push(Element { key, value });
        self.trickle_up(self.len() - 1);

        Ok(())
    }

    /// O(1)
    #[inline]
    pub fn find_minimum(&self) -> Option<(&K, &V)> {
        self.data.first().map(Element::as_pair)
    }

    /// When both children of the root hold the maximal key, the left one is returned.
    ///
    /// O(1)
    #[inline]
    pub fn find_maximum(&self) -> Option<(&K, &V)> {
        self.max_index().map(|i| self.data[i].as_pair())
    }

    /// O(log n)
    pub fn remove_minimum(&mut self) -> Option<(K, V)> {
        if self.data.is_empty() {
            return None;
        }

        // The last element takes the root's slot.
        let res = self.data.swap_remove(0);
        self.trickle_down(0, Level::Min);

        Some(res.into_pair())
    }

    /// Removes the element [`find_maximum`](Self::find_maximum) would return.
    ///
    /// O(log n)
    pub fn remove_maximum(&mut self) -> Option<(K, V)> {
        let max = self.max_index()?;

        let res = self.data.swap_remove(max);
        self.trickle_down(max, Level::Max);

        Some(res.into_pair())
    }

    /// Checks every key against its parent and grandparent, which together cover the whole
    /// min-max ordering. Only meant for diagnostics; nothing else in the heap calls it.
    ///
    /// O(n)
    pub fn is_valid(&self) -> bool {
        let obeys = |ancestor: usize, node: usize| {
            !Level::of(ancestor).precedes(self.key(node), self.key(ancestor))
        };

        (1..self.len()).all(|node| {
            let up = parent(node);
            obeys(up, node) && (up == 0 || obeys(parent(up), node))
        })
    }

    #[inline]
    fn key(&self, index: usize) -> &K {
        &self.data[index].key
    }

    fn max_index(&self) -> Option<usize> {
        match self.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ => Some(if self.key(2) > self.key(1) { 2 } else { 1 }),
        }
    }

    /// O(log n)
    fn trickle_up(&mut self, node: usize) {
        if node == 0 {
            return;
        }

        let parent = parent(node);
        let level = Level::of(node);

        if level.opposite().precedes(self.key(node), self.key(parent)) {
            self.data.swap(node, parent);
            self.trickle_up_along(parent, level.opposite());
        } else {
            self.trickle_up_along(node, level);
        }
    }

    /// Walks grandparent to grandparent, so `node` is only ever compared within `level`.
    fn trickle_up_along(&mut self, mut node: usize, level: Level) {
        // Nodes 0, 1 and 2 have no grandparent.
        while node > 2 {
            let grandparent = parent(parent(node));

            if level.precedes(self.key(node), self.key(grandparent)) {
                self.data.swap(node, grandparent);
                node = grandparent;
            } else {
                break;
            }
        }
    }

    /// The child or grandchild of `node` that ranks first on `level`. Ties go to the earliest
    /// index, children before grandchildren.
    fn best_descendant(&self, node: usize, level: Level) -> Option<usize> {
        let left = left_child(node);
        let left_grandchild = left_child(left);

        (left..left + 2)
            .chain(left_grandchild..left_grandchild + 4)
            .take_while(|&i| i < self.len())
            .reduce(|best, i| {
                if level.precedes(self.key(i), self.key(best)) {
                    i
                } else {
                    best
                }
            })
    }

    /// `node` must lie on `level` (or be the only candidate for it, as the sole max slot is).
    ///
    /// O(log n)
    fn trickle_down(&mut self, mut node: usize, level: Level) {
        while let Some(best) = self.best_descendant(node, level) {
            if !level.precedes(self.key(best), self.key(node)) {
                break;
            }
            self.data.swap(best, node);

            // A child has nothing on `level` below it.
            if best <= left_child(node) + 1 {
                break;
            }

            let parent = parent(best);
            if level.opposite().precedes(self.key(best), self.key(parent)) {
                self.data.swap(best, parent);
            }

            node = best;
        }
    }
}
