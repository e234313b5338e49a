//! # Disjoint-set Data Structure
//!
//! Kruskal's algorithm asks one question per edge: are both endpoints already
//! connected? This module answers it with a parent-pointer forest over dense
//! indices.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use crate::core::error::{Error, Result};
use crate::core::utils::Idx;

/// A disjoint-set forest over the dense indices `0..n`.
///
/// Every index starts as its own representative. [`union`](Self::union) links
/// one root under another without rank or size bookkeeping, so the shape of
/// the forest is decided purely by the order of calls.
///
/// # Type Parameters
///
/// - `I`: The index type, [`usize`] by default.
///
/// # Examples
///
/// ```
/// use spanning::core::union_find::DisjointSet;
///
/// let mut sets = DisjointSet::<usize>::new(3);
///
/// assert_eq!(sets.find(1), Ok(1));
///
/// sets.union(0, 1).unwrap();
///
/// assert_eq!(sets.find(1), Ok(0));
/// assert!(sets.connected(0, 1).unwrap());
/// assert!(!sets.connected(1, 2).unwrap());
/// assert!(sets.find(3).is_err());
/// ```
#[derive(Clone)]
pub struct DisjointSet<I = usize> {
    /// The parent of each index. A root is its own parent.
    parents: Vec<usize>,
    /// The number of disjoint sets.
    num_sets: usize,
    _phantom: PhantomData<I>,
}

impl<I> DisjointSet<I>
where
    I: Idx + From<usize>,
{
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            num_sets: n,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of indices in the forest.
    pub fn len(&self) -> usize { self.parents.len() }

    /// Check if the forest is empty.
    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    /// Returns the number of disjoint sets left.
    pub fn num_sets(&self) -> usize { self.num_sets }

    fn check(&self, id: I) -> Result<usize> {
        let index = id.index();
        if index < self.parents.len() {
            Ok(index)
        } else {
            Err(Error::InvalidVertexId {
                id: index,
                len: self.parents.len(),
            })
        }
    }

    /// Finds the representative (or the root) of the set containing `id`.
    ///
    /// This follows parent links without compressing the path. If the forest
    /// can be mutated, [`find_and_compress`](Self::find_and_compress) is
    /// cheaper when called repeatedly.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertexId`] if `id` is outside `[0, n)`.
    #[must_use = "`find` does not mutate the forest, its result should be used."]
    pub fn find(&self, id: I) -> Result<I> {
        let mut index = self.check(id)?;
        while self.parents[index] != index {
            index = self.parents[index];
        }
        Ok(I::from(index))
    }

    /// Finds the representative of the set containing `id` and points every
    /// node on the way directly at it.
    ///
    /// The returned root is always the same as [`find`](Self::find) would
    /// return, only later lookups become shorter.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertexId`] if `id` is outside `[0, n)`.
    pub fn find_and_compress(&mut self, id: I) -> Result<I> {
        let start = self.check(id)?;

        let mut root = start;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut index = start;
        while self.parents[index] != root {
            let next = self.parents[index];
            self.parents[index] = root;
            index = next;
        }

        Ok(I::from(root))
    }

    /// Unions the sets containing `a` and `b`.
    ///
    /// The root of `a` becomes the parent of the root of `b`. Callers usually
    /// pass roots obtained from [`find`](Self::find), in which case exactly
    /// one parent pointer changes. This does nothing if both are in the same
    /// set.
    ///
    /// # Returns
    ///
    /// The root of the merged set.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertexId`] if either index is outside `[0, n)`.
    pub fn union(&mut self, a: I, b: I) -> Result<I> {
        let a = self.find(a)?.index();
        let b = self.find(b)?.index();

        if a != b {
            self.parents[b] = a;
            self.num_sets -= 1;
        }

        Ok(I::from(a))
    }

    /// Check if `a` and `b` belong to the same set.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertexId`] if either index is outside `[0, n)`.
    pub fn connected(&self, a: I, b: I) -> Result<bool> { Ok(self.find(a)? == self.find(b)?) }

    /// Returns the parent of `id` for low-level inspection.
    pub fn parent(&self, id: I) -> Option<I> {
        self.parents.get(id.index()).map(|&parent| I::from(parent))
    }
}

impl<I> fmt::Debug for DisjointSet<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisjointSet")
            .field("parents", &self.parents)
            .field("num_sets", &self.num_sets)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vertex_index::VertexId;

    #[test]
    fn test_singletons() {
        let sets = DisjointSet::<usize>::new(4);

        assert_eq!(sets.len(), 4);
        assert_eq!(sets.num_sets(), 4);

        for i in 0..4 {
            assert_eq!(sets.find(i), Ok(i));
        }
    }

    #[test]
    fn test_union_find_int() {
        let mut sets = DisjointSet::<usize>::new(4);

        assert_eq!(sets.union(0, 1), Ok(0));

        assert_eq!(sets.find(0), Ok(0));
        assert_eq!(sets.find(1), Ok(0));
        assert_eq!(sets.find(2), Ok(2));
        assert_eq!(sets.find(3), Ok(3));

        assert_eq!(sets.union(2, 3), Ok(2));

        assert_eq!(sets.find(2), Ok(2));
        assert_eq!(sets.find(3), Ok(2));
        assert_eq!(sets.num_sets(), 2);

        // roots first, as the Kruskal loop does
        let a = sets.find(1).unwrap();
        let b = sets.find(3).unwrap();
        assert_eq!(sets.union(a, b), Ok(0));

        for i in 0..4 {
            assert_eq!(sets.find(i), Ok(0));
        }
        assert_eq!(sets.num_sets(), 1);
    }

    #[test]
    fn test_union_same_set() {
        let mut sets = DisjointSet::<usize>::new(3);

        sets.union(0, 1).unwrap();
        assert_eq!(sets.union(1, 0), Ok(0));
        assert_eq!(sets.union(2, 2), Ok(2));

        assert_eq!(sets.parent(0), Some(0));
        assert_eq!(sets.parent(1), Some(0));
        assert_eq!(sets.num_sets(), 2);
    }

    #[test]
    fn test_union_links_second_root() {
        let mut sets = DisjointSet::<usize>::new(2);

        assert_eq!(sets.union(1, 0), Ok(1));
        assert_eq!(sets.parent(0), Some(1));
        assert_eq!(sets.parent(1), Some(1));
    }

    #[test]
    fn test_out_of_range() {
        let mut sets = DisjointSet::<usize>::new(2);

        assert_eq!(
            sets.find(2),
            Err(Error::InvalidVertexId { id: 2, len: 2 })
        );
        assert_eq!(
            sets.union(0, 5),
            Err(Error::InvalidVertexId { id: 5, len: 2 })
        );
        assert_eq!(
            sets.find_and_compress(9),
            Err(Error::InvalidVertexId { id: 9, len: 2 })
        );
        assert!(sets.connected(0, 3).is_err());

        // a failed union leaves the forest untouched
        assert_eq!(sets.num_sets(), 2);
        assert_eq!(sets.parent(0), Some(0));
    }

    #[test]
    fn test_empty() {
        let sets = DisjointSet::<usize>::new(0);

        assert!(sets.is_empty());
        assert_eq!(sets.num_sets(), 0);
        assert!(sets.find(0).is_err());
    }

    #[test]
    fn test_find_and_compress() {
        let mut sets = DisjointSet::<usize>::new(4);

        // build the chain 3 -> 2 -> 1 -> 0
        sets.union(2, 3).unwrap();
        sets.union(1, 2).unwrap();
        sets.union(0, 1).unwrap();

        assert_eq!(sets.parent(3), Some(2));
        assert_eq!(sets.find(3), Ok(0));
        // `find` leaves the chain alone
        assert_eq!(sets.parent(3), Some(2));

        assert_eq!(sets.find_and_compress(3), Ok(0));
        assert_eq!(sets.parent(3), Some(0));
        assert_eq!(sets.parent(2), Some(0));
        assert_eq!(sets.parent(1), Some(0));
    }

    #[test]
    fn test_vertex_ids() {
        let mut sets = DisjointSet::<VertexId>::new(3);

        let a = VertexId::new(0);
        let c = VertexId::new(2);

        assert_eq!(sets.union(c, a), Ok(c));
        assert_eq!(sets.find(a), Ok(c));
        assert!(sets.connected(a, c).unwrap());
    }
}
