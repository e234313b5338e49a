//! # Vertex Index
//!
//! A bidirectional mapping between vertex names and dense [`VertexId`]s. The
//! disjoint set works on small integers, so every name is assigned the next
//! free id the first time it is seen.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use crate::core::utils::Idx;
use crate::HashMap;

/// A dense vertex identifier in `0..n`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Create an id from a raw index.
    pub fn new(index: usize) -> Self { Self(index) }
}

impl Idx for VertexId {
    fn index(self) -> usize { self.0 }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self { Self(index) }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// Maps vertex names to [`VertexId`]s and back.
///
/// Ids are contiguous and follow first-seen order, so they are only stable
/// within one construction pass. There is no removal.
///
/// # Type Parameters
///
/// - `K`: The type of vertex names. Default is [`String`].
///
/// # Examples
///
/// ```
/// use spanning::core::vertex_index::VertexIndex;
///
/// let mut index = VertexIndex::default();
///
/// let dallas = index.get_or_assign("Dallas");
/// let austin = index.get_or_assign("Austin");
///
/// assert_eq!(index.get_or_assign("Dallas"), dallas);
/// assert_eq!(index.size(), 2);
/// assert_eq!(index.name(austin).map(String::as_str), Some("Austin"));
/// ```
#[derive(Clone)]
pub struct VertexIndex<K = String> {
    /// Name to id.
    ids: HashMap<K, VertexId>,
    /// Id to name, indexed by the raw id.
    names: Vec<K>,
}

impl<K> Default for VertexIndex<K> {
    fn default() -> Self {
        Self {
            ids: HashMap::new(),
            names: Vec::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> VertexIndex<K> {
    /// Returns the id of `name`, assigning the next sequential id if the name
    /// has not been seen before.
    pub fn get_or_assign<Q>(&mut self, name: &Q) -> VertexId
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = VertexId(self.names.len());
        let name = name.to_owned();
        self.names.push(name.clone());
        self.ids.insert(name, id);
        id
    }

    /// Look up the id of an already assigned name.
    pub fn get<Q>(&self, name: &Q) -> Option<VertexId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.get(name).copied()
    }
}

impl<K> VertexIndex<K> {
    /// Returns the number of distinct vertices assigned so far.
    pub fn size(&self) -> usize { self.names.len() }

    /// Check if no vertex has been assigned.
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// Returns the name assigned to `id`.
    pub fn name(&self, id: VertexId) -> Option<&K> { self.names.get(id.index()) }

    /// Iterate over all vertices in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &K)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (VertexId(index), name))
    }
}

impl<K: fmt::Debug> fmt::Debug for VertexIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_sequential_assignment() {
        let mut index = VertexIndex::default();

        assert!(index.is_empty());

        assert_eq!(index.get_or_assign("A"), VertexId(0));
        assert_eq!(index.get_or_assign("B"), VertexId(1));
        assert_eq!(index.get_or_assign("C"), VertexId(2));
        assert_eq!(index.size(), 3);
    }

    #[test]
    fn test_idempotent_assignment() {
        let mut index = VertexIndex::default();

        let a = index.get_or_assign("A");
        let b = index.get_or_assign("B");
        assert_eq!(index.get_or_assign("A"), a);
        assert_eq!(index.get_or_assign("B"), b);
        assert_eq!(index.size(), 2);
    }

    #[test]
    fn test_lookup() {
        let mut index = VertexIndex::default();

        let houston = index.get_or_assign("Houston");
        assert_eq!(index.get("Houston"), Some(houston));
        assert_eq!(index.get("El Paso"), None);
        assert_eq!(index.name(houston), Some(&"Houston".to_string()));
        assert_eq!(index.name(VertexId(9)), None);
    }

    #[test]
    fn test_iter_in_id_order() {
        let mut index = VertexIndex::<String>::default();

        index.get_or_assign("C");
        index.get_or_assign("A");
        index.get_or_assign("B");
        index.get_or_assign("A");

        let names = index.iter().map(|(_, name)| name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_vertex_id_fmt() {
        assert_eq!(format!("{}", VertexId(3)), "#3");
        assert_eq!(format!("{:?}", VertexId(3)), "#3");
    }
}
