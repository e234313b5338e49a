//! Edge Deduplication
//!
//! Adjacency lists declare every undirected edge twice, once from each
//! endpoint. Before ordering edges by weight, the reciprocal records are
//! collapsed so that each undirected edge is considered exactly once.

use alloc::vec::Vec;
use core::hash::Hash;

use crate::core::graph::Edge;
use crate::HashSet;

/// A streaming deduplicator of directed edge records.
///
/// A record is dropped iff its reverse (swapped endpoints, same weight) has
/// already been accepted. The orientation that survives is the one seen
/// first, and the accepted records keep their encounter order.
///
/// Parallel edges with different weights are distinct edges and are all kept.
pub struct EdgeDeduplicator<N> {
    /// The accepted records, for reverse lookups.
    seen: HashSet<Edge<N>>,
    /// The accepted records in encounter order.
    edges: Vec<Edge<N>>,
}

impl<N> Default for EdgeDeduplicator<N> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<N: Copy + Eq + Hash> EdgeDeduplicator<N> {
    /// Offer a record.
    ///
    /// # Returns
    ///
    /// `true` if the record is accepted, `false` if its reverse was accepted
    /// before.
    pub fn push(&mut self, edge: Edge<N>) -> bool {
        if self.seen.contains(&edge.reversed()) {
            return false;
        }
        self.seen.insert(edge);
        self.edges.push(edge);
        true
    }

    /// Returns the number of accepted records.
    pub fn len(&self) -> usize { self.edges.len() }

    /// Check if nothing has been accepted.
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Consume the deduplicator and return the accepted records.
    pub fn finish(self) -> Vec<Edge<N>> { self.edges }
}

/// Collapse reciprocal records into one record per undirected edge.
///
/// # Examples
///
/// ```
/// use spanning::core::graph::dedup::dedup_edges;
/// use spanning::core::graph::Edge;
///
/// let edges = dedup_edges([
///     Edge::new(0usize, 1, 3),
///     Edge::new(1usize, 0, 3),
///     Edge::new(1usize, 2, 5),
/// ]);
///
/// assert_eq!(edges, vec![Edge::new(0, 1, 3), Edge::new(1, 2, 5)]);
/// ```
pub fn dedup_edges<N>(records: impl IntoIterator<Item = Edge<N>>) -> Vec<Edge<N>>
where
    N: Copy + Eq + Hash,
{
    let mut dedup = EdgeDeduplicator::default();
    for edge in records {
        dedup.push(edge);
    }
    dedup.finish()
}
