//! Graph Data Structure

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use crate::core::utils::Idx;
use crate::core::vertex_index::{VertexId, VertexIndex};

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

pub mod adjacency;
pub mod dedup;
pub mod mst;

/// Edge weights are non-negative integers.
pub type Weight = u32;

/// A directed edge record.
///
/// An undirected edge shows up as two records, one from each endpoint's
/// adjacency list, with the endpoints swapped and the same weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<N = VertexId> {
    /// The endpoint whose adjacency list declared the edge.
    pub src: N,
    /// The other endpoint.
    pub dst: N,
    /// The distance between both endpoints.
    pub weight: Weight,
}

impl<N> Edge<N> {
    /// Create a new edge record.
    pub fn new(src: N, dst: N, weight: Weight) -> Self { Self { src, dst, weight } }

    /// The same edge seen from the other endpoint.
    pub fn reversed(self) -> Self {
        Self {
            src: self.dst,
            dst: self.src,
            weight: self.weight,
        }
    }
}

/// A graph.
pub trait Graph {
    /// The type of nodes in the graph.
    ///
    /// Nodes should just be a lightweight handle/key to the actual data.
    /// Typically, the node can be an [`Idx`](crate::core::utils::Idx).
    type Node: Copy + Eq + Hash;

    /// Check if the graph is empty.
    fn is_empty(&self) -> bool;
}

/// A graph that can list all of its weighted edge records.
pub trait WeightedEdges: Graph {
    /// Get the number of vertices. Nodes are expected to be dense in
    /// `0..num_vertices()`.
    fn num_vertices(&self) -> usize;

    /// Get an iterator over every directed edge record.
    ///
    /// Records are yielded vertex by vertex in id order and, within a vertex,
    /// in declaration order.
    fn edge_records(&self) -> impl IntoIterator<Item = Edge<Self::Node>>;
}

/// An undirected graph over named vertices, stored as adjacency lists.
///
/// Each graph owns its own [`VertexIndex`], so independent graphs never share
/// ids.
///
/// # Examples
///
/// ```
/// use spanning::core::graph::{UndirectedGraph, WeightedEdges};
///
/// let mut graph = UndirectedGraph::default();
///
/// graph.add_edge("Dallas", "Austin", 195);
/// graph.add_edge("Austin", "Dallas", 195);
/// graph.add_vertex("Marfa");
///
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.edge_records().into_iter().count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    /// The names of the vertices.
    index: VertexIndex<String>,
    /// The adjacency list of each vertex, indexed by the vertex id.
    adjacency: Vec<Vec<(VertexId, Weight)>>,
}

impl UndirectedGraph {
    /// Create an empty graph.
    pub fn new() -> Self { Self::default() }

    /// Build a graph from `(vertex, neighbor, weight)` adjacency records.
    pub fn from_triples<'a>(triples: impl IntoIterator<Item = (&'a str, &'a str, Weight)>) -> Self {
        let mut graph = Self::default();
        for (src, dst, weight) in triples {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Add a vertex, or return the id it already has.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        let id = self.index.get_or_assign(name);
        if self.adjacency.len() < self.index.size() {
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Record `dst` in the adjacency list of `src`.
    ///
    /// Only the `src -> dst` direction is recorded. Adjacency-list input
    /// declares every edge from both sides, use
    /// [`add_undirected_edge`](Self::add_undirected_edge) to record both at
    /// once.
    pub fn add_edge(&mut self, src: &str, dst: &str, weight: Weight) -> Edge {
        let src = self.add_vertex(src);
        let dst = self.add_vertex(dst);
        self.adjacency[src.index()].push((dst, weight));
        Edge::new(src, dst, weight)
    }

    /// Record an edge in the adjacency lists of both endpoints.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: Weight) -> Edge {
        let edge = self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
        edge
    }

    /// Get the adjacency list of a vertex.
    pub fn neighbors(&self, vertex: VertexId) -> &[(VertexId, Weight)] {
        self.adjacency
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get the vertex index of this graph.
    pub fn index(&self) -> &VertexIndex<String> { &self.index }

    /// Iterate over all vertices and their names in id order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &str)> {
        self.index.iter().map(|(id, name)| (id, name.as_str()))
    }

    /// Look up a vertex by name.
    pub fn vertex(&self, name: &str) -> Option<VertexId> { self.index.get(name) }
}

impl Graph for UndirectedGraph {
    type Node = VertexId;

    fn is_empty(&self) -> bool { self.index.is_empty() }
}

impl WeightedEdges for UndirectedGraph {
    fn num_vertices(&self) -> usize { self.index.size() }

    fn edge_records(&self) -> impl IntoIterator<Item = Edge<VertexId>> {
        self.adjacency.iter().enumerate().flat_map(|(src, list)| {
            list.iter()
                .map(move |&(dst, weight)| Edge::new(VertexId::new(src), dst, weight))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_ids() {
        let mut graph = UndirectedGraph::new();

        graph.add_edge("B", "C", 1);
        graph.add_edge("A", "B", 2);

        assert_eq!(graph.vertex("B"), Some(VertexId::new(0)));
        assert_eq!(graph.vertex("C"), Some(VertexId::new(1)));
        assert_eq!(graph.vertex("A"), Some(VertexId::new(2)));
        assert_eq!(graph.num_vertices(), 3);
    }

    #[test]
    fn test_edge_records_order() {
        let graph = UndirectedGraph::from_triples([
            ("A", "B", 1),
            ("B", "A", 1),
            ("A", "C", 4),
            ("C", "A", 4),
        ]);

        let a = graph.vertex("A").unwrap();
        let b = graph.vertex("B").unwrap();
        let c = graph.vertex("C").unwrap();

        let records = graph.edge_records().into_iter().collect::<Vec<_>>();
        assert_eq!(
            records,
            vec![
                Edge::new(a, b, 1),
                Edge::new(a, c, 4),
                Edge::new(b, a, 1),
                Edge::new(c, a, 4),
            ]
        );
    }

    #[test]
    fn test_undirected_edge() {
        let mut graph = UndirectedGraph::new();

        let edge = graph.add_undirected_edge("X", "Y", 7);
        assert_eq!(graph.neighbors(edge.src), &[(edge.dst, 7)]);
        assert_eq!(graph.neighbors(edge.dst), &[(edge.src, 7)]);
        assert_eq!(edge.reversed(), Edge::new(edge.dst, edge.src, 7));
    }

    #[test]
    fn test_isolated_vertex() {
        let mut graph = UndirectedGraph::new();

        assert!(graph.is_empty());

        let v = graph.add_vertex("Lonely");
        assert!(!graph.is_empty());
        assert_eq!(graph.add_vertex("Lonely"), v);
        assert!(graph.neighbors(v).is_empty());
        assert_eq!(graph.edge_records().into_iter().count(), 0);
    }

    #[test]
    fn test_vertices() {
        let mut graph = UndirectedGraph::new();

        graph.add_edge("Waco", "Temple", 35);
        graph.add_vertex("Marfa");
        graph.add_edge("Temple", "Waco", 35);

        assert_eq!(
            graph.vertices().collect::<Vec<_>>(),
            vec![
                (VertexId::new(0), "Waco"),
                (VertexId::new(1), "Temple"),
                (VertexId::new(2), "Marfa"),
            ]
        );
    }
}
