//! # Minimum Spanning Tree
//!
//! Kruskal's algorithm: edges are visited in ascending weight order and an
//! edge is accepted iff its endpoints are still in different components of a
//! [`DisjointSet`]. The search stops once `n - 1` edges are accepted.

use alloc::vec::Vec;
use core::fmt;

use crate::core::error::{Error, Result};
use crate::core::graph::dedup::dedup_edges;
use crate::core::graph::{Edge, WeightedEdges, Weight};
use crate::core::union_find::DisjointSet;
use crate::core::utils::Idx;
use crate::core::vertex_index::{VertexId, VertexIndex};

/// Options for [`Kruskal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MstConfig {
    /// Compress paths on every lookup.
    ///
    /// This never changes which edges are accepted, only how fast the
    /// component lookups are.
    pub compress_paths: bool,
}

/// The accepted edges of a spanning tree, in acceptance order, and their
/// total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<N = VertexId> {
    edges: Vec<Edge<N>>,
    total_weight: u64,
}

impl<N> Default for SpanningTree<N> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0,
        }
    }
}

impl<N> SpanningTree<N> {
    /// Get the accepted edges in acceptance order.
    pub fn edges(&self) -> &[Edge<N>] { &self.edges }

    /// Get the sum of the accepted weights.
    pub fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns the number of accepted edges.
    pub fn len(&self) -> usize { self.edges.len() }

    /// Check if no edge was accepted.
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Consume the tree and return the accepted edges.
    pub fn into_edges(self) -> Vec<Edge<N>> { self.edges }
}

impl SpanningTree<VertexId> {
    /// Iterate over the accepted edges as `(start, end, weight)` triples of
    /// vertex names.
    ///
    /// Edges with an endpoint unknown to `index` are skipped, which only
    /// happens when `index` belongs to another graph.
    pub fn named<'a>(
        &'a self,
        index: &'a VertexIndex,
    ) -> impl Iterator<Item = (&'a str, &'a str, Weight)> + 'a {
        self.edges.iter().filter_map(move |edge| {
            let src = index.name(edge.src)?;
            let dst = index.name(edge.dst)?;
            Some((src.as_str(), dst.as_str(), edge.weight))
        })
    }

    /// Render the tree as one `start -> end weight` line per edge, followed by
    /// the total weight.
    pub fn report<'a>(&'a self, index: &'a VertexIndex) -> Report<'a> {
        Report { tree: self, index }
    }
}

/// A printable view of a [`SpanningTree`] with vertex names.
///
/// The total line sums the printed edges only, so it always agrees with the
/// lines above it.
pub struct Report<'a> {
    tree: &'a SpanningTree,
    index: &'a VertexIndex,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut total = 0u64;
        for (src, dst, weight) in self.tree.named(self.index) {
            writeln!(f, "{} -> {} {}", src, dst, weight)?;
            total += u64::from(weight);
        }
        write!(f, "Total Distance: {}", total)
    }
}

/// Kruskal's minimum spanning tree algorithm.
///
/// # Examples
///
/// ```
/// use spanning::core::graph::UndirectedGraph;
/// use spanning::core::graph::mst::Kruskal;
///
/// let mut graph = UndirectedGraph::new();
/// graph.add_undirected_edge("A", "B", 1);
/// graph.add_undirected_edge("B", "C", 2);
/// graph.add_undirected_edge("A", "C", 4);
///
/// let tree = Kruskal::default().run(&graph).unwrap();
///
/// assert_eq!(tree.total_weight(), 3);
/// assert_eq!(
///     tree.named(graph.index()).collect::<Vec<_>>(),
///     vec![("A", "B", 1), ("B", "C", 2)]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Kruskal {
    config: MstConfig,
}

impl Kruskal {
    /// Create a new instance with the given options.
    pub fn new(config: MstConfig) -> Self { Self { config } }

    /// Compute the minimum spanning tree of a graph.
    ///
    /// The edge records are deduplicated first, see
    /// [`dedup_edges`](crate::core::graph::dedup::dedup_edges).
    ///
    /// # Errors
    ///
    /// - [`Error::DisconnectedGraph`] if the graph has more than one connected
    ///   component.
    /// - [`Error::InvalidVertexId`] if the graph yields an edge whose endpoint
    ///   is not below [`num_vertices`](WeightedEdges::num_vertices).
    pub fn run<G>(&self, graph: &G) -> Result<SpanningTree<G::Node>>
    where
        G: WeightedEdges,
        G::Node: Idx + From<usize> + fmt::Debug,
    {
        let edges = dedup_edges(graph.edge_records());
        self.run_on_edges(graph.num_vertices(), edges)
    }

    /// Compute the minimum spanning tree over `n` vertices from edges that are
    /// already deduplicated.
    ///
    /// Equal-weight edges are tried in the order given.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_on_edges<N>(&self, n: usize, mut edges: Vec<Edge<N>>) -> Result<SpanningTree<N>>
    where
        N: Idx + From<usize> + fmt::Debug,
    {
        if n == 0 {
            return Ok(SpanningTree::default());
        }

        log::debug!("kruskal: {} vertices, {} edges", n, edges.len());

        let required = n - 1;

        // stable, ties keep their input order
        edges.sort_by_key(|edge| edge.weight);

        let mut sets = DisjointSet::<N>::new(n);
        let mut tree = SpanningTree {
            edges: Vec::with_capacity(required),
            total_weight: 0,
        };

        for edge in edges {
            if tree.edges.len() == required {
                break;
            }

            let (src, dst) = if self.config.compress_paths {
                (
                    sets.find_and_compress(edge.src)?,
                    sets.find_and_compress(edge.dst)?,
                )
            } else {
                (sets.find(edge.src)?, sets.find(edge.dst)?)
            };

            if src == dst {
                log::trace!("kruskal: reject {:?} -> {:?} ({})", edge.src, edge.dst, edge.weight);
                continue;
            }

            sets.union(src, dst)?;
            tree.total_weight += u64::from(edge.weight);
            tree.edges.push(edge);

            log::trace!("kruskal: accept {:?} -> {:?} ({})", edge.src, edge.dst, edge.weight);
        }

        if tree.edges.len() < required {
            log::warn!(
                "kruskal: graph is not connected, {} components remain",
                sets.num_sets()
            );
            return Err(Error::DisconnectedGraph {
                accepted: tree.edges.len(),
                required,
                components: sets.num_sets(),
            });
        }

        log::debug!(
            "kruskal: accepted {} edges, total weight {}",
            tree.edges.len(),
            tree.total_weight
        );

        Ok(tree)
    }
}

/// Compute the minimum spanning tree of a graph with the default options.
///
/// # Errors
///
/// See [`Kruskal::run`].
pub fn minimum_spanning_tree<G>(graph: &G) -> Result<SpanningTree<G::Node>>
where
    G: WeightedEdges,
    G::Node: Idx + From<usize> + fmt::Debug,
{
    Kruskal::default().run(graph)
}
