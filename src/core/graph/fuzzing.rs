//! Fuzzing Facilities for Spanning Trees.

use alloc::string::String;
use alloc::vec::Vec;

use libfuzzer_sys::arbitrary::{self, Unstructured};

use super::dedup::dedup_edges;
use super::mst::{Kruskal, MstConfig, SpanningTree};
use super::{UndirectedGraph, Weight, WeightedEdges};
use crate::core::error::Error;
use crate::core::union_find::DisjointSet;
use crate::core::utils::Idx;
use crate::core::vertex_index::VertexId;
use crate::HashSet;

fn vertex_name(i: usize) -> String { format!("v{}", i) }

fn arbitrary_weight(u: &mut Unstructured) -> arbitrary::Result<Weight> {
    // a narrow range so that ties are common
    u.int_in_range(0..=64)
}

/// Add `extra` random edges among the vertices `base..base + n`.
fn add_random_edges(
    u: &mut Unstructured,
    graph: &mut UndirectedGraph,
    base: usize,
    n: usize,
) -> arbitrary::Result<()> {
    let extra = u.int_in_range(0..=(4 * n))?;
    for _ in 0..extra {
        let a = base + u.int_in_range(0..=(n - 1))?;
        let b = base + u.int_in_range(0..=(n - 1))?;
        let weight = arbitrary_weight(u)?;
        graph.add_undirected_edge(&vertex_name(a), &vertex_name(b), weight);
    }
    Ok(())
}

/// Generate an arbitrary connected [`UndirectedGraph`] for fuzzing.
///
/// Every vertex after the first is linked to a random earlier vertex, then
/// random extra edges (including self loops and parallel edges) are added.
pub fn arbitrary_graph(u: &mut Unstructured) -> arbitrary::Result<UndirectedGraph> {
    let num_vertices = u.int_in_range(0..=255)?;
    let mut graph = UndirectedGraph::new();

    for i in 0..num_vertices {
        graph.add_vertex(&vertex_name(i));
        if i > 0 {
            let j = u.int_in_range(0..=(i - 1))?;
            let weight = arbitrary_weight(u)?;
            graph.add_undirected_edge(&vertex_name(i), &vertex_name(j), weight);
        }
    }

    if num_vertices > 0 {
        add_random_edges(u, &mut graph, 0, num_vertices)?;
    }

    Ok(graph)
}

/// Generate an arbitrary graph with at least two connected components.
pub fn arbitrary_disconnected_graph(u: &mut Unstructured) -> arbitrary::Result<UndirectedGraph> {
    let left = u.int_in_range(1..=127)?;
    let right = u.int_in_range(1..=127)?;
    let mut graph = UndirectedGraph::new();

    for (base, n) in [(0, left), (left, right)] {
        for i in base..base + n {
            graph.add_vertex(&vertex_name(i));
        }
        add_random_edges(u, &mut graph, base, n)?;
    }

    Ok(graph)
}

/// Find the heaviest edge on the tree path between `src` and `dst`.
fn max_on_path(
    tree: &[Vec<(VertexId, Weight)>],
    src: VertexId,
    dst: VertexId,
) -> Option<Weight> {
    let mut stack = vec![(src, None::<VertexId>, 0)];
    while let Some((node, parent, max)) = stack.pop() {
        if node == dst {
            return Some(max);
        }
        for &(next, weight) in &tree[node.index()] {
            if Some(next) != parent {
                stack.push((next, Some(node), max.max(weight)));
            }
        }
    }
    None
}

/// Check that Kruskal's algorithm yields a minimum spanning tree of a
/// connected graph.
pub fn check_spanning_tree(graph: &UndirectedGraph) {
    let n = graph.num_vertices();
    let tree: SpanningTree = Kruskal::default().run(graph).unwrap();

    assert_eq!(tree.len(), n.saturating_sub(1));
    assert_eq!(
        tree.total_weight(),
        tree.edges().iter().map(|e| u64::from(e.weight)).sum::<u64>()
    );

    // path compression must not change the result
    let compressed = Kruskal::new(MstConfig {
        compress_paths: true,
    })
    .run(graph)
    .unwrap();
    assert_eq!(tree, compressed);

    let records = graph.edge_records().into_iter().collect::<HashSet<_>>();

    let mut sets = DisjointSet::<VertexId>::new(n);
    let mut adjacency = vec![Vec::new(); n];
    for edge in tree.edges() {
        assert!(records.contains(edge));
        assert!(!sets.connected(edge.src, edge.dst).unwrap());
        sets.union(edge.src, edge.dst).unwrap();
        adjacency[edge.src.index()].push((edge.dst, edge.weight));
        adjacency[edge.dst.index()].push((edge.src, edge.weight));
    }
    assert!(n == 0 || sets.num_sets() == 1);

    // cycle property: no edge outside the tree is lighter than the heaviest
    // tree edge between its endpoints
    for edge in dedup_edges(graph.edge_records()) {
        if edge.src == edge.dst {
            continue;
        }
        let max = max_on_path(&adjacency, edge.src, edge.dst).unwrap();
        assert!(max <= edge.weight);
    }
}

/// Check that a graph with several components is reported as disconnected.
pub fn check_disconnected(graph: &UndirectedGraph) {
    match Kruskal::default().run(graph) {
        Err(Error::DisconnectedGraph {
            accepted,
            required,
            components,
        }) => {
            assert!(components >= 2);
            assert_eq!(required, graph.num_vertices() - 1);
            assert_eq!(accepted + components, graph.num_vertices());
        }
        other => panic!("expected a disconnected graph, got {:?}", other),
    }
}
