//! Core Components of Spanning
//!
//! This module provides the data structures and algorithms used to compute a
//! minimum spanning tree: a vertex index, a disjoint-set forest, and the
//! graph with its edge deduplication and Kruskal passes.

pub mod error;
pub mod graph;
pub mod union_find;
pub mod utils;
pub mod vertex_index;
