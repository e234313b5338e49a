//! Errors reported by the spanning tree core and the adjacency-list loader.

use alloc::string::String;

/// The error type of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A vertex id outside `[0, len)` was handed to the disjoint set.
    #[error("vertex id {id} is out of range for {len} vertices")]
    InvalidVertexId {
        /// The rejected id.
        id: usize,
        /// The number of vertices in the disjoint set.
        len: usize,
    },

    /// The edge supply ran out before a spanning tree was reached.
    #[error(
        "graph is not connected: accepted {accepted} of {required} edges, {components} components remain"
    )]
    DisconnectedGraph {
        /// The number of edges accepted before the supply was exhausted.
        accepted: usize,
        /// The number of edges a spanning tree needs, i.e. `n - 1`.
        required: usize,
        /// The number of connected components left in the forest.
        components: usize,
    },

    /// An adjacency record has an empty vertex name.
    #[error("line {line}: empty vertex name")]
    EmptyVertexName {
        /// The 1-based line number.
        line: usize,
    },

    /// A neighbor in an adjacency record is not followed by a weight.
    #[error("line {line}: missing weight for neighbor `{neighbor}`")]
    MissingWeight {
        /// The 1-based line number.
        line: usize,
        /// The neighbor without a weight.
        neighbor: String,
    },

    /// A weight field is not a non-negative integer.
    #[error("line {line}: invalid weight `{value}`")]
    InvalidWeight {
        /// The 1-based line number.
        line: usize,
        /// The offending field.
        value: String,
    },
}

/// A specialized [`Result`](core::result::Result) with [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
