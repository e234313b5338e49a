//! # Spanning: Minimum Spanning Trees over Named Graphs
//!
//! Kruskal's algorithm over a disjoint-set forest, for undirected graphs whose
//! vertices are identified by name and whose edges carry non-negative integer
//! weights.

#![deny(missing_docs)]
#![no_std]
#![forbid(unsafe_code)]

#[allow(unused_imports)]
#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
#[macro_use]
extern crate std;

#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

#[cfg(not(feature = "std"))]
use hashbrown::{HashMap, HashSet};

pub mod core;

pub use crate::core::error::{Error, Result};
