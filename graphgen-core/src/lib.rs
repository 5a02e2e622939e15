//! graphgen core library.
//!
//! Seeded random-graph generation for producing test inputs: a deterministic
//! xorshift PRNG, an exclusion-aware uniform sampler, a rank-indexed
//! adjacency store, and a graph engine with shape builders and randomized
//! text rendering.

mod adjacency;
mod error;
mod graph;
mod rng;
mod sample;
mod union_find;

pub use crate::{
    adjacency::{Adjacency, AdjacencyManager, AdjacencyTree, Cursor, Iter, Neighbors},
    error::{GraphError, GraphErrorCode, Result, SampleError, SampleErrorCode},
    graph::{EdgeUniverse, Graph, Labeler, Orientation, Weighter},
    rng::{XorShift64, global_stream, seed_global},
    sample::{RangeSample, RangeSampler, sample_excluding},
    union_find::DisjointSet,
};

/// Identifier of a vertex; always below the owning graph's order.
pub type VertexId = u64;
