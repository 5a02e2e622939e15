//! Graph engine: uniform edge sampling, connection, and shape building over
//! the adjacency manager.
//!
//! A graph owns its order, its adjacency store, its private PRNG stream, and
//! the labeling and weighting callbacks used during rendering. Undirected
//! edges are stored as an adjacency and its mirror; sampling always works on
//! the canonical half.

mod pairspace;
mod render;
mod shapes;


pub use self::pairspace::EdgeUniverse;

use tracing::debug;

use crate::{
    VertexId,
    adjacency::{Adjacency, AdjacencyManager},
    error::{GraphError, Result, SampleError},
    rng::{XorShift64, global_stream},
    sample::sample_excluding,
    union_find::DisjointSet,
};

use rand::seq::SliceRandom;

/// Whether a graph stores one adjacency per edge or a mirrored pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    /// Each edge is stored as `(a, b)` and `(b, a)`.
    Undirected,
    /// Each edge is stored once, as given.
    Directed,
}

/// Callback mapping a vertex id to its printed label.
pub type Labeler = Box<dyn Fn(VertexId) -> String>;

/// Callback mapping an adjacency to its printed weight.
pub type Weighter = Box<dyn Fn(&Adjacency) -> String>;

/// A random-generatable graph over vertices `0..order`.
///
/// # Examples
/// ```
/// use graphgen_core::{Graph, XorShift64};
///
/// let mut graph = Graph::undirected_with_rng(10, XorShift64::new(1));
/// graph.add_edges(45).expect("45 edges saturate K10");
/// assert_eq!(graph.edge_count(), 45);
/// assert!(graph.add_edges(1).is_err());
/// ```
pub struct Graph {
    order: u64,
    orientation: Orientation,
    adjacencies: AdjacencyManager,
    rng: XorShift64,
    labeler: Labeler,
    weighter: Option<Weighter>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("order", &self.order)
            .field("orientation", &self.orientation)
            .field("edges", &self.edge_count())
            .finish_non_exhaustive()
    }
}

impl Graph {
    /// Create a graph whose PRNG stream derives from the global seeded
    /// stream.
    #[must_use]
    pub fn new(order: u64, orientation: Orientation) -> Self {
        Self::with_rng(order, orientation, global_stream())
    }

    /// Create a graph with an explicit PRNG stream.
    #[must_use]
    pub fn with_rng(order: u64, orientation: Orientation, rng: XorShift64) -> Self {
        Self {
            order,
            orientation,
            adjacencies: AdjacencyManager::new(order),
            rng,
            labeler: Box::new(|vertex| vertex.to_string()),
            weighter: None,
        }
    }

    /// Undirected graph drawing from the global seeded stream.
    #[must_use]
    pub fn undirected(order: u64) -> Self {
        Self::new(order, Orientation::Undirected)
    }

    /// Directed graph drawing from the global seeded stream.
    #[must_use]
    pub fn directed(order: u64) -> Self {
        Self::new(order, Orientation::Directed)
    }

    /// Undirected graph with an explicit PRNG stream.
    #[must_use]
    pub fn undirected_with_rng(order: u64, rng: XorShift64) -> Self {
        Self::with_rng(order, Orientation::Undirected, rng)
    }

    /// Directed graph with an explicit PRNG stream.
    #[must_use]
    pub fn directed_with_rng(order: u64, rng: XorShift64) -> Self {
        Self::with_rng(order, Orientation::Directed, rng)
    }

    /// Replace the vertex labeler.
    #[must_use]
    pub fn with_labeler(mut self, labeler: impl Fn(VertexId) -> String + 'static) -> Self {
        self.labeler = Box::new(labeler);
        self
    }

    /// Attach a weighter; rendered edges gain a weight column.
    #[must_use]
    pub fn with_weighter(mut self, weighter: impl Fn(&Adjacency) -> String + 'static) -> Self {
        self.weighter = Some(Box::new(weighter));
        self
    }

    /// Number of vertices.
    #[must_use]
    pub const fn order(&self) -> u64 {
        self.order
    }

    /// Whether edges are directed.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        matches!(self.orientation, Orientation::Directed)
    }

    /// The sampling universe matching this graph's orientation.
    #[must_use]
    pub const fn universe(&self) -> EdgeUniverse {
        match self.orientation {
            Orientation::Undirected => EdgeUniverse::Undirected { order: self.order },
            Orientation::Directed => EdgeUniverse::Directed { order: self.order },
        }
    }

    /// Number of edges (undirected mirrors counted once).
    #[must_use]
    pub fn edge_count(&self) -> u64 {
        match self.orientation {
            Orientation::Undirected => self.adjacencies.len() / 2,
            Orientation::Directed => self.adjacencies.len(),
        }
    }

    /// Read access to the adjacency store.
    #[must_use]
    pub const fn adjacencies(&self) -> &AdjacencyManager {
        &self.adjacencies
    }

    /// Whether the edge `(from, to)` is present.
    #[must_use]
    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacencies.contains(Adjacency::new(from, to))
    }

    fn validate_pair(&self, from: VertexId, to: VertexId) -> Result<()> {
        for vertex in [from, to] {
            if vertex >= self.order {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    order: self.order,
                });
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop { vertex: from });
        }
        Ok(())
    }

    /// Insert the edge `(from, to)`; undirected graphs also insert the
    /// mirror. Duplicates are an idempotent no-op.
    ///
    /// Returns whether the edge was newly added.
    ///
    /// # Errors
    /// Rejects endpoints outside `0..order` and self-loops.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<bool> {
        self.validate_pair(from, to)?;
        let adjacency = Adjacency::new(from, to);
        let added = self.adjacencies.insert(adjacency);
        if matches!(self.orientation, Orientation::Undirected) {
            self.adjacencies.insert(adjacency.reversed());
        }
        Ok(added)
    }

    /// Ranks of the canonical edges already present, in ascending order.
    fn present_ranks(&self, universe: EdgeUniverse) -> Vec<u64> {
        self.adjacencies
            .iter()
            .filter(|adjacency| universe.is_canonical(**adjacency))
            .map(|adjacency| universe.edge_to_rank(*adjacency))
            .collect()
    }

    fn sample_absent(&mut self, universe: EdgeUniverse, count: u64) -> Result<Vec<u64>> {
        let exclusions = self.present_ranks(universe);
        let available = universe.size() - exclusions.len() as u64;
        sample_excluding(&mut self.rng, count, 0, universe.size(), exclusions).map_err(|source| {
            match source {
                SampleError::TooManySamples { .. } => GraphError::TooManyEdges {
                    requested: count,
                    available,
                },
                other => GraphError::Sample { source: other },
            }
        })
    }

    /// Add exactly `count` new edges, each uniform over the absent edges of
    /// the universe.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyEdges`] when fewer than `count` edges
    /// are absent.
    pub fn add_edges(&mut self, count: u64) -> Result<()> {
        let universe = self.universe();
        let sampled = self.sample_absent(universe, count)?;
        debug!(count, universe_size = universe.size(), "adding sampled edges");
        for rank in sampled {
            let edge = universe.rank_to_edge(rank);
            self.add_edge(edge.from, edge.to)?;
        }
        Ok(())
    }

    /// Add the minimum number of edges that leaves the undirected graph
    /// connected, linking component representatives along a shuffled
    /// spanning pass.
    ///
    /// Returns the number of edges added (`components − 1`); already
    /// connected graphs are a no-op.
    ///
    /// # Errors
    /// Returns [`GraphError::DirectedConnectUnsupported`] on directed
    /// graphs.
    pub fn connect(&mut self) -> Result<u64> {
        if self.is_directed() {
            return Err(GraphError::DirectedConnectUnsupported);
        }
        if self.order == 0 {
            return Ok(0);
        }

        let mut sets = DisjointSet::new(self.order as usize);
        for adjacency in self
            .adjacencies
            .iter()
            .filter(|adjacency| adjacency.from > adjacency.to)
        {
            sets.merge(adjacency.from as usize, adjacency.to as usize)?;
        }

        let mut vertices: Vec<VertexId> = (0..self.order).collect();
        vertices.shuffle(&mut self.rng);

        let mut seen = vec![false; self.order as usize];
        let mut representatives: Vec<VertexId> = Vec::with_capacity(sets.components());
        for vertex in vertices {
            let root = sets.find(vertex as usize)?;
            if !seen[root] {
                seen[root] = true;
                representatives.push(vertex);
            }
        }

        for index in 1..representatives.len() {
            let pick = self.rng.randrange(0, index as u64) as usize;
            self.add_edge(representatives[pick], representatives[index])?;
        }
        let added = representatives.len() as u64 - 1;
        debug!(added, "connected the graph");
        Ok(added)
    }

    /// Add `count` forest edges: each sampled vertex `v` gains an edge from
    /// a uniformly chosen smaller-or-equal vertex to `v + 1`.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyEdges`] when `count` exceeds
    /// `order − 1`.
    pub fn build_forest(&mut self, count: u64) -> Result<()> {
        let available = self.order.saturating_sub(1);
        let sampled = sample_excluding(&mut self.rng, count, 0, available, Vec::new()).map_err(
            |source| match source {
                SampleError::TooManySamples { .. } => GraphError::TooManyEdges {
                    requested: count,
                    available,
                },
                other => GraphError::Sample { source: other },
            },
        )?;
        for vertex in sampled {
            let parent = self.rng.randrange(0, vertex + 1);
            self.add_edge(parent, vertex + 1)?;
        }
        Ok(())
    }

    /// The `k`-th (0-based) rank in `[0, universe.size())` whose canonical
    /// edge is absent from the store.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyEdges`] when fewer than `k + 1` edges
    /// are absent.
    pub fn kth_absent(&self, k: u64) -> Result<u64> {
        let universe = self.universe();
        let present = self.present_ranks(universe);
        let available = universe.size() - present.len() as u64;
        if k >= available {
            return Err(GraphError::TooManyEdges {
                requested: k + 1,
                available,
            });
        }
        let mut value = k;
        for rank in present {
            if rank <= value {
                value += 1;
            } else {
                break;
            }
        }
        Ok(value)
    }

    /// Number of connected components, treating edges as undirected.
    ///
    /// # Errors
    /// Never fails for a well-formed graph; vertex ids inside the store are
    /// always in range.
    pub fn component_count(&self) -> Result<usize> {
        if self.order == 0 {
            return Ok(0);
        }
        let mut sets = DisjointSet::new(self.order as usize);
        for adjacency in self.adjacencies.iter() {
            sets.merge(adjacency.from as usize, adjacency.to as usize)?;
        }
        Ok(sets.components())
    }
}
