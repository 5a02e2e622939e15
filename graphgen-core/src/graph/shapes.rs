//! Scripted shape builders layered on the graph engine.

use super::{Graph, pairspace::EdgeUniverse};
use crate::error::{GraphError, Result};

impl Graph {
    /// Chain the vertices into a path of `order − 1` edges.
    ///
    /// # Errors
    /// Propagates [`Graph::add_edge`] failures; a path exists for any order.
    pub fn build_path(&mut self) -> Result<()> {
        for vertex in 1..self.order {
            self.add_edge(vertex - 1, vertex)?;
        }
        Ok(())
    }

    /// Close the path into a cycle.
    ///
    /// # Errors
    /// Returns [`GraphError::TooFewNodes`] below three vertices.
    pub fn build_cycle(&mut self) -> Result<()> {
        if self.order < 3 {
            return Err(GraphError::TooFewNodes {
                shape: "cycle",
                required: 3,
                order: self.order,
            });
        }
        self.build_path()?;
        self.add_edge(self.order - 1, 0)?;
        Ok(())
    }

    /// Attach every other vertex to the hub vertex `0`.
    ///
    /// # Errors
    /// Returns [`GraphError::TooFewNodes`] below two vertices.
    pub fn build_star(&mut self) -> Result<()> {
        if self.order < 2 {
            return Err(GraphError::TooFewNodes {
                shape: "star",
                required: 2,
                order: self.order,
            });
        }
        for vertex in 1..self.order {
            self.add_edge(0, vertex)?;
        }
        Ok(())
    }

    /// A star whose rim vertices `1..order` form a cycle.
    ///
    /// # Errors
    /// Returns [`GraphError::TooFewNodes`] below four vertices.
    pub fn build_wheel(&mut self) -> Result<()> {
        if self.order < 4 {
            return Err(GraphError::TooFewNodes {
                shape: "wheel",
                required: 4,
                order: self.order,
            });
        }
        self.build_star()?;
        for vertex in 2..self.order {
            self.add_edge(vertex - 1, vertex)?;
        }
        // Rim closure; the hub takes no rim edge.
        self.add_edge(self.order - 1, 1)?;
        Ok(())
    }

    /// Connect every pair of distinct vertices.
    ///
    /// # Errors
    /// Propagates [`Graph::add_edge`] failures; a clique exists for any
    /// order.
    pub fn build_clique(&mut self) -> Result<()> {
        for from in 1..self.order {
            for to in 0..from {
                self.add_edge(from, to)?;
            }
        }
        Ok(())
    }

    /// A uniformly random spanning forest with `order − 1` edges, i.e. a
    /// random tree.
    ///
    /// # Errors
    /// Propagates [`Graph::build_forest`] failures.
    pub fn build_tree(&mut self) -> Result<()> {
        let edges = self.order.saturating_sub(1);
        self.build_forest(edges)
    }

    /// Add `count` new acyclic edges, uniform over the absent
    /// strictly-lower-triangular pairs; every edge runs from the larger to
    /// the smaller endpoint.
    ///
    /// # Errors
    /// Returns [`GraphError::RequiresDirected`] on undirected graphs and
    /// [`GraphError::TooManyEdges`] when the triangular space runs out.
    pub fn build_dag(&mut self, count: u64) -> Result<()> {
        if !self.is_directed() {
            return Err(GraphError::RequiresDirected {
                operation: "build_dag",
            });
        }
        let universe = EdgeUniverse::Dag { order: self.order };
        let sampled = self.sample_absent(universe, count)?;
        for rank in sampled {
            let edge = universe.rank_to_edge(rank);
            self.add_edge(edge.from, edge.to)?;
        }
        Ok(())
    }
}
