//! Text rendering of a graph in randomized edge order.

use rand::seq::SliceRandom;

use super::Graph;
use crate::adjacency::Adjacency;

impl Graph {
    /// Serialize the graph as `"N E"` followed by one line per canonical
    /// edge, in an order shuffled through the graph's PRNG.
    ///
    /// Each line is `label(from) label(to)`, with a weight column appended
    /// when a weighter is configured. The trailing newline is stripped.
    pub fn render(&mut self) -> String {
        let universe = self.universe();
        let mut edges: Vec<Adjacency> = self
            .adjacencies
            .iter()
            .filter(|adjacency| universe.is_canonical(**adjacency))
            .copied()
            .collect();
        edges.shuffle(&mut self.rng);

        let mut out = String::new();
        out.push_str(&format!("{} {}\n", self.order, edges.len()));
        for edge in &edges {
            out.push_str(&(self.labeler)(edge.from));
            out.push(' ');
            out.push_str(&(self.labeler)(edge.to));
            if let Some(weighter) = &self.weighter {
                out.push(' ');
                out.push_str(&weighter(edge));
            }
            out.push('\n');
        }
        while out.ends_with('\n') {
            out.pop();
        }
        out
    }
}
