//! Error types for the graphgen core library.
//!
//! Defines the error enums exposed by the public API and a convenient result
//! alias.

use std::fmt;

use thiserror::Error;

use crate::VertexId;

/// Stable codes describing [`SampleError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum SampleErrorCode {
    /// More samples were requested than the range can supply.
    TooManySamples,
    /// The sampling range was empty or inverted.
    EmptyRange,
}

impl SampleErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooManySamples => "SAMPLE_TOO_MANY_SAMPLES",
            Self::EmptyRange => "SAMPLE_EMPTY_RANGE",
        }
    }
}

impl fmt::Display for SampleErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced while drawing an exclusion-aware sample.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SampleError {
    /// More samples were requested than the range can supply once the
    /// exclusions are removed.
    #[error(
        "cannot draw {requested} distinct values from [{lo}, {hi}) with {excluded} exclusions"
    )]
    TooManySamples {
        /// Number of distinct values requested.
        requested: u64,
        /// Inclusive lower bound of the range.
        lo: u64,
        /// Exclusive upper bound of the range.
        hi: u64,
        /// Number of excluded values inside the range.
        excluded: u64,
    },
    /// The sampling range was empty or inverted.
    #[error("sampling range [{lo}, {hi}) is empty")]
    EmptyRange {
        /// Inclusive lower bound of the range.
        lo: u64,
        /// Exclusive upper bound of the range.
        hi: u64,
    },
}

impl SampleError {
    /// Retrieve the stable [`SampleErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> SampleErrorCode {
        match self {
            Self::TooManySamples { .. } => SampleErrorCode::TooManySamples,
            Self::EmptyRange { .. } => SampleErrorCode::EmptyRange,
        }
    }
}

/// Stable codes describing [`GraphError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorCode {
    /// A vertex id was outside the graph's order.
    VertexOutOfRange,
    /// An edge connected a vertex to itself.
    SelfLoop,
    /// A shape builder was invoked on too small a graph.
    TooFewNodes,
    /// More new edges were requested than the complement holds.
    TooManyEdges,
    /// Strongly connecting a directed graph is not supported.
    DirectedConnectUnsupported,
    /// The operation only applies to directed graphs.
    RequiresDirected,
    /// The underlying sampler rejected the request.
    SampleFailure,
}

impl GraphErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexOutOfRange => "GRAPH_VERTEX_OUT_OF_RANGE",
            Self::SelfLoop => "GRAPH_SELF_LOOP",
            Self::TooFewNodes => "GRAPH_TOO_FEW_NODES",
            Self::TooManyEdges => "GRAPH_TOO_MANY_EDGES",
            Self::DirectedConnectUnsupported => "GRAPH_DIRECTED_CONNECT_UNSUPPORTED",
            Self::RequiresDirected => "GRAPH_REQUIRES_DIRECTED",
            Self::SampleFailure => "GRAPH_SAMPLE_FAILURE",
        }
    }
}

impl fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type produced by graph construction and mutation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex id was outside the graph's order.
    #[error("vertex {vertex} is out of range for a graph of order {order}")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: VertexId,
        /// Number of vertices in the graph.
        order: u64,
    },
    /// An edge connected a vertex to itself.
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// The vertex at both endpoints.
        vertex: VertexId,
    },
    /// A shape builder was invoked on too small a graph.
    #[error("{shape} requires at least {required} vertices (graph has {order})")]
    TooFewNodes {
        /// Name of the requested shape.
        shape: &'static str,
        /// Minimum order the shape needs.
        required: u64,
        /// Number of vertices in the graph.
        order: u64,
    },
    /// More new edges were requested than the complement holds.
    #[error("cannot add {requested} new edges; only {available} absent edges remain")]
    TooManyEdges {
        /// Number of new edges requested.
        requested: u64,
        /// Number of absent edges still available.
        available: u64,
    },
    /// Strongly connecting a directed graph is not supported.
    #[error("connecting a directed graph is not supported")]
    DirectedConnectUnsupported,
    /// The operation only applies to directed graphs.
    #[error("{operation} requires a directed graph")]
    RequiresDirected {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// The underlying sampler rejected the request.
    #[error("edge sampling failed: {source}")]
    Sample {
        /// Error raised by the exclusion-aware sampler.
        #[source]
        source: SampleError,
    },
}

impl GraphError {
    /// Retrieve the stable [`GraphErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::VertexOutOfRange { .. } => GraphErrorCode::VertexOutOfRange,
            Self::SelfLoop { .. } => GraphErrorCode::SelfLoop,
            Self::TooFewNodes { .. } => GraphErrorCode::TooFewNodes,
            Self::TooManyEdges { .. } => GraphErrorCode::TooManyEdges,
            Self::DirectedConnectUnsupported => GraphErrorCode::DirectedConnectUnsupported,
            Self::RequiresDirected { .. } => GraphErrorCode::RequiresDirected,
            Self::Sample { .. } => GraphErrorCode::SampleFailure,
        }
    }

    /// Retrieve the inner [`SampleErrorCode`] when the error originated in
    /// the sampler.
    #[must_use]
    pub const fn sample_code(&self) -> Option<SampleErrorCode> {
        match self {
            Self::Sample { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
