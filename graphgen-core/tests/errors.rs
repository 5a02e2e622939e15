//! Error-surface tests: stable codes and message framing.

use graphgen_core::{
    Graph, GraphError, GraphErrorCode, SampleErrorCode, XorShift64, sample_excluding,
};

#[test]
fn graph_error_codes_are_stable() {
    let cases = [
        (
            GraphError::VertexOutOfRange {
                vertex: 9,
                order: 5,
            },
            "GRAPH_VERTEX_OUT_OF_RANGE",
        ),
        (GraphError::SelfLoop { vertex: 2 }, "GRAPH_SELF_LOOP"),
        (
            GraphError::TooFewNodes {
                shape: "wheel",
                required: 4,
                order: 2,
            },
            "GRAPH_TOO_FEW_NODES",
        ),
        (
            GraphError::TooManyEdges {
                requested: 3,
                available: 1,
            },
            "GRAPH_TOO_MANY_EDGES",
        ),
        (
            GraphError::DirectedConnectUnsupported,
            "GRAPH_DIRECTED_CONNECT_UNSUPPORTED",
        ),
        (
            GraphError::RequiresDirected {
                operation: "build_dag",
            },
            "GRAPH_REQUIRES_DIRECTED",
        ),
    ];
    for (error, code) in cases {
        assert_eq!(error.code().as_str(), code);
    }
}

#[test]
fn sampler_failures_expose_their_code_through_the_graph_error() {
    let mut rng = XorShift64::new(1);
    let sample_error =
        sample_excluding(&mut rng, 5, 0, 3, Vec::new()).expect_err("three candidates for five");
    assert_eq!(sample_error.code(), SampleErrorCode::TooManySamples);

    let wrapped = GraphError::Sample {
        source: sample_error,
    };
    assert_eq!(wrapped.code(), GraphErrorCode::SampleFailure);
    assert_eq!(wrapped.sample_code(), Some(SampleErrorCode::TooManySamples));

    let plain = GraphError::SelfLoop { vertex: 1 };
    assert_eq!(plain.sample_code(), None);
}

#[test]
fn messages_carry_the_offending_values() {
    let mut graph = Graph::undirected_with_rng(5, XorShift64::new(1));
    let err = graph.add_edge(1, 7).expect_err("vertex 7 is out of range");
    assert_eq!(
        err.to_string(),
        "vertex 7 is out of range for a graph of order 5"
    );

    let err = graph.add_edge(3, 3).expect_err("self-loops are rejected");
    assert_eq!(err.to_string(), "edge (3, 3) is a self-loop");

    let err = graph.add_edges(100).expect_err("only 10 slots exist");
    assert_eq!(
        err.to_string(),
        "cannot add 100 new edges; only 10 absent edges remain"
    );
}
