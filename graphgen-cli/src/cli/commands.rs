//! Clap command tree and execution for the graphgen CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use graphgen_core::{Graph, GraphError, XorShift64, seed_global};

/// Command-line arguments for the graphgen binary.
#[derive(Debug, Parser)]
#[command(name = "graphgen", version, about = "Generate random test graphs")]
pub struct Cli {
    /// Seed for the deterministic generator stream.
    #[arg(long, global = true, default_value_t = 0)]
    pub seed: u64,

    /// Append a uniform integer weight in `1..=MAX` to every edge.
    #[arg(long, global = true, value_name = "MAX", value_parser = clap::value_parser!(u64).range(1..))]
    pub weight_max: Option<u64>,

    /// The graph to generate.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported graph shapes.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// A path on the requested vertices.
    Path(OrderArgs),
    /// A cycle on the requested vertices.
    Cycle(OrderArgs),
    /// A star with vertex 0 as the hub.
    Star(OrderArgs),
    /// A star whose rim forms a cycle.
    Wheel(OrderArgs),
    /// The complete graph.
    Clique(OrderArgs),
    /// A uniformly random spanning tree.
    Tree(OrderArgs),
    /// A random forest with the requested edge count.
    Forest(ForestArgs),
    /// Uniform random edges, optionally directed or connected afterwards.
    Random(RandomArgs),
    /// A random DAG; every edge runs from the larger to the smaller vertex.
    Dag(DagArgs),
}

/// Arguments shared by the fixed shapes.
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Number of vertices.
    #[arg(long, short = 'n')]
    pub nodes: u64,
}

/// Arguments for forest generation.
#[derive(Debug, Args)]
pub struct ForestArgs {
    /// Number of vertices.
    #[arg(long, short = 'n')]
    pub nodes: u64,
    /// Number of forest edges.
    #[arg(long, short = 'm')]
    pub edges: u64,
}

/// Arguments for uniform random graphs.
#[derive(Debug, Args)]
pub struct RandomArgs {
    /// Number of vertices.
    #[arg(long, short = 'n')]
    pub nodes: u64,
    /// Number of edges to sample.
    #[arg(long, short = 'm')]
    pub edges: u64,
    /// Sample directed edges instead of undirected ones.
    #[arg(long)]
    pub directed: bool,
    /// Add the minimum extra edges to connect the result (undirected only).
    #[arg(long, conflicts_with = "directed")]
    pub connected: bool,
}

/// Arguments for DAG generation.
#[derive(Debug, Args)]
pub struct DagArgs {
    /// Number of vertices.
    #[arg(long, short = 'n')]
    pub nodes: u64,
    /// Number of edges to sample.
    #[arg(long, short = 'm')]
    pub edges: u64,
}

/// Errors surfaced by CLI execution.
#[derive(Debug, Error)]
pub enum CliError {
    /// The core library rejected the request.
    #[error("graph generation failed: {0}")]
    Core(#[from] GraphError),
}

/// The outcome of a CLI run: the rendered graph and its headline numbers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedGraph {
    /// Number of vertices.
    pub order: u64,
    /// Number of emitted edges.
    pub edges: u64,
    /// The serialized graph text.
    pub text: String,
}

/// Seed the generator stream, build the requested graph, and render it.
///
/// # Errors
/// Returns [`CliError::Core`] when the request violates a core precondition,
/// such as oversubscribing the edge complement.
pub fn run_cli(cli: Cli) -> Result<RenderedGraph, CliError> {
    seed_global(cli.seed);
    let mut graph = build_graph(&cli.command)?;
    if let Some(max) = cli.weight_max {
        let seed = cli.seed;
        graph = graph.with_weighter(move |adjacency| {
            let mix = seed ^ adjacency.from.rotate_left(32) ^ adjacency.to;
            XorShift64::new(mix).randrange(1, max + 1).to_string()
        });
    }
    let text = graph.render();
    let rendered = RenderedGraph {
        order: graph.order(),
        edges: graph.edge_count(),
        text,
    };
    info!(
        order = rendered.order,
        edges = rendered.edges,
        "generated graph"
    );
    Ok(rendered)
}

fn build_graph(command: &Command) -> Result<Graph, CliError> {
    let graph = match command {
        Command::Path(args) => {
            let mut graph = Graph::undirected(args.nodes);
            graph.build_path()?;
            graph
        }
        Command::Cycle(args) => {
            let mut graph = Graph::undirected(args.nodes);
            graph.build_cycle()?;
            graph
        }
        Command::Star(args) => {
            let mut graph = Graph::undirected(args.nodes);
            graph.build_star()?;
            graph
        }
        Command::Wheel(args) => {
            let mut graph = Graph::undirected(args.nodes);
            graph.build_wheel()?;
            graph
        }
        Command::Clique(args) => {
            let mut graph = Graph::undirected(args.nodes);
            graph.build_clique()?;
            graph
        }
        Command::Tree(args) => {
            let mut graph = Graph::undirected(args.nodes);
            graph.build_tree()?;
            graph
        }
        Command::Forest(args) => {
            let mut graph = Graph::undirected(args.nodes);
            graph.build_forest(args.edges)?;
            graph
        }
        Command::Random(args) => {
            let mut graph = if args.directed {
                Graph::directed(args.nodes)
            } else {
                Graph::undirected(args.nodes)
            };
            graph.add_edges(args.edges)?;
            if args.connected {
                graph.connect()?;
            }
            graph
        }
        Command::Dag(args) => {
            let mut graph = Graph::directed(args.nodes);
            graph.build_dag(args.edges)?;
            graph
        }
    };
    Ok(graph)
}

/// Write the rendered graph followed by a newline.
///
/// # Errors
/// Propagates writer failures.
pub fn render_graph(rendered: &RenderedGraph, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{}", rendered.text)
}
