//! Command-line interface orchestration for the graphgen generator.
//!
//! Offers one subcommand per graph shape plus uniform random graphs and
//! DAGs; every run seeds the deterministic generator stream and prints the
//! rendered graph to stdout.

mod commands;

pub use commands::{
    Cli, CliError, Command, DagArgs, ForestArgs, OrderArgs, RandomArgs, RenderedGraph,
    render_graph, run_cli,
};
