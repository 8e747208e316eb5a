use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use tracing::info;
use warshall_graph::{
    graph::Graph,
    json::JsonGraph,
    solver::{all_pairs_solver::AllPairsSolver, floyd_warshall::FloydWarshall},
};

use crate::{
    file_utils::collect_graph_files,
    output::{OutputFormat, render},
};

const GRAPHS_FOLDER_ENV_VAR: &str = "WARSHALL_GRAPHS_FOLDER";

#[derive(Args)]
pub struct SolveArgs {
    /// A graph file or a folder of graph files. Defaults to $WARSHALL_GRAPHS_FOLDER
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "lines")]
    format: OutputFormat,
}

pub fn load_graph(path: &Path) -> anyhow::Result<Graph> {
    let f = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let content: JsonGraph = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("Invalid graph file {}", path.display()))?;

    Ok(content.build_graph()?)
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let input = match args.input {
        Some(input) => input,
        None => PathBuf::from(std::env::var(GRAPHS_FOLDER_ENV_VAR).with_context(|| {
            format!("No input given and {GRAPHS_FOLDER_ENV_VAR} is not set")
        })?),
    };

    let paths = collect_graph_files(&input)?;
    info!("Solving {} graph file(s) from {:?}", paths.len(), input);

    for path in paths {
        let graph = load_graph(&path)?;
        info!(
            "{:?}: vertices = {}, edges = {}",
            path,
            graph.num_vertices(),
            graph.num_edges()
        );

        let matrix = FloydWarshall.solve(&graph);

        println!("{}", path.display());
        println!("{}", render(&matrix, args.format));
    }

    Ok(())
}
