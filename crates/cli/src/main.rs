use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graph_walker_core::{bfs, dfs, edgelist, AdjacencyList, AdjacencyMatrix, LogObserver};

/// GraphWalker - Build adjacency representations and traverse graphs
#[derive(Parser)]
#[command(name = "walker")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(about = "Build adjacency representations from edge lists and traverse them", long_about = None)]
struct Cli {
    /// Log each visited vertex (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the adjacency matrix of an edge list with integer vertices
    Matrix {
        /// Number of vertices; every index must be below this
        #[arg(short = 'n', long)]
        vertices: usize,
        /// Edge list file (two vertices per line)
        file: PathBuf,
    },
    /// Print the adjacency list of an edge list
    List {
        /// Edge list file (two vertices per line)
        file: PathBuf,
    },
    /// Breadth-first traversal from a source vertex
    Bfs {
        /// Vertex to start from
        #[arg(short, long)]
        source: String,
        /// Also report where this vertex appears in the visit order
        #[arg(short, long)]
        target: Option<String>,
        /// Edge list file (two vertices per line)
        file: PathBuf,
    },
    /// Depth-first coverage of every vertex
    Dfs {
        /// Vertex order to drive the walk; defaults to first-seen order
        #[arg(long = "vertex")]
        vertices: Vec<String>,
        /// Edge list file (two vertices per line)
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match cli.command {
        Command::Matrix { vertices, file } => {
            let edges = edgelist::read_edge_list(&file)?;
            let indexed = edgelist::to_index_edges(&edges)?;
            let matrix = AdjacencyMatrix::build(&indexed, vertices)
                .with_context(|| format!("Cannot build matrix from {}", file.display()))?;
            serde_json::to_string_pretty(&matrix)?
        }
        Command::List { file } => {
            let adj = AdjacencyList::build(&edgelist::read_edge_list(&file)?);
            let entries: Vec<(&String, &[String])> = adj.iter().collect();
            serde_json::to_string_pretty(&entries)?
        }
        Command::Bfs {
            source,
            target,
            file,
        } => {
            let adj = AdjacencyList::build(&edgelist::read_edge_list(&file)?);
            match target {
                Some(target) => {
                    let outcome =
                        bfs::breadth_first_search(&source, &target, &adj, &mut LogObserver)?;
                    serde_json::to_string_pretty(&outcome)?
                }
                None => serde_json::to_string_pretty(&bfs::breadth_first(&source, &adj)?)?,
            }
        }
        Command::Dfs { vertices, file } => {
            let adj = AdjacencyList::build(&edgelist::read_edge_list(&file)?);
            let vertices = if vertices.is_empty() {
                adj.vertices().to_vec()
            } else {
                vertices
            };
            let coverage = dfs::depth_first_coverage(&vertices, &adj);
            if coverage.skipped_neighbors > 0 {
                log::warn!("{} neighbors skipped", coverage.skipped_neighbors);
            }
            serde_json::to_string_pretty(&coverage)?
        }
    };

    println!("{}", output);
    Ok(())
}
