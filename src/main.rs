use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use adjgraph::export::{self, ExportFormat, GraphReport};
use adjgraph::parser::{self, GraphKind, InputFormat, LoadedGraph};

#[derive(Parser)]
#[command(name = "adjgraph")]
#[command(version)]
#[command(about = "Query directed and undirected graphs loaded from edge lists", long_about = None)]
struct Cli {
    /// Edge-list file to load
    #[arg(short, long)]
    input: PathBuf,

    /// Input format (json or text); guessed from the file extension when omitted
    #[arg(short, long)]
    format: Option<InputFormat>,

    /// Graph kind (directed or undirected); text input defaults to directed
    #[arg(short, long)]
    kind: Option<GraphKind>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the graph in human-readable form
    Show,
    /// Print the depth-first visitation order
    Dfs {
        /// Start vertex
        start: String,
        /// Stop once this vertex is visited
        end: Option<String>,
    },
    /// Print the breadth-first visitation order
    Bfs {
        /// Start vertex
        start: String,
        /// Stop once this vertex is visited
        end: Option<String>,
    },
    /// Report whether the graph contains a cycle
    Cycle,
    /// Count connected components (undirected graphs)
    Components,
    /// Print shortest distances from a source vertex (directed graphs)
    Dijkstra {
        /// Source vertex id
        source: usize,
    },
    /// Check whether a sequence of vertices forms a path
    Path {
        /// Vertices in walk order
        vertices: Vec<String>,
    },
    /// Export a summary report
    Report {
        /// Output format: json, csv or markdown
        #[arg(short, long, default_value = "json")]
        export: ExportFormat,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(cli: &Cli) -> Result<LoadedGraph> {
    let format = cli
        .format
        .unwrap_or_else(|| InputFormat::from_path(&cli.input));
    let list = parser::parse_file(&cli.input, format, cli.kind)
        .with_context(|| format!("Failed to load edge list from {}", cli.input.display()))?;

    tracing::info!(kind = %list.kind(), entries = list.len(), "loaded edge list");
    Ok(list.into_graph())
}

fn vertex_id(token: &str) -> Result<usize> {
    token
        .parse()
        .with_context(|| format!("'{}' is not a vertex id", token))
}

fn format_list<T: ToString>(items: &[T]) -> String {
    let items: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Unknown start vertices give an empty order; an unknown end is ignored.
fn traverse(graph: &LoadedGraph, start: &str, end: Option<&str>, depth_first: bool) -> Result<Vec<String>> {
    let order = match graph {
        LoadedGraph::Directed(g) => {
            let start = vertex_id(start)?;
            let end = end.map(vertex_id).transpose()?;
            let order = if depth_first { g.dfs(start, end) } else { g.bfs(start, end) };
            order.iter().map(ToString::to_string).collect()
        }
        LoadedGraph::Undirected(g) => {
            if depth_first {
                g.dfs(start, end)
            } else {
                g.bfs(start, end)
            }
        }
    };
    Ok(order)
}

fn run(cli: Cli) -> Result<()> {
    let graph = load(&cli)?;

    match &cli.command {
        Commands::Show => print!("{}", graph),
        Commands::Dfs { start, end } => {
            println!("{}", format_list(&traverse(&graph, start, end.as_deref(), true)?));
        }
        Commands::Bfs { start, end } => {
            println!("{}", format_list(&traverse(&graph, start, end.as_deref(), false)?));
        }
        Commands::Cycle => {
            let has_cycle = match &graph {
                LoadedGraph::Directed(g) => g.has_cycle(),
                LoadedGraph::Undirected(g) => g.has_cycle(),
            };
            println!("{}", has_cycle);
        }
        Commands::Components => {
            let LoadedGraph::Undirected(g) = &graph else {
                bail!("Connected components are only defined for undirected graphs");
            };
            println!("{}", g.count_connected_components());
        }
        Commands::Dijkstra { source } => {
            let LoadedGraph::Directed(g) = &graph else {
                bail!("Shortest paths need a directed weighted graph");
            };
            let paths = g.dijkstra(*source)?;
            for (vertex, distance) in paths.distances.iter().enumerate() {
                match paths.path_to(vertex) {
                    Some(path) => println!("{} {} {}", vertex, distance, format_list(&path)),
                    None => println!("{} {}", vertex, distance),
                }
            }
        }
        Commands::Path { vertices } => {
            let valid = match &graph {
                LoadedGraph::Directed(g) => {
                    let ids: Vec<usize> = vertices
                        .iter()
                        .map(|v| vertex_id(v))
                        .collect::<Result<_>>()?;
                    g.is_valid_path(&ids)
                }
                LoadedGraph::Undirected(g) => g.is_valid_path(vertices),
            };
            println!("{}", valid);
        }
        Commands::Report { export: format } => {
            let report = GraphReport::from_loaded(&graph);
            let mut stdout = std::io::stdout().lock();
            export::export(*format, &report, &mut stdout)
                .with_context(|| format!("Failed to write {} report", format))?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
