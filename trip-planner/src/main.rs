//! Command-line runner: parse the map and client files, route every
//! client with the selected strategy, and write the solution file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{ArgAction, ArgGroup, Parser};
use tracing::{Level, debug, info};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use trip_planner::domain::Client;
use trip_planner::input::{self, ParseError};
use trip_planner::network::Network;
use trip_planner::planner::{
    BreadthFirst, DepthFirst, GreedyBest, SearchOptions, plan_route, solution_line,
};
use trip_planner::render;

#[derive(Parser, Debug)]
#[command(version, about = "Route a batch of clients over a scheduled transport map")]
#[command(group(ArgGroup::new("strategy").required(true).args(["dfs", "bfs", "gbfs"])))]
struct Cli {
    /// File where the map is defined
    routemap: PathBuf,

    /// File where all clients' requests are defined
    clients: PathBuf,

    /// Use depth-first search
    #[arg(long)]
    dfs: bool,

    /// Use breadth-first search
    #[arg(long)]
    bfs: bool,

    /// Use greedy best-first search
    #[arg(long)]
    gbfs: bool,

    /// Print each solution line to stdout as well
    #[arg(long)]
    print_solution: bool,

    /// Break primary-metric ties on the other metric
    #[arg(short = 's', long)]
    secondary_optimization: bool,

    /// Write a Graphviz rendering of the map next to the map file
    #[arg(short, long)]
    plot: bool,

    /// Write the log to this file instead of stderr
    #[arg(short, long)]
    logfile: Option<PathBuf>,

    /// Verbosity (repeat: -v warnings, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Route the whole batch this many times (timing aid)
    #[arg(short, long, default_value_t = 1)]
    runs: u32,

    /// Skip writing the solution file (timing aid)
    #[arg(long)]
    no_sol: bool,
}

#[derive(Debug, Clone, Copy)]
enum StrategyFlag {
    DepthFirst,
    BreadthFirst,
    GreedyBest,
}

impl Cli {
    fn strategy(&self) -> StrategyFlag {
        if self.dfs {
            StrategyFlag::DepthFirst
        } else if self.bfs {
            StrategyFlag::BreadthFirst
        } else {
            StrategyFlag::GreedyBest
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    init_logging(cli.verbose, cli.logfile.as_deref())?;

    debug!(path = %cli.routemap.display(), "parsing the route map file");
    let network = input::read_network(&cli.routemap)?;
    debug!(
        cities = network.city_count(),
        connections = network.connections().len(),
        "finished parsing the route map file"
    );

    if cli.plot {
        let gv_path = render::render_to_gv(&network, &cli.routemap)?;
        info!(path = %gv_path.display(), "wrote map rendering");
    }

    debug!(path = %cli.clients.display(), "parsing the client file");
    let clients = input::read_clients(&cli.clients)?;
    debug!(clients = clients.len(), "finished parsing the client file");

    let strategy = cli.strategy();
    info!(?strategy, runs = cli.runs, "routing clients");

    let options = SearchOptions {
        secondary_optimization: cli.secondary_optimization,
    };
    let mut solution = if cli.no_sol {
        None
    } else {
        let path = cli.clients.with_extension("sol");
        Some(BufWriter::new(File::create(path)?))
    };

    for _ in 0..cli.runs {
        for client in &clients {
            debug!(client = client.id, "routing client");
            let line = route_client(&network, client, strategy, options);
            debug!(%line, "routed client");
            if let Some(writer) = solution.as_mut() {
                writeln!(writer, "{line}")?;
            }
            if cli.print_solution {
                println!("{line}");
            }
        }
    }
    if let Some(mut writer) = solution {
        writer.flush()?;
    }
    Ok(())
}

fn route_client(
    network: &Network,
    client: &Client,
    strategy: StrategyFlag,
    options: SearchOptions,
) -> String {
    let itinerary = match strategy {
        StrategyFlag::DepthFirst => plan_route(network, client, DepthFirst, options),
        StrategyFlag::BreadthFirst => plan_route(network, client, BreadthFirst, options),
        StrategyFlag::GreedyBest => plan_route(network, client, GreedyBest, options),
    };
    solution_line(client.id, itinerary.as_ref())
}

fn init_logging(verbosity: u8, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);
    match logfile {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(BoxMakeWriter::new(Arc::new(file)))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
