//! `cityroute` - shortest routes between cities from the command line.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, bail};
use cityroute::{Journal, Traveler};
use cityroute_core::CityGraph;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::JournalEntry;
use config::Config;

/// Plan routes over a `CityA-CityB,distance` edge list
#[derive(Parser, Debug)]
#[command(name = "cityroute")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "CITYROUTE_CONFIG")]
    config: Option<PathBuf>,

    /// Edge list, overrides `map_path` from the configuration
    #[arg(short, long)]
    map: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest route between two cities
    Route { from: String, to: String },
    /// Total distance along the given cities
    Distance {
        #[arg(required = true)]
        cities: Vec<String>,
    },
    /// Direct neighbors of a city
    Neighbors { city: String },
    /// Print the loaded edge list, one record per direction
    Export,
    /// Inspect or edit the saved traveler
    Traveler {
        /// Name for a new traveler when no saved one exists
        #[arg(long, default_value = "Traveler")]
        name: String,

        #[command(subcommand)]
        action: TravelerAction,
    },
}

#[derive(Subcommand, Debug)]
enum TravelerAction {
    Show,
    /// Set the current location
    Locate { city: String },
    Add { city: String },
    Remove { city: String },
    Clear,
    Sort,
    /// Replace the route with the shortest path to a destination
    Plan { destination: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(map) = args.map {
        config.map_path = map;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "Configuration loaded");

    match args.command {
        Command::Route { from, to } => {
            let graph = load_graph(&config)?;
            println!("{}", commands::route_report(&graph, &from, &to));
        }
        Command::Distance { cities } => {
            let graph = load_graph(&config)?;
            println!("{}", commands::distance_report(&graph, &cities));
        }
        Command::Neighbors { city } => {
            let graph = load_graph(&config)?;
            println!("{}", commands::neighbors_report(&graph, &city));
        }
        Command::Export => {
            let graph = load_graph(&config)?;
            println!("{graph}");
        }
        Command::Traveler { name, action } => run_traveler(&config, name, action)?,
    }

    Ok(())
}

fn load_graph(config: &Config) -> anyhow::Result<CityGraph> {
    let graph = cityroute_core::load_edge_list(&config.map_path)
        .with_context(|| format!("failed to load map {}", config.map_path.display()))?;
    tracing::info!(
        cities = graph.city_count(),
        edges = graph.edge_count(),
        "Map loaded"
    );
    Ok(graph)
}

fn run_traveler(config: &Config, name: String, action: TravelerAction) -> anyhow::Result<()> {
    let mut traveler = match Traveler::load_from_file(&config.traveler_path) {
        Ok(traveler) => traveler,
        Err(cityroute::Error::NotFound(path)) => {
            tracing::info!("No traveler at {}, starting {name}", path.display());
            Traveler::new(name)
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to load traveler {}", config.traveler_path.display())
            });
        }
    };

    let who = traveler.name().to_string();
    let entry = match action {
        TravelerAction::Show => {
            println!("{traveler}");
            return Ok(());
        }
        TravelerAction::Locate { city } => {
            traveler.set_location(&city);
            JournalEntry::Located {
                traveler: who,
                city: traveler.location().to_string(),
            }
        }
        TravelerAction::Add { city } => {
            if city.trim().is_empty() {
                bail!("city name must not be blank");
            }
            traveler.add_city(&city);
            JournalEntry::Added {
                traveler: who,
                city: cityroute::normalize_city_name(&city),
            }
        }
        TravelerAction::Remove { city } => {
            if !traveler.remove_city(&city) {
                bail!("{} is not on the route", cityroute::normalize_city_name(&city));
            }
            JournalEntry::Removed {
                traveler: who,
                city: cityroute::normalize_city_name(&city),
            }
        }
        TravelerAction::Clear => {
            traveler.clear_route();
            JournalEntry::Cleared { traveler: who }
        }
        TravelerAction::Sort => {
            traveler.sort_route();
            JournalEntry::Sorted { traveler: who }
        }
        TravelerAction::Plan { destination } => {
            let graph = load_graph(config)?;
            commands::plan(&mut traveler, &destination, &graph)
        }
    };

    println!("{entry}");

    let mut journal = Journal::new();
    let failed = matches!(entry, JournalEntry::PlanFailed { .. });
    journal.add(entry);

    traveler
        .save_to_file(&config.traveler_path)
        .with_context(|| format!("failed to save traveler {}", config.traveler_path.display()))?;
    journal
        .flush(&config.journal_path)
        .with_context(|| format!("failed to write journal {}", config.journal_path.display()))?;

    if failed {
        bail!("route planning failed");
    }
    println!("{traveler}");
    Ok(())
}
