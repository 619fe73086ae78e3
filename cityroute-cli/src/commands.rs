use std::fmt;

use cityroute::{PlanError, Traveler, normalize_city_name};
use cityroute_core::CityGraph;

/// Shortest route between two cities, or a note that there is none
pub fn route_report(graph: &CityGraph, from: &str, to: &str) -> String {
    let (from, to) = (normalize_city_name(from), normalize_city_name(to));
    match graph.shortest_route(&from, &to) {
        Some(route) => format!("{route} ({} km)", route.distance()),
        None => format!("No route from {from} to {to}"),
    }
}

pub fn distance_report(graph: &CityGraph, cities: &[String]) -> String {
    let path: Vec<String> = cities.iter().map(|c| normalize_city_name(c)).collect();
    format!("{} km", graph.path_distance(&path))
}

pub fn neighbors_report(graph: &CityGraph, city: &str) -> String {
    let city = normalize_city_name(city);
    if !graph.has_city(&city) {
        return format!("Unknown city {city}");
    }
    graph
        .neighbors(&city)
        .map(|(neighbor, distance)| format!("{neighbor},{distance}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line of the traveler journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEntry {
    Located { traveler: String, city: String },
    Added { traveler: String, city: String },
    Removed { traveler: String, city: String },
    Cleared { traveler: String },
    Sorted { traveler: String },
    Planned { traveler: String, route: String },
    PlanFailed { traveler: String, reason: PlanError },
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Located { traveler, city } => write!(f, "{traveler} is now in {city}"),
            Self::Added { traveler, city } => write!(f, "{traveler} added {city}"),
            Self::Removed { traveler, city } => write!(f, "{traveler} removed {city}"),
            Self::Cleared { traveler } => write!(f, "{traveler} cleared the route"),
            Self::Sorted { traveler } => write!(f, "{traveler} sorted the route"),
            Self::Planned { traveler, route } => write!(f, "{traveler} planned {route}"),
            Self::PlanFailed { traveler, reason } => {
                write!(f, "{traveler} could not plan: {reason}")
            }
        }
    }
}

/// Plan `traveler` to `destination`, describing the outcome as a journal entry
pub fn plan(traveler: &mut Traveler, destination: &str, graph: &CityGraph) -> JournalEntry {
    let name = traveler.name().to_string();
    match traveler.plan_route_to(destination, graph) {
        Ok(route) => JournalEntry::Planned {
            traveler: name,
            route: route.join(" -> "),
        },
        Err(reason) => JournalEntry::PlanFailed {
            traveler: name,
            reason,
        },
    }
}
