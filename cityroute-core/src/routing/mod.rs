//! Shortest-path search and path costs over a [`CityGraph`]

pub mod dijkstra;
mod path_distance;
mod route;

pub use dijkstra::{shortest_path, shortest_route};
pub use path_distance::path_distance;
pub use route::Route;

use crate::{CityGraph, PathCost};

impl CityGraph {
    /// See [`shortest_path`]
    pub fn shortest_path(&self, source: &str, destination: &str) -> Vec<String> {
        shortest_path(self, source, destination)
    }

    /// See [`shortest_route`]
    pub fn shortest_route(&self, source: &str, destination: &str) -> Option<Route> {
        shortest_route(self, source, destination)
    }

    /// See [`path_distance`]
    pub fn path_distance<S: AsRef<str>>(&self, path: &[S]) -> PathCost {
        path_distance(self, path)
    }
}
