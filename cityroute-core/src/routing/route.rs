use std::fmt;

use crate::PathCost;

/// A shortest path together with its total distance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    cities: Vec<String>,
    distance: PathCost,
}

impl Route {
    pub(crate) fn new(cities: Vec<String>, distance: PathCost) -> Self {
        Self { cities, distance }
    }

    /// Visited cities from source to destination, both included
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn distance(&self) -> PathCost {
        self.distance
    }

    pub fn into_cities(self) -> Vec<String> {
        self.cities
    }

    /// Number of edges travelled
    pub fn hops(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cities.join(" -> "))
    }
}
