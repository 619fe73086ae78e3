use std::fmt;

use hashbrown::HashMap;

use super::components::{EdgeRecord, Neighbor};
use crate::{CityId, Distance, loading::GraphBuilder};

/// Undirected weighted graph of cities.
///
/// Cities are interned to dense [`CityId`]s on insertion. Each accepted
/// edge is stored in both directions: in the adjacency lists of its two
/// endpoints and as two [`EdgeRecord`]s. Adjacency lists keep insertion
/// order and parallel edges are not merged.
#[derive(Debug, Clone, Default)]
pub struct CityGraph {
    names: Vec<String>,
    index: HashMap<String, CityId>,
    adjacency: Vec<Vec<Neighbor>>,
    edges: Vec<EdgeRecord>,
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(city_a, city_b, distance)` triples.
    ///
    /// Triples with an empty city name are skipped.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, Distance)>,
        S: AsRef<str>,
    {
        let mut builder = GraphBuilder::new();
        for (from, to, distance) in edges {
            builder.add_edge(from.as_ref(), to.as_ref(), distance);
        }
        builder.build()
    }

    fn intern(&mut self, name: &str) -> CityId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Insert an undirected edge. Callers validate the names.
    pub(crate) fn insert_edge(&mut self, from: &str, to: &str, distance: Distance) {
        let a = self.intern(from);
        let b = self.intern(to);

        self.adjacency[a].push(Neighbor { city: b, distance });
        self.adjacency[b].push(Neighbor { city: a, distance });

        self.edges.push(EdgeRecord {
            from: a,
            to: b,
            distance,
        });
        self.edges.push(EdgeRecord {
            from: b,
            to: a,
            distance,
        });
    }

    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.index.get(name).copied()
    }

    /// Name of an interned city.
    ///
    /// # Panics
    ///
    /// If `id` was not produced by this graph
    pub fn city_name(&self, id: CityId) -> &str {
        &self.names[id]
    }

    pub fn has_city(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Neighbors of `city` in insertion order, empty for unknown cities
    pub fn neighbors<'a>(&'a self, city: &str) -> impl Iterator<Item = (&'a str, Distance)> + 'a {
        self.city_id(city)
            .map_or(&[][..], |id| self.adjacency[id].as_slice())
            .iter()
            .map(move |n| (self.names[n.city].as_str(), n.distance))
    }

    pub(crate) fn adjacent(&self, id: CityId) -> &[Neighbor] {
        &self.adjacency[id]
    }

    /// All cities, in the order they were first seen
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn city_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed edge records (twice the accepted input edges)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn edge_records(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// One `A-B,distance` record per stored directed edge
    pub fn serialize(&self) -> Vec<String> {
        self.edges
            .iter()
            .map(|e| format!("{}-{},{}", self.names[e.from], self.names[e.to], e.distance))
            .collect()
    }
}

impl fmt::Display for CityGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize().join("\n"))
    }
}
