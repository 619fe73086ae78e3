use log::{debug, info};

use crate::{CityGraph, Distance};

/// Incremental graph construction with tolerant input handling
///
/// Rejected edges are counted instead of failing the build.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: CityGraph,
    accepted: usize,
    skipped: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected edge. Returns `false` and skips it if either city
    /// name is blank.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: Distance) -> bool {
        if from.trim().is_empty() || to.trim().is_empty() {
            debug!("Skipping edge with missing city name: {from:?}-{to:?},{distance}");
            self.skipped += 1;
            return false;
        }
        self.graph.insert_edge(from, to, distance);
        self.accepted += 1;
        true
    }

    /// Add an edge whose distance is still text. Returns `false` and skips it
    /// if the distance is not a non-negative integer.
    pub fn add_raw_edge(&mut self, from: &str, to: &str, distance: &str) -> bool {
        match distance.trim().parse::<Distance>() {
            Ok(distance) => self.add_edge(from, to, distance),
            Err(e) => {
                debug!("Skipping edge {from}-{to} with invalid distance {distance:?}: {e}");
                self.skipped += 1;
                false
            }
        }
    }

    /// Count a record that was rejected before reaching the builder
    pub(crate) fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn build(self) -> CityGraph {
        info!(
            "Built city graph: {} cities, {} edges ({} records skipped)",
            self.graph.city_count(),
            self.accepted,
            self.skipped
        );
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_edges_parsed() {
        let mut builder = GraphBuilder::new();
        assert!(builder.add_raw_edge("A", "B", "12"));
        assert!(builder.add_raw_edge("B", "C", " 4 "));
        assert!(!builder.add_raw_edge("C", "D", "far"));
        assert!(!builder.add_raw_edge("C", "D", "-3"));
        assert!(!builder.add_raw_edge("C", "D", ""));
        assert_eq!(builder.accepted(), 2);
        assert_eq!(builder.skipped(), 3);

        let g = builder.build();
        assert!(!g.has_city("D"));
        assert_eq!(g.neighbors("B").collect::<Vec<_>>(), vec![("A", 12), ("C", 4)]);
    }

    #[test]
    fn test_blank_names_rejected() {
        let mut builder = GraphBuilder::new();
        assert!(!builder.add_edge("  ", "B", 1));
        assert!(!builder.add_raw_edge("A", "", "1"));
        assert_eq!(builder.skipped(), 2);
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_zero_distance_accepted() {
        let mut builder = GraphBuilder::new();
        assert!(builder.add_raw_edge("A", "B", "0"));
        assert_eq!(builder.build().neighbors("A").next(), Some(("B", 0)));
    }
}
