use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use super::state::State;
use crate::{CityGraph, CityId, PathCost, routing::Route};

/// Dijkstra's algorithm between two named cities.
///
/// Returns `None` if either city is unknown or `destination` cannot be
/// reached from `source`. Among several paths of equal total distance any
/// one may be returned.
pub fn shortest_route(graph: &CityGraph, source: &str, destination: &str) -> Option<Route> {
    let start = graph.city_id(source)?;
    let target = graph.city_id(destination)?;

    let city_count = graph.city_count();
    let mut distances = vec![PathCost::MAX; city_count];
    let mut predecessors: Vec<Option<CityId>> = vec![None; city_count];
    let mut visited = FixedBitSet::with_capacity(city_count);
    let mut heap = BinaryHeap::with_capacity(city_count.min(1024));

    // Start node has distance 0
    distances[start] = 0;
    heap.push(State {
        cost: 0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale entry, the node was already settled at a lower cost
        if visited.put(node) {
            continue;
        }

        if node == target {
            break;
        }

        for neighbor in graph.adjacent(node) {
            let next = neighbor.city;
            let next_cost = cost.saturating_add(PathCost::from(neighbor.distance));

            if next_cost < distances[next] {
                distances[next] = next_cost;
                predecessors[next] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    let path = reconstruct_path(&predecessors, target);
    if path.first() != Some(&start) {
        return None;
    }

    let cities = path
        .into_iter()
        .map(|id| graph.city_name(id).to_string())
        .collect();
    Some(Route::new(cities, distances[target]))
}

/// Shortest path as a sequence of city names, empty if there is none.
///
/// `shortest_path(g, s, s)` is `[s]` for any known city `s`.
pub fn shortest_path(graph: &CityGraph, source: &str, destination: &str) -> Vec<String> {
    shortest_route(graph, source, destination)
        .map(Route::into_cities)
        .unwrap_or_default()
}

/// Walk predecessors back from `target` until a node without one.
fn reconstruct_path(predecessors: &[Option<CityId>], target: CityId) -> Vec<CityId> {
    let mut path = Vec::new();
    let mut current = Some(target);

    while let Some(node) = current {
        path.push(node);
        current = predecessors[node];
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::path_distance;

    /// ```text
    ///   A --2-- B --1-- D --4-- E
    ///   |                       |
    ///   +--10-- C ------0-------+
    /// ```
    fn make_detour() -> CityGraph {
        CityGraph::from_edges([
            ("A", "B", 2),
            ("A", "C", 10),
            ("D", "B", 1),
            ("D", "E", 4),
            ("C", "E", 0),
        ])
    }

    fn make_chain(n: usize) -> CityGraph {
        let names: Vec<String> = (0..n).map(|i| format!("C{i}")).collect();
        CityGraph::from_edges(names.windows(2).map(|w| (w[0].as_str(), w[1].as_str(), 1)))
    }

    #[test]
    fn test_single_edge() {
        let g = CityGraph::from_edges([("A", "B", 5)]);
        assert_eq!(shortest_path(&g, "A", "B"), vec!["A", "B"]);
        assert_eq!(shortest_path(&g, "B", "A"), vec!["B", "A"]);
        assert_eq!(path_distance(&g, &["A", "B"]), 5);
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        let g = make_detour();
        let route = shortest_route(&g, "A", "E").unwrap();
        assert_eq!(route.cities(), ["A", "B", "D", "E"]);
        assert_eq!(route.distance(), 7);
        assert_eq!(path_distance(&g, route.cities()), 7);
    }

    #[test]
    fn test_zero_weight_edge_used() {
        let g = make_detour();
        let route = shortest_route(&g, "C", "D").unwrap();
        assert_eq!(route.cities(), ["C", "E", "D"]);
        assert_eq!(route.distance(), 4);
    }

    #[test]
    fn test_chain() {
        let g = make_chain(6);
        let path = shortest_path(&g, "C0", "C5");
        assert_eq!(path, vec!["C0", "C1", "C2", "C3", "C4", "C5"]);
    }

    #[test]
    fn test_self_path() {
        let g = make_chain(3);
        let route = shortest_route(&g, "C1", "C1").unwrap();
        assert_eq!(route.cities(), ["C1"]);
        assert_eq!(route.distance(), 0);
    }

    #[test]
    fn test_unknown_endpoints() {
        let g = make_chain(3);
        assert!(shortest_path(&g, "C0", "Nowhere").is_empty());
        assert!(shortest_path(&g, "Nowhere", "C2").is_empty());
        assert!(shortest_path(&g, "Nowhere", "Nowhere").is_empty());
        assert!(shortest_path(&CityGraph::new(), "A", "B").is_empty());
    }

    #[test]
    fn test_disconnected_components() {
        let g = CityGraph::from_edges([("A", "B", 1), ("C", "D", 1)]);
        assert!(shortest_path(&g, "A", "D").is_empty());
        assert!(shortest_route(&g, "D", "A").is_none());
        assert_eq!(shortest_path(&g, "C", "D"), vec!["C", "D"]);
    }

    #[test]
    fn test_parallel_edges_take_cheapest() {
        let g = CityGraph::from_edges([("A", "B", 5), ("A", "B", 2)]);
        let route = shortest_route(&g, "A", "B").unwrap();
        assert_eq!(route.cities(), ["A", "B"]);
        assert_eq!(route.distance(), 2);
    }

    #[test]
    fn test_self_loop_ignored() {
        let g = CityGraph::from_edges([("A", "A", 3), ("A", "B", 4)]);
        assert_eq!(shortest_path(&g, "A", "B"), vec!["A", "B"]);
        assert_eq!(shortest_path(&g, "A", "A"), vec!["A"]);
    }

    #[test]
    fn test_cycle_terminates() {
        let g = CityGraph::from_edges([
            ("A", "B", 1),
            ("B", "C", 1),
            ("C", "D", 1),
            ("D", "A", 1),
        ]);
        let route = shortest_route(&g, "A", "C").unwrap();
        assert_eq!(route.distance(), 2);
        assert_eq!(route.cities().len(), 3);
    }

    #[test]
    fn test_huge_weights_do_not_wrap() {
        let g = CityGraph::from_edges([
            ("A", "B", u32::MAX),
            ("B", "C", u32::MAX),
            ("A", "C", u32::MAX),
        ]);
        let route = shortest_route(&g, "A", "C").unwrap();
        assert_eq!(route.cities(), ["A", "C"]);
        assert_eq!(route.distance(), u64::from(u32::MAX));
    }

    #[test]
    fn test_reconstruct_stops_at_root() {
        let predecessors = vec![None, Some(0), Some(1), None];
        assert_eq!(reconstruct_path(&predecessors, 2), vec![0, 1, 2]);
        assert_eq!(reconstruct_path(&predecessors, 3), vec![3]);
    }
}
