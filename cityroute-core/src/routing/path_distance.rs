use itertools::Itertools;

use crate::{CityGraph, PathCost};

/// Total distance along an externally supplied path.
///
/// Each step uses the first adjacency entry of the source city that leads
/// to the next city. A step from an unknown city, or with no connecting
/// edge, contributes zero instead of failing. Paths shorter than two cities
/// cost 0.
pub fn path_distance<S: AsRef<str>>(graph: &CityGraph, path: &[S]) -> PathCost {
    path.iter()
        .map(AsRef::as_ref)
        .tuple_windows()
        .map(|(from, to)| {
            graph
                .neighbors(from)
                .find(|&(city, _)| city == to)
                .map_or(0, |(_, distance)| PathCost::from(distance))
        })
        .sum()
}
