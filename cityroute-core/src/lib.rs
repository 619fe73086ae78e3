//! cityroute-core: weighted city graph and shortest-path search.
//!
//! The graph is built once from `CityA-CityB,distance` edges and is
//! read-only afterwards. Queries never fail: unknown cities and
//! unreachable destinations come back as an empty path or a zero total.

mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{GraphBuilder, load_edge_list, parse_edge_list, read_edge_list};
pub use model::{CityGraph, EdgeRecord, Neighbor};
pub use routing::{Route, path_distance, shortest_path, shortest_route};

/// Dense index of a city inside one [`CityGraph`]
pub type CityId = usize;
/// Length of a single edge
pub type Distance = u32;
/// Sum of edge lengths along a path
pub type PathCost = u64;
