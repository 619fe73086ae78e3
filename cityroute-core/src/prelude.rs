// Re-export key components
pub use crate::Error;
pub use crate::loading::{GraphBuilder, load_edge_list, parse_edge_list, read_edge_list};
pub use crate::model::{CityGraph, EdgeRecord, Neighbor};
pub use crate::routing::{Route, path_distance, shortest_path, shortest_route};

// Core scalar types
pub use crate::CityId;
pub use crate::Distance;
pub use crate::PathCost;
