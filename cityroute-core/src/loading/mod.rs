//! This module is responsible for loading `CityA-CityB,distance` edge lists
//! and building a [`CityGraph`](crate::CityGraph) from them.

mod builder;
mod parser;

pub use builder::GraphBuilder;
pub use parser::{load_edge_list, parse_edge_list, read_edge_list};
