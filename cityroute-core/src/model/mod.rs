//! City graph model
//!
//! Contains the adjacency structure and the directed edge records
//! kept for serialization.

pub mod components;
pub mod graph;

pub use components::{EdgeRecord, Neighbor};
pub use graph::CityGraph;
