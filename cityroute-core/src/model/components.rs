//! Graph components - adjacency entries and directed edge records

use crate::{CityId, Distance};

/// Adjacency entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// City reachable over this edge
    pub city: CityId,
    /// Edge length
    pub distance: Distance,
}

/// Directed edge as it was inserted
///
/// Every accepted input edge produces two records, `from -> to` followed
/// by `to -> from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: CityId,
    pub to: CityId,
    pub distance: Distance,
}
