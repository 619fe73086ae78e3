//! Travel-route planning on top of `cityroute_core`.
//!
//! A [`Traveler`] keeps a current location and an ordered route of city
//! names, plans routes over a [`CityGraph`](cityroute_core::CityGraph) and
//! persists itself as JSON. A [`Journal`] buffers log lines and appends them
//! to a file on flush.

mod error;
pub mod journal;
pub mod names;
pub mod traveler;

pub use error::{Error, PlanError};
pub use journal::Journal;
pub use names::normalize_city_name;
pub use traveler::Traveler;
