use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::io;
use std::ops::Index;
use std::path::Path;

use cityroute_core::CityGraph;
use log::{debug, info};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::{Error, PlanError, names::normalize_city_name};

/// A traveler with a current location and an ordered route of stops.
///
/// City names entering through [`set_location`](Self::set_location),
/// [`add_city`](Self::add_city), [`remove_city`](Self::remove_city) and
/// [`plan_route_to`](Self::plan_route_to) are normalized with
/// [`normalize_city_name`] so they match the capitalized names of an edge
/// list. [`has_city`](Self::has_city) compares exactly.
///
/// Two travelers are equal when their names and locations are equal; the
/// route is not compared.
#[derive(Debug, Clone)]
pub struct Traveler {
    name: String,
    current_location: String,
    route: Vec<String>,
}

/// On-disk JSON layout
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TravelerFile<'a> {
    name: &'a str,
    current_location: &'a str,
    route: &'a [String],
}

/// Lenient form of [`TravelerFile`]: absent or null values become empty
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TravelerFileIn {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    current_location: Option<String>,
    #[serde(default)]
    route: Vec<Option<String>>,
}

impl Traveler {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_location: String::new(),
            route: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current location, empty if unset
    pub fn location(&self) -> &str {
        &self.current_location
    }

    pub fn set_location(&mut self, location: &str) {
        self.current_location = normalize_city_name(location);
    }

    /// Append a stop. Blank names are ignored.
    pub fn add_city(&mut self, city: &str) {
        if city.trim().is_empty() {
            return;
        }
        self.route.push(normalize_city_name(city));
    }

    /// Remove the first occurrence of `city`; `false` if it was not on the route
    pub fn remove_city(&mut self, city: &str) -> bool {
        if city.trim().is_empty() {
            return false;
        }
        let city = normalize_city_name(city);
        match self.route.iter().position(|stop| *stop == city) {
            Some(idx) => {
                self.route.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.route.iter().any(|stop| stop == city)
    }

    pub fn route(&self) -> &[String] {
        &self.route
    }

    pub fn stop(&self, index: usize) -> Option<&str> {
        self.route.get(index).map(String::as_str)
    }

    pub fn stop_count(&self) -> usize {
        self.route.len()
    }

    pub fn clear_route(&mut self) {
        self.route.clear();
    }

    pub fn sort_route(&mut self) {
        self.route.sort();
    }

    /// Stops joined with `" -> "`
    pub fn route_display(&self) -> String {
        self.route.join(" -> ")
    }

    /// Replace the route with the shortest path to `destination`.
    ///
    /// Planning starts from the current location, or from the first stop of
    /// the route when no location is set. On failure the route is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`PlanError::NoOrigin`] if there is neither a location nor a first
    /// stop, [`PlanError::NoRoute`] if the graph has no path between the two
    /// cities (including when either is not in the graph).
    pub fn plan_route_to(
        &mut self,
        destination: &str,
        graph: &CityGraph,
    ) -> Result<&[String], PlanError> {
        let destination = normalize_city_name(destination);
        let origin = if self.current_location.is_empty() {
            self.route.first().ok_or(PlanError::NoOrigin)?
        } else {
            &self.current_location
        };

        let path = graph.shortest_path(origin, &destination);
        if path.is_empty() {
            return Err(PlanError::NoRoute {
                from: origin.clone(),
                to: destination,
            });
        }

        debug!("Planned {} stops for {}", path.len(), self.name);
        self.route = path;
        Ok(&self.route)
    }

    /// Read a traveler from a JSON file.
    ///
    /// Missing keys default to empty. The location is taken as stored,
    /// route entries go through [`add_city`](Self::add_city).
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the file does not exist,
    /// [`Error::InvalidTravelData`] if it is not a JSON object of the
    /// expected shape.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::IoError(e),
        })?;

        let value: serde_json::Value = serde_json::from_str(&json)?;
        if !value.is_object() {
            return Err(Error::InvalidTravelData(serde_json::Error::custom(
                "expected a traveler object",
            )));
        }
        let data = TravelerFileIn::deserialize(value)?;

        let mut traveler = Self::new(data.name.unwrap_or_default());
        traveler.current_location = data.current_location.unwrap_or_default();
        for city in data.route.into_iter().flatten() {
            traveler.add_city(&city);
        }

        info!("Loaded traveler {} from {}", traveler.name, path.display());
        Ok(traveler)
    }

    /// Write the traveler as pretty-printed JSON, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let data = TravelerFile {
            name: &self.name,
            current_location: &self.current_location,
            route: &self.route,
        };
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(path, json)?;

        info!("Saved traveler {} to {}", self.name, path.display());
        Ok(())
    }
}

impl Index<usize> for Traveler {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.route[index]
    }
}

impl PartialEq for Traveler {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.current_location == other.current_location
    }
}

impl Eq for Traveler {}

impl Hash for Traveler {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.current_location.hash(state);
    }
}

impl fmt::Display for Traveler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Traveler: {} | Location: {} | Route: {}",
            self.name,
            self.current_location,
            self.route_display()
        )
    }
}
