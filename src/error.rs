use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Travel data not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid travel data: {0}")]
    InvalidTravelData(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("No starting point: set a location or add a first stop")]
    NoOrigin,
    #[error("No route from {from} to {to}")]
    NoRoute { from: String, to: String },
}
