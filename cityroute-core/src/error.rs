use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Edge list error: {0}")]
    EdgeListError(#[from] csv::Error),
}
