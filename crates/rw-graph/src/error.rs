//! Graph-subsystem error type.

use thiserror::Error;

use rw_core::CityId;

/// Errors produced by `rw-graph`.
///
/// Every operation that fails leaves the map exactly as it was.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("coordinates ({x}, {y}) must be finite and non-negative")]
    InvalidCoordinate { x: f64, y: f64 },

    #[error("there is already a city named {existing:?} at ({x}, {y})")]
    DuplicateLocation { existing: String, x: f64, y: f64 },

    #[error("roads have not been built")]
    RoadsNotBuilt,

    #[error("not all cities are reachable, build more roads")]
    NotAllReachable,

    #[error("map already holds {0} cities")]
    RegistryFull(usize),

    #[error("city {0} not found in map")]
    CityNotFound(CityId),

    #[error("city CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
