//! Error types for terrain generation

use std::fmt;
use std::io;

/// Errors that can occur while configuring or rendering a landscape
///
/// Degenerate geometry is never an error: empty or collapsed cells are
/// skipped silently by the pipeline.
#[derive(Debug)]
pub enum TerrainError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Writing the rendered image failed
    Io(io::Error),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            TerrainError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerrainError::InvalidConfig(_) => None,
            TerrainError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for TerrainError {
    fn from(err: io::Error) -> Self {
        TerrainError::Io(err)
    }
}

/// Result type alias for terrain operations
pub type Result<T> = std::result::Result<T, TerrainError>;
