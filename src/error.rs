//! Error types

use thiserror::Error;

/// Errors from rasterization and serialization
///
/// All variants are local, synchronous failures; none is fatal to the
/// caller, which may correct the input and re-invoke.
#[derive(Debug,Error)]
pub enum Error {
    /// Polygon with fewer than 3 vertices passed to fill or outline
    #[error("polygon requires at least 3 vertices, got {0}")]
    InvalidGeometry(usize),
    /// Checked pixel write outside the buffer dimensions
    #[error("pixel ({x},{y}) outside buffer of {width}x{height}")]
    OutOfBounds { x: i64, y: i64, width: usize, height: usize },
    /// A scanline collected an odd number of edge intercepts
    ///
    /// Unreachable for a well-formed closed polygon under the half-open
    /// edge rule; raised instead of reading past the intercept list.
    #[error("odd intercept count {count} on scanline y={y}")]
    MalformedFill { y: i64, count: usize },
    /// Output sink could not be created or written
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;
