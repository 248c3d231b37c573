use thiserror::Error;

/// Errors raised by grid and simulation operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
