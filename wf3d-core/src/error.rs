//! Error types for wf3d

use thiserror::Error;

/// Errors surfaced by the rendering pipeline.
///
/// Rendering itself is infallible; only writing the finished image and the
/// optional validation helpers can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("edge {edge} ({a}, {b}) references a vertex outside 0..{vertex_count}")]
    InvalidEdge {
        edge: usize,
        a: usize,
        b: usize,
        vertex_count: usize,
    },

    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid bitmap header: {0}")]
    InvalidHeader(String),
}

/// Result type alias for wf3d operations
pub type Result<T> = std::result::Result<T, Error>;
