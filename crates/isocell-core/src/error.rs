//! Error types for isocell-rs.

use thiserror::Error;

/// The main error type for isocell-rs operations.
#[derive(Error, Debug)]
pub enum IsocellError {
    /// A cell was bound with an index past the end of the volume.
    #[error("cell index {index} out of range (volume has {count} cells)")]
    InvalidCellIndex { index: usize, count: usize },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A connectivity entry refers to a node that does not exist.
    #[error("cell {cell} refers to node {index}, but the volume has {num_nodes} nodes")]
    InvalidConnection {
        cell: usize,
        index: u32,
        num_nodes: usize,
    },

    /// The operation requires a scalar field.
    #[error("scalar field required, got veclen {0}")]
    UnsupportedVeclen(usize),

    /// A structured grid needs at least two nodes along every axis.
    #[error("grid resolution must be at least 2 along every axis")]
    InvalidResolution,

    /// An option value is out of range.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for isocell-rs operations.
pub type Result<T> = std::result::Result<T, IsocellError>;
