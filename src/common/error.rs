//! Unified error types for document construction and serialization.
//!
//! Structural errors are raised eagerly while the document tree is being
//! built; a malformed subtree never reaches the serializer. The only error
//! that can surface after construction is [`Error::Io`], propagated from the
//! packaging collaborator during a save.
use thiserror::Error;

/// Result type for pitaya operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pitaya operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed geometry: zero-sized path space, bad path command order,
    /// or a zero child extent on a group
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Malformed table: zero rows or columns, or a row whose cell count
    /// does not match the declared column count
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// A shape id is already in use within the document
    #[error("Duplicate shape id: {0}")]
    DuplicateId(u32),

    /// Malformed gradient fill: empty stop list or out-of-range stop position
    #[error("Invalid gradient: {0}")]
    InvalidGradient(String),

    /// IO error propagated from the packaging collaborator during a save
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
