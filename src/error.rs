//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced while fetching, locating or ranking a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  /// A top-K query asked for fewer than one word.
  #[error("invalid argument: cannot select the top {k} words, k must be at least 1")]
  InvalidArgument { k: usize },

  /// The document was fetched but the boundary marker is not in it.
  #[error("boundary marker {marker:?} not found in document")]
  BoundaryNotFound { marker: String },

  /// The network request failed or returned an error status.
  #[error("failed to fetch document: {0}")]
  Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The fetch worker went away without reporting a result.
  #[error("fetch worker disconnected before returning a document")]
  FetchDisconnected,

  /// Reading local input failed.
  #[error("failed to read input: {0}")]
  Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
