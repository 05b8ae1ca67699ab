//! Server runtime errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Listener could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// axum server terminated with an I/O error
    #[error("server terminated: {0}")]
    Serve(#[source] std::io::Error),
}
