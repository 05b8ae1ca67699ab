//! WebSocket chat server implementation.

mod config;
mod error;
mod handler;
mod runner;
mod signal;
pub mod state;

pub use config::ServerConfig;
pub use error::ServerError;
pub use runner::{create_router, run};
