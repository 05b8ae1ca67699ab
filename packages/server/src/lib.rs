//! Single-room WebSocket chat server library.
//!
//! The room keeps a registry of named participants, accepts messages into an
//! ordered inbound queue and fans them out to per-participant mailboxes,
//! with a couple of slash commands (`/tell`, `/count`).

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{ServerConfig, create_router, run as run_server};
