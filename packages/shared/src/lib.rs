//! Shared utilities used by the Irori packages.

pub mod logger;
pub mod time;
