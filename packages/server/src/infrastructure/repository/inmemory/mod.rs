//! インメモリ実装

mod registry;

pub use registry::InMemoryMailboxRegistry;
