//! Local data sources for the fallback path

pub mod fixtures;
pub mod in_memory;

pub use in_memory::InMemoryJobStore;
