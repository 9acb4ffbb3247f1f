//! Session Store Adapters.

mod in_memory;

pub use in_memory::InMemorySessionStore;
