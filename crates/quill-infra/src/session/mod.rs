//! Session store adapters - in-memory and JSON file on disk.

mod file;
mod memory;

pub use file::JsonFileSessionStore;
pub use memory::InMemorySessionStore;
