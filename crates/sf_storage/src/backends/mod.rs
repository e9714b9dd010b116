pub mod memory;

pub use memory::{InMemoryStorage, MemoryStore};
