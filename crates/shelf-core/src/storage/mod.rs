//! Storage abstraction and backends.

mod file;
mod memory;
mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
