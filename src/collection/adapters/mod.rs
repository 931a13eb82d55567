//! Adapter implementations of the collection store ports.

pub mod fs;
pub mod memory;

pub use fs::DirStorage;
pub use memory::MemoryStorage;
