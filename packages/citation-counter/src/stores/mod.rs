//! Storage implementations for the citation counter.
//!
//! Available backends:
//! - `MemoryStore` - In-memory vault (tests, embedding hosts)
//! - `FsStore` - A vault directory on disk

pub mod fs;
pub mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;
