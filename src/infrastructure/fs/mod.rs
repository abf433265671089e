//! File System Helpers

mod local;

pub use local::atomic_write;
