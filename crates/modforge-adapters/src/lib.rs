//! Infrastructure adapters for Modforge.
//!
//! This crate implements the ports defined in `modforge-core::application::ports`.
//! It contains all I/O operations.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
