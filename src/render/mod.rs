//! Instanced rendering backend
//!
//! Tiles turn into instances of catalog assets, grouped into batches by
//! asset and winding order so every copy of a mesh part draws in one
//! instanced call.

/// Instance batches and their raw draw buffers
pub mod batch;
/// Chunk collecting tile geometry into batches
pub mod chunk;

pub use chunk::Chunk;
