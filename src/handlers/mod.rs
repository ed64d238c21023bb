//! Handler implementations

pub mod file;
pub mod stream;

pub use file::FileHandler;
pub use stream::StreamHandler;

// Re-export the trait next to its implementations
pub use crate::core::{Handler, HandlerKind, HandlerOptions};
