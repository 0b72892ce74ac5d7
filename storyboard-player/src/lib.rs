//! Storyboard Player Library
//!
//! This library samples a resolved timeline at a playback time: which
//! elements are alive and where every animated property currently sits.
//! Drawing is left to the caller.

pub mod sampler;

pub use sampler::{ElementState, Player};

/// Result type for storyboard-player operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for storyboard-player operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Storyboard core error: {0}")]
    Core(#[from] storyboard_core::Error),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(f64),
}
