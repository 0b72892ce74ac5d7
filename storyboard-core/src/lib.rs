//! Storyboard Core Library
//!
//! This library provides the resolved, render-ready data model produced by the
//! storyboard parser: a fixed-size canvas and an ordered list of animated
//! elements.

pub mod animation;
pub mod easing;
pub mod element;
pub mod timeline;

pub use animation::{format_float, format_vector, Animation, AnimationType, Rgb};
pub use easing::Easing;
pub use element::{Anchor, Element, ElementKind, FrameSequence, Layer, LoopType};
pub use timeline::Timeline;

/// Result type for storyboard-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for storyboard-core operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid float value: {0:?}")]
    InvalidFloat(String),

    #[error("Invalid vector value: {0:?}")]
    InvalidVector(String),

    #[error("Invalid color value: {0:?}, expected '#RRGGBB'")]
    InvalidColor(String),

    #[error("Unknown easing index: {0}")]
    UnknownEasing(i32),

    #[error("JSON error: {0}")]
    Json(String),
}
