//! Storyboard Parser Library
//!
//! Turns an indentation-nested storyboard script into a resolved
//! [`Timeline`](storyboard_core::Timeline). Parsing never fails as a whole:
//! malformed lines are skipped and reported as [`Diagnostic`]s next to the
//! timeline.

pub mod command;
pub mod diagnostics;
pub mod driver;
pub mod expand;
pub mod finalize;
pub mod line;
pub mod looping;
pub mod sprite;
pub mod variables;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use driver::{ParseOutput, Parser};
pub use variables::VariableTable;

/// Result type for storyboard-parser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for a single script line
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Storyboard core error: {0}")]
    Core(#[from] storyboard_core::Error),

    #[error("Missing field {index} ({name})")]
    MissingField { index: usize, name: &'static str },

    #[error("Invalid number in field {index} ({name}): {value:?}")]
    InvalidNumber {
        index: usize,
        name: &'static str,
        value: String,
    },
}

/// Parser configuration
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Width of the 4:3 canvas scripts are authored against
    pub reference_width: f32,
    /// Width of the output canvas
    pub canvas_width: f32,
    /// Height of both canvases
    pub canvas_height: f32,
    /// Loop count for animated sprites whose repetition cannot be derived
    pub fallback_loop_count: u32,
}

impl ParserConfig {
    /// Horizontal shift that centers reference content on the output canvas
    pub fn x_offset(&self) -> f32 {
        (self.canvas_width - self.reference_width) / 2.0
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            reference_width: 640.0,
            canvas_width: 854.0,
            canvas_height: 480.0,
            fallback_loop_count: 10,
        }
    }
}

/// Parses a script with the default configuration
pub fn parse(source: &str) -> ParseOutput {
    Parser::default().parse(source)
}
