//! Structured warnings collected while parsing

use crate::Error;
use std::fmt;

/// A problem found in the script; parsing continues past every one of these
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based line number, 0 for whole-timeline events
    pub line: usize,
    /// Raw line text, empty for whole-timeline events
    pub text: String,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// The line could not be decoded and contributed nothing
    Malformed(Error),
    /// A command had nowhere to attach: no current element, a depth-2
    /// command outside a loop, or a depth the format does not nest to
    UnattachedCommand { depth: usize },
    /// A loop was closed while no element owned it
    DroppedLoop,
    /// An element ended up without animations and kept its default timing
    NoAnimations { file: String },
    /// A variable name contains, or is contained in, another bound name
    AmbiguousVariable { name: String, other: String },
}

impl Diagnostic {
    pub fn new(line: usize, text: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self {
            line,
            text: text.into(),
            kind,
        }
    }

    /// Reports this diagnostic through `tracing`
    pub fn emit(&self) {
        match &self.kind {
            DiagnosticKind::NoAnimations { .. } | DiagnosticKind::AmbiguousVariable { .. } => {
                tracing::debug!("{}", self)
            }
            _ => tracing::warn!("{}", self),
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Malformed(err) => write!(f, "failed to parse line: {err}"),
            DiagnosticKind::UnattachedCommand { depth } => {
                write!(f, "command at depth {depth} has no element or loop to attach to")
            }
            DiagnosticKind::DroppedLoop => write!(f, "loop closed without an owning element"),
            DiagnosticKind::NoAnimations { file } => {
                write!(f, "element {file:?} does not have any animations")
            }
            DiagnosticKind::AmbiguousVariable { name, other } => {
                write!(f, "variable {name} overlaps {other}, the longer name is substituted first")
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "line {}: {} ({})", self.line, self.kind, self.text)
        }
    }
}
