//! Timeline data structures for storyboards

use crate::Element;

/// A resolved storyboard: a fixed canvas and its elements in draw order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    /// Canvas width in storyboard units
    pub width: f32,
    /// Canvas height in storyboard units
    pub height: f32,
    /// Elements back-to-front
    pub elements: Vec<Element>,
}

impl Timeline {
    /// Creates an empty timeline with the given canvas size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Returns the end time of the last element, zero when empty
    pub fn duration(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| e.end_time)
            .fold(0.0, f64::max)
    }

    /// Gets all elements alive at a given timestamp, in draw order
    pub fn active_at(&self, timestamp_ms: f64) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(move |e| e.is_active(timestamp_ms))
    }

    /// Total number of animations across every element
    pub fn animation_count(&self) -> usize {
        self.elements.iter().map(|e| e.animations.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serializes the timeline as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::Error::Json(e.to_string()))
    }

    /// Reads a timeline written by [`Timeline::to_json`]
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::Error::Json(e.to_string()))
    }
}
