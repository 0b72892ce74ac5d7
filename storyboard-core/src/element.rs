//! Element data structures for storyboard timelines

use crate::Animation;
use std::collections::BTreeMap;

/// Parameter key holding the element's image path
pub const FILE_PARAMETER: &str = "file";

/// Kind of visual an element draws
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    Box = 0,
    #[default]
    Sprite = 1,
    Text = 2,
    Script = 3,
}

/// Back-to-front grouping, the primary draw-order key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    #[default]
    Background = 0,
    Foreground = 1,
    Overlay = 2,
}

/// One of the nine named anchor points of a rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCentre,
    TopRight,
    CentreLeft,
    Centre,
    CentreRight,
    BottomLeft,
    BottomCentre,
    BottomRight,
}

impl Anchor {
    /// Relative position inside a unit square, (0, 0) being the top-left corner
    pub fn offset(self) -> (f32, f32) {
        match self {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::TopCentre => (0.5, 0.0),
            Anchor::TopRight => (1.0, 0.0),
            Anchor::CentreLeft => (0.0, 0.5),
            Anchor::Centre => (0.5, 0.5),
            Anchor::CentreRight => (1.0, 0.5),
            Anchor::BottomLeft => (0.0, 1.0),
            Anchor::BottomCentre => (0.5, 1.0),
            Anchor::BottomRight => (1.0, 1.0),
        }
    }
}

/// How an animated sprite repeats its frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoopType {
    #[default]
    Forever,
    Once,
}

/// Frame metadata of an animated sprite, pending expansion into one element per frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSequence {
    /// Number of frames
    pub frame_count: u32,
    /// Time each frame stays visible, in milliseconds
    pub frame_delay: f64,
    pub loop_type: LoopType,
    /// Image path without the extension; frame `i` lives at `{base_path}{i}.{extension}`
    pub base_path: String,
    pub extension: String,
}

impl FrameSequence {
    /// Time to show every frame once
    pub fn cycle_duration(&self) -> f64 {
        self.frame_count as f64 * self.frame_delay
    }

    /// Image path of frame `index`
    pub fn frame_path(&self, index: u32) -> String {
        if self.extension.is_empty() {
            format!("{}{}", self.base_path, index)
        } else {
            format!("{}{}.{}", self.base_path, index, self.extension)
        }
    }
}

/// A positioned, animatable visual unit of the timeline
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub kind: ElementKind,
    pub layer: Layer,
    /// Draw order inside the timeline, later draws on top
    pub z_index: usize,
    /// Earliest animation start, in milliseconds
    pub start_time: f64,
    /// Latest animation end, in milliseconds
    pub end_time: f64,
    pub anchor: Anchor,
    pub origin: Anchor,
    /// Start position on the canvas
    pub x: f32,
    pub y: f32,
    pub blending: bool,
    pub width: f32,
    pub height: f32,
    /// Packed `0xAARRGGBB` tint
    pub color: u32,
    /// Format-specific extras such as the image path
    pub parameters: BTreeMap<String, String>,
    /// Pending animated-sprite frames; always `None` in a finished timeline
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub frames: Option<FrameSequence>,
    pub animations: Vec<Animation>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            kind: ElementKind::Sprite,
            layer: Layer::Background,
            z_index: 0,
            start_time: 0.0,
            end_time: 0.0,
            anchor: Anchor::TopLeft,
            origin: Anchor::TopLeft,
            x: 0.0,
            y: 0.0,
            blending: false,
            width: 0.0,
            height: 0.0,
            color: 0xFFFF_FFFF,
            parameters: BTreeMap::new(),
            frames: None,
            animations: Vec::new(),
        }
    }
}

impl Element {
    /// Creates a sprite element showing `file`
    pub fn sprite(layer: Layer, origin: Anchor, file: impl Into<String>, x: f32, y: f32) -> Self {
        let mut element = Self {
            layer,
            origin,
            x,
            y,
            ..Self::default()
        };
        element.set_parameter(FILE_PARAMETER, file);
        element
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(key.into(), value.into());
    }

    /// Image path, empty when unset
    pub fn file(&self) -> &str {
        self.parameter(FILE_PARAMETER).unwrap_or_default()
    }

    /// Shifts every animation by `offset` milliseconds
    pub fn apply_offset(&mut self, offset: f64) {
        for animation in &mut self.animations {
            animation.start_time += offset;
        }
    }

    /// Checks if this element is alive at the given timestamp
    pub fn is_active(&self, timestamp_ms: f64) -> bool {
        timestamp_ms >= self.start_time && timestamp_ms <= self.end_time
    }

    /// Returns the lifetime of this element in milliseconds
    pub fn duration(&self) -> f64 {
        (self.end_time - self.start_time).max(0.0)
    }
}
