//! Element declarations: `Sprite` and `Animation` lines at depth 0

use crate::line::Fields;
use crate::Result;
use storyboard_core::{Anchor, Element, FrameSequence, Layer, LoopType};

/// Element keywords understood at depth 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKeyword {
    Sprite,
    Animation,
}

impl ElementKeyword {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Sprite" => Some(ElementKeyword::Sprite),
            "Animation" => Some(ElementKeyword::Animation),
            _ => None,
        }
    }
}

/// Builds the element declared by a depth-0 line.
///
/// Returns `Ok(None)` for keywords that do not declare an element.
pub fn build(fields: &Fields<'_>, x_offset: f32) -> Result<Option<Element>> {
    let keyword = match ElementKeyword::from_keyword(fields.keyword()) {
        Some(keyword) => keyword,
        None => return Ok(None),
    };

    let layer = parse_layer(fields.required(1, "layer")?);
    let origin = parse_origin(fields.required(2, "origin")?);
    let path = clean_filename(fields.required(3, "file")?);
    let x = fields.parse::<f32>(4, "x")? + x_offset;
    let y: f32 = fields.parse(5, "y")?;

    let element = match keyword {
        ElementKeyword::Sprite => Element::sprite(layer, origin, path, x, y),
        ElementKeyword::Animation => {
            let frames = FrameSequence {
                frame_count: fields.parse(6, "frame count")?,
                frame_delay: fields.parse(7, "frame delay")?,
                loop_type: parse_loop_type(fields.get(8)),
                ..split_extension(&path)
            };

            let mut element = Element::sprite(layer, origin, frames.frame_path(0), x, y);
            element.frames = Some(frames);
            element
        }
    };

    Ok(Some(element))
}

/// Maps the five source layers onto three; unknown names fall back to the background
pub fn parse_layer(value: &str) -> Layer {
    match value {
        "Background" | "0" => Layer::Background,
        "Fail" | "1" | "Pass" | "2" | "Foreground" | "3" => Layer::Foreground,
        "Overlay" | "4" => Layer::Overlay,
        _ => Layer::Background,
    }
}

/// Unknown names fall back to the top-left corner
pub fn parse_origin(value: &str) -> Anchor {
    match value {
        "TopLeft" => Anchor::TopLeft,
        "TopCentre" => Anchor::TopCentre,
        "TopRight" => Anchor::TopRight,
        "CentreLeft" => Anchor::CentreLeft,
        "Centre" => Anchor::Centre,
        "CentreRight" => Anchor::CentreRight,
        "BottomLeft" => Anchor::BottomLeft,
        "BottomCentre" => Anchor::BottomCentre,
        "BottomRight" => Anchor::BottomRight,
        _ => Anchor::TopLeft,
    }
}

pub fn parse_loop_type(value: Option<&str>) -> LoopType {
    match value {
        Some("LoopOnce") => LoopType::Once,
        _ => LoopType::Forever,
    }
}

/// Unescapes doubled backslashes, strips quotes and uses `/` separators
pub fn clean_filename(value: &str) -> String {
    value
        .replace("\\\\", "\\")
        .trim_matches('"')
        .replace('\\', "/")
}

/// Splits `dir/run.png` into base `dir/run` and extension `png`
fn split_extension(path: &str) -> FrameSequence {
    let (base_path, extension) = match path.rsplit_once('.') {
        Some((base, ext)) if !ext.contains('/') => (base, ext),
        _ => (path, ""),
    };
    FrameSequence {
        frame_count: 0,
        frame_delay: 0.0,
        loop_type: LoopType::Forever,
        base_path: base_path.to_string(),
        extension: extension.to_string(),
    }
}
