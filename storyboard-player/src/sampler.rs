use crate::{Error, Result};
use storyboard_core::{Anchor, Animation, AnimationType, Element, Rgb, Timeline};

/// Sampled state of one element at a playback time
#[derive(Debug, Clone, PartialEq)]
pub struct ElementState {
    pub z_index: usize,
    pub file: String,
    pub origin: Anchor,
    pub x: f32,
    pub y: f32,
    /// Uniform scale multiplied into the per-axis scale
    pub scale: (f32, f32),
    pub width: f32,
    pub height: f32,
    /// Degrees
    pub rotation: f32,
    pub alpha: f32,
    pub color: Rgb,
}

impl ElementState {
    /// Canvas position of the scaled image's top-left corner, placing the
    /// origin anchor at `(x, y)`
    pub fn top_left(&self) -> (f32, f32) {
        let (ox, oy) = self.origin.offset();
        (
            self.x - ox * self.width * self.scale.0,
            self.y - oy * self.height * self.scale.1,
        )
    }
}

/// Plays back a timeline
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    timeline: &'a Timeline,
}

impl<'a> Player<'a> {
    /// Creates a new player for the given timeline
    pub fn new(timeline: &'a Timeline) -> Self {
        Self { timeline }
    }

    /// Samples every element alive at `timestamp_ms`, in draw order
    pub fn sample(&self, timestamp_ms: f64) -> Result<Vec<ElementState>> {
        if !timestamp_ms.is_finite() {
            return Err(Error::InvalidTimestamp(timestamp_ms));
        }

        let states = self
            .timeline
            .active_at(timestamp_ms)
            .map(|element| sample_element(element, timestamp_ms))
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!("Sampled {} elements at {}ms", states.len(), timestamp_ms);
        Ok(states)
    }
}

/// Samples one element regardless of its lifetime
pub fn sample_element(element: &Element, timestamp_ms: f64) -> Result<ElementState> {
    let animations = &element.animations;
    let float = |kind| float_channel(animations, kind, timestamp_ms);

    let uniform = float(AnimationType::Scale)?.unwrap_or(1.0);
    let (scale_x, scale_y) = vector_channel(animations, timestamp_ms)?.unwrap_or((1.0, 1.0));

    Ok(ElementState {
        z_index: element.z_index,
        file: element.file().to_string(),
        origin: element.origin,
        x: float(AnimationType::MoveX)?.unwrap_or(element.x),
        y: float(AnimationType::MoveY)?.unwrap_or(element.y),
        scale: (uniform * scale_x, uniform * scale_y),
        width: float(AnimationType::Width)?.unwrap_or(element.width),
        height: float(AnimationType::Height)?.unwrap_or(element.height),
        rotation: float(AnimationType::Rotate)?.unwrap_or(0.0),
        alpha: float(AnimationType::Fade)?.unwrap_or_else(|| base_alpha(element.color)),
        color: color_channel(animations, timestamp_ms)?.unwrap_or_else(|| base_color(element.color)),
    })
}

/// Picks the animation driving a channel at `t` with its eased weight.
///
/// The latest-starting animation that has begun wins; before any has begun
/// the earliest one holds its start value.
fn drive(animations: &[Animation], kind: AnimationType, t: f64) -> Option<(&Animation, f64)> {
    let mut earliest: Option<&Animation> = None;
    let mut current: Option<&Animation> = None;

    for animation in animations.iter().filter(|a| a.kind == kind) {
        if earliest.map_or(true, |e| animation.start_time < e.start_time) {
            earliest = Some(animation);
        }
        if animation.start_time <= t && current.map_or(true, |c| animation.start_time >= c.start_time) {
            current = Some(animation);
        }
    }

    match current {
        Some(animation) => Some((animation, weight(animation, t))),
        None => earliest.map(|animation| (animation, 0.0)),
    }
}

fn weight(animation: &Animation, t: f64) -> f64 {
    if animation.duration <= 0.0 || t >= animation.end_time() {
        return 1.0;
    }

    let progress = (t - animation.start_time) / animation.duration;
    if progress <= 0.0 {
        0.0
    } else {
        animation.easing.apply(progress)
    }
}

fn lerp(start: f32, end: f32, weight: f64) -> f32 {
    if weight >= 1.0 {
        return end;
    }
    start + (end - start) * weight as f32
}

fn float_channel(animations: &[Animation], kind: AnimationType, t: f64) -> Result<Option<f32>> {
    match drive(animations, kind, t) {
        Some((animation, w)) => Ok(Some(lerp(animation.start_float()?, animation.end_float()?, w))),
        None => Ok(None),
    }
}

fn vector_channel(animations: &[Animation], t: f64) -> Result<Option<(f32, f32)>> {
    match drive(animations, AnimationType::ScaleVector, t) {
        Some((animation, w)) => {
            let (sx, sy) = animation.start_vector()?;
            let (ex, ey) = animation.end_vector()?;
            Ok(Some((lerp(sx, ex, w), lerp(sy, ey, w))))
        }
        None => Ok(None),
    }
}

fn color_channel(animations: &[Animation], t: f64) -> Result<Option<Rgb>> {
    match drive(animations, AnimationType::Color, t) {
        Some((animation, w)) => Ok(Some(animation.start_color()?.lerp(animation.end_color()?, w))),
        None => Ok(None),
    }
}

/// `0xAARRGGBB` tint without its alpha
fn base_color(argb: u32) -> Rgb {
    Rgb::new((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
}

fn base_alpha(argb: u32) -> f32 {
    (argb >> 24) as f32 / 255.0
}
