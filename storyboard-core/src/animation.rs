//! Animation data structures for storyboard timelines

use crate::{Easing, Error, Result};
use std::fmt;
use std::str::FromStr;

/// Property animated by an [`Animation`]
///
/// The type decides how `value_start` / `value_end` are re-parsed:
/// `ScaleVector` holds an `x,y` pair, `Color` a `#RRGGBB` triple and every
/// other variant a single float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationType {
    MoveX = 0,
    MoveY = 1,
    Scale = 2,
    ScaleVector = 3,
    Width = 4,
    Height = 5,
    Rotate = 6,
    Fade = 7,
    Color = 8,
}

/// One timed, eased change of a single element property
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    /// Animated property
    pub kind: AnimationType,
    /// Start time in milliseconds
    pub start_time: f64,
    /// Duration in milliseconds (zero for an instant change)
    pub duration: f64,
    /// Interpolation curve
    pub easing: Easing,
    /// Value at `start_time`
    pub value_start: String,
    /// Value at `start_time + duration`
    pub value_end: String,
}

impl Animation {
    /// Creates a new animation
    pub fn new(
        kind: AnimationType,
        start_time: f64,
        duration: f64,
        easing: Easing,
        value_start: impl Into<String>,
        value_end: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            start_time,
            duration,
            easing,
            value_start: value_start.into(),
            value_end: value_end.into(),
        }
    }

    /// Returns the end time in milliseconds
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Returns a copy shifted by `offset` milliseconds
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            start_time: self.start_time + offset,
            ..self.clone()
        }
    }

    pub fn start_float(&self) -> Result<f32> {
        parse_float(&self.value_start)
    }

    pub fn end_float(&self) -> Result<f32> {
        parse_float(&self.value_end)
    }

    pub fn start_vector(&self) -> Result<(f32, f32)> {
        parse_vector(&self.value_start)
    }

    pub fn end_vector(&self) -> Result<(f32, f32)> {
        parse_vector(&self.value_end)
    }

    pub fn start_color(&self) -> Result<Rgb> {
        self.value_start.parse()
    }

    pub fn end_color(&self) -> Result<Rgb> {
        self.value_end.parse()
    }
}

/// Formats a float the way animation values are stored.
///
/// Uses the shortest representation that round-trips, with `.` as the
/// decimal separator and no trailing `.0` on whole numbers.
pub fn format_float(value: f32) -> String {
    value.to_string()
}

/// Formats an `x,y` pair the way vector values are stored
pub fn format_vector(x: f32, y: f32) -> String {
    format!("{x},{y}")
}

/// Empty text decodes to zero
fn parse_float(text: &str) -> Result<f32> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    text.parse()
        .map_err(|_| Error::InvalidFloat(text.to_string()))
}

/// Empty text decodes to the origin
fn parse_vector(text: &str) -> Result<(f32, f32)> {
    if text.trim().is_empty() {
        return Ok((0.0, 0.0));
    }

    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| Error::InvalidVector(text.to_string()))?;
    let x = x.trim().parse().map_err(|_| Error::InvalidVector(text.to_string()))?;
    let y = y.trim().parse().map_err(|_| Error::InvalidVector(text.to_string()))?;
    Ok((x, y))
}

/// 8-bit RGB triple stored as `#RRGGBB`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from float channels, truncating toward zero and
    /// clamping into 0-255.
    pub fn from_channels(r: f32, g: f32, b: f32) -> Self {
        let channel = |v: f32| (v.trunc() as i32).clamp(0, 255) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Linear per-channel interpolation, `t` in [0, 1]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade(start: &str, end: &str) -> Animation {
        Animation::new(AnimationType::Fade, 100.0, 50.0, Easing::None, start, end)
    }

    #[test]
    fn test_end_time_is_derived() {
        let anim = fade("0", "1");
        assert_eq!(anim.end_time(), 150.0);

        let shifted = anim.shifted(1000.0);
        assert_eq!(shifted.start_time, 1100.0);
        assert_eq!(shifted.end_time(), 1150.0);
        assert_eq!(shifted.value_end, "1");
    }

    #[test]
    fn test_float_values() {
        let anim = fade("0.5", "");
        assert_eq!(anim.start_float(), Ok(0.5));
        assert_eq!(anim.end_float(), Ok(0.0));
        assert!(matches!(fade("abc", "1").start_float(), Err(Error::InvalidFloat(_))));
    }

    #[test]
    fn test_vector_values() {
        let anim = Animation::new(AnimationType::ScaleVector, 0.0, 0.0, Easing::None, "1.5,2", "");
        assert_eq!(anim.start_vector(), Ok((1.5, 2.0)));
        assert_eq!(anim.end_vector(), Ok((0.0, 0.0)));

        let bad = Animation::new(AnimationType::ScaleVector, 0.0, 0.0, Easing::None, "1.5", "");
        assert!(matches!(bad.start_vector(), Err(Error::InvalidVector(_))));
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(format_float(207.0), "207");
        assert_eq!(format_float(0.25), "0.25");
        assert_eq!(format_float(-3.5), "-3.5");
        assert_eq!(format_vector(1.0, 0.5), "1,0.5");
    }

    #[test]
    fn test_color_hex() {
        let color = Rgb::from_channels(255.0, 127.9, 0.0);
        assert_eq!(color.to_string(), "#FF7F00");
        assert_eq!("#FF7F00".parse::<Rgb>(), Ok(color));
        assert_eq!(Rgb::from_channels(300.0, -4.0, 16.0).to_string(), "#FF0010");

        assert!("FF7F00".parse::<Rgb>().is_err());
        assert!("#FF7F0".parse::<Rgb>().is_err());
        assert!("#GG0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_color_lerp() {
        let black = Rgb::new(0, 0, 0);
        assert_eq!(black.lerp(Rgb::WHITE, 0.0), black);
        assert_eq!(black.lerp(Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(black.lerp(Rgb::new(200, 100, 0), 0.5), Rgb::new(100, 50, 0));
    }
}
