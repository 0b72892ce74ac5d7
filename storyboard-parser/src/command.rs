//! Decoding of indented command lines into animations
//!
//! Animation commands share the layout `cmd,easing,start,end,values...`.
//! An empty end time makes the change instantaneous. Rotation is authored
//! in radians and stored in degrees; horizontal positions are shifted onto
//! the widescreen canvas.

use crate::line::Fields;
use crate::Result;
use storyboard_core::{format_float, format_vector, Animation, AnimationType, Easing, Rgb};

/// Command keywords understood below an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKeyword {
    Animate(AnimationKeyword),
    Loop,
    Trigger,
    Parameter,
}

/// Keywords that produce animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKeyword {
    Fade,
    Scale,
    VectorScale,
    Rotate,
    Move,
    MoveX,
    MoveY,
    Color,
}

impl CommandKeyword {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let animation = match keyword {
            "F" => AnimationKeyword::Fade,
            "S" => AnimationKeyword::Scale,
            "V" => AnimationKeyword::VectorScale,
            "R" => AnimationKeyword::Rotate,
            "M" => AnimationKeyword::Move,
            "MX" => AnimationKeyword::MoveX,
            "MY" => AnimationKeyword::MoveY,
            "C" => AnimationKeyword::Color,
            "L" => return Some(CommandKeyword::Loop),
            "T" => return Some(CommandKeyword::Trigger),
            "P" => return Some(CommandKeyword::Parameter),
            _ => return None,
        };
        Some(CommandKeyword::Animate(animation))
    }
}

/// Decoded meaning of a command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Consumed without effect: triggers, parameters and unknown keywords
    Ignored,
    /// Opens a loop replicating the following depth-2 commands
    Loop { start_time: f64, count: u32 },
    /// One or more animations for the current element or loop
    Animate(Vec<Animation>),
}

/// Timing and easing shared by every animation command
#[derive(Debug, Clone, Copy)]
struct Timing {
    easing: Easing,
    start_time: f64,
    duration: f64,
}

impl Timing {
    fn animation(&self, kind: AnimationType, start: String, end: String) -> Animation {
        Animation::new(kind, self.start_time, self.duration, self.easing, start, end)
    }
}

/// Decodes one command line; `x_offset` is added to horizontal positions
pub fn decode(fields: &Fields<'_>, x_offset: f32) -> Result<Command> {
    let keyword = match CommandKeyword::from_keyword(fields.keyword()) {
        Some(keyword) => keyword,
        None => return Ok(Command::Ignored),
    };

    let kind = match keyword {
        CommandKeyword::Trigger | CommandKeyword::Parameter => return Ok(Command::Ignored),
        CommandKeyword::Loop => return decode_loop(fields),
        CommandKeyword::Animate(kind) => kind,
    };

    let timing = decode_timing(fields)?;
    let animations = match kind {
        AnimationKeyword::Fade => vec![scalar(fields, &timing, AnimationType::Fade, 0.0)?],
        AnimationKeyword::Scale => vec![scalar(fields, &timing, AnimationType::Scale, 0.0)?],
        AnimationKeyword::MoveX => vec![scalar(fields, &timing, AnimationType::MoveX, x_offset)?],
        AnimationKeyword::MoveY => vec![scalar(fields, &timing, AnimationType::MoveY, 0.0)?],
        AnimationKeyword::Rotate => vec![rotate(fields, &timing)?],
        AnimationKeyword::VectorScale => vec![vector_scale(fields, &timing)?],
        AnimationKeyword::Move => move_xy(fields, &timing, x_offset)?,
        AnimationKeyword::Color => vec![color(fields, &timing)?],
    };

    Ok(Command::Animate(animations))
}

fn decode_loop(fields: &Fields<'_>) -> Result<Command> {
    let start_time = fields.parse(1, "loop start time")?;
    let count: i64 = fields.parse(2, "loop count")?;

    Ok(Command::Loop {
        start_time,
        count: count.clamp(0, u32::MAX as i64) as u32,
    })
}

fn decode_timing(fields: &Fields<'_>) -> Result<Timing> {
    let easing = Easing::from_index(fields.parse(1, "easing")?)?;
    let start_time: f64 = fields.parse(2, "start time")?;
    let end_time = fields.parse_opt(3, "end time")?.unwrap_or(start_time);

    Ok(Timing {
        easing,
        start_time,
        duration: end_time - start_time,
    })
}

/// Reads a start value at `index` and an end value at `index + 1`
/// defaulting to the start
fn pair(fields: &Fields<'_>, index: usize, name: &'static str) -> Result<(f32, f32)> {
    let start: f32 = fields.parse(index, name)?;
    let end = fields.parse_opt(index + 1, name)?.unwrap_or(start);
    Ok((start, end))
}

fn scalar(
    fields: &Fields<'_>,
    timing: &Timing,
    kind: AnimationType,
    offset: f32,
) -> Result<Animation> {
    let (start, end) = pair(fields, 4, "value")?;
    Ok(timing.animation(kind, format_float(start + offset), format_float(end + offset)))
}

fn rotate(fields: &Fields<'_>, timing: &Timing) -> Result<Animation> {
    let (start, end) = pair(fields, 4, "rotation")?;
    Ok(timing.animation(
        AnimationType::Rotate,
        format_float(start.to_degrees()),
        format_float(end.to_degrees()),
    ))
}

fn vector_scale(fields: &Fields<'_>, timing: &Timing) -> Result<Animation> {
    let start_x: f32 = fields.parse(4, "scale x")?;
    let start_y: f32 = fields.parse(5, "scale y")?;
    let end_x = fields.parse_opt(6, "scale x")?.unwrap_or(start_x);
    let end_y = fields.parse_opt(7, "scale y")?.unwrap_or(start_y);

    Ok(timing.animation(
        AnimationType::ScaleVector,
        format_vector(start_x, start_y),
        format_vector(end_x, end_y),
    ))
}

fn move_xy(fields: &Fields<'_>, timing: &Timing, x_offset: f32) -> Result<Vec<Animation>> {
    let start_x = fields.parse::<f32>(4, "x")? + x_offset;
    let start_y: f32 = fields.parse(5, "y")?;
    let end_x = fields
        .parse_opt::<f32>(6, "x")?
        .map_or(start_x, |x| x + x_offset);
    let end_y = fields.parse_opt(7, "y")?.unwrap_or(start_y);

    Ok(vec![
        timing.animation(AnimationType::MoveX, format_float(start_x), format_float(end_x)),
        timing.animation(AnimationType::MoveY, format_float(start_y), format_float(end_y)),
    ])
}

fn color(fields: &Fields<'_>, timing: &Timing) -> Result<Animation> {
    let start_r: f32 = fields.parse(4, "red")?;
    let start_g: f32 = fields.parse(5, "green")?;
    let start_b: f32 = fields.parse(6, "blue")?;
    let end_r = fields.parse_opt(7, "red")?.unwrap_or(start_r);
    let end_g = fields.parse_opt(8, "green")?.unwrap_or(start_g);
    let end_b = fields.parse_opt(9, "blue")?.unwrap_or(start_b);

    Ok(timing.animation(
        AnimationType::Color,
        Rgb::from_channels(start_r, start_g, start_b).to_string(),
        Rgb::from_channels(end_r, end_g, end_b).to_string(),
    ))
}
