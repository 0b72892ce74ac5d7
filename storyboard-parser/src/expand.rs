//! Flip-book expansion of animated sprites
//!
//! An animated sprite becomes one element per frame. Each frame element keeps
//! the authored animations and gains a show/hide fade pair repeated once per
//! cycle.

use crate::looping::LoopBlock;
use crate::ParserConfig;
use storyboard_core::element::FILE_PARAMETER;
use storyboard_core::{Animation, AnimationType, Easing, Element, FrameSequence, LoopType};

/// Replaces every element carrying frame metadata by its frame elements
pub fn expand_animated_sprites(elements: Vec<Element>, config: &ParserConfig) -> Vec<Element> {
    let mut expanded = Vec::with_capacity(elements.len());

    for mut element in elements {
        match element.frames.take() {
            Some(frames) => expanded.extend(expand_element(&element, &frames, config)),
            None => expanded.push(element),
        }
    }

    expanded
}

/// Builds the frame elements of one animated sprite
pub fn expand_element(
    element: &Element,
    frames: &FrameSequence,
    config: &ParserConfig,
) -> Vec<Element> {
    let (start_time, end_time) = time_range(element, frames);
    let cycle_duration = frames.cycle_duration();
    let count = loop_count(
        frames.loop_type,
        end_time - start_time,
        cycle_duration,
        config.fallback_loop_count,
    );

    tracing::debug!(
        "Expanding {} into {} frames, {} cycles from {}ms",
        element.file(),
        frames.frame_count,
        count,
        start_time
    );

    (0..frames.frame_count)
        .map(|index| {
            let show = index as f64 * frames.frame_delay;
            let hide = show + frames.frame_delay;

            let mut cycle = LoopBlock::with_span(start_time, count, cycle_duration);
            cycle.push(visibility(show, "1"));
            cycle.push(visibility(hide, "0"));

            let mut frame = element.clone();
            frame.frames = None;
            frame.set_parameter(FILE_PARAMETER, frames.frame_path(index));
            cycle.unroll_into(&mut frame.animations);
            frame
        })
        .collect()
}

/// Span of the authored animations, or one cycle from zero when there are none
pub fn time_range(element: &Element, frames: &FrameSequence) -> (f64, f64) {
    if element.animations.is_empty() {
        return (0.0, frames.cycle_duration());
    }

    element
        .animations
        .iter()
        .fold((f64::MAX, f64::MIN), |(start, end), a| {
            (start.min(a.start_time), end.max(a.end_time()))
        })
}

/// Number of cycles needed to cover `total_duration`
pub fn loop_count(loop_type: LoopType, total_duration: f64, cycle_duration: f64, fallback: u32) -> u32 {
    if loop_type == LoopType::Once {
        return 1;
    }

    if total_duration > 0.0 && cycle_duration > 0.0 {
        return (total_duration / cycle_duration).ceil() as u32;
    }

    fallback
}

fn visibility(time: f64, value: &str) -> Animation {
    Animation::new(AnimationType::Fade, time, 0.0, Easing::None, value, value)
}
