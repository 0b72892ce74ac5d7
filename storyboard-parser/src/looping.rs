//! Loop blocks collected while parsing and unrolled into their owner

use storyboard_core::Animation;

/// Animations declared inside an `L` command, with times relative to the loop start
#[derive(Debug, Clone, PartialEq)]
pub struct LoopBlock {
    pub start_time: f64,
    pub count: u32,
    pub animations: Vec<Animation>,
    span: Option<f64>,
}

impl LoopBlock {
    pub fn new(start_time: f64, count: u32) -> Self {
        Self {
            start_time,
            count,
            animations: Vec::new(),
            span: None,
        }
    }

    /// Creates a loop whose iterations are `span` apart regardless of its contents
    pub fn with_span(start_time: f64, count: u32, span: f64) -> Self {
        Self {
            span: Some(span),
            ..Self::new(start_time, count)
        }
    }

    pub fn push(&mut self, animation: Animation) {
        self.animations.push(animation);
    }

    /// Length of one iteration: the latest end among the contained animations
    pub fn span(&self) -> f64 {
        self.span.unwrap_or_else(|| {
            self.animations
                .iter()
                .map(Animation::end_time)
                .fold(0.0, f64::max)
        })
    }

    /// Appends `count` shifted copies of every animation to `target`
    pub fn unroll_into(&self, target: &mut Vec<Animation>) {
        let span = self.span();
        for iteration in 0..self.count {
            let offset = self.start_time + iteration as f64 * span;
            target.extend(self.animations.iter().map(|a| a.shifted(offset)));
        }
    }
}
