//! Easing curves addressed by the integer index used in storyboard scripts

use crate::{Error, Result};
use std::f64::consts::PI;

const ELASTIC_CONST: f64 = 2.0 * PI / 0.3;
const ELASTIC_CONST2: f64 = 0.3 / 4.0;
const BACK_CONST: f64 = 1.70158;
const BACK_CONST2: f64 = BACK_CONST * 1.525;
const BOUNCE_CONST: f64 = 1.0 / 2.75;

/// Interpolation curve applied between an animation's start and end value.
///
/// Discriminants match the easing index written in the command's second field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    None = 0,
    Out = 1,
    In = 2,
    InQuad = 3,
    OutQuad = 4,
    InOutQuad = 5,
    InCubic = 6,
    OutCubic = 7,
    InOutCubic = 8,
    InQuart = 9,
    OutQuart = 10,
    InOutQuart = 11,
    InQuint = 12,
    OutQuint = 13,
    InOutQuint = 14,
    InSine = 15,
    OutSine = 16,
    InOutSine = 17,
    InExpo = 18,
    OutExpo = 19,
    InOutExpo = 20,
    InCirc = 21,
    OutCirc = 22,
    InOutCirc = 23,
    InElastic = 24,
    OutElastic = 25,
    OutElasticHalf = 26,
    OutElasticQuarter = 27,
    InOutElastic = 28,
    InBack = 29,
    OutBack = 30,
    InOutBack = 31,
    InBounce = 32,
    OutBounce = 33,
    InOutBounce = 34,
    OutPow10 = 35,
}

impl Easing {
    /// Every curve in index order
    pub const ALL: [Easing; 36] = [
        Easing::None,
        Easing::Out,
        Easing::In,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
        Easing::InExpo,
        Easing::OutExpo,
        Easing::InOutExpo,
        Easing::InCirc,
        Easing::OutCirc,
        Easing::InOutCirc,
        Easing::InElastic,
        Easing::OutElastic,
        Easing::OutElasticHalf,
        Easing::OutElasticQuarter,
        Easing::InOutElastic,
        Easing::InBack,
        Easing::OutBack,
        Easing::InOutBack,
        Easing::InBounce,
        Easing::OutBounce,
        Easing::InOutBounce,
        Easing::OutPow10,
    ];

    /// Resolves a script easing index
    pub fn from_index(index: i32) -> Result<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(Error::UnknownEasing(index))
    }

    /// Returns the script index of this curve
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Evaluates the curve at normalized time `t`, clamped to [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::None => t,
            Easing::In | Easing::InQuad => t * t,
            Easing::Out | Easing::OutQuad => t * (2.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 {
                    t * t * 2.0
                } else {
                    let t = t - 1.0;
                    1.0 - t * t * 2.0
                }
            }
            Easing::InCubic => t.powi(3),
            Easing::OutCubic => (t - 1.0).powi(3) + 1.0,
            Easing::InOutCubic => {
                if t < 0.5 {
                    t.powi(3) * 4.0
                } else {
                    (t - 1.0).powi(3) * 4.0 + 1.0
                }
            }
            Easing::InQuart => t.powi(4),
            Easing::OutQuart => 1.0 - (t - 1.0).powi(4),
            Easing::InOutQuart => {
                if t < 0.5 {
                    t.powi(4) * 8.0
                } else {
                    1.0 - (t - 1.0).powi(4) * 8.0
                }
            }
            Easing::InQuint => t.powi(5),
            Easing::OutQuint => (t - 1.0).powi(5) + 1.0,
            Easing::InOutQuint => {
                if t < 0.5 {
                    t.powi(5) * 16.0
                } else {
                    (t - 1.0).powi(5) * 16.0 + 1.0
                }
            }
            Easing::InSine => 1.0 - (t * PI * 0.5).cos(),
            Easing::OutSine => (t * PI * 0.5).sin(),
            Easing::InOutSine => 0.5 - 0.5 * (PI * t).cos(),
            Easing::InExpo => 2f64.powf(10.0 * (t - 1.0)),
            Easing::OutExpo => 1.0 - 2f64.powf(-10.0 * t),
            Easing::InOutExpo => {
                if t < 0.5 {
                    0.5 * 2f64.powf(20.0 * t - 10.0)
                } else {
                    1.0 - 0.5 * 2f64.powf(-20.0 * t + 10.0)
                }
            }
            Easing::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Easing::OutCirc => {
                let t = t - 1.0;
                (1.0 - t * t).sqrt()
            }
            Easing::InOutCirc => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 - 0.5 * (1.0 - t * t).sqrt()
                } else {
                    let t = t - 2.0;
                    0.5 + 0.5 * (1.0 - t * t).sqrt()
                }
            }
            Easing::InElastic => {
                -(2f64.powf(-10.0 + 10.0 * t)) * ((1.0 - ELASTIC_CONST2 - t) * ELASTIC_CONST).sin()
            }
            Easing::OutElastic => {
                2f64.powf(-10.0 * t) * ((t - ELASTIC_CONST2) * ELASTIC_CONST).sin() + 1.0
            }
            Easing::OutElasticHalf => {
                2f64.powf(-10.0 * t) * ((0.5 * t - ELASTIC_CONST2) * ELASTIC_CONST).sin() + 1.0
            }
            Easing::OutElasticQuarter => {
                2f64.powf(-10.0 * t) * ((0.25 * t - ELASTIC_CONST2) * ELASTIC_CONST).sin() + 1.0
            }
            Easing::InOutElastic => {
                let t = t * 2.0;
                let period = ELASTIC_CONST / 1.5;
                let shift = ELASTIC_CONST2 * 1.5;
                if t < 1.0 {
                    -0.5 * 2f64.powf(10.0 * (t - 1.0)) * ((t - 1.0 - shift) * period).sin()
                } else {
                    0.5 * 2f64.powf(-10.0 * (t - 1.0)) * ((t - 1.0 - shift) * period).sin() + 1.0
                }
            }
            Easing::InBack => t * t * ((BACK_CONST + 1.0) * t - BACK_CONST),
            Easing::OutBack => {
                let t = t - 1.0;
                t * t * ((BACK_CONST + 1.0) * t + BACK_CONST) + 1.0
            }
            Easing::InOutBack => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * (t * t * ((BACK_CONST2 + 1.0) * t - BACK_CONST2))
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * ((BACK_CONST2 + 1.0) * t + BACK_CONST2) + 2.0)
                }
            }
            Easing::InBounce => 1.0 - out_bounce(1.0 - t),
            Easing::OutBounce => out_bounce(t),
            Easing::InOutBounce => {
                if t < 0.5 {
                    0.5 - 0.5 * out_bounce(1.0 - t * 2.0)
                } else {
                    out_bounce((t - 0.5) * 2.0) * 0.5 + 0.5
                }
            }
            Easing::OutPow10 => (t - 1.0).powi(11) + 1.0,
        }
    }
}

impl TryFrom<i32> for Easing {
    type Error = Error;

    fn try_from(index: i32) -> Result<Self> {
        Self::from_index(index)
    }
}

fn out_bounce(t: f64) -> f64 {
    if t < BOUNCE_CONST {
        7.5625 * t * t
    } else if t < 2.0 * BOUNCE_CONST {
        let t = t - 1.5 * BOUNCE_CONST;
        7.5625 * t * t + 0.75
    } else if t < 2.5 * BOUNCE_CONST {
        let t = t - 2.25 * BOUNCE_CONST;
        7.5625 * t * t + 0.9375
    } else {
        let t = t - 2.625 * BOUNCE_CONST;
        7.5625 * t * t + 0.984375
    }
}
