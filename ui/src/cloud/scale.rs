//! Font size scale.
//!
//! Sizes follow a square-root scale so the area of a word grows roughly
//! linearly with its value.

use api::WordStat;

pub const MIN_FONT_SIZE: f64 = 12.0;
pub const MAX_FONT_SIZE: f64 = 72.0;

/// `[min, max]` of the values of one word set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueExtent {
    pub min: f64,
    pub max: f64,
}

impl ValueExtent {
    /// Extent over the finite values, `None` when there are none.
    pub fn of(words: &[WordStat]) -> Option<Self> {
        words
            .iter()
            .map(|w| w.value)
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| {
                Some(match acc {
                    None => Self { min: v, max: v },
                    Some(e) => Self {
                        min: e.min.min(v),
                        max: e.max.max(v),
                    },
                })
            })
    }

    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeScale {
    lo: f64,
    hi: f64,
}

impl SizeScale {
    pub fn new(extent: ValueExtent) -> Self {
        // A flat set gets a synthetic lower bound so every word lands on the big end.
        let domain_min = if extent.is_flat() {
            extent.min.min((extent.min - 1.0).max(1.0))
        } else {
            extent.min
        };
        Self {
            lo: signed_sqrt(domain_min),
            hi: signed_sqrt(extent.max),
        }
    }

    /// Font size for `value`, always within `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
    pub fn size(&self, value: f64) -> f64 {
        let span = self.hi - self.lo;
        let t = if span > 0.0 && span.is_finite() {
            ((signed_sqrt(value) - self.lo) / span).clamp(0.0, 1.0)
        } else {
            0.5
        };
        let t = if t.is_nan() { 0.0 } else { t };
        MIN_FONT_SIZE + t * (MAX_FONT_SIZE - MIN_FONT_SIZE)
    }
}

fn signed_sqrt(x: f64) -> f64 {
    if x < 0.0 {
        -(-x).sqrt()
    } else {
        x.sqrt()
    }
}
