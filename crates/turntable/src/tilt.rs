use crate::error::{CarouselError, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Fully edge-on.
pub const EDGE_ON: f64 = 90.0;

/// Number of neighbours on each side of the focused item that get a partial tilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "u32", into = "u32")]
pub struct FlipRange(u32);

impl FlipRange {
    pub const DEFAULT: Self = Self(3);

    pub fn new(range: u32) -> Result<Self> {
        if range == 0 {
            return Err(CarouselError::InvalidFlipRange(range));
        }
        Ok(Self(range))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for FlipRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for FlipRange {
    type Error = CarouselError;

    fn try_from(range: u32) -> Result<Self> {
        Self::new(range)
    }
}

impl From<FlipRange> for u32 {
    fn from(range: FlipRange) -> Self {
        range.0
    }
}

/// Index distance between `a` and `b` going the shorter way around a ring of
/// `count` items. Both indices must be below `count`.
pub fn circular_distance(a: usize, b: usize, count: usize) -> usize {
    let distance = a.abs_diff(b);
    if 2 * distance > count {
        count - distance
    } else {
        distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TiltProfile {
    flip_range: FlipRange,
}

impl TiltProfile {
    pub fn new(flip_range: FlipRange) -> Self {
        Self { flip_range }
    }

    pub fn flip_range(&self) -> FlipRange {
        self.flip_range
    }

    /// Linear falloff from 0 at the focused item to [`EDGE_ON`] at `flip_range`
    /// steps away and beyond.
    pub fn flip_angle(&self, index: usize, focused: usize, count: usize) -> f64 {
        let distance = circular_distance(index, focused, count);
        let range = self.flip_range.get() as usize;
        if distance >= range {
            EDGE_ON
        } else {
            distance as f64 * (EDGE_ON / range as f64)
        }
    }

    pub fn flip_angles(&self, focused: usize, count: usize) -> Vec<f64> {
        (0..count)
            .map(|i| self.flip_angle(i, focused, count))
            .collect()
    }
}
