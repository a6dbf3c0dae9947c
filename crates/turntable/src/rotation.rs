use crate::angle::AngleModel;
use crate::error::{CarouselError, Result};
use serde::Serialize;

/// `accumulated_angle` is never wrapped so renderers can animate continuously.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CarouselState {
    pub focused_index: usize,
    pub accumulated_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rotation {
    pub focused_index: usize,
    pub accumulated_angle: f64,
    pub delta: f64,
}

/// Sole writer of a [`CarouselState`].
#[derive(Debug, Clone)]
pub struct RotationController {
    layout: AngleModel,
    state: CarouselState,
}

impl RotationController {
    pub fn new(layout: AngleModel) -> Self {
        Self {
            layout,
            state: CarouselState::default(),
        }
    }

    /// Picks up a previously built state on a layout with the same item count.
    pub fn resume(layout: AngleModel, state: CarouselState) -> Result<Self> {
        layout.check_index(state.focused_index)?;
        Ok(Self { layout, state })
    }

    pub fn layout(&self) -> &AngleModel {
        &self.layout
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn focused_index(&self) -> usize {
        self.state.focused_index
    }

    pub fn accumulated_angle(&self) -> f64 {
        self.state.accumulated_angle
    }

    /// Shortest signed rotation that brings `target` to the front, in `(-180, 180]`.
    pub fn delta_to(&self, target: usize) -> Result<f64> {
        let target = self.layout.check_index(target)?;
        Ok(self.delta_unchecked(target))
    }

    fn delta_unchecked(&self, target: usize) -> f64 {
        // the assembly turns against the direction focus travels
        let steps = self.state.focused_index as isize - target as isize;
        self.layout
            .steps_to_degrees(self.layout.shortest_steps(steps))
    }

    pub fn navigate_to(&mut self, target: usize) -> Result<Rotation> {
        let target = self.layout.check_index(target)?;
        Ok(self.rotate(target))
    }

    pub fn select_index(&mut self, index: usize) -> Result<Rotation> {
        self.navigate_to(index)
    }

    pub fn next(&mut self) -> Rotation {
        let target = (self.state.focused_index + 1) % self.layout.count();
        self.rotate(target)
    }

    pub fn previous(&mut self) -> Rotation {
        let count = self.layout.count();
        let target = (self.state.focused_index + count - 1) % count;
        self.rotate(target)
    }

    fn rotate(&mut self, target: usize) -> Rotation {
        let delta = self.delta_unchecked(target);
        self.state.accumulated_angle += delta;
        self.state.focused_index = target;

        log::debug!(
            "Carousel rotated by {}° to index {} (accumulated {}°)",
            delta,
            target,
            self.state.accumulated_angle
        );

        Rotation {
            focused_index: target,
            accumulated_angle: self.state.accumulated_angle,
            delta,
        }
    }
}

impl TryFrom<(AngleModel, CarouselState)> for RotationController {
    type Error = CarouselError;

    fn try_from((layout, state): (AngleModel, CarouselState)) -> Result<Self> {
        Self::resume(layout, state)
    }
}
