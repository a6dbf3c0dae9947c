use crate::angle::AngleModel;
use crate::error::Result;
use crate::rotation::CarouselState;
use crate::tilt::TiltProfile;
use serde::Serialize;
use std::convert::Infallible;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub index: usize,
    pub x: f64,
    pub z: f64,
    pub rotation_y: f64,
    pub rotation_x: f64,
    pub container_rotation_y: f64,
}

/// Everything a render surface needs after a state change.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub focused_index: usize,
    pub count: usize,
    pub container_rotation_y: f64,
    pub transforms: Vec<Transform>,
}

impl Frame {
    pub fn empty() -> Self {
        Self::default()
    }
}

pub trait RenderSurface {
    type Error: std::error::Error;

    fn present(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}

impl<F> RenderSurface for F
where
    F: FnMut(&Frame),
{
    type Error = Infallible;

    fn present(&mut self, frame: &Frame) -> Result<(), Infallible> {
        self(frame);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderProjector<'a> {
    layout: &'a AngleModel,
    tilt: &'a TiltProfile,
}

impl<'a> RenderProjector<'a> {
    pub fn new(layout: &'a AngleModel, tilt: &'a TiltProfile) -> Self {
        Self { layout, tilt }
    }

    pub fn transform(&self, index: usize, state: &CarouselState) -> Result<Transform> {
        let position = self.layout.position(index)?;
        Ok(Transform {
            index,
            x: position.placement.x,
            z: position.placement.z,
            rotation_y: position.base_angle,
            rotation_x: self.flip(index, state),
            container_rotation_y: state.accumulated_angle,
        })
    }

    pub fn project(&self, state: &CarouselState) -> Frame {
        let transforms = self
            .layout
            .positions()
            .map(|p| Transform {
                index: p.index,
                x: p.placement.x,
                z: p.placement.z,
                rotation_y: p.base_angle,
                rotation_x: self.flip(p.index, state),
                container_rotation_y: state.accumulated_angle,
            })
            .collect();

        Frame {
            focused_index: state.focused_index,
            count: self.layout.count(),
            container_rotation_y: state.accumulated_angle,
            transforms,
        }
    }

    fn flip(&self, index: usize, state: &CarouselState) -> f64 {
        self.tilt
            .flip_angle(index, state.focused_index, self.layout.count())
    }
}
