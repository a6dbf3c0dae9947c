//! Rotation state and per-item geometry for a circular item carousel.
//!
//! Items sit evenly spaced on a ring. Navigation turns the whole ring the short
//! way around and the accumulated turn is kept unwrapped, so a renderer can
//! animate between frames without ever spinning backwards through the full
//! circle.

pub mod angle;
pub mod carousel;
pub mod error;
pub mod ipc;
pub mod item;
mod macros;
pub mod projector;
pub mod rotation;
pub mod tilt;

pub use angle::{AngleModel, Placement, Position, Radius};
pub use carousel::{Carousel, CarouselSettings, Counter};
pub use error::{CarouselError, Result};
pub use item::{Category, Item, ItemDescriptor, ItemSource};
pub use projector::{Frame, RenderProjector, RenderSurface, Transform};
pub use rotation::{CarouselState, Rotation, RotationController};
pub use tilt::{FlipRange, TiltProfile};
