use crate::angle::{AngleModel, Radius};
use crate::error::{CarouselError, Result};
use crate::item::{Item, ItemDescriptor};
use crate::projector::{Frame, RenderProjector, RenderSurface};
use crate::rotation::{CarouselState, Rotation, RotationController};
use crate::tilt::{FlipRange, TiltProfile};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub radius: Radius,
    pub flip_range: FlipRange,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            radius: Radius::default(),
            flip_range: FlipRange::default(),
        }
    }
}

/// One-based position for "item k of N" style counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{position} of {total}")]
pub struct Counter {
    pub position: usize,
    pub total: usize,
}

/// Owns the item list and the rotation state, and pushes a fresh [`Frame`] to
/// its surface after every successful change.
pub struct Carousel<S> {
    items: Vec<Item>,
    settings: CarouselSettings,
    controller: Option<RotationController>,
    surface: S,
}

impl<S: RenderSurface> Carousel<S> {
    pub fn new(descriptors: Vec<ItemDescriptor>, settings: CarouselSettings, surface: S) -> Self {
        let mut carousel = Self {
            items: Vec::new(),
            settings,
            controller: None,
            surface,
        };
        carousel.replace_items(descriptors);
        carousel
    }

    /// Index semantics change with the item set, so rotation starts over.
    pub fn replace_items(&mut self, descriptors: Vec<ItemDescriptor>) {
        self.items = Item::index_all(descriptors);
        self.controller = AngleModel::new(self.items.len(), self.settings.radius)
            .ok()
            .map(RotationController::new);

        log::info!("Carousel initialized with {} items", self.items.len());
        self.present();
    }

    /// Keeps the current rotation when only the settings changed.
    pub fn reconfigure(&mut self, settings: CarouselSettings, descriptors: Vec<ItemDescriptor>) {
        let same_items = self
            .items
            .iter()
            .map(|item| &item.content)
            .eq(descriptors.iter());
        self.settings = settings;

        if !same_items {
            self.replace_items(descriptors);
            return;
        }

        if let Some(state) = self.state() {
            self.controller = AngleModel::new(self.items.len(), settings.radius)
                .and_then(|layout| RotationController::resume(layout, state))
                .ok();
        }
        self.present();
    }

    pub fn navigate_to(&mut self, index: usize) -> Result<Rotation> {
        let rotation = self.controller_mut()?.navigate_to(index)?;
        self.present();
        Ok(rotation)
    }

    pub fn select_index(&mut self, index: usize) -> Result<Rotation> {
        self.navigate_to(index)
    }

    pub fn next(&mut self) -> Result<Rotation> {
        let rotation = self.controller_mut()?.next();
        self.present();
        Ok(rotation)
    }

    pub fn previous(&mut self) -> Result<Rotation> {
        let rotation = self.controller_mut()?.previous();
        self.present();
        Ok(rotation)
    }

    pub fn frame(&self) -> Result<Frame> {
        let controller = self
            .controller
            .as_ref()
            .ok_or(CarouselError::EmptyCarousel)?;
        let tilt = self.tilt();
        Ok(RenderProjector::new(controller.layout(), &tilt).project(&controller.state()))
    }

    fn present(&mut self) {
        let frame = self.frame().unwrap_or_else(|_| Frame::empty());
        if let Err(e) = self.surface.present(&frame) {
            log::error!("Failed to present carousel frame: {}", e);
        }
    }

    fn controller_mut(&mut self) -> Result<&mut RotationController> {
        self.controller
            .as_mut()
            .ok_or(CarouselError::EmptyCarousel)
    }
}

impl<S> Carousel<S> {
    pub fn tilt(&self) -> TiltProfile {
        TiltProfile::new(self.settings.flip_range)
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn state(&self) -> Option<CarouselState> {
        self.controller.as_ref().map(RotationController::state)
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.controller
            .as_ref()
            .map(RotationController::focused_index)
    }

    pub fn focused_item(&self) -> Option<&Item> {
        self.focused_index().and_then(|i| self.items.get(i))
    }

    pub fn counter(&self) -> Option<Counter> {
        self.focused_index().map(|i| Counter {
            position: i + 1,
            total: self.items.len(),
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
