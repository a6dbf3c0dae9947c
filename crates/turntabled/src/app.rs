use crate::config::{self, Config, ConfigError};
use crate::events::CarouselEvent;
use crate::status::{SharedStatus, Status};
use async_channel::Receiver;
use turntable::{Carousel, RenderSurface, Rotation};

/// Owns the carousel. Everything else reaches it through the event channel or
/// reads the status it publishes.
pub struct App<S> {
    carousel: Carousel<S>,
    status: SharedStatus,
}

impl<S: RenderSurface> App<S> {
    pub fn new(config: Config, surface: S, status: SharedStatus) -> Self {
        let app = Self {
            carousel: Carousel::new(config.items, config.carousel, surface),
            status,
        };
        app.publish();
        app
    }

    pub fn run(mut self, rx: &Receiver<CarouselEvent>) {
        while let Ok(event) = rx.recv_blocking() {
            self.update(event);
        }
        log::info!("Event channel closed, shutting down");
    }

    pub fn update(&mut self, event: CarouselEvent) {
        let result = match event {
            CarouselEvent::Next => self.carousel.next().map(Some),
            CarouselEvent::Previous => self.carousel.previous().map(Some),
            CarouselEvent::Select(i) => self.carousel.select_index(i).map(Some),
            CarouselEvent::ConfigReload => {
                self.reload();
                Ok(None)
            }
        };

        match result {
            Ok(Some(Rotation {
                focused_index,
                delta,
                ..
            })) => log::debug!("{:?} -> index {} ({}°)", event, focused_index, delta),
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring {:?}: {}", event, e),
        }
        self.publish();
    }

    fn reload(&mut self) {
        self.reload_from(config::load_config());
    }

    /// A config that fails to load leaves the running carousel alone.
    pub fn reload_from(&mut self, loaded: Result<Config, ConfigError>) {
        match loaded {
            Ok(new_config) => {
                self.apply_config(new_config);
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Failed to reload config: {}", e),
        }
    }

    pub fn apply_config(&mut self, config: Config) {
        self.carousel.reconfigure(config.carousel, config.items);
        self.publish();
    }
}

impl<S> App<S> {
    pub fn carousel(&self) -> &Carousel<S> {
        &self.carousel
    }

    fn publish(&self) {
        *self.status.write() = Status::of(&self.carousel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::status_line;
    use crate::surface::JsonLinesSurface;
    use turntable::{CarouselSettings, ItemDescriptor, Radius};

    fn config(count: usize) -> Config {
        Config {
            items: (0..count)
                .map(|i| ItemDescriptor::new(format!("{i}.jpg")))
                .collect(),
            ..Config::default()
        }
    }

    fn frames(app: &App<JsonLinesSurface<Vec<u8>>>) -> Vec<serde_json::Value> {
        String::from_utf8(app.carousel().surface().get_ref().clone())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_events_update_status_and_surface() {
        let status = SharedStatus::default();
        let mut app = App::new(config(8), JsonLinesSurface::new(Vec::new()), status.clone());
        assert_eq!(status_line(&status), "1 of 8 @ 0°");

        app.update(CarouselEvent::Next);
        app.update(CarouselEvent::Select(7));
        assert_eq!(status_line(&status), "8 of 8 @ 45°");

        let frames = frames(&app);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2]["focusedIndex"], 7);
        assert_eq!(frames[2]["containerRotationY"], 45.0);
    }

    #[test]
    fn test_rejected_event_changes_nothing() {
        let status = SharedStatus::default();
        let mut app = App::new(config(3), JsonLinesSurface::new(Vec::new()), status.clone());

        app.update(CarouselEvent::Select(3));
        assert_eq!(status_line(&status), "1 of 3 @ 0°");
        assert_eq!(frames(&app).len(), 1);
    }

    #[test]
    fn test_empty_until_items_arrive() {
        let status = SharedStatus::default();
        let mut app = App::new(Config::default(), JsonLinesSurface::new(Vec::new()), status.clone());

        app.update(CarouselEvent::Previous);
        assert_eq!(status_line(&status), "empty");

        app.apply_config(config(4));
        app.update(CarouselEvent::Previous);
        assert_eq!(status_line(&status), "4 of 4 @ 90°");
    }

    #[test]
    fn test_failed_reload_keeps_previous_config() {
        let status = SharedStatus::default();
        let mut app = App::new(config(4), JsonLinesSurface::new(Vec::new()), status.clone());
        app.update(CarouselEvent::Next);
        let state = app.carousel().state();

        let failures = [
            ConfigError::ConfigDirNotFound,
            ConfigError::Io(std::io::Error::other("disk gone")),
        ];
        for e in failures {
            app.reload_from(Err(e));
        }

        assert_eq!(app.carousel().state(), state);
        assert_eq!(*app.carousel().settings(), CarouselSettings::default());
        assert_eq!(app.carousel().len(), 4);
        assert_eq!(status_line(&status), "2 of 4 @ -90°");
        assert_eq!(frames(&app).len(), 2);
    }

    #[test]
    fn test_reload_applies_new_settings() {
        let status = SharedStatus::default();
        let mut app = App::new(config(4), JsonLinesSurface::new(Vec::new()), status.clone());
        app.update(CarouselEvent::Next);

        let mut updated = config(4);
        updated.carousel.radius = Radius::new(50.0).unwrap();
        app.reload_from(Ok(updated));

        assert_eq!(app.carousel().settings().radius.get(), 50.0);
        assert_eq!(status_line(&status), "2 of 4 @ -90°");
        assert_eq!(frames(&app).last().unwrap()["transforms"][0]["z"], 50.0);
    }
}
