use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use turntable::{Carousel, Counter};

/// Read-only view of the carousel published by the event loop after every event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Status {
    pub counter: Option<Counter>,
    pub accumulated_angle: f64,
}

impl Status {
    pub fn of<S>(carousel: &Carousel<S>) -> Self {
        Self {
            counter: carousel.counter(),
            accumulated_angle: carousel
                .state()
                .map(|s| s.accumulated_angle)
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.counter {
            Some(counter) => write!(f, "{} @ {}°", counter, self.accumulated_angle),
            None => write!(f, "empty"),
        }
    }
}

pub type SharedStatus = Arc<RwLock<Status>>;

pub fn status_line(status: &SharedStatus) -> String {
    status.read().to_string()
}
