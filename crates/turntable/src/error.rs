use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CarouselError {
    #[error("Index {index} is outside the carousel (0..{count})")]
    InvalidIndex { index: usize, count: usize },
    #[error("Carousel has no items")]
    EmptyCarousel,
    #[error("Flip range must be at least 1, got {0}")]
    InvalidFlipRange(u32),
    #[error("Radius must be finite and not negative, got {0}")]
    InvalidRadius(f64),
}

pub type Result<T, E = CarouselError> = std::result::Result<T, E>;
