use std::io::Write;
use thiserror::Error;
use turntable::{Frame, RenderSurface};

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes each frame as one line of JSON for whatever renders the ring.
pub struct JsonLinesSurface<W> {
    writer: W,
}

impl<W: Write> JsonLinesSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> RenderSurface for JsonLinesSurface<W> {
    type Error = SurfaceError;

    fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError> {
        serde_json::to_writer(&mut self.writer, frame)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
