use std::path::Path;

use crate::shared::frame::Frame;

/// Reads a single image file into a 3-channel BGR frame.
///
/// Implementations handle decoding details; the pipeline only sees the
/// abstract `Frame`.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>>;
}
