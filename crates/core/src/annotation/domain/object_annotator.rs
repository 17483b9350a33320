use crate::shared::frame::Frame;

/// Domain interface for the object-detection annotation pass.
///
/// Consumes a frame and returns a new frame with detections drawn on it;
/// the input is never mutated. `&mut self` because implementations may hold
/// stateful inference sessions.
pub trait ObjectAnnotator: Send {
    fn annotate(&mut self, frame: &Frame) -> Result<Frame, Box<dyn std::error::Error>>;
}
