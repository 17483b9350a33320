use crate::detection::domain::landmark_set::LandmarkSet;
use crate::shared::frame::Frame;

/// Domain interface for face-mesh landmark detection.
///
/// Returns one landmark set per detected face; an empty vec means no face,
/// which callers treat as a normal passthrough branch. Implementations may
/// be stateful (e.g., tracking across frames), hence `&mut self`.
pub trait FaceMeshDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<LandmarkSet>, Box<dyn std::error::Error>>;
}
