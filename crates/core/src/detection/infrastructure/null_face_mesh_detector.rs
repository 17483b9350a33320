use crate::detection::domain::face_mesh_detector::FaceMeshDetector;
use crate::detection::domain::landmark_set::LandmarkSet;
use crate::shared::frame::Frame;

/// Detector that never finds a face.
///
/// Used when the beautify toggle is off (no model needs to be loaded)
/// and in tests that exercise the passthrough branch.
pub struct NullFaceMeshDetector;

impl FaceMeshDetector for NullFaceMeshDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<Vec<LandmarkSet>, Box<dyn std::error::Error>> {
        Ok(Vec::new())
    }
}
