use crate::detection::domain::face_mesh_detector::FaceMeshDetector;
use crate::detection::domain::landmark_set::LandmarkSet;
use crate::enhance::{hsv, hull_mask};
use crate::shared::error::PipelineError;
use crate::shared::frame::Frame;

/// Saturation offset applied inside the face region.
pub const SATURATION_DELTA: u8 = 15;

/// Brightness (HSV value) offset applied inside the face region.
pub const VALUE_DELTA: u8 = 30;

/// Brightens the face region of a frame.
///
/// Landmarks come from the injected [`FaceMeshDetector`]; the convex hull of
/// the landmark points delimits the region, and every pixel inside it gets a
/// fixed saturation/brightness lift in HSV space. Frames without a face pass
/// through unchanged.
pub struct FaceRegionEnhancer {
    detector: Box<dyn FaceMeshDetector>,
}

impl FaceRegionEnhancer {
    pub fn new(detector: Box<dyn FaceMeshDetector>) -> Self {
        Self { detector }
    }

    /// Apply the enhancement once per detected face, each face's result
    /// feeding into the next as the working image. Overlapping hulls
    /// therefore resolve in detection order (last-applied wins).
    pub fn enhance(&mut self, frame: &Frame) -> Result<Frame, PipelineError> {
        let faces = self
            .detector
            .detect(frame)
            .map_err(|e| PipelineError::DetectorUnavailable(e.to_string()))?;

        if faces.is_empty() {
            log::debug!("no face detected, beautify stage is a passthrough");
            return Ok(frame.clone());
        }

        let mut working = frame.clone();
        for face in &faces {
            working = brighten_face(&working, face);
        }
        Ok(working)
    }
}

/// Brighten one face: hull mask from the landmark pixels, then an HSV
/// (s + 15, v + 30) lift on every masked pixel of a copy of the input.
/// Pixels outside the mask stay bit-identical.
fn brighten_face(frame: &Frame, landmarks: &LandmarkSet) -> Frame {
    let points = landmarks.to_pixel_points(frame.width(), frame.height());
    let mask = hull_mask::build(&points, frame.width(), frame.height());

    let mut result = frame.clone();
    for (x, y, m) in mask.enumerate_pixels() {
        if m[0] != hull_mask::MASK_ON {
            continue;
        }
        let [h, s, v] = hsv::bgr_to_hsv(frame.pixel(x, y));
        let brightened = hsv::hsv_to_bgr([
            h,
            s.saturating_add(SATURATION_DELTA),
            v.saturating_add(VALUE_DELTA),
        ]);
        result.set_pixel(x, y, brightened);
    }
    result
}
