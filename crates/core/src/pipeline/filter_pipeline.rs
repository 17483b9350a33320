use crate::enhance::face_region_enhancer::FaceRegionEnhancer;
use crate::filters::{blur, edges, grayscale};
use crate::shared::error::PipelineError;
use crate::shared::frame::Frame;
use crate::shared::toggles::FilterToggles;

/// Applies the enabled filter stages to a frame in a fixed order.
///
/// Stage order is grayscale → blur → edges → beautify, each stage consuming
/// the previous stage's output. The order is load-bearing: stages do not
/// commute (beautify after grayscale operates on a desaturated image), so it
/// must never be reordered. Every stage returns a 3-channel frame of the
/// input's dimensions.
pub struct FilterPipeline {
    enhancer: FaceRegionEnhancer,
}

impl FilterPipeline {
    pub fn new(enhancer: FaceRegionEnhancer) -> Self {
        Self { enhancer }
    }

    /// Process one frame with the given toggle snapshot.
    ///
    /// With all toggles off the result is byte-identical to the input.
    pub fn process(
        &mut self,
        frame: &Frame,
        toggles: FilterToggles,
    ) -> Result<Frame, PipelineError> {
        validate(frame)?;

        let mut result = frame.clone();
        if toggles.grayscale {
            result = grayscale::apply(&result);
        }
        if toggles.blur {
            result = blur::apply(&result);
        }
        if toggles.edges {
            result = edges::apply(&result);
        }
        if toggles.beautify {
            result = self.enhancer.enhance(&result)?;
        }
        Ok(result)
    }
}

fn validate(frame: &Frame) -> Result<(), PipelineError> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(PipelineError::InvalidImage(format!(
            "zero-sized image ({}x{})",
            frame.width(),
            frame.height()
        )));
    }
    if frame.channels() != 3 {
        return Err(PipelineError::InvalidImage(format!(
            "expected 3 channels, got {}",
            frame.channels()
        )));
    }
    Ok(())
}
