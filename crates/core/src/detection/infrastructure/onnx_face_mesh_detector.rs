//! Face-mesh landmark detector using ONNX Runtime via `ort`.
//!
//! Runs a 468-landmark face-mesh model: square resize preprocessing,
//! inference, then rescaling of the landmark grid back to normalized
//! coordinates. The model reports a single face per frame together with a
//! face-presence score; frames below the score threshold yield no faces.

use std::path::Path;

use crate::detection::domain::face_mesh_detector::FaceMeshDetector;
use crate::detection::domain::landmark_set::{LandmarkSet, MESH_LANDMARK_COUNT};
use crate::shared::frame::Frame;

/// Fallback model input resolution when the model doesn't specify dimensions.
const DEFAULT_INPUT_SIZE: u32 = 192;

/// Default face-presence score threshold.
pub const DEFAULT_FACE_SCORE: f64 = 0.5;

pub struct OnnxFaceMeshDetector {
    session: ort::session::Session,
    score_threshold: f64,
    input_size: u32,
}

impl OnnxFaceMeshDetector {
    /// Load a face-mesh ONNX model and prepare for inference.
    ///
    /// The input resolution is read from the model's input shape (expecting
    /// NCHW). Falls back to 192 if the shape is dynamic or unreadable.
    pub fn new(model_path: &Path, score_threshold: f64) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?.commit_from_file(model_path)?;

        let input_size = session
            .inputs()
            .first()
            .and_then(|input| {
                if let ort::value::ValueType::Tensor { ref shape, .. } = input.dtype() {
                    // shape is [N, C, H, W] — use H (square input)
                    if shape.len() >= 4 && shape[2] > 0 {
                        Some(shape[2] as u32)
                    } else {
                        None
                    }
                } else {
                    None
                }
            })
            .unwrap_or(DEFAULT_INPUT_SIZE);

        Ok(Self {
            session,
            score_threshold,
            input_size,
        })
    }
}

impl FaceMeshDetector for OnnxFaceMeshDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<LandmarkSet>, Box<dyn std::error::Error>> {
        // 1. Preprocess: stretch-resize + normalize → NCHW float32. The
        //    stretch (no letterbox) means model coordinates divided by the
        //    input size map directly to normalized frame coordinates.
        let input_tensor = preprocess(frame, self.input_size);

        // 2. Inference
        let input_value = ort::value::Tensor::from_array(input_tensor)?;
        let outputs = self.session.run(ort::inputs![input_value])?;
        if outputs.len() == 0 {
            return Err("face-mesh model produced no outputs".into());
        }

        // 3. Face-presence gate: second output is a probability in [0, 1]
        if outputs.len() > 1 {
            let score_tensor = outputs[1].try_extract_array::<f32>()?;
            let score = score_tensor
                .as_slice()
                .and_then(|s| s.first().copied())
                .unwrap_or(0.0) as f64;
            if score < self.score_threshold {
                return Ok(Vec::new());
            }
        }

        // 4. Parse the landmark grid: flat (x, y, z) triples in input pixels
        let tensor = outputs[0].try_extract_array::<f32>()?;
        let data = tensor.as_slice().ok_or("Cannot get tensor slice")?;
        if data.len() % 3 != 0 {
            return Err(format!(
                "unexpected face-mesh output length {} (not a multiple of 3)",
                data.len()
            )
            .into());
        }

        let scale = self.input_size as f64;
        let points: Vec<(f64, f64)> = data
            .chunks_exact(3)
            .take(MESH_LANDMARK_COUNT)
            .map(|triple| (triple[0] as f64 / scale, triple[1] as f64 / scale))
            .collect();

        if points.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![LandmarkSet::new(points)])
    }
}

/// Stretch-resize a frame to `size` × `size`, normalized to [0, 1] NCHW.
fn preprocess(frame: &Frame, size: u32) -> ndarray::Array4<f32> {
    let target = size as usize;
    let mut tensor = ndarray::Array4::<f32>::zeros((1, 3, target, target));

    let src = frame.as_ndarray(); // [H, W, C] u8
    let src_h = frame.height() as usize;
    let src_w = frame.width() as usize;
    let scale_x = src_w as f64 / target as f64;
    let scale_y = src_h as f64 / target as f64;

    // Nearest-neighbor resize
    for y in 0..target {
        let src_y = ((y as f64 * scale_y) as usize).min(src_h - 1);
        for x in 0..target {
            let src_x = ((x as f64 * scale_x) as usize).min(src_w - 1);
            for c in 0..3 {
                tensor[[0, c, y, x]] = src[[src_y, src_x, c]] as f32 / 255.0;
            }
        }
    }

    tensor
}
