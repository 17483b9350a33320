//! Object-detection annotator using ONNX Runtime via `ort`.
//!
//! Runs a YOLO model over the frame (letterbox preprocessing, inference,
//! confidence filtering, per-class NMS) and draws the surviving boxes.

use std::path::Path;

use crate::annotation::domain::detection::{nms, Detection};
use crate::annotation::domain::object_annotator::ObjectAnnotator;
use crate::annotation::infrastructure::box_renderer::draw_detections;
use crate::shared::frame::Frame;

/// Fallback YOLO model input resolution when the model doesn't specify dimensions.
const DEFAULT_INPUT_SIZE: u32 = 640;

/// NMS IoU threshold.
const NMS_IOU_THRESH: f64 = 0.45;

/// COCO class labels, indexed by YOLO class id.
pub const CLASS_NAMES: [&str; 80] = [
    "person", "bicycle", "car", "motorcycle", "airplane", "bus", "train", "truck", "boat",
    "traffic light", "fire hydrant", "stop sign", "parking meter", "bench", "bird", "cat", "dog",
    "horse", "sheep", "cow", "elephant", "bear", "zebra", "giraffe", "backpack", "umbrella",
    "handbag", "tie", "suitcase", "frisbee", "skis", "snowboard", "sports ball", "kite",
    "baseball bat", "baseball glove", "skateboard", "surfboard", "tennis racket", "bottle",
    "wine glass", "cup", "fork", "knife", "spoon", "bowl", "banana", "apple", "sandwich",
    "orange", "broccoli", "carrot", "hot dog", "pizza", "donut", "cake", "chair", "couch",
    "potted plant", "bed", "dining table", "toilet", "tv", "laptop", "mouse", "remote",
    "keyboard", "cell phone", "microwave", "oven", "toaster", "sink", "refrigerator", "book",
    "clock", "vase", "scissors", "teddy bear", "hair drier", "toothbrush",
];

/// YOLO object annotator backed by an ONNX Runtime session.
pub struct OnnxYoloAnnotator {
    session: ort::session::Session,
    confidence: f64,
    input_size: u32,
}

impl OnnxYoloAnnotator {
    /// Load a YOLO ONNX model and prepare for inference.
    ///
    /// The input resolution is read from the model's input shape (expecting
    /// NCHW). Falls back to 640 if the shape is dynamic or unreadable.
    pub fn new(model_path: &Path, confidence: f64) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?.commit_from_file(model_path)?;

        let input_size = session
            .inputs()
            .first()
            .and_then(|input| {
                if let ort::value::ValueType::Tensor { ref shape, .. } = input.dtype() {
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
            confidence,
            input_size,
        })
    }

    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
        // 1. Preprocess: letterbox + normalize → NCHW float32
        let (input_tensor, scale, pad_x, pad_y) = letterbox(frame, self.input_size);

        // 2. Inference
        let input_value = ort::value::Tensor::from_array(input_tensor)?;
        let outputs = self.session.run(ort::inputs![input_value])?;
        if outputs.len() == 0 {
            return Err("YOLO model produced no outputs".into());
        }
        let tensor = outputs[0].try_extract_array::<f32>()?;
        let shape = tensor.shape();

        // YOLO output is [1, num_detections, num_features] or the
        // transposed [1, num_features, num_detections]. Handle both.
        let (num_dets, num_feats) = if shape.len() == 3 {
            if shape[1] < shape[2] {
                (shape[2], shape[1])
            } else {
                (shape[1], shape[2])
            }
        } else {
            return Err(format!("Unexpected YOLO output shape: {shape:?}").into());
        };

        let data = tensor.as_slice().ok_or("Cannot get tensor slice")?;
        let transposed = shape.len() == 3 && shape[1] < shape[2];

        // 3. Parse rows: [cx, cy, w, h, objectness, class scores...]
        let mut raw = Vec::new();
        for i in 0..num_dets {
            let row = if transposed {
                (0..num_feats)
                    .map(|f| data[f * num_dets + i])
                    .collect::<Vec<f32>>()
            } else {
                data[i * num_feats..(i + 1) * num_feats].to_vec()
            };

            if row.len() < 6 {
                continue;
            }
            let objectness = row[4] as f64;
            let (class_id, class_score) = row[5..]
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(idx, &score)| (idx as u32, score as f64))
                .unwrap_or((0, 0.0));

            let conf = objectness * class_score;
            if conf < self.confidence {
                continue;
            }

            // Convert from letterbox coords back to original frame coords
            let cx = row[0] as f64;
            let cy = row[1] as f64;
            let w = row[2] as f64;
            let h = row[3] as f64;
            let x1 = ((cx - w / 2.0) - pad_x as f64) / scale;
            let y1 = ((cy - h / 2.0) - pad_y as f64) / scale;

            raw.push(Detection {
                x: x1.round() as i32,
                y: y1.round() as i32,
                width: (w / scale).round() as i32,
                height: (h / scale).round() as i32,
                class_id,
                confidence: conf,
            });
        }

        // 4. Per-class NMS
        let kept = nms(&raw, NMS_IOU_THRESH);
        for d in &kept {
            let label = CLASS_NAMES
                .get(d.class_id as usize)
                .copied()
                .unwrap_or("unknown");
            log::debug!(
                "detected {label} ({:.2}) at ({}, {}) {}x{}",
                d.confidence,
                d.x,
                d.y,
                d.width,
                d.height
            );
        }
        Ok(kept)
    }
}

impl ObjectAnnotator for OnnxYoloAnnotator {
    fn annotate(&mut self, frame: &Frame) -> Result<Frame, Box<dyn std::error::Error>> {
        let detections = self.detect(frame)?;
        Ok(draw_detections(frame, &detections))
    }
}

/// Letterbox-resize a frame to `target_size` × `target_size`.
///
/// Returns `(NCHW float32 tensor, scale, pad_x, pad_y)`.
fn letterbox(frame: &Frame, target_size: u32) -> (ndarray::Array4<f32>, f64, u32, u32) {
    let fw = frame.width() as f64;
    let fh = frame.height() as f64;
    let target = target_size as f64;

    let scale = (target / fw).min(target / fh);
    let new_w = (fw * scale).round() as u32;
    let new_h = (fh * scale).round() as u32;
    let pad_x = (target_size - new_w) / 2;
    let pad_y = (target_size - new_h) / 2;

    // Pad with 114/255 gray, the YOLO convention
    let gray = 114.0f32 / 255.0;
    let mut tensor =
        ndarray::Array4::<f32>::from_elem((1, 3, target_size as usize, target_size as usize), gray);

    let src = frame.as_ndarray(); // [H, W, C] u8
    let src_h = frame.height() as usize;
    let src_w = frame.width() as usize;

    // Nearest-neighbor resize + copy into the padded region
    for y in 0..new_h as usize {
        let src_y = ((y as f64 / scale) as usize).min(src_h - 1);
        for x in 0..new_w as usize {
            let src_x = ((x as f64 / scale) as usize).min(src_w - 1);
            let ty = pad_y as usize + y;
            let tx = pad_x as usize + x;
            for c in 0..3 {
                tensor[[0, c, ty, tx]] = src[[src_y, src_x, c]] as f32 / 255.0;
            }
        }
    }

    (tensor, scale, pad_x, pad_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_letterbox_square_input_has_no_padding() {
        let frame = Frame::filled(100, 100, [255, 255, 255]);
        let (tensor, scale, pad_x, pad_y) = letterbox(&frame, 640);
        assert_eq!(tensor.shape(), &[1, 3, 640, 640]);
        assert_relative_eq!(scale, 6.4);
        assert_eq!((pad_x, pad_y), (0, 0));
        assert_relative_eq!(tensor[[0, 0, 0, 0]], 1.0);
        assert_relative_eq!(tensor[[0, 0, 639, 639]], 1.0);
    }

    #[test]
    fn test_letterbox_wide_input_pads_vertically() {
        let frame = Frame::filled(200, 100, [0, 0, 0]);
        let (tensor, scale, pad_x, pad_y) = letterbox(&frame, 640);
        assert_relative_eq!(scale, 3.2);
        assert_eq!(pad_x, 0);
        assert_eq!(pad_y, 160); // (640 - 320) / 2

        // Padding rows keep the gray fill, image rows are black
        assert_relative_eq!(tensor[[0, 0, 0, 0]], 114.0 / 255.0);
        assert_relative_eq!(tensor[[0, 0, 320, 320]], 0.0);
        assert_relative_eq!(tensor[[0, 0, 639, 0]], 114.0 / 255.0);
    }

    #[test]
    fn test_class_names_cover_all_yolo_ids() {
        assert_eq!(CLASS_NAMES.len(), 80);
        assert_eq!(CLASS_NAMES[0], "person");
        assert_eq!(CLASS_NAMES[79], "toothbrush");
    }
}
