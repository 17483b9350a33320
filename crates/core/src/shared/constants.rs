pub const FACE_MESH_MODEL_NAME: &str = "face_mesh_468.onnx";
pub const FACE_MESH_MODEL_URL: &str =
    "https://github.com/glowcam/glowcam/releases/download/v0.1.0/face_mesh_468.onnx";

pub const YOLO_MODEL_NAME: &str = "yolov5s.onnx";
pub const YOLO_MODEL_URL: &str =
    "https://github.com/glowcam/glowcam/releases/download/v0.1.0/yolov5s.onnx";

/// Confidence floor applied to object detections before annotation.
pub const DEFAULT_DETECTION_CONFIDENCE: f64 = 0.4;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
