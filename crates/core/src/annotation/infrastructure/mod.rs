pub mod box_renderer;
pub mod onnx_yolo_annotator;
