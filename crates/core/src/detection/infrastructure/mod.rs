pub mod model_resolver;
pub mod null_face_mesh_detector;
pub mod onnx_face_mesh_detector;
