pub mod face_mesh_detector;
pub mod landmark_set;
