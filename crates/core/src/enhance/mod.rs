pub mod face_region_enhancer;
pub mod hsv;
pub mod hull_mask;
