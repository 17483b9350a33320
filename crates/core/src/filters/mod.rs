pub mod blur;
pub mod edges;
pub mod grayscale;
