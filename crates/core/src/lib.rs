pub mod annotation;
pub mod detection;
pub mod enhance;
pub mod filters;
pub mod imaging;
pub mod pipeline;
pub mod shared;
