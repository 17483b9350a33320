use image::GrayImage;

use crate::filters::grayscale::luminance_plane;
use crate::shared::frame::Frame;

/// Canny hysteresis thresholds, matching the fixed values of the edge stage.
pub const LOW_THRESHOLD: f32 = 50.0;
pub const HIGH_THRESHOLD: f32 = 150.0;

/// Canny edge detection: luminance -> edge map -> 3 replicated channels.
///
/// The returned frame is black except for white (255) edge pixels.
pub fn apply(frame: &Frame) -> Frame {
    let gray = GrayImage::from_raw(frame.width(), frame.height(), luminance_plane(frame))
        .expect("luminance plane length matches frame dimensions");
    let edges = imageproc::edges::canny(&gray, LOW_THRESHOLD, HIGH_THRESHOLD);

    let mut data = Vec::with_capacity(edges.len() * 3);
    for px in edges.into_raw() {
        data.extend_from_slice(&[px, px, px]);
    }
    Frame::new(data, frame.width(), frame.height(), 3)
}
