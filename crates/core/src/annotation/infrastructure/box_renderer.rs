use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::annotation::domain::detection::Detection;
use crate::shared::frame::Frame;

/// Bounding-box colors in BGR order, cycled per class id.
const PALETTE: [[u8; 3]; 8] = [
    [0, 64, 255],   // red-orange
    [64, 255, 0],   // green
    [255, 128, 0],  // blue
    [0, 212, 255],  // yellow
    [255, 0, 170],  // purple
    [49, 210, 132], // lime-teal
    [10, 96, 254],  // orange
    [255, 221, 0],  // cyan
];

const BOX_THICKNESS: i32 = 2;

/// Draw hollow bounding boxes for each detection onto a copy of the frame.
///
/// The pixel buffer stays in BGR order throughout; `RgbImage` is only used
/// as an imageproc canvas, with palette colors already given in BGR.
pub fn draw_detections(frame: &Frame, detections: &[Detection]) -> Frame {
    let (w, h) = (frame.width(), frame.height());
    let mut canvas = RgbImage::from_raw(w, h, frame.data().to_vec())
        .expect("frame buffer length matches dimensions");

    for d in detections {
        let Some(d) = d.clamp_to(w, h) else { continue };
        let color = Rgb(PALETTE[d.class_id as usize % PALETTE.len()]);
        for inset in 0..BOX_THICKNESS {
            let bw = d.width - 2 * inset;
            let bh = d.height - 2 * inset;
            if bw <= 0 || bh <= 0 {
                break;
            }
            let rect = Rect::at(d.x + inset, d.y + inset).of_size(bw as u32, bh as u32);
            draw_hollow_rect_mut(&mut canvas, rect, color);
        }
    }

    Frame::new(canvas.into_raw(), w, h, 3)
}
