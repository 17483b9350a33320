use image::{GrayImage, Luma};
use imageproc::drawing::draw_polygon_mut;
use imageproc::geometry::convex_hull;
use imageproc::point::Point;

/// Mask value marking pixels inside the face region.
pub const MASK_ON: u8 = 255;

/// Build a single-channel mask of the frame's dimensions with the convex
/// hull of `points` filled with 255.
///
/// Degenerate point sets (fewer than three distinct non-collinear points)
/// yield an all-zero mask, which downstream compositing treats as "no
/// region".
pub fn build(points: &[(i32, i32)], width: u32, height: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if points.len() < 3 {
        return mask;
    }

    let pts: Vec<Point<i32>> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    let hull = convex_hull(pts);
    if hull.len() < 3 {
        return mask;
    }

    draw_polygon_mut(&mut mask, &hull, Luma([MASK_ON]));
    mask
}
