use crate::shared::frame::Frame;

/// BT.601 luminance weights for B, G, R (matching OpenCV's BGR2GRAY).
const WEIGHT_B: f32 = 0.114;
const WEIGHT_G: f32 = 0.587;
const WEIGHT_R: f32 = 0.299;

/// Collapse a BGR frame to luminance, re-expanded to 3 identical channels.
///
/// Later pipeline stages always receive a 3-channel frame, so the
/// single-channel intermediate is never exposed.
pub fn apply(frame: &Frame) -> Frame {
    let plane = luminance_plane(frame);
    let mut data = Vec::with_capacity(plane.len() * 3);
    for y in &plane {
        data.extend_from_slice(&[*y, *y, *y]);
    }
    Frame::new(data, frame.width(), frame.height(), 3)
}

/// Single-channel luminance plane of a BGR frame, row-major.
pub(crate) fn luminance_plane(frame: &Frame) -> Vec<u8> {
    frame
        .data()
        .chunks_exact(3)
        .map(|px| {
            let y = WEIGHT_B * px[0] as f32 + WEIGHT_G * px[1] as f32 + WEIGHT_R * px[2] as f32;
            y.round().clamp(0.0, 255.0) as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_output_channels_are_equal_everywhere() {
        let mut frame = Frame::filled(4, 3, [10, 200, 90]);
        frame.set_pixel(2, 1, [255, 0, 128]);
        let gray = apply(&frame);
        for y in 0..3 {
            for x in 0..4 {
                let [b, g, r] = gray.pixel(x, y);
                assert_eq!(b, g);
                assert_eq!(g, r);
            }
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        let frame = Frame::filled(7, 5, [1, 2, 3]);
        let gray = apply(&frame);
        assert_eq!(gray.width(), 7);
        assert_eq!(gray.height(), 5);
        assert_eq!(gray.channels(), 3);
    }

    #[rstest]
    #[case([255, 0, 0], 29)] // pure blue: 0.114 * 255
    #[case([0, 255, 0], 150)] // pure green: 0.587 * 255
    #[case([0, 0, 255], 76)] // pure red: 0.299 * 255
    #[case([128, 128, 128], 128)] // gray is a fixed point
    #[case([255, 255, 255], 255)]
    fn test_known_luminance_values(#[case] bgr: [u8; 3], #[case] expected: u8) {
        let frame = Frame::filled(1, 1, bgr);
        assert_eq!(apply(&frame).pixel(0, 0), [expected; 3]);
    }

    #[test]
    fn test_idempotent_on_gray_input() {
        let frame = Frame::filled(3, 3, [77, 77, 77]);
        let once = apply(&frame);
        let twice = apply(&once);
        assert_eq!(once, twice);
    }
}
