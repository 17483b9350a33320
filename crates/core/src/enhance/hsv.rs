//! BGR ↔ HSV conversion with OpenCV's 8-bit conventions.
//!
//! Hue is stored halved (0..180) so it fits in a byte; saturation and
//! value span the full 0..255 range.

/// Convert one BGR pixel to HSV.
pub fn bgr_to_hsv(bgr: [u8; 3]) -> [u8; 3] {
    let b = bgr[0] as f32;
    let g = bgr[1] as f32;
    let r = bgr[2] as f32;

    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v == 0.0 { 0.0 } else { 255.0 * diff / v };

    let h_deg = if diff == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / diff
    } else if v == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };

    let h = ((h_deg / 2.0).round() as i32).rem_euclid(180) as u8;
    [h, s.round() as u8, v.round() as u8]
}

/// Convert one HSV pixel (H in 0..180) back to BGR.
pub fn hsv_to_bgr(hsv: [u8; 3]) -> [u8; 3] {
    let h = hsv[0] as f32 * 2.0;
    let s = hsv[1] as f32 / 255.0;
    let v = hsv[2] as f32;

    let c = v * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        (b1 + m).round().clamp(0.0, 255.0) as u8,
        (g1 + m).round().clamp(0.0, 255.0) as u8,
        (r1 + m).round().clamp(0.0, 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case([0, 0, 0], [0, 0, 0])] // black
    #[case([255, 255, 255], [0, 0, 255])] // white: no saturation
    #[case([128, 128, 128], [0, 0, 128])] // gray
    #[case([0, 0, 255], [0, 255, 255])] // red: hue 0
    #[case([0, 255, 0], [60, 255, 255])] // green: hue 120/2
    #[case([255, 0, 0], [120, 255, 255])] // blue: hue 240/2
    #[case([0, 255, 255], [30, 255, 255])] // yellow
    fn test_bgr_to_hsv_known_colors(#[case] bgr: [u8; 3], #[case] hsv: [u8; 3]) {
        assert_eq!(bgr_to_hsv(bgr), hsv);
    }

    #[rstest]
    #[case([0, 0, 0])]
    #[case([255, 255, 255])]
    #[case([128, 128, 128])]
    #[case([0, 0, 255])]
    #[case([0, 255, 0])]
    #[case([255, 0, 0])]
    #[case([40, 90, 200])]
    fn test_roundtrip_is_near_exact(#[case] bgr: [u8; 3]) {
        let back = hsv_to_bgr(bgr_to_hsv(bgr));
        for c in 0..3 {
            let delta = (back[c] as i16 - bgr[c] as i16).abs();
            assert!(delta <= 2, "channel {c}: {bgr:?} -> {back:?}");
        }
    }

    #[test]
    fn test_value_tracks_max_channel() {
        let hsv = bgr_to_hsv([10, 200, 90]);
        assert_eq!(hsv[2], 200);
    }

    #[test]
    fn test_hue_wraps_into_byte_range() {
        // Nearly-pure red with a hint of blue sits just below 360°;
        // halved and rounded it must wrap to 0, not overflow 179.
        let hsv = bgr_to_hsv([1, 0, 255]);
        assert!(hsv[0] < 180);
    }

    #[test]
    fn test_brightening_gray_keeps_it_near_neutral() {
        // The beautify stage adds (s+15, v+30) to gray skin-free pixels;
        // the result must stay close to neutral.
        let [h, s, v] = bgr_to_hsv([128, 128, 128]);
        let out = hsv_to_bgr([h, s.saturating_add(15), v.saturating_add(30)]);
        assert_eq!(out, [149, 149, 158]);
    }
}
