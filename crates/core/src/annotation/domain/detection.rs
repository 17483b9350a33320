/// One object detection in frame pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub class_id: u32,
    pub confidence: f64,
}

impl Detection {
    /// Clamp the box into a `frame_width` × `frame_height` frame.
    ///
    /// Returns `None` when nothing of the box remains inside the frame.
    pub fn clamp_to(&self, frame_width: u32, frame_height: u32) -> Option<Detection> {
        let fw = frame_width as i32;
        let fh = frame_height as i32;

        let x1 = self.x.clamp(0, fw);
        let y1 = self.y.clamp(0, fh);
        let x2 = (self.x + self.width).clamp(0, fw);
        let y2 = (self.y + self.height).clamp(0, fh);

        if x2 - x1 <= 0 || y2 - y1 <= 0 {
            return None;
        }

        Some(Detection {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
            ..self.clone()
        })
    }

    pub fn iou(&self, other: &Detection) -> f64 {
        let ix1 = self.x.max(other.x);
        let iy1 = self.y.max(other.y);
        let ix2 = (self.x + self.width).min(other.x + other.width);
        let iy2 = (self.y + self.height).min(other.y + other.height);

        let inter = (ix2 - ix1).max(0) as f64 * (iy2 - iy1).max(0) as f64;
        if inter == 0.0 {
            return 0.0;
        }

        let area_a = self.width as f64 * self.height as f64;
        let area_b = other.width as f64 * other.height as f64;
        inter / (area_a + area_b - inter)
    }
}

/// Greedy non-maximum suppression: sort by confidence, keep a detection
/// only if its IoU with every previously-kept detection of the same class
/// is at or below the threshold.
pub fn nms(detections: &[Detection], iou_threshold: f64) -> Vec<Detection> {
    let mut sorted: Vec<Detection> = detections.to_vec();
    sorted.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept: Vec<Detection> = Vec::with_capacity(sorted.len());
    for d in sorted {
        let dominated = kept
            .iter()
            .any(|k| k.class_id == d.class_id && d.iou(k) > iou_threshold);
        if !dominated {
            kept.push(d);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn det(x: i32, y: i32, w: i32, h: i32, class_id: u32, conf: f64) -> Detection {
        Detection {
            x,
            y,
            width: w,
            height: h,
            class_id,
            confidence: conf,
        }
    }

    // ── IoU ──────────────────────────────────────────────────────────

    #[test]
    fn test_iou_identical_boxes() {
        let a = det(10, 10, 100, 100, 0, 0.9);
        assert_relative_eq!(a.iou(&a), 1.0);
    }

    #[test]
    fn test_iou_no_overlap() {
        let a = det(0, 0, 50, 50, 0, 0.9);
        let b = det(100, 100, 50, 50, 0, 0.9);
        assert_relative_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_partial_overlap() {
        // a: [0,0]-[100,100], b: [50,0]-[150,100]
        // intersection 5000, union 15000
        let a = det(0, 0, 100, 100, 0, 0.9);
        let b = det(50, 0, 100, 100, 0, 0.9);
        assert_relative_eq!(a.iou(&b), 5000.0 / 15000.0);
    }

    // ── Clamping ─────────────────────────────────────────────────────

    #[test]
    fn test_clamp_inside_frame_is_identity() {
        let d = det(10, 20, 30, 40, 2, 0.8);
        assert_eq!(d.clamp_to(100, 100), Some(d));
    }

    #[test]
    fn test_clamp_trims_overhanging_box() {
        let d = det(-10, 90, 30, 30, 2, 0.8);
        let clamped = d.clamp_to(100, 100).unwrap();
        assert_eq!((clamped.x, clamped.y), (0, 90));
        assert_eq!((clamped.width, clamped.height), (20, 10));
    }

    #[test]
    fn test_clamp_fully_outside_returns_none() {
        let d = det(200, 200, 30, 30, 2, 0.8);
        assert!(d.clamp_to(100, 100).is_none());
    }

    // ── NMS ──────────────────────────────────────────────────────────

    #[test]
    fn test_nms_keeps_highest_confidence_of_overlapping_pair() {
        let weak = det(0, 0, 100, 100, 0, 0.5);
        let strong = det(5, 5, 100, 100, 0, 0.9);
        let kept = nms(&[weak, strong.clone()], 0.45);
        assert_eq!(kept, vec![strong]);
    }

    #[test]
    fn test_nms_keeps_overlapping_boxes_of_different_classes() {
        let person = det(0, 0, 100, 100, 0, 0.9);
        let dog = det(5, 5, 100, 100, 16, 0.8);
        let kept = nms(&[person, dog], 0.45);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_nms_keeps_disjoint_boxes() {
        let a = det(0, 0, 40, 40, 0, 0.9);
        let b = det(60, 60, 40, 40, 0, 0.7);
        let kept = nms(&[a, b], 0.45);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_nms_empty_input() {
        assert!(nms(&[], 0.45).is_empty());
    }
}
