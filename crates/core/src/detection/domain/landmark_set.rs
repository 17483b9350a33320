/// Landmarks in a full face mesh.
pub const MESH_LANDMARK_COUNT: usize = 468;

/// An ordered sequence of normalized 2-D face landmarks.
///
/// Coordinates are in [0, 1] relative to the frame the detector ran on
/// (values slightly outside are possible for faces at the frame edge).
/// Produced per frame and consumed immediately; never retained.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    points: Vec<(f64, f64)>,
}

impl LandmarkSet {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Map normalized coordinates to pixel coordinates by rounding
    /// (`x_px = round(x_norm * W)`), clamped into the frame so edge-of-frame
    /// landmarks stay addressable.
    pub fn to_pixel_points(&self, width: u32, height: u32) -> Vec<(i32, i32)> {
        let max_x = width.saturating_sub(1) as f64;
        let max_y = height.saturating_sub(1) as f64;
        self.points
            .iter()
            .map(|(x, y)| {
                let px = (x * width as f64).round().clamp(0.0, max_x);
                let py = (y * height as f64).round().clamp(0.0, max_y);
                (px as i32, py as i32)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_empty_set() {
        let set = LandmarkSet::new(vec![]);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.to_pixel_points(100, 100).is_empty());
    }

    #[rstest]
    #[case((0.3, 0.3), (30, 30))]
    #[case((0.7, 0.7), (70, 70))]
    #[case((0.305, 0.295), (31, 30))] // rounds to nearest
    #[case((0.0, 0.0), (0, 0))]
    fn test_normalized_to_pixel_rounding(#[case] norm: (f64, f64), #[case] expected: (i32, i32)) {
        let set = LandmarkSet::new(vec![norm]);
        assert_eq!(set.to_pixel_points(100, 100)[0], expected);
    }

    #[test]
    fn test_out_of_range_points_are_clamped() {
        let set = LandmarkSet::new(vec![(-0.1, 0.5), (1.2, 0.5)]);
        let pts = set.to_pixel_points(100, 50);
        assert_eq!(pts[0], (0, 25));
        assert_eq!(pts[1], (99, 25));
    }

    #[test]
    fn test_order_is_preserved() {
        let set = LandmarkSet::new(vec![(0.1, 0.2), (0.9, 0.8), (0.5, 0.5)]);
        let pts = set.to_pixel_points(10, 10);
        assert_eq!(pts, vec![(1, 2), (9, 8), (5, 5)]);
    }
}
