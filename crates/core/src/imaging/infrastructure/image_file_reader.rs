use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::frame::Frame;

use super::swap_rb;

/// Reads image files with the `image` crate, converting to BGR at the
/// boundary.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        swap_rb(&mut data);
        Ok(Frame::new(data, width, height, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::domain::image_writer::ImageWriter;
    use crate::imaging::infrastructure::image_file_writer::ImageFileWriter;

    #[test]
    fn test_read_missing_file_fails() {
        let reader = ImageFileReader::new();
        let result = reader.read(Path::new("/nonexistent/image.png"));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_then_read_roundtrips_bgr_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");

        let mut frame = Frame::filled(8, 6, [10, 20, 30]);
        frame.set_pixel(3, 2, [200, 100, 50]);
        ImageFileWriter::new().write(&path, &frame).unwrap();

        let read_back = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(read_back, frame);
    }
}
