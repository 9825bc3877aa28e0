use std::path::Path;

/// Error types for the depth frame module.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Failed to read the depth frame file
    #[error("Failed to read the depth frame file")]
    Io(#[from] std::io::Error),

    /// Depth buffer does not hold the expected number of samples
    #[error("Depth buffer holds {found} bytes, expected {expected} for a {width}x{height} frame")]
    MalformedDepthData {
        /// Actual length of the raw buffer in bytes.
        found: usize,
        /// Expected length of the raw buffer in bytes.
        expected: usize,
        /// Frame width the buffer was parsed against.
        width: usize,
        /// Frame height the buffer was parsed against.
        height: usize,
    },
}

/// Depth frame width of the supported sensor, in pixels.
pub const DEPTH_WIDTH: usize = 640;

/// Depth frame height of the supported sensor, in pixels.
pub const DEPTH_HEIGHT: usize = 400;

/// Raw sample value the sensor reserves for "no measurement".
pub const NO_RETURN: u16 = 0;

/// A single depth frame as a row-major grid of samples.
///
/// Samples carrying the sensor's no-return sentinel are stored as NaN,
/// so a missing measurement can never be mistaken for a true zero
/// depth.
#[derive(Debug, Clone)]
pub struct DepthFrame {
    /// The width of the frame in pixels.
    pub width: usize,
    /// The height of the frame in pixels.
    pub height: usize,
    // Samples in row-major order, row 0 first. NaN marks a missing
    // measurement.
    depth: Vec<f32>,
}

impl DepthFrame {
    /// Parse a frame from a flat buffer of little-endian u16 samples.
    ///
    /// The buffer must hold exactly `width * height` samples in
    /// row-major order with the top row first.
    pub fn from_bytes(buf: &[u8], width: usize, height: usize) -> Result<Self, FrameError> {
        let expected = width * height * std::mem::size_of::<u16>();
        if buf.len() != expected {
            return Err(FrameError::MalformedDepthData {
                found: buf.len(),
                expected,
                width,
                height,
            });
        }

        let depth = buf
            .chunks_exact(2)
            .map(|chunk| u16::from_le_bytes(chunk.try_into().unwrap()))
            .map(|raw| if raw == NO_RETURN { f32::NAN } else { f32::from(raw) })
            .collect();

        Ok(Self {
            width,
            height,
            depth,
        })
    }

    /// Load a frame from a flat binary depth file.
    pub fn from_file(
        path: impl AsRef<Path>,
        width: usize,
        height: usize,
    ) -> Result<Self, FrameError> {
        let buf = std::fs::read(path)?;
        Self::from_bytes(&buf, width, height)
    }

    /// Returns the dimensions of the frame (width, height).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the depth value at a specific pixel. NaN means no measurement.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.depth[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_buffer(samples: &[u16]) -> Vec<u8> {
        samples
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect::<Vec<u8>>()
    }

    #[test]
    fn test_from_bytes_row_major() {
        let buf = frame_buffer(&[100, 200, 300, 400, 500, 600]);
        let frame = DepthFrame::from_bytes(&buf, 3, 2).unwrap();

        assert_eq!(frame.dimensions(), (3, 2));
        assert_eq!(frame.get(0, 0), 100.0);
        assert_eq!(frame.get(0, 2), 300.0);
        assert_eq!(frame.get(1, 0), 400.0);
        assert_eq!(frame.get(1, 2), 600.0);
    }

    #[test]
    fn test_no_return_becomes_nan() {
        let buf = frame_buffer(&[0, 1, 0, 65535]);
        let frame = DepthFrame::from_bytes(&buf, 2, 2).unwrap();

        assert!(frame.get(0, 0).is_nan());
        assert_eq!(frame.get(0, 1), 1.0);
        assert!(frame.get(1, 0).is_nan());
        assert_eq!(frame.get(1, 1), 65535.0);
    }

    #[test]
    fn test_from_bytes_short_buffer() {
        let buf = frame_buffer(&[1, 2, 3]);
        match DepthFrame::from_bytes(&buf, 2, 2) {
            Err(FrameError::MalformedDepthData {
                found, expected, ..
            }) => {
                assert_eq!(found, 6);
                assert_eq!(expected, 8);
            }
            other => panic!("expected MalformedDepthData, got {other:?}"),
        }
    }

    #[test]
    fn test_from_bytes_odd_byte_count() {
        let mut buf = frame_buffer(&[1, 2, 3, 4]);
        buf.push(0);
        assert!(matches!(
            DepthFrame::from_bytes(&buf, 2, 2),
            Err(FrameError::MalformedDepthData { found: 9, .. })
        ));
    }
}
