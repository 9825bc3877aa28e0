use std::path::Path;

/// Error types for the calibration module.
#[derive(Debug, thiserror::Error)]
pub enum CalibError {
    /// Failed to read the calibration file
    #[error("Failed to read the calibration file")]
    Io(#[from] std::io::Error),

    /// Calibration buffer does not hold exactly 16 little-endian f32 values
    #[error("Calibration buffer holds {0} bytes, expected {QMATRIX_NUM_BYTES}")]
    MalformedCalibrationData(usize),
}

/// Number of coefficients in a disparity-to-depth matrix.
pub const QMATRIX_NUM_COEFFS: usize = 16;

/// Serialized size of a disparity-to-depth matrix in bytes.
pub const QMATRIX_NUM_BYTES: usize = QMATRIX_NUM_COEFFS * std::mem::size_of::<f32>();

/// A 4x4 disparity-to-depth projection matrix (the stereo Q matrix).
///
/// Loaded once per batch and shared read-only by every conversion in
/// that batch; workers may hold references to the same matrix without
/// any locking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QMatrix([[f32; 4]; 4]);

impl QMatrix {
    /// Create a matrix directly from row-major coefficients.
    pub fn new(coeffs: [[f32; 4]; 4]) -> Self {
        Self(coeffs)
    }

    /// Parse a matrix from a flat buffer of 16 little-endian f32 values.
    ///
    /// The values are row-major, so entry `[r][c]` is the `(4r+c)`-th
    /// float in the buffer.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, CalibError> {
        if buf.len() != QMATRIX_NUM_BYTES {
            return Err(CalibError::MalformedCalibrationData(buf.len()));
        }

        let mut coeffs = [[0.0f32; 4]; 4];
        for (i, chunk) in buf.chunks_exact(4).enumerate() {
            let bytes = chunk.try_into().unwrap();
            coeffs[i / 4][i % 4] = f32::from_le_bytes(bytes);
        }

        Ok(Self(coeffs))
    }

    /// Load a matrix from a flat binary calibration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CalibError> {
        let buf = std::fs::read(path)?;
        Self::from_bytes(&buf)
    }

    /// Get the coefficient at `[row][col]`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.0[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn coeff_buffer() -> Vec<u8> {
        (0..16)
            .flat_map(|i| (i as f32).to_le_bytes())
            .collect::<Vec<u8>>()
    }

    #[test]
    fn test_from_bytes_row_major() {
        let q = QMatrix::from_bytes(&coeff_buffer()).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(q.at(row, col), (4 * row + col) as f32);
            }
        }
    }

    #[test]
    fn test_from_bytes_too_few_values() {
        // 15 floats instead of 16
        let buf = &coeff_buffer()[..60];
        match QMatrix::from_bytes(buf) {
            Err(CalibError::MalformedCalibrationData(len)) => assert_eq!(len, 60),
            other => panic!("expected MalformedCalibrationData, got {other:?}"),
        }
    }

    #[test]
    fn test_from_bytes_unaligned_length() {
        let mut buf = coeff_buffer();
        buf.push(0);
        assert!(matches!(
            QMatrix::from_bytes(&buf),
            Err(CalibError::MalformedCalibrationData(65))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&coeff_buffer()).unwrap();

        let q = QMatrix::from_file(file.path()).unwrap();
        assert_eq!(q.at(0, 0), 0.0);
        assert_eq!(q.at(3, 3), 15.0);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            QMatrix::from_file("/nonexistent/Q.bin"),
            Err(CalibError::Io(_))
        ));
    }
}
