use crate::calib::QMatrix;
use crate::frame::DepthFrame;
use crate::pointcloud::PointCloud;

/// Map a single pixel and its raw depth through the Q matrix.
///
/// Returns `None` for missing measurements (NaN depth) and for
/// degenerate cells where the homogeneous scale `w` is zero, so a
/// hardware glitch or a degenerate matrix row can never leak a
/// non-finite coordinate into the output.
#[inline]
pub fn reproject_pixel(row: usize, col: usize, depth: f32, q: &QMatrix) -> Option<[f32; 3]> {
    if depth.is_nan() {
        return None;
    }

    let w = depth * q.at(3, 2) + q.at(3, 3);
    if w == 0.0 {
        return None;
    }

    Some([
        (col as f32 * q.at(0, 0) + q.at(0, 3)) / w,
        (row as f32 * q.at(1, 1) + q.at(1, 3)) / w,
        q.at(2, 3) / w,
    ])
}

/// Lazy iterator over the valid 3D points of a depth frame, in
/// row-major scan order.
pub struct Reprojection<'a> {
    frame: &'a DepthFrame,
    q: &'a QMatrix,
    index: usize,
}

impl Iterator for Reprojection<'_> {
    type Item = [f32; 3];

    fn next(&mut self) -> Option<Self::Item> {
        let (width, height) = self.frame.dimensions();
        while self.index < width * height {
            let row = self.index / width;
            let col = self.index % width;
            self.index += 1;

            if let Some(point) = reproject_pixel(row, col, self.frame.get(row, col), self.q) {
                return Some(point);
            }
        }
        None
    }
}

/// Reproject every valid cell of a depth frame into 3D.
///
/// The calibration matrix for this sensor family is near-diagonal, so
/// the transform reads only the entries `[0][0]`, `[0][3]`, `[1][1]`,
/// `[1][3]`, `[2][3]`, `[3][2]` and `[3][3]`:
///
/// ```text
/// w  = z * q[3][2] + q[3][3]
/// x' = (col * q[0][0] + q[0][3]) / w
/// y' = (row * q[1][1] + q[1][3]) / w
/// z' = q[2][3] / w
/// ```
///
/// A full 4x4 matrix-vector product is not equivalent unless the
/// remaining nine entries are zero.
///
/// # Example
///
/// ```
/// use depthcloud::calib::QMatrix;
/// use depthcloud::frame::DepthFrame;
/// use depthcloud::reproject::reproject;
///
/// let q = QMatrix::new([
///     [1.0, 0.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0, 0.0],
///     [0.0, 0.0, 0.0, 1.0],
///     [0.0, 0.0, 0.0, 1.0],
/// ]);
/// let buf = 100u16.to_le_bytes();
/// let frame = DepthFrame::from_bytes(&buf, 1, 1).unwrap();
/// let points: Vec<[f32; 3]> = reproject(&frame, &q).collect();
/// assert_eq!(points, vec![[0.0, 0.0, 1.0]]);
/// ```
pub fn reproject<'a>(frame: &'a DepthFrame, q: &'a QMatrix) -> Reprojection<'a> {
    Reprojection { frame, q, index: 0 }
}

/// Reproject a depth frame and collect the result into a [`PointCloud`].
pub fn reproject_to_pointcloud(frame: &DepthFrame, q: &QMatrix) -> PointCloud {
    PointCloud::new(reproject(frame, q).collect())
}
