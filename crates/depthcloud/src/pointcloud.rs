/// A point cloud as an ordered collection of 3D points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    // The points in the point cloud.
    points: Vec<[f32; 3]>,
}

impl PointCloud {
    /// Create a new point cloud from a list of points.
    pub fn new(points: Vec<[f32; 3]>) -> Self {
        Self { points }
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get as reference the points in the point cloud.
    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    /// Get the minimum bound of the point cloud, or `None` if empty.
    pub fn min_bound(&self) -> Option<[f32; 3]> {
        self.points.iter().copied().reduce(|a, b| {
            [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])]
        })
    }

    /// Get the maximum bound of the point cloud, or `None` if empty.
    pub fn max_bound(&self) -> Option<[f32; 3]> {
        self.points.iter().copied().reduce(|a, b| {
            [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointcloud() {
        let pointcloud = PointCloud::new(vec![[0.0, 2.0, -1.0], [1.0, 0.0, 3.0]]);

        assert_eq!(pointcloud.len(), 2);
        assert!(!pointcloud.is_empty());
        assert_eq!(pointcloud.points()[1], [1.0, 0.0, 3.0]);
        assert_eq!(pointcloud.min_bound(), Some([0.0, 0.0, -1.0]));
        assert_eq!(pointcloud.max_bound(), Some([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_pointcloud_empty() {
        let pointcloud = PointCloud::new(vec![]);

        assert_eq!(pointcloud.len(), 0);
        assert!(pointcloud.is_empty());
        assert_eq!(pointcloud.min_bound(), None);
        assert_eq!(pointcloud.max_bound(), None);
    }
}
