use std::path::Path;

use crate::calib::QMatrix;
use crate::frame::{DepthFrame, FrameError};
use crate::io::ply::{write_ply_binary, PlyError};
use crate::reproject::reproject_to_pointcloud;

/// Error types for the per-file conversion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The depth frame file could not be decoded
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// The point cloud could not be written
    #[error(transparent)]
    Ply(#[from] PlyError),
}

/// Convert one raw depth frame file into a PLY point cloud file.
///
/// The calibration matrix is loaded once per batch by the caller and
/// shared across calls. A failure converts only this file; the caller
/// decides whether to skip or abort, and owns cleanup of any partial
/// output left behind by a write failure.
///
/// Returns the number of vertices written.
pub fn convert_depth_file(
    q: &QMatrix,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    width: usize,
    height: usize,
) -> Result<usize, ConvertError> {
    let frame = DepthFrame::from_file(input, width, height)?;
    let pointcloud = reproject_to_pointcloud(&frame, q);
    write_ply_binary(output, &pointcloud)?;
    Ok(pointcloud.len())
}
