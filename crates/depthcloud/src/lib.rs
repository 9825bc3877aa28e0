#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Disparity-to-depth calibration matrix loading.
pub mod calib;

/// Per-file depth frame to point cloud conversion.
pub mod convert;

/// Depth frame decoding.
pub mod frame;

/// I/O utilities for point cloud interchange formats.
pub mod io;

/// Point cloud container.
pub mod pointcloud;

/// Depth to 3D reprojection.
pub mod reproject;
