/// PLY point cloud interchange format.
pub mod ply;
