use std::io::Write;
use std::path::Path;

use super::{PlyError, XyzProperty};
use crate::pointcloud::PointCloud;

/// Write a point cloud as a binary little-endian PLY vertex list.
///
/// The output carries only x/y/z float32 vertex properties, no faces,
/// normals or color. An empty point cloud still produces a valid file
/// with a zero-vertex header. Writing the same point cloud twice
/// produces byte-identical files.
pub fn write_ply_binary(path: impl AsRef<Path>, pointcloud: &PointCloud) -> Result<(), PlyError> {
    let file = std::fs::File::create(path).map_err(PlyError::WriteFailure)?;
    let mut writer = std::io::BufWriter::new(file);

    write_header(&mut writer, pointcloud.len()).map_err(PlyError::WriteFailure)?;

    for point in pointcloud.points() {
        let bytes = bincode::encode_to_vec(
            XyzProperty::from_point(point),
            bincode::config::standard(),
        )?;
        writer.write_all(&bytes).map_err(PlyError::WriteFailure)?;
    }

    writer.flush().map_err(PlyError::WriteFailure)?;
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, vertex_count: usize) -> std::io::Result<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format binary_little_endian 1.0")?;
    writeln!(writer, "element vertex {vertex_count}")?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "end_header")
}
