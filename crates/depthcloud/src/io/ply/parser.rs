use std::io::{BufRead, Read};
use std::path::Path;

use super::{PlyError, XyzProperty};
use crate::pointcloud::PointCloud;

struct PlyHeader {
    pub vertex_count: usize,
}

fn parse_header<R: BufRead>(reader: &mut R) -> Result<PlyHeader, PlyError> {
    let mut line = String::new();
    let mut vertex_count = None;
    let mut is_binary_little_endian = false;
    let mut is_ply = false;
    let mut properties = Vec::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();

        if trimmed == "ply" {
            is_ply = true;
            continue;
        }

        if trimmed == "end_header" {
            break;
        }

        if trimmed.starts_with("format binary_little_endian") {
            is_binary_little_endian = true;
        } else if trimmed.starts_with("element vertex") {
            vertex_count = Some(
                trimmed
                    .split_whitespace()
                    .last()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0),
            );
        } else if trimmed.starts_with("property") {
            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            if parts.len() >= 3 {
                if !matches!(parts[1], "float" | "float32") {
                    return Err(PlyError::UnsupportedFormat);
                }
                properties.push(parts[2].to_string());
            }
        }
    }

    if !is_ply || !is_binary_little_endian || properties != ["x", "y", "z"] {
        return Err(PlyError::UnsupportedFormat);
    }

    let vertex_count = vertex_count.ok_or(PlyError::UnsupportedFormat)?;

    Ok(PlyHeader { vertex_count })
}

/// Read a binary little-endian PLY vertex list, the layout produced by
/// [`write_ply_binary`](super::write_ply_binary). Files with color,
/// normal or other extra properties are rejected.
pub fn read_ply_binary(path: impl AsRef<Path>) -> Result<PointCloud, PlyError> {
    let file = std::fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);
    let header = parse_header(&mut reader)?;
    let mut buffer = [0u8; std::mem::size_of::<XyzProperty>()];

    let mut points = Vec::with_capacity(header.vertex_count);
    for _ in 0..header.vertex_count {
        reader.read_exact(&mut buffer)?;
        let (record, _): (XyzProperty, usize) =
            bincode::decode_from_slice(&buffer, bincode::config::standard())?;
        points.push(record.to_point());
    }

    Ok(PointCloud::new(points))
}
