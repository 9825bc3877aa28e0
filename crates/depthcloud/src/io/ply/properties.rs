use serde::{Deserialize, Serialize};

/// A single vertex record with float32 x/y/z coordinates, the only
/// property layout this pipeline produces.
#[repr(C)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct XyzProperty {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl XyzProperty {
    /// Build a record from a point array.
    pub fn from_point(point: &[f32; 3]) -> Self {
        Self {
            x: point[0],
            y: point[1],
            z: point[2],
        }
    }

    /// Convert the record to a point array.
    pub fn to_point(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}
