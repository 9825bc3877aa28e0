mod parser;
mod properties;
mod writer;

pub use parser::*;
pub use properties::*;
pub use writer::*;

/// Error types for the PLY module.
#[derive(Debug, thiserror::Error)]
pub enum PlyError {
    /// Failed to write the point cloud to the destination
    #[error("Failed to write the point cloud to the destination")]
    WriteFailure(#[source] std::io::Error),

    /// Failed to read PLY file
    #[error("Failed to read PLY file")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a PLY vertex record
    #[error("Failed to serialize a PLY vertex record")]
    Serialize(#[from] bincode::error::EncodeError),

    /// Failed to deserialize a PLY vertex record
    #[error("Failed to deserialize a PLY vertex record")]
    Deserialize(#[from] bincode::error::DecodeError),

    /// Header is not the binary little-endian vertex layout this crate handles
    #[error("Unsupported PLY format")]
    UnsupportedFormat,
}
