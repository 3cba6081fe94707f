//! Central error handling for line mesh generation
//!
//! Every precondition the generator, the mesh container and the upload step
//! check is reported through a single [`LineMeshError`] enum.

use crate::mesh::{MeshAttribute, MeshPrimitive, VertexFormat};

/// Centralized error type for all line mesh operations
#[derive(thiserror::Error, Debug)]
pub enum LineMeshError {
    #[error("generate_lines(): expected a line primitive, got {0}")]
    InvalidPrimitive(MeshPrimitive),

    #[error("generate_lines(): the mesh has no positions")]
    MissingPositionAttribute,

    #[error("compile_lines(): the mesh wasn't produced with generate_lines(): {0}")]
    NotGeneratedMesh(String),

    #[error("{attribute:?} with {format:?} expects {expected} bytes per vertex, got {actual}")]
    AttributeSizeMismatch {
        attribute: MeshAttribute,
        format: VertexFormat,
        expected: usize,
        actual: usize,
    },

    #[error("{attribute:?} has {actual} vertices but the mesh has {expected}")]
    VertexCountMismatch {
        attribute: MeshAttribute,
        expected: usize,
        actual: usize,
    },

    #[error("{attribute:?} holds {actual} bytes, expected {expected}")]
    AttributeDataLength {
        attribute: MeshAttribute,
        expected: usize,
        actual: usize,
    },

    #[error("{0:?} is already present in the mesh")]
    DuplicateAttribute(MeshAttribute),

    #[error("index {index} out of bounds for {count} elements")]
    IndexOutOfBounds { index: u32, count: usize },

    #[error("{context}: expected {expected}, got {value}")]
    InvalidMiterLimit {
        context: &'static str,
        expected: &'static str,
        value: f32,
    },

    #[error("{0}")]
    InvalidShaderState(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LineMeshError {
    pub fn not_generated<T: ToString>(msg: T) -> Self {
        LineMeshError::NotGeneratedMesh(msg.to_string())
    }

    pub fn shader_state<T: ToString>(msg: T) -> Self {
        LineMeshError::InvalidShaderState(msg.to_string())
    }

    pub fn config<T: ToString>(msg: T) -> Self {
        LineMeshError::Config(msg.to_string())
    }
}

/// Result type alias for line mesh operations
pub type LineMeshResult<T> = Result<T, LineMeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_violated_precondition() {
        let err = LineMeshError::InvalidPrimitive(MeshPrimitive::TriangleFan);
        assert_eq!(
            err.to_string(),
            "generate_lines(): expected a line primitive, got MeshPrimitive::TriangleFan"
        );
        assert_eq!(
            LineMeshError::MissingPositionAttribute.to_string(),
            "generate_lines(): the mesh has no positions"
        );
    }

    #[test]
    fn config_constructor_wraps_message() {
        let err = LineMeshError::config("width must be positive");
        assert!(matches!(err, LineMeshError::Config(_)));
        assert_eq!(err.to_string(), "Config error: width must be positive");
    }
}
