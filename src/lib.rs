//! Line mesh generation for width-controlled GPU lines.
//!
//! Lines drawn as raw line primitives are one pixel wide, have no caps and no
//! joins. [`generate_lines`] converts a `Lines`, `LineStrip` or `LineLoop` mesh
//! into a triangle mesh of annotated quads that a vertex shader expands in
//! screen space, giving lines of arbitrary pixel width with configurable caps
//! and joins.
//!
//! ```
//! use glam::Vec2;
//! use linemesh::{generate_lines, MeshData, MeshPrimitive};
//!
//! let square = MeshData::from_positions(
//!     MeshPrimitive::LineLoop,
//!     &[Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0), Vec2::new(1.0, 1.0), Vec2::new(-1.0, 1.0)],
//! );
//! let lines = generate_lines(&square)?;
//! assert_eq!(lines.vertex_count(), 16);
//! assert_eq!(lines.index_count(), 48);
//! # Ok::<(), linemesh::LineMeshError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod vector;

pub use config::{LineStyleConfig, MiterLimit};
pub use error::{LineMeshError, LineMeshResult};
pub use geometry::{validate_line_mesh, LineMeshValidationIssue, LineMeshValidationReport};
pub use mesh::{
    MeshAttribute, MeshAttributeData, MeshData, MeshIndexData, MeshIndexType, MeshPrimitive,
    VertexFormat,
};
pub use vector::{
    compile_lines, generate_lines, CompiledLineMesh, LineCapStyle, LineDrawParams,
    LineJoinStyle, LineShaderConfig, LineShaderFlags, LineVertexAnnotations,
    MESH_ATTRIBUTE_ANNOTATION, MESH_ATTRIBUTE_NEXT_POSITION, MESH_ATTRIBUTE_PREVIOUS_POSITION,
};
