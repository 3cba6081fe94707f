//! Line mesh generation and the CPU side of screen-space line rendering
//!
//! [`line`] expands line primitives into annotated quads, [`line_pipeline`]
//! prepares the result for upload and [`line_shader`] holds the state the
//! expansion shader is compiled and drawn with.

pub mod line;
pub mod line_helpers;
pub mod line_pipeline;
pub mod line_shader;
pub mod line_types;

// Re-export main types for convenience
pub use line::{
    generate_lines, line_annotations, line_topology, line_triangle_indices, LineTopology,
};
pub use line_helpers::{
    line_miter_angle_limit, line_miter_length_limit, miter_length_to_angle,
    DEFAULT_MITER_LENGTH_LIMIT,
};
pub use line_pipeline::{compile_lines, AttributeBinding, CompiledLineMesh};
pub use line_shader::{LineDrawParams, LineShaderConfig, LineShaderFlags};
pub use line_types::{
    LineCapStyle, LineJoinStyle, LineUniform, LineVertexAnnotations, MESH_ATTRIBUTE_ANNOTATION,
    MESH_ATTRIBUTE_NEXT_POSITION, MESH_ATTRIBUTE_PREVIOUS_POSITION,
};
