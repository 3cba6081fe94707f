// src/geometry/mod.rs
// Geometry module hub for index generation and line mesh diagnostics
// Exists to keep topology helpers separate from the line generator itself
// RELEVANT FILES:src/geometry/indices.rs,src/geometry/validate.rs,src/vector/line.rs

//! Index generation and validation utilities for line meshes.

mod indices;
mod validate;

pub use indices::{
    compose_indices, generate_line_loop_indices, generate_line_strip_indices,
    generate_trivial_indices,
};
pub use validate::{
    validate_line_mesh, LineMeshStats, LineMeshValidationIssue, LineMeshValidationReport,
};
