// src/geometry/validate.rs
// Line mesh validation utilities
// Exists to provide diagnostics covering quad layout, annotations, joins and index ranges
// RELEVANT FILES:src/geometry/mod.rs,src/vector/line.rs,src/vector/line_pipeline.rs

use crate::mesh::{MeshAttribute, MeshData, MeshPrimitive};
use crate::vector::line_types::{
    LineVertexAnnotations, MESH_ATTRIBUTE_ANNOTATION, MESH_ATTRIBUTE_NEXT_POSITION,
    MESH_ATTRIBUTE_PREVIOUS_POSITION,
};

/// Basic statistics collected for a line mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineMeshStats {
    pub vertex_count: usize,
    pub quad_count: usize,
    /// Joins between consecutive quads, including the wrap-around join of a loop
    pub join_count: usize,
    pub triangle_count: usize,
    /// Whether the last quad joins back to the first one
    pub closed: bool,
}

/// Issue categories detected by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMeshValidationIssue {
    UnexpectedPrimitive { primitive: MeshPrimitive },
    NotIndexed,
    MissingAttribute { attribute: MeshAttribute },
    VertexCountNotQuadAligned { vertex_count: usize },
    IndexOutOfBounds { index: u32 },
    UnexpectedAnnotation { vertex: usize },
    AsymmetricJoin { quad: usize },
    IndexCountMismatch { expected: usize, actual: usize },
}

/// Complete validation report.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMeshValidationReport {
    pub stats: LineMeshStats,
    pub issues: Vec<LineMeshValidationIssue>,
}

impl LineMeshValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

const QUAD_PATTERN: [LineVertexAnnotations; 4] = [
    LineVertexAnnotations::UP.union(LineVertexAnnotations::BEGIN),
    LineVertexAnnotations::BEGIN,
    LineVertexAnnotations::UP,
    LineVertexAnnotations::empty(),
];

/// Check a mesh against the layout produced by line generation.
pub fn validate_line_mesh(mesh: &MeshData) -> LineMeshValidationReport {
    let mut issues = Vec::new();
    let vertex_count = mesh.vertex_count();

    if mesh.primitive() != MeshPrimitive::Triangles {
        issues.push(LineMeshValidationIssue::UnexpectedPrimitive {
            primitive: mesh.primitive(),
        });
    }
    for attribute in [
        MeshAttribute::Position,
        MESH_ATTRIBUTE_PREVIOUS_POSITION,
        MESH_ATTRIBUTE_NEXT_POSITION,
        MESH_ATTRIBUTE_ANNOTATION,
    ] {
        if !mesh.has_attribute(attribute) {
            issues.push(LineMeshValidationIssue::MissingAttribute { attribute });
        }
    }
    if vertex_count % 4 != 0 {
        issues.push(LineMeshValidationIssue::VertexCountNotQuadAligned { vertex_count });
    }

    let indices = match mesh.indices_u32() {
        Some(indices) => indices,
        None => {
            issues.push(LineMeshValidationIssue::NotIndexed);
            Vec::new()
        }
    };
    for &index in &indices {
        if index as usize >= vertex_count {
            issues.push(LineMeshValidationIssue::IndexOutOfBounds { index });
        }
    }

    let quad_count = vertex_count / 4;
    let mut stats = LineMeshStats {
        vertex_count,
        quad_count,
        join_count: 0,
        triangle_count: indices.len() / 3,
        closed: false,
    };

    let annotations: Vec<LineVertexAnnotations> = mesh
        .attribute(MESH_ATTRIBUTE_ANNOTATION)
        .unwrap_or_default();
    if annotations.len() == quad_count * 4 && quad_count != 0 {
        detect_unexpected_annotations(&annotations, &mut issues);
        let internal_joins = count_internal_joins(&annotations, &mut issues);
        stats.closed = detect_wrap_around_join(&annotations, &mut issues);
        stats.join_count = internal_joins + usize::from(stats.closed);

        if mesh.is_indexed() {
            let expected = 6 * quad_count + 6 * stats.join_count;
            if expected != indices.len() {
                issues.push(LineMeshValidationIssue::IndexCountMismatch {
                    expected,
                    actual: indices.len(),
                });
            }
        }
    } else if quad_count == 0 && !indices.is_empty() {
        issues.push(LineMeshValidationIssue::IndexCountMismatch {
            expected: 0,
            actual: indices.len(),
        });
    }

    LineMeshValidationReport { stats, issues }
}

fn detect_unexpected_annotations(
    annotations: &[LineVertexAnnotations],
    issues: &mut Vec<LineMeshValidationIssue>,
) {
    for (vertex, bits) in annotations.iter().enumerate() {
        if bits.difference(LineVertexAnnotations::JOIN) != QUAD_PATTERN[vertex % 4] {
            issues.push(LineMeshValidationIssue::UnexpectedAnnotation { vertex });
        }
    }
}

fn count_internal_joins(
    annotations: &[LineVertexAnnotations],
    issues: &mut Vec<LineMeshValidationIssue>,
) -> usize {
    let quad_count = annotations.len() / 4;
    let mut joins = 0;
    for quad in 0..quad_count.saturating_sub(1) {
        let trailing = annotations[quad * 4 + 3].contains(LineVertexAnnotations::JOIN);
        let leading = annotations[quad * 4 + 4].contains(LineVertexAnnotations::JOIN);
        if trailing != leading {
            issues.push(LineMeshValidationIssue::AsymmetricJoin { quad });
        }
        if trailing {
            joins += 1;
        }
    }
    joins
}

fn detect_wrap_around_join(
    annotations: &[LineVertexAnnotations],
    issues: &mut Vec<LineMeshValidationIssue>,
) -> bool {
    let quad_count = annotations.len() / 4;
    let first = annotations[0].contains(LineVertexAnnotations::JOIN);
    let last = annotations[quad_count * 4 - 1].contains(LineVertexAnnotations::JOIN);
    if first != last {
        issues.push(LineMeshValidationIssue::AsymmetricJoin {
            quad: quad_count - 1,
        });
    }
    first
}
