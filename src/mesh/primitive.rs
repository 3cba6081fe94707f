//! Mesh primitive topology and primitive counting

use std::fmt;

/// Topology of the elements of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshPrimitive {
    Points,
    /// Each pair of elements is a separate segment
    Lines,
    /// Consecutive elements are connected, the last isn't connected to the first
    LineStrip,
    /// Like [`MeshPrimitive::LineStrip`] with an extra segment closing last to first
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl MeshPrimitive {
    /// Whether this is one of the three line topologies accepted by the line generator
    pub fn is_line(self) -> bool {
        matches!(self, Self::Lines | Self::LineStrip | Self::LineLoop)
    }

    fn name(self) -> &'static str {
        match self {
            Self::Points => "Points",
            Self::Lines => "Lines",
            Self::LineStrip => "LineStrip",
            Self::LineLoop => "LineLoop",
            Self::Triangles => "Triangles",
            Self::TriangleStrip => "TriangleStrip",
            Self::TriangleFan => "TriangleFan",
        }
    }
}

impl fmt::Display for MeshPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MeshPrimitive::{}", self.name())
    }
}

/// Number of primitives formed by `element_count` vertices or indices.
///
/// A single-element line loop still counts as one (degenerate) segment.
pub fn primitive_count(primitive: MeshPrimitive, element_count: u32) -> u32 {
    match primitive {
        MeshPrimitive::Points => element_count,
        MeshPrimitive::Lines => element_count / 2,
        MeshPrimitive::LineStrip => element_count.saturating_sub(1),
        MeshPrimitive::LineLoop => element_count,
        MeshPrimitive::Triangles => element_count / 3,
        MeshPrimitive::TriangleStrip | MeshPrimitive::TriangleFan => {
            element_count.saturating_sub(2)
        }
    }
}
