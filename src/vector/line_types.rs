// src/vector/line_types.rs
// Type definitions shared by line mesh generation and the line expansion shader
// RELEVANT FILES: src/vector/line.rs, src/vector/line_shader.rs

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::LineMeshError;
use crate::mesh::MeshAttribute;

bitflags! {
    /// Per-vertex bits driving screen-space expansion of a line quad.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[repr(transparent)]
    pub struct LineVertexAnnotations: u32 {
        /// Expands in the positive perpendicular direction, negative otherwise.
        const UP = 1 << 0;
        /// Connects to a neighboring segment, both neighbor positions are meaningful.
        const JOIN = 1 << 1;
        /// First endpoint of its segment. The other endpoint is in the next
        /// position if set, in the previous position otherwise.
        const BEGIN = 1 << 2;
    }
}

unsafe impl Zeroable for LineVertexAnnotations {}
unsafe impl Pod for LineVertexAnnotations {}

/// Previous neighbor position, same format as [`MeshAttribute::Position`].
pub const MESH_ATTRIBUTE_PREVIOUS_POSITION: MeshAttribute = MeshAttribute::Custom(32765);
/// Next neighbor position, same format as [`MeshAttribute::Position`].
pub const MESH_ATTRIBUTE_NEXT_POSITION: MeshAttribute = MeshAttribute::Custom(32766);
/// [`LineVertexAnnotations`] stored as `UnsignedInt`.
pub const MESH_ATTRIBUTE_ANNOTATION: MeshAttribute = MeshAttribute::Custom(32767);

/// Shader attribute locations the line program binds.
///
/// Line attributes reuse locations of generic attributes a line mesh doesn't
/// need: annotation takes texture coordinates, previous position takes
/// tangents and next position takes normals.
pub const POSITION_LOCATION: u32 = 0;
pub const ANNOTATION_LOCATION: u32 = 1;
pub const COLOR_LOCATION: u32 = 2;
pub const PREVIOUS_POSITION_LOCATION: u32 = 3;
pub const OBJECT_ID_LOCATION: u32 = 4;
pub const NEXT_POSITION_LOCATION: u32 = 5;

/// Line cap styles for free line endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCapStyle {
    /// Ends exactly at the endpoint
    Butt,
    /// Extends half the width beyond the endpoint
    #[default]
    Square,
    /// Semicircle extending beyond the endpoint
    Round,
    /// Triangle pointing out of the endpoint
    Triangle,
}

/// Line join styles for connected segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoinStyle {
    /// Sharp corner, falls back to bevel past the miter limit
    #[default]
    Miter,
    /// Flat cut across the corner
    Bevel,
}

impl fmt::Display for LineCapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCapStyle::{:?}", self)
    }
}

impl fmt::Display for LineJoinStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineJoinStyle::{:?}", self)
    }
}

impl FromStr for LineCapStyle {
    type Err = LineMeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "butt" => Ok(Self::Butt),
            "square" => Ok(Self::Square),
            "round" => Ok(Self::Round),
            "triangle" => Ok(Self::Triangle),
            other => Err(LineMeshError::config(format!("unknown cap style {:?}", other))),
        }
    }
}

impl FromStr for LineJoinStyle {
    type Err = LineMeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "miter" => Ok(Self::Miter),
            "bevel" => Ok(Self::Bevel),
            other => Err(LineMeshError::config(format!("unknown join style {:?}", other))),
        }
    }
}

/// GPU uniform block for the line expansion shader.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineUniform {
    /// Transformation and projection, 2D matrices are embedded in the upper left.
    pub transformation_projection: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub background_color: [f32; 4],
    /// Viewport dimensions in pixels.
    pub viewport_size: [f32; 2],
    /// Line width in pixels.
    pub width: f32,
    /// Antialiasing edge width in pixels.
    pub smoothness: f32,
    /// Cosine of the smallest join angle still drawn as a miter.
    pub miter_limit: f32,
    pub object_id: u32,
    /// Tail padding for std140 alignment.
    pub _pad: [u32; 2],
}
