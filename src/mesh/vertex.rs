//! Typed vertex attribute elements
//!
//! Maps Rust element types to their [`VertexFormat`] so attribute data can be
//! passed as typed slices, and provides interleaved vertex layouts matching
//! what the upload step produces for position-only line meshes.

use bytemuck::{Pod, Zeroable};
use glam::{IVec2, IVec3, Vec2, Vec3, Vec4};

use super::VertexFormat;

/// Rust types usable as vertex attribute elements.
pub trait VertexType: Pod {
    const FORMAT: VertexFormat;
}

macro_rules! vertex_type {
    ($($ty:ty => $format:ident),* $(,)?) => {
        $(
            impl VertexType for $ty {
                const FORMAT: VertexFormat = VertexFormat::$format;
            }
        )*
    };
}

vertex_type! {
    f32 => Float,
    u8 => UnsignedByte,
    u16 => UnsignedShort,
    u32 => UnsignedInt,
    Vec2 => Vector2,
    Vec3 => Vector3,
    Vec4 => Vector4,
    [f32; 2] => Vector2,
    [f32; 3] => Vector3,
    [f32; 4] => Vector4,
    [i8; 2] => Vector2b,
    [i8; 3] => Vector3b,
    [u8; 2] => Vector2ub,
    [u8; 3] => Vector3ub,
    [u8; 4] => Vector4ubNormalized,
    [u16; 2] => Vector2us,
    [u16; 3] => Vector3us,
    IVec2 => Vector2i,
    IVec3 => Vector3i,
    [i32; 2] => Vector2i,
    [i32; 3] => Vector3i,
}

/// Interleaved vertex of a compiled 2D line mesh without extra attributes
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct LineVertex2D {
    pub position: [f32; 2],
    pub previous_position: [f32; 2],
    pub next_position: [f32; 2],
    /// Raw `LineVertexAnnotations` bits
    pub annotation: u32,
}

/// Interleaved vertex of a compiled 3D line mesh without extra attributes
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct LineVertex3D {
    pub position: [f32; 3],
    pub previous_position: [f32; 3],
    pub next_position: [f32; 3],
    pub annotation: u32,
}
