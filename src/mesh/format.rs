//! Vertex and index storage formats

use bytemuck::Pod;

/// Storage format of a single vertex attribute element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexFormat {
    Float,
    Vector2,
    Vector3,
    Vector4,
    UnsignedByte,
    UnsignedShort,
    UnsignedInt,
    Vector2b,
    Vector3b,
    Vector2ub,
    Vector3ub,
    Vector3ubNormalized,
    Vector4ubNormalized,
    Vector2us,
    Vector3us,
    Vector3usNormalized,
    Vector2i,
    Vector3i,
}

impl VertexFormat {
    /// Size of one element in bytes
    pub fn size(self) -> usize {
        self.component_size() * self.component_count()
    }

    pub fn component_count(self) -> usize {
        match self {
            Self::Float | Self::UnsignedByte | Self::UnsignedShort | Self::UnsignedInt => 1,
            Self::Vector2 | Self::Vector2b | Self::Vector2ub | Self::Vector2us | Self::Vector2i => 2,
            Self::Vector3
            | Self::Vector3b
            | Self::Vector3ub
            | Self::Vector3ubNormalized
            | Self::Vector3us
            | Self::Vector3usNormalized
            | Self::Vector3i => 3,
            Self::Vector4 | Self::Vector4ubNormalized => 4,
        }
    }

    fn component_size(self) -> usize {
        match self {
            Self::UnsignedByte
            | Self::Vector2b
            | Self::Vector3b
            | Self::Vector2ub
            | Self::Vector3ub
            | Self::Vector3ubNormalized
            | Self::Vector4ubNormalized => 1,
            Self::UnsignedShort | Self::Vector2us | Self::Vector3us | Self::Vector3usNormalized => 2,
            Self::Float
            | Self::Vector2
            | Self::Vector3
            | Self::Vector4
            | Self::UnsignedInt
            | Self::Vector2i
            | Self::Vector3i => 4,
        }
    }
}

/// Storage type of mesh indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshIndexType {
    UnsignedByte,
    UnsignedShort,
    UnsignedInt,
}

impl MeshIndexType {
    pub fn size(self) -> usize {
        match self {
            Self::UnsignedByte => 1,
            Self::UnsignedShort => 2,
            Self::UnsignedInt => 4,
        }
    }
}

/// Rust scalar types usable as mesh indices.
pub trait IndexType: Pod {
    const INDEX_TYPE: MeshIndexType;

    fn to_u32(self) -> u32;
}

impl IndexType for u8 {
    const INDEX_TYPE: MeshIndexType = MeshIndexType::UnsignedByte;

    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}

impl IndexType for u16 {
    const INDEX_TYPE: MeshIndexType = MeshIndexType::UnsignedShort;

    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}

impl IndexType for u32 {
    const INDEX_TYPE: MeshIndexType = MeshIndexType::UnsignedInt;

    fn to_u32(self) -> u32 {
        self
    }
}
