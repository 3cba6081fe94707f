//! Mesh containers and vertex data utilities
//!
//! Provides the self-describing [`MeshData`] value consumed and produced by the
//! line generator: a primitive, an optional index buffer and an ordered list of
//! named, formatted attributes stored as tightly packed bytes.

mod duplicate;
mod format;
mod primitive;
mod vertex;

pub use duplicate::{duplicate, duplicate_bytes, duplicate_mesh_attributes};
pub(crate) use duplicate::copy_element;
pub use format::{IndexType, MeshIndexType, VertexFormat};
pub use primitive::{primitive_count, MeshPrimitive};
pub use vertex::{LineVertex2D, LineVertex3D, VertexType};

use bytemuck::Pod;

use crate::error::{LineMeshError, LineMeshResult};

/// Semantic role of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshAttribute {
    Position,
    TextureCoordinates,
    Color,
    Normal,
    Tangent,
    ObjectId,
    /// Application-defined attribute
    Custom(u16),
}

/// One named vertex attribute with owned, tightly packed storage.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAttributeData {
    name: MeshAttribute,
    format: VertexFormat,
    data: Vec<u8>,
}

impl MeshAttributeData {
    /// Attribute with the format implied by the element type
    pub fn new<T: VertexType>(name: MeshAttribute, values: &[T]) -> Self {
        Self::from_bytes(name, T::FORMAT, bytemuck::cast_slice(values).to_vec())
    }

    /// Attribute with an explicit format, e.g. a normalized variant of the element type
    pub fn with_format<T: Pod>(
        name: MeshAttribute,
        format: VertexFormat,
        values: &[T],
    ) -> LineMeshResult<Self> {
        let actual = std::mem::size_of::<T>();
        if actual != format.size() {
            return Err(LineMeshError::AttributeSizeMismatch {
                attribute: name,
                format,
                expected: format.size(),
                actual,
            });
        }
        Ok(Self::from_bytes(
            name,
            format,
            bytemuck::cast_slice(values).to_vec(),
        ))
    }

    pub fn from_bytes(name: MeshAttribute, format: VertexFormat, data: Vec<u8>) -> Self {
        Self { name, format, data }
    }

    pub fn name(&self) -> MeshAttribute {
        self.name
    }

    pub fn format(&self) -> VertexFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.format.size()
    }

    /// Copy the elements out as `T`, which has to match the element size.
    pub fn to_vec<T: Pod>(&self) -> Vec<T> {
        if self.data.is_empty() {
            return Vec::new();
        }
        bytemuck::pod_collect_to_vec(&self.data)
    }
}

/// Owned index buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshIndexData {
    index_type: MeshIndexType,
    data: Vec<u8>,
}

impl MeshIndexData {
    pub fn new<T: IndexType>(indices: &[T]) -> Self {
        Self {
            index_type: T::INDEX_TYPE,
            data: bytemuck::cast_slice(indices).to_vec(),
        }
    }

    pub fn index_type(&self) -> MeshIndexType {
        self.index_type
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.index_type.size()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Indices widened to 32 bits
    pub fn to_u32(&self) -> Vec<u32> {
        if self.data.is_empty() {
            return Vec::new();
        }
        match self.index_type {
            MeshIndexType::UnsignedByte => widen::<u8>(&self.data),
            MeshIndexType::UnsignedShort => widen::<u16>(&self.data),
            MeshIndexType::UnsignedInt => widen::<u32>(&self.data),
        }
    }
}

fn widen<T: IndexType>(data: &[u8]) -> Vec<u32> {
    bytemuck::pod_collect_to_vec::<u8, T>(data)
        .into_iter()
        .map(T::to_u32)
        .collect()
}

/// Primitive, optional indices and an ordered attribute list sharing one vertex count.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    primitive: MeshPrimitive,
    indices: Option<MeshIndexData>,
    attributes: Vec<MeshAttributeData>,
    vertex_count: usize,
}

impl MeshData {
    /// Empty, non-indexed mesh with no attributes yet
    pub fn new(primitive: MeshPrimitive, vertex_count: usize) -> Self {
        Self {
            primitive,
            indices: None,
            attributes: Vec::new(),
            vertex_count,
        }
    }

    /// Non-indexed mesh with a single position attribute
    pub fn from_positions<V: VertexType>(primitive: MeshPrimitive, positions: &[V]) -> Self {
        Self {
            primitive,
            indices: None,
            attributes: vec![MeshAttributeData::new(MeshAttribute::Position, positions)],
            vertex_count: positions.len(),
        }
    }

    pub(crate) fn from_parts(
        primitive: MeshPrimitive,
        indices: Option<MeshIndexData>,
        attributes: Vec<MeshAttributeData>,
        vertex_count: usize,
    ) -> Self {
        Self {
            primitive,
            indices,
            attributes,
            vertex_count,
        }
    }

    pub fn with_indices<T: IndexType>(mut self, indices: &[T]) -> Self {
        self.indices = Some(MeshIndexData::new(indices));
        self
    }

    pub fn with_attribute<T: VertexType>(
        self,
        name: MeshAttribute,
        values: &[T],
    ) -> LineMeshResult<Self> {
        self.with_attribute_data(MeshAttributeData::new(name, values))
    }

    pub fn with_attribute_format<T: Pod>(
        self,
        name: MeshAttribute,
        format: VertexFormat,
        values: &[T],
    ) -> LineMeshResult<Self> {
        self.with_attribute_data(MeshAttributeData::with_format(name, format, values)?)
    }

    pub fn with_attribute_data(mut self, attribute: MeshAttributeData) -> LineMeshResult<Self> {
        if self.has_attribute(attribute.name()) {
            return Err(LineMeshError::DuplicateAttribute(attribute.name()));
        }
        // partial trailing elements
        if attribute.bytes().len() % attribute.format().size() != 0 {
            return Err(LineMeshError::AttributeDataLength {
                attribute: attribute.name(),
                expected: self.vertex_count * attribute.format().size(),
                actual: attribute.bytes().len(),
            });
        }
        if attribute.vertex_count() != self.vertex_count {
            return Err(LineMeshError::VertexCountMismatch {
                attribute: attribute.name(),
                expected: self.vertex_count,
                actual: attribute.vertex_count(),
            });
        }
        self.attributes.push(attribute);
        Ok(self)
    }

    pub fn primitive(&self) -> MeshPrimitive {
        self.primitive
    }

    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    pub fn index_data(&self) -> Option<&MeshIndexData> {
        self.indices.as_ref()
    }

    pub fn index_type(&self) -> Option<MeshIndexType> {
        self.indices.as_ref().map(MeshIndexData::index_type)
    }

    pub fn index_count(&self) -> usize {
        self.indices.as_ref().map_or(0, MeshIndexData::len)
    }

    pub fn indices_u32(&self) -> Option<Vec<u32>> {
        self.indices.as_ref().map(MeshIndexData::to_u32)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn attributes(&self) -> &[MeshAttributeData] {
        &self.attributes
    }

    pub fn attribute_id(&self, name: MeshAttribute) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }

    pub fn has_attribute(&self, name: MeshAttribute) -> bool {
        self.attribute_id(name).is_some()
    }

    pub fn attribute_format(&self, name: MeshAttribute) -> Option<VertexFormat> {
        self.attribute_data(name).map(MeshAttributeData::format)
    }

    pub fn attribute_data(&self, name: MeshAttribute) -> Option<&MeshAttributeData> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    pub fn attribute_bytes(&self, name: MeshAttribute) -> Option<&[u8]> {
        self.attribute_data(name).map(MeshAttributeData::bytes)
    }

    /// Typed copy of an attribute; `None` if absent or if `T` doesn't match the format size.
    pub fn attribute<T: Pod>(&self, name: MeshAttribute) -> Option<Vec<T>> {
        let data = self.attribute_data(name)?;
        if std::mem::size_of::<T>() != data.format().size() {
            return None;
        }
        Some(data.to_vec())
    }
}
