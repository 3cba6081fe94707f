// src/vector/line_pipeline.rs
// Upload preparation for generated line meshes
// Exists to bind line attributes to shader locations and interleave them into a single vertex buffer
// RELEVANT FILES: src/vector/line.rs, src/vector/line_types.rs, src/vector/line_shader.rs

use log::{debug, warn};

use super::line_types::{
    ANNOTATION_LOCATION, COLOR_LOCATION, MESH_ATTRIBUTE_ANNOTATION, MESH_ATTRIBUTE_NEXT_POSITION,
    MESH_ATTRIBUTE_PREVIOUS_POSITION, NEXT_POSITION_LOCATION, OBJECT_ID_LOCATION,
    POSITION_LOCATION, PREVIOUS_POSITION_LOCATION,
};
use crate::error::{LineMeshError, LineMeshResult};
use crate::geometry::validate_line_mesh;
use crate::mesh::{copy_element, MeshAttribute, MeshAttributeData, MeshData, MeshPrimitive, VertexFormat};

/// One attribute inside the interleaved vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBinding {
    pub attribute: MeshAttribute,
    pub location: u32,
    pub format: VertexFormat,
    /// Byte offset inside a vertex
    pub offset: usize,
}

/// Line mesh ready for upload: one interleaved vertex buffer and 32-bit indices.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledLineMesh {
    pub primitive: MeshPrimitive,
    pub vertex_count: usize,
    pub stride: usize,
    pub vertex_data: Vec<u8>,
    pub bindings: Vec<AttributeBinding>,
    pub indices: Vec<u32>,
}

impl CompiledLineMesh {
    /// Reinterpret the same buffers with another primitive.
    ///
    /// With [`MeshPrimitive::Lines`] the index buffer draws the quad outlines as
    /// plain lines, which is what a renderer without the expansion shader can use.
    pub fn with_primitive(mut self, primitive: MeshPrimitive) -> Self {
        self.primitive = primitive;
        self
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn binding(&self, location: u32) -> Option<&AttributeBinding> {
        self.bindings.iter().find(|b| b.location == location)
    }

    /// Bytes of one vertex.
    pub fn vertex(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.stride)?;
        self.vertex_data.get(start..start + self.stride)
    }
}

/// Shader location of an attribute, or why it can't be bound.
fn attribute_location(attribute: MeshAttribute) -> Result<u32, &'static str> {
    match attribute {
        MeshAttribute::Position => Ok(POSITION_LOCATION),
        MeshAttribute::Color => Ok(COLOR_LOCATION),
        MeshAttribute::ObjectId => Ok(OBJECT_ID_LOCATION),
        a if a == MESH_ATTRIBUTE_PREVIOUS_POSITION => Ok(PREVIOUS_POSITION_LOCATION),
        a if a == MESH_ATTRIBUTE_NEXT_POSITION => Ok(NEXT_POSITION_LOCATION),
        a if a == MESH_ATTRIBUTE_ANNOTATION => Ok(ANNOTATION_LOCATION),
        MeshAttribute::TextureCoordinates => Err("conflicts with line annotation attribute"),
        MeshAttribute::Tangent => Err("conflicts with line previous position attribute"),
        MeshAttribute::Normal => Err("conflicts with line next position attribute"),
        MeshAttribute::Custom(_) => Err("isn't supported by the line shader"),
    }
}

/// Prepare a mesh produced by [`crate::generate_lines`] for upload.
pub fn compile_lines(mesh: &MeshData) -> LineMeshResult<CompiledLineMesh> {
    if mesh.primitive() != MeshPrimitive::Triangles {
        return Err(LineMeshError::not_generated(format!(
            "expected MeshPrimitive::Triangles, got {}",
            mesh.primitive()
        )));
    }
    let indices = mesh
        .indices_u32()
        .ok_or_else(|| LineMeshError::not_generated("the mesh isn't indexed"))?;
    for attribute in [
        MESH_ATTRIBUTE_PREVIOUS_POSITION,
        MESH_ATTRIBUTE_NEXT_POSITION,
        MESH_ATTRIBUTE_ANNOTATION,
    ] {
        if !mesh.has_attribute(attribute) {
            return Err(LineMeshError::not_generated(format!(
                "{:?} is missing",
                attribute
            )));
        }
    }

    let vertex_count = mesh.vertex_count();
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(LineMeshError::IndexOutOfBounds {
            index,
            count: vertex_count,
        });
    }

    let mut bindings = Vec::new();
    let mut sources: Vec<&MeshAttributeData> = Vec::new();
    let mut stride = 0;
    for attribute in mesh.attributes() {
        match attribute_location(attribute.name()) {
            Ok(location) => {
                bindings.push(AttributeBinding {
                    attribute: attribute.name(),
                    location,
                    format: attribute.format(),
                    offset: stride,
                });
                sources.push(attribute);
                stride += attribute.format().size();
            }
            Err(reason) => warn!(
                "compile_lines(): {:?} {}, ignoring",
                attribute.name(),
                reason
            ),
        }
    }

    let mut vertex_data = vec![0u8; vertex_count * stride];
    for (binding, source) in bindings.iter().zip(&sources) {
        let size = binding.format.size();
        for vertex in 0..vertex_count {
            let dst = &mut vertex_data[vertex * stride + binding.offset..][..size];
            copy_element(dst, 0, source.bytes(), vertex, size);
        }
    }

    let report = validate_line_mesh(mesh);
    if !report.is_clean() {
        warn!("compile_lines(): {} layout issues: {:?}", report.issues.len(), report.issues);
    }
    debug!(
        "compile_lines(): {} vertices, stride {}, {} quads, {} joins, {} indices",
        vertex_count,
        stride,
        report.stats.quad_count,
        report.stats.join_count,
        indices.len()
    );

    Ok(CompiledLineMesh {
        primitive: MeshPrimitive::Triangles,
        vertex_count,
        stride,
        vertex_data,
        bindings,
        indices,
    })
}
