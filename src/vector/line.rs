//! Line mesh generation for GPU screen-space expansion.
//!
//! Turns a polyline (loose segments, a strip or a loop) into a triangle mesh
//! with one quad per segment. Every segment endpoint is duplicated into an
//! "up" and a "down" copy, each carrying the positions of its neighbors and a
//! [`LineVertexAnnotations`] bitmask. The expansion shader then offsets the
//! copies perpendicular to the line in screen space, which gives lines of a
//! controlled pixel width with caps and joins drawn on the GPU.
//!
//! Quad `i` occupies vertices `4i..4i + 4`:
//!
//! ```text
//!  0 (up, begin) ----------- 2 (up)
//!  |                         |
//!  1 (begin) --------------- 3
//! ```
//!
//! Between two connected quads two more triangles are emitted. Depending on
//! which way the line bends on screen exactly one of them has zero area, so
//! the CPU side emits both and leaves the choice to the shader.

use log::{debug, trace};

use crate::error::{LineMeshError, LineMeshResult};
use crate::geometry::{
    compose_indices, generate_line_loop_indices, generate_line_strip_indices,
    generate_trivial_indices,
};
use crate::mesh::{
    copy_element, duplicate, duplicate_mesh_attributes, primitive_count, MeshAttribute,
    MeshAttributeData, MeshData, MeshIndexData, MeshPrimitive,
};

use super::line_types::{
    LineVertexAnnotations, MESH_ATTRIBUTE_ANNOTATION, MESH_ATTRIBUTE_NEXT_POSITION,
    MESH_ATTRIBUTE_PREVIOUS_POSITION,
};

/// Segment endpoints of a line mesh, in walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTopology {
    pub primitive: MeshPrimitive,
    /// Two original vertex indices per quad
    pub endpoints: Vec<u32>,
}

impl LineTopology {
    pub fn quad_count(&self) -> usize {
        self.endpoints.len() / 2
    }
}

/// Resolve the segments of a line primitive into pairs of original vertex indices.
///
/// `indices` is the mesh's own index buffer, if any. Strips and loops walk it
/// the same way they'd walk vertices of a non-indexed mesh.
pub fn line_topology(
    primitive: MeshPrimitive,
    vertex_count: u32,
    indices: Option<&[u32]>,
) -> LineMeshResult<LineTopology> {
    if !primitive.is_line() {
        return Err(LineMeshError::InvalidPrimitive(primitive));
    }

    let element_count = indices.map_or(vertex_count, |i| i.len() as u32);
    let quad_count = primitive_count(primitive, element_count);

    let walk = match primitive {
        MeshPrimitive::Lines => generate_trivial_indices(2 * quad_count),
        MeshPrimitive::LineStrip => generate_line_strip_indices(element_count),
        _ => generate_line_loop_indices(element_count),
    };
    debug_assert_eq!(walk.len(), 2 * quad_count as usize);

    let endpoints = match indices {
        Some(indices) => {
            // walk never reaches past indices.len()
            let composed = compose_indices(&walk, indices);
            debug_assert!(composed.is_some());
            composed.unwrap_or_default()
        }
        None => walk,
    };

    Ok(LineTopology {
        primitive,
        endpoints,
    })
}

/// Annotation of every duplicated vertex.
///
/// Each quad gets `Up|Begin, Begin, Up, {}`. Strips and loops additionally mark
/// every vertex with `Join`, except the first and last vertex pair of a strip.
pub fn line_annotations(primitive: MeshPrimitive, quad_count: usize) -> Vec<LineVertexAnnotations> {
    const QUAD: [LineVertexAnnotations; 4] = [
        LineVertexAnnotations::UP.union(LineVertexAnnotations::BEGIN),
        LineVertexAnnotations::BEGIN,
        LineVertexAnnotations::UP,
        LineVertexAnnotations::empty(),
    ];

    let joined = matches!(primitive, MeshPrimitive::LineStrip | MeshPrimitive::LineLoop);
    let mut annotations = Vec::with_capacity(quad_count * 4);
    for _ in 0..quad_count {
        for bits in QUAD {
            annotations.push(if joined {
                bits | LineVertexAnnotations::JOIN
            } else {
                bits
            });
        }
    }

    if primitive == MeshPrimitive::LineStrip && quad_count > 0 {
        let last = annotations.len();
        for i in [0, 1, last - 2, last - 1] {
            annotations[i].remove(LineVertexAnnotations::JOIN);
        }
    }

    annotations
}

/// Triangle indices of the quad bodies and of the joins between them.
///
/// A join is emitted after quad `i` if its trailing vertex has the `Join` bit,
/// and a wrap-around join back to the first quad if the first leading vertex
/// has it as well, which is the case for a loop.
pub fn line_triangle_indices(annotations: &[LineVertexAnnotations]) -> Vec<u32> {
    let quad_count = annotations.len() / 4;
    let mut indices = Vec::with_capacity(quad_count * 12);

    for i in 0..quad_count {
        let base = (i * 4) as u32;
        indices.extend_from_slice(&[base + 2, base, base + 1, base + 1, base + 3, base + 2]);

        if i + 1 != quad_count && annotations[i * 4 + 3].contains(LineVertexAnnotations::JOIN) {
            indices.extend_from_slice(&[
                base + 2,
                base + 3,
                base + 4,
                base + 4,
                base + 3,
                base + 5,
            ]);
        }
    }

    if quad_count != 0 && annotations[0].contains(LineVertexAnnotations::JOIN) {
        let last = (quad_count * 4) as u32;
        debug_assert!(annotations[quad_count * 4 - 1].contains(LineVertexAnnotations::JOIN));
        indices.extend_from_slice(&[last - 2, last - 1, 0, 0, last - 1, 1]);
    }

    indices
}

/// Generate a line mesh for screen-space expansion from a line primitive mesh.
///
/// The input has to be [`MeshPrimitive::Lines`], [`MeshPrimitive::LineStrip`]
/// or [`MeshPrimitive::LineLoop`] with a [`MeshAttribute::Position`] of any
/// format, optionally indexed. The output is an indexed
/// [`MeshPrimitive::Triangles`] mesh with 32-bit indices, four vertices per
/// segment, all input attributes duplicated in their original order and
/// formats, followed by [`MESH_ATTRIBUTE_PREVIOUS_POSITION`] and
/// [`MESH_ATTRIBUTE_NEXT_POSITION`] in the position format and
/// [`MESH_ATTRIBUTE_ANNOTATION`] as [`crate::mesh::VertexFormat::UnsignedInt`].
///
/// An input with no segments gives a valid empty mesh.
pub fn generate_lines(line_mesh: &MeshData) -> LineMeshResult<MeshData> {
    let primitive = line_mesh.primitive();
    if !primitive.is_line() {
        return Err(LineMeshError::InvalidPrimitive(primitive));
    }
    let position_format = line_mesh
        .attribute_format(MeshAttribute::Position)
        .ok_or(LineMeshError::MissingPositionAttribute)?;

    let input_indices = line_mesh.indices_u32();
    let topology = line_topology(
        primitive,
        line_mesh.vertex_count() as u32,
        input_indices.as_deref(),
    )?;
    let quad_count = topology.quad_count();
    let vertex_count = quad_count * 4;

    // Endpoint a of a quad goes to slots 0 and 1, endpoint b to slots 2 and 3.
    // Duplicating the endpoints by this pattern maps every output slot straight
    // to an original vertex, indexed input or not.
    let pattern: Vec<u32> = (0..vertex_count as u32).map(|i| i / 2).collect();
    let vertex_indices = duplicate(&pattern, &topology.endpoints)?;

    let mut attributes = duplicate_mesh_attributes(&vertex_indices, line_mesh.attributes())?;

    let positions = attributes
        .iter()
        .find(|a| a.name() == MeshAttribute::Position)
        .map(|a| a.bytes().to_vec())
        .ok_or(LineMeshError::MissingPositionAttribute)?;
    let (previous, next) =
        neighbor_positions(primitive, quad_count, &positions, position_format.size());

    let annotations = line_annotations(primitive, quad_count);
    let indices = line_triangle_indices(&annotations);

    trace!(
        "generate_lines(): {} quads from {} endpoints, {} indices",
        quad_count,
        topology.endpoints.len(),
        indices.len()
    );
    debug!(
        "generate_lines(): {} -> {} vertices, {} triangles ({} join triangles)",
        primitive,
        vertex_count,
        indices.len() / 3,
        indices.len() / 3 - quad_count * 2
    );

    attributes.push(MeshAttributeData::from_bytes(
        MESH_ATTRIBUTE_PREVIOUS_POSITION,
        position_format,
        previous,
    ));
    attributes.push(MeshAttributeData::from_bytes(
        MESH_ATTRIBUTE_NEXT_POSITION,
        position_format,
        next,
    ));
    attributes.push(MeshAttributeData::new(
        MESH_ATTRIBUTE_ANNOTATION,
        bytemuck::cast_slice::<LineVertexAnnotations, u32>(&annotations),
    ));

    Ok(MeshData::from_parts(
        MeshPrimitive::Triangles,
        Some(MeshIndexData::new(&indices)),
        attributes,
        vertex_count,
    ))
}

/// Previous and next neighbor positions of every duplicated vertex.
///
/// Slots without a meaningful neighbor stay zeroed.
fn neighbor_positions(
    primitive: MeshPrimitive,
    quad_count: usize,
    positions: &[u8],
    element_size: usize,
) -> (Vec<u8>, Vec<u8>) {
    let vertex_count = quad_count * 4;
    let mut previous = vec![0u8; vertex_count * element_size];
    let mut next = vec![0u8; vertex_count * element_size];

    let fill = |target: &mut Vec<u8>, slot: usize, source: usize| {
        copy_element(target, slot, positions, source, element_size);
        copy_element(target, slot + 1, positions, source, element_size);
    };

    // Each endpoint sees the other endpoint of its own quad
    for i in 0..quad_count {
        let base = i * 4;
        fill(&mut next, base, base + 2);
        fill(&mut previous, base + 2, base);
    }

    if matches!(primitive, MeshPrimitive::LineStrip | MeshPrimitive::LineLoop) {
        // Across a join the neighbor is the far endpoint of the adjacent quad
        for i in 1..quad_count {
            fill(&mut previous, i * 4, i * 4 - 4);
        }
        for i in 0..quad_count.saturating_sub(1) {
            fill(&mut next, i * 4 + 2, i * 4 + 6);
        }

        if primitive == MeshPrimitive::LineLoop && quad_count != 0 {
            fill(&mut previous, 0, vertex_count - 4);
            fill(&mut next, vertex_count - 2, 2);
        }
    }

    (previous, next)
}
