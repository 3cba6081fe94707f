// tests/test_compile_lines.rs
// Integration tests for upload preparation of generated line meshes.
// Exists to validate attribute binding, interleaving, conflict handling and compatibility mode.
// RELEVANT FILES:src/vector/line_pipeline.rs,src/vector/line_types.rs,src/vector/line_shader.rs

use glam::Vec3;
use linemesh::mesh::{LineVertex3D, MeshAttributeData};
use linemesh::vector::line_types::{
    ANNOTATION_LOCATION, COLOR_LOCATION, NEXT_POSITION_LOCATION, POSITION_LOCATION,
    PREVIOUS_POSITION_LOCATION,
};
use linemesh::{
    compile_lines, generate_lines, LineMeshError, LineShaderConfig, LineShaderFlags,
    MeshAttribute, MeshData, MeshPrimitive, VertexFormat,
};

fn square_3d() -> [Vec3; 4] {
    [
        Vec3::new(-1.0, -1.0, 0.5),
        Vec3::new(1.0, -1.0, 0.5),
        Vec3::new(1.0, 1.0, -0.5),
        Vec3::new(-1.0, 1.0, -0.5),
    ]
}

#[test]
fn three_dimensional_loop_interleaves_line_vertices() {
    let _ = env_logger::builder().is_test(true).try_init();

    let lines = generate_lines(&MeshData::from_positions(MeshPrimitive::LineLoop, &square_3d())).unwrap();
    let compiled = compile_lines(&lines).unwrap();

    assert_eq!(compiled.primitive, MeshPrimitive::Triangles);
    assert_eq!(compiled.vertex_count, 16);
    assert_eq!(compiled.index_count(), 48);
    assert_eq!(compiled.stride, std::mem::size_of::<LineVertex3D>());

    let vertices: Vec<LineVertex3D> = bytemuck::pod_collect_to_vec(&compiled.vertex_data);
    assert_eq!(vertices.len(), 16);
    // Leading pair of the first quad looks back across the wrap-around join
    assert_eq!(vertices[0].previous_position, [-1.0, 1.0, -0.5]);
    assert_eq!(vertices[0].next_position, [1.0, -1.0, 0.5]);
    assert_eq!(vertices[15].next_position, [1.0, -1.0, 0.5]);

    let shader = LineShaderConfig::three_dimensional();
    for (name, location) in shader.attribute_bindings() {
        assert!(
            compiled.binding(location).is_some(),
            "{name} at {location} has no data"
        );
    }
}

#[test]
fn vertex_colors_bind_to_color_location() {
    let colors = [[255u8, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255], [255, 255, 255, 255]];
    let input = MeshData::from_positions(MeshPrimitive::LineStrip, &square_3d())
        .with_attribute(MeshAttribute::Color, &colors)
        .unwrap();
    let compiled = compile_lines(&generate_lines(&input).unwrap()).unwrap();

    let color = compiled.binding(COLOR_LOCATION).unwrap();
    assert_eq!(color.format, VertexFormat::Vector4ubNormalized);
    assert_eq!(color.offset, 12);
    assert_eq!(compiled.stride, 12 + 4 + 12 + 12 + 4);

    let order: Vec<u32> = compiled.bindings.iter().map(|b| b.location).collect();
    assert_eq!(
        order,
        vec![
            POSITION_LOCATION,
            COLOR_LOCATION,
            PREVIOUS_POSITION_LOCATION,
            NEXT_POSITION_LOCATION,
            ANNOTATION_LOCATION,
        ]
    );

    let vertex = compiled.vertex(5).unwrap();
    assert_eq!(&vertex[12..16], &[0, 255, 0, 255]);

    let flags = LineShaderConfig::three_dimensional().with_flags(LineShaderFlags::VERTEX_COLOR);
    assert!(flags.attribute_bindings().contains(&("vertexColor", COLOR_LOCATION)));
}

#[test]
fn conflicting_attributes_are_skipped() {
    for attribute in [
        MeshAttribute::TextureCoordinates,
        MeshAttribute::Tangent,
        MeshAttribute::Normal,
        MeshAttribute::Custom(7),
    ] {
        let input = MeshData::from_positions(MeshPrimitive::LineLoop, &square_3d())
            .with_attribute_data(MeshAttributeData::new(attribute, &[Vec3::ZERO; 4]))
            .unwrap();
        let lines = generate_lines(&input).unwrap();
        assert_eq!(lines.attribute_count(), 5);

        let compiled = compile_lines(&lines).unwrap();
        assert_eq!(compiled.bindings.len(), 4, "{attribute:?}");
        assert!(compiled.bindings.iter().all(|b| b.attribute != attribute));
        assert_eq!(compiled.stride, std::mem::size_of::<LineVertex3D>());
    }
}

#[test]
fn empty_mesh_compiles() {
    let lines = generate_lines(&MeshData::from_positions::<glam::Vec2>(MeshPrimitive::LineLoop, &[])).unwrap();
    let compiled = compile_lines(&lines).unwrap();
    assert_eq!(compiled.primitive, MeshPrimitive::Triangles);
    assert_eq!(compiled.vertex_count, 0);
    assert_eq!(compiled.index_count(), 0);
    assert!(compiled.vertex_data.is_empty());
}

#[test]
fn not_generated_meshes_are_rejected() {
    let positions = [Vec3::ZERO; 3];
    for primitive in [MeshPrimitive::Lines, MeshPrimitive::Triangles] {
        let err = compile_lines(&MeshData::from_positions(primitive, &positions)).unwrap_err();
        assert!(matches!(err, LineMeshError::NotGeneratedMesh(_)));
        assert!(err
            .to_string()
            .starts_with("compile_lines(): the mesh wasn't produced with generate_lines()"));
    }
}

#[test]
fn out_of_range_indices_are_rejected() {
    let lines = generate_lines(&MeshData::from_positions(MeshPrimitive::Lines, &square_3d())).unwrap();
    let broken = lines
        .attributes()
        .iter()
        .cloned()
        .try_fold(
            MeshData::new(MeshPrimitive::Triangles, lines.vertex_count()).with_indices(&[0u16, 1, 8]),
            |mesh, attribute| mesh.with_attribute_data(attribute),
        )
        .unwrap();
    let err = compile_lines(&broken).unwrap_err();
    assert!(matches!(err, LineMeshError::IndexOutOfBounds { index: 8, count: 8 }));
}

#[test]
fn compatibility_mode_draws_segments() {
    let lines = generate_lines(&MeshData::from_positions(MeshPrimitive::LineStrip, &square_3d())).unwrap();
    let compiled = compile_lines(&lines).unwrap().with_primitive(MeshPrimitive::Lines);
    assert_eq!(compiled.primitive, MeshPrimitive::Lines);

    let positions: Vec<Vec3> = lines.attribute(MeshAttribute::Position).unwrap();
    // Read as line pairs, only the first pair of each quad body has a length
    let segments: Vec<(Vec3, Vec3)> = compiled
        .indices
        .chunks(2)
        .map(|pair| (positions[pair[0] as usize], positions[pair[1] as usize]))
        .filter(|(a, b)| a != b)
        .collect();
    let corners = square_3d();
    assert_eq!(
        segments,
        vec![
            (corners[1], corners[0]),
            (corners[2], corners[1]),
            (corners[3], corners[2]),
        ]
    );
}
