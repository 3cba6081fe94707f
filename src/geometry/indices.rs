// src/geometry/indices.rs
// Index sequence generators for line topologies
// Exists to turn strips and loops into flat segment pairs for line mesh generation
// RELEVANT FILES:src/vector/line.rs,src/mesh/primitive.rs

/// Identity sequence `0, 1, …, count - 1`.
pub fn generate_trivial_indices(count: u32) -> Vec<u32> {
    (0..count).collect()
}

/// Segment pairs of a line strip.
///
/// ```text
///       1 --- 2             1 2 --- 3 4
///      /       \           /           \
///     /         \   =>    /             \
///    0           3       0               5
/// ```
///
/// Fewer than two vertices form no segment and give an empty sequence.
pub fn generate_line_strip_indices(vertex_count: u32) -> Vec<u32> {
    if vertex_count < 2 {
        return Vec::new();
    }
    let mut indices = Vec::with_capacity(2 * (vertex_count as usize - 1));
    for i in 0..vertex_count - 1 {
        indices.push(i);
        indices.push(i + 1);
    }
    indices
}

/// Segment pairs of a line loop, the strip plus a segment closing last to first.
///
/// A single vertex yields the degenerate segment `0, 0`.
pub fn generate_line_loop_indices(vertex_count: u32) -> Vec<u32> {
    if vertex_count == 0 {
        return Vec::new();
    }
    let mut indices = generate_line_strip_indices(vertex_count);
    indices.push(vertex_count - 1);
    indices.push(0);
    indices
}

/// Resolve `outer` through `inner`, i.e. `inner[outer[i]]`.
///
/// Returns `None` if an outer index is out of range.
pub fn compose_indices(outer: &[u32], inner: &[u32]) -> Option<Vec<u32>> {
    outer
        .iter()
        .map(|&i| inner.get(i as usize).copied())
        .collect()
}
