//! Copy-by-index duplication of vertex data
//!
//! The same routine serves typed index arrays and raw attribute storage, which
//! lets the line generator push every attribute through one code path
//! regardless of its format.

use crate::error::{LineMeshError, LineMeshResult};

use super::MeshAttributeData;

/// Gather `data[indices[i]]` for every index.
pub fn duplicate<T: Copy>(indices: &[u32], data: &[T]) -> LineMeshResult<Vec<T>> {
    let mut out = Vec::with_capacity(indices.len());
    for &index in indices {
        let value = data
            .get(index as usize)
            .copied()
            .ok_or(LineMeshError::IndexOutOfBounds {
                index,
                count: data.len(),
            })?;
        out.push(value);
    }
    Ok(out)
}

/// Byte-level variant of [`duplicate`] over tightly packed elements of `element_size` bytes.
pub fn duplicate_bytes(
    indices: &[u32],
    data: &[u8],
    element_size: usize,
) -> LineMeshResult<Vec<u8>> {
    let count = if element_size == 0 {
        0
    } else {
        data.len() / element_size
    };
    let mut out = Vec::with_capacity(indices.len() * element_size);
    for &index in indices {
        let index_usize = index as usize;
        if index_usize >= count {
            return Err(LineMeshError::IndexOutOfBounds { index, count });
        }
        let start = index_usize * element_size;
        out.extend_from_slice(&data[start..start + element_size]);
    }
    Ok(out)
}

/// Duplicate every attribute by the same index list, keeping names and formats.
pub fn duplicate_mesh_attributes(
    indices: &[u32],
    attributes: &[MeshAttributeData],
) -> LineMeshResult<Vec<MeshAttributeData>> {
    attributes
        .iter()
        .map(|attribute| {
            let data = duplicate_bytes(indices, attribute.bytes(), attribute.format().size())?;
            Ok(MeshAttributeData::from_bytes(
                attribute.name(),
                attribute.format(),
                data,
            ))
        })
        .collect()
}

/// Copy the element at `src_index` of `src` over the element at `dst_index` of `dst`.
pub(crate) fn copy_element(
    dst: &mut [u8],
    dst_index: usize,
    src: &[u8],
    src_index: usize,
    element_size: usize,
) {
    let src_start = src_index * element_size;
    let dst_start = dst_index * element_size;
    dst[dst_start..dst_start + element_size]
        .copy_from_slice(&src[src_start..src_start + element_size]);
}
