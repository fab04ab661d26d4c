//! Packed vertex arrays: the contiguous form uploaded to vertex buffers.

use crate::layout::LayoutError;

use super::VertexRecord;

/// Views a vertex slice as its packed byte representation.
#[inline]
pub fn vertices_as_bytes(vertices: &[VertexRecord]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Decodes a packed vertex array. Input may be unaligned.
pub fn vertices_from_bytes(bytes: &[u8]) -> Result<Vec<VertexRecord>, LayoutError> {
    if bytes.len() % VertexRecord::SIZE != 0 {
        return Err(LayoutError::PartialRecord {
            record: VertexRecord::LAYOUT.name,
            stride: VertexRecord::SIZE,
            found: bytes.len(),
        });
    }
    bytes.chunks_exact(VertexRecord::SIZE).map(VertexRecord::from_bytes).collect()
}

/// Byte offset of the record at `index` in a packed array, or `None` if it
/// does not fit in a `u64`.
#[inline]
pub const fn vertex_byte_offset(index: usize) -> Option<u64> {
    (index as u64).checked_mul(VertexRecord::SIZE as u64)
}

/// Sets the draw style of every record.
pub fn restyle(vertices: &mut [VertexRecord], draw_style: u8) {
    for v in vertices {
        v.draw_style = draw_style;
    }
}

/// Sets the color of every record.
pub fn recolor(vertices: &mut [VertexRecord], color: [f32; 4]) {
    for v in vertices {
        v.color = color;
    }
}
