use std::ops::Range;

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;

use crate::records::{VertexRecord, vertex_byte_offset, vertices_as_bytes};

/// Creates a vertex buffer initialized with `vertices`.
///
/// The buffer is `VERTEX | COPY_DST` so it can be refreshed in place with
/// [`write_vertices`].
pub fn create_vertex_buffer(
    device: &wgpu::Device,
    label: &str,
    vertices: &[VertexRecord],
) -> wgpu::Buffer {
    log::debug!("{label}: creating vertex buffer for {} records", vertices.len());
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: vertices_as_bytes(vertices),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}

/// Overwrites whole records starting at record `first_index`.
///
/// Fails if the write would run past the end of `buffer`.
pub fn write_vertices(
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    first_index: usize,
    vertices: &[VertexRecord],
) -> Result<()> {
    let range = vertex_write_range(first_index, vertices.len(), buffer.size())?;
    queue.write_buffer(buffer, range.start, vertices_as_bytes(vertices));
    Ok(())
}

/// Byte range covered by `count` records starting at record `first_index`,
/// checked against `buffer_size`. Offset arithmetic never wraps.
pub fn vertex_write_range(
    first_index: usize,
    count: usize,
    buffer_size: u64,
) -> Result<Range<u64>> {
    let start = vertex_byte_offset(first_index)
        .with_context(|| format!("vertex index {first_index} overflows the byte offset"))?;
    let end = vertex_byte_offset(count)
        .and_then(|len| start.checked_add(len))
        .with_context(|| {
            format!("{count} records at index {first_index} overflow the byte range")
        })?;
    anyhow::ensure!(
        end <= buffer_size,
        "vertex write [{start}, {end}) exceeds buffer size {buffer_size}"
    );
    Ok(start..end)
}
