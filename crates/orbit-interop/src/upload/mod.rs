//! GPU upload helpers (wgpu).
//!
//! Vertex arrays go into plain vertex buffers; constant records go into a
//! [`ConstantRing`] so that each frame in flight writes its own slot.

mod ring;
mod vertex;

pub use ring::{ConstantRing, ring_size, slot_offset, slot_stride};
pub use vertex::{create_vertex_buffer, vertex_write_range, write_vertices};
