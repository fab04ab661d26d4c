//! Host-side mirrors of the shader interop records.
//!
//! Both records are `#[repr(C)]`, `Pod`, and fixed at 80 bytes. Field order,
//! widths, and offsets are part of the contract with shader code and are
//! asserted at compile time; see [`crate::layout`] for the runtime
//! descriptors.

mod array;
mod constants;
mod vertex;

pub use array::{recolor, restyle, vertex_byte_offset, vertices_as_bytes, vertices_from_bytes};
pub use constants::ConstantRecord;
pub use vertex::VertexRecord;
