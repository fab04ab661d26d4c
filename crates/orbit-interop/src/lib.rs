//! Orbit shader interop crate.
//!
//! Defines the byte-exact records exchanged between host code and shaders:
//! [`VertexRecord`] for vertex buffers and [`ConstantRecord`] for per-draw
//! uniform buffers, plus the pieces needed to keep both sides in agreement.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`records`] | the records, packed-array codec, whole-array updates |
//! | [`layout`] | versioned layout descriptors, `LayoutError` |
//! | [`upload`] | wgpu vertex buffers and the `ConstantRing` uniform ring |
//! | [`shader`] | WGSL declarations mirroring the records |
//! | [`logging`] | `env_logger` setup |

pub mod layout;
pub mod logging;
pub mod records;
pub mod shader;
pub mod upload;

pub use layout::{LayoutError, RecordLayout};
pub use records::{ConstantRecord, VertexRecord};
