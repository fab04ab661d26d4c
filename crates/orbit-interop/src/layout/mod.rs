//! Layout descriptors for the interop records.
//!
//! Each record type publishes a [`RecordLayout`] describing its field order,
//! offsets, and formats. Descriptors are used to:
//! - build GPU vertex attribute tables without restating offsets
//! - detect producer/consumer mismatches ([`RecordLayout::check_compatible`])
//! - check a layout against device limits

mod error;
mod format;
mod record;

pub use error::{FieldSummary, LayoutError};
pub use format::FieldFormat;
pub use record::{FieldLayout, LAYOUT_VERSION, RecordLayout, RecordUsage};
