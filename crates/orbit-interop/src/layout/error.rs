use std::fmt;

use super::FieldFormat;

/// A disagreement between a record layout and something that must match it.
///
/// Raised when two layout descriptors differ, when raw bytes have the wrong
/// length for the record they are decoded into, or when a layout does not fit
/// within device limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    NameMismatch {
        expected: &'static str,
        found: String,
    },
    VersionMismatch {
        record: &'static str,
        expected: u32,
        found: u32,
    },
    SizeMismatch {
        record: &'static str,
        expected: u64,
        found: u64,
    },
    FieldCountMismatch {
        record: &'static str,
        expected: usize,
        found: usize,
    },
    /// First field (in declaration order) whose name, offset, or format differs.
    FieldMismatch {
        record: &'static str,
        index: usize,
        expected: FieldSummary,
        found: FieldSummary,
    },
    /// Input byte length is not what the record (or record array) needs.
    ByteLength {
        record: &'static str,
        expected: usize,
        found: usize,
    },
    /// Packed array input whose length is not a whole number of records.
    PartialRecord {
        record: &'static str,
        stride: usize,
        found: usize,
    },
    ExceedsLimit {
        record: &'static str,
        limit: &'static str,
        value: u64,
        max: u64,
    },
}

/// Owned copy of a field descriptor, carried inside [`LayoutError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSummary {
    pub name: String,
    pub offset: u64,
    pub format: FieldFormat,
}

impl fmt::Display for FieldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} @ {}", self.name, self.format, self.offset)
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NameMismatch { expected, found } => {
                write!(f, "layout mismatch: expected record `{expected}`, found `{found}`")
            }
            LayoutError::VersionMismatch { record, expected, found } => {
                write!(f, "layout mismatch in `{record}`: version {found}, expected {expected}")
            }
            LayoutError::SizeMismatch { record, expected, found } => {
                write!(f, "layout mismatch in `{record}`: size {found} bytes, expected {expected}")
            }
            LayoutError::FieldCountMismatch { record, expected, found } => {
                write!(f, "layout mismatch in `{record}`: {found} fields, expected {expected}")
            }
            LayoutError::FieldMismatch { record, index, expected, found } => {
                write!(
                    f,
                    "layout mismatch in `{record}` field #{index}: found `{found}`, expected `{expected}`"
                )
            }
            LayoutError::ByteLength { record, expected, found } => {
                write!(f, "cannot decode `{record}`: got {found} bytes, expected {expected}")
            }
            LayoutError::PartialRecord { record, stride, found } => {
                write!(
                    f,
                    "cannot decode `{record}` array: {found} bytes is not a multiple of the {stride}-byte stride"
                )
            }
            LayoutError::ExceedsLimit { record, limit, value, max } => {
                write!(f, "`{record}` exceeds device limit {limit}: {value} > {max}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
