use super::{FieldFormat, FieldSummary, LayoutError};

/// Bumped whenever any record's field order, width, or offsets change.
pub const LAYOUT_VERSION: u32 = 1;

/// One field of a record: name, byte offset from the record start, format.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: u64,
    pub format: FieldFormat,
}

impl FieldLayout {
    #[inline]
    pub const fn new(name: &'static str, offset: usize, format: FieldFormat) -> Self {
        Self { name, offset: offset as u64, format }
    }

    /// One past the last payload byte.
    #[inline]
    pub const fn end(&self) -> u64 {
        self.offset + self.format.size()
    }

    fn summary(&self) -> FieldSummary {
        FieldSummary {
            name: self.name.to_string(),
            offset: self.offset,
            format: self.format,
        }
    }
}

/// Where a record is bound on the GPU side.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RecordUsage {
    /// One record per vertex in a vertex buffer.
    Vertex,
    /// One record per draw in a uniform buffer.
    Uniform,
}

/// Versioned description of a record's memory layout.
///
/// Every record type exposes one as an associated `LAYOUT` constant. Code built
/// against a different revision of the records (a plugin, a tool, a cached
/// pipeline) can compare its descriptor with the host's before exchanging
/// bytes, turning a silent corruption into an error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RecordLayout {
    pub name: &'static str,
    pub version: u32,
    /// Total size in bytes, padding included. Also the array stride.
    pub size: u64,
    /// Fields in declaration order.
    pub fields: &'static [FieldLayout],
}

impl RecordLayout {
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Bytes between the end of field `index` and the start of the next one
    /// (or the end of the record).
    pub fn trailing_padding(&self, index: usize) -> u64 {
        let Some(field) = self.fields.get(index) else { return 0 };
        let next = self.fields.get(index + 1).map_or(self.size, |n| n.offset);
        next.saturating_sub(field.end())
    }

    /// Checks that `peer` describes exactly the same layout.
    ///
    /// Comparison order: name, version, size, field count, then each field in
    /// order. The first difference found is returned.
    pub fn check_compatible(&self, peer: &RecordLayout) -> Result<(), LayoutError> {
        if self.name != peer.name {
            return Err(LayoutError::NameMismatch {
                expected: self.name,
                found: peer.name.to_string(),
            });
        }
        if self.version != peer.version {
            return Err(LayoutError::VersionMismatch {
                record: self.name,
                expected: self.version,
                found: peer.version,
            });
        }
        if self.size != peer.size {
            return Err(LayoutError::SizeMismatch {
                record: self.name,
                expected: self.size,
                found: peer.size,
            });
        }
        if self.fields.len() != peer.fields.len() {
            return Err(LayoutError::FieldCountMismatch {
                record: self.name,
                expected: self.fields.len(),
                found: peer.fields.len(),
            });
        }
        for (index, (ours, theirs)) in self.fields.iter().zip(peer.fields).enumerate() {
            if ours != theirs {
                return Err(LayoutError::FieldMismatch {
                    record: self.name,
                    index,
                    expected: ours.summary(),
                    found: theirs.summary(),
                });
            }
        }
        Ok(())
    }

    /// Checks the layout against device limits for the given binding usage.
    pub fn check_limits(
        &self,
        usage: RecordUsage,
        limits: &wgpu::Limits,
    ) -> Result<(), LayoutError> {
        match usage {
            RecordUsage::Vertex => {
                self.within(
                    "max_vertex_buffer_array_stride",
                    self.size,
                    u64::from(limits.max_vertex_buffer_array_stride),
                )?;
                self.within(
                    "max_vertex_attributes",
                    self.fields.len() as u64,
                    u64::from(limits.max_vertex_attributes),
                )
            }
            RecordUsage::Uniform => self.within(
                "max_uniform_buffer_binding_size",
                self.size,
                u64::from(limits.max_uniform_buffer_binding_size),
            ),
        }
    }

    fn within(&self, limit: &'static str, value: u64, max: u64) -> Result<(), LayoutError> {
        if value > max {
            log::warn!("{}: {limit} exceeded ({value} > {max})", self.name);
            return Err(LayoutError::ExceedsLimit { record: self.name, limit, value, max });
        }
        Ok(())
    }
}
