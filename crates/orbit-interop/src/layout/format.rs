/// Storage format of a single record field.
///
/// Sizes are payload sizes only; trailing padding is implied by the next
/// field's offset (or the record size for the last field).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FieldFormat {
    Float32x2,
    Float32x3,
    Float32x4,
    /// Column-major 4x4 matrix.
    Float32x4x4,
    Uint8,
}

impl FieldFormat {
    /// Payload size in bytes.
    #[inline]
    pub const fn size(self) -> u64 {
        match self {
            FieldFormat::Float32x2 => 8,
            FieldFormat::Float32x3 => 12,
            FieldFormat::Float32x4 => 16,
            FieldFormat::Float32x4x4 => 64,
            FieldFormat::Uint8 => 1,
        }
    }

    /// Vertex fetch format for this field, if it can be a vertex attribute.
    ///
    /// `Uint8` is fetched as `Uint8x4`; the tag lives in the `x` lane and the
    /// other three lanes read the zeroed padding that follows it.
    pub const fn vertex_format(self) -> Option<wgpu::VertexFormat> {
        match self {
            FieldFormat::Float32x2 => Some(wgpu::VertexFormat::Float32x2),
            FieldFormat::Float32x3 => Some(wgpu::VertexFormat::Float32x3),
            FieldFormat::Float32x4 => Some(wgpu::VertexFormat::Float32x4),
            FieldFormat::Float32x4x4 => None,
            FieldFormat::Uint8 => Some(wgpu::VertexFormat::Uint8x4),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FieldFormat::Float32x2 => "float32x2",
            FieldFormat::Float32x3 => "float32x3",
            FieldFormat::Float32x4 => "float32x4",
            FieldFormat::Float32x4x4 => "float32x4x4",
            FieldFormat::Uint8 => "uint8",
        }
    }
}

impl std::fmt::Display for FieldFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_fetch_never_reads_past_padding() {
        // Uint8x4 reads 4 bytes; the record reserves 16 for the tag slot.
        let fetched = FieldFormat::Uint8.vertex_format().unwrap().size();
        assert_eq!(fetched, 4);
    }

    #[test]
    fn float_formats_match_wgpu_sizes() {
        for f in [FieldFormat::Float32x2, FieldFormat::Float32x3, FieldFormat::Float32x4] {
            assert_eq!(f.vertex_format().unwrap().size(), f.size(), "{f}");
        }
    }

    #[test]
    fn matrix_is_not_a_vertex_attribute() {
        assert!(FieldFormat::Float32x4x4.vertex_format().is_none());
    }
}
