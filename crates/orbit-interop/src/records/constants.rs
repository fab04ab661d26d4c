use core::mem::{offset_of, size_of};
use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::layout::{FieldFormat, FieldLayout, LAYOUT_VERSION, LayoutError, RecordLayout};

/// Per-draw (or per-frame) constant record for a uniform buffer.
///
/// `model_view_projection` is column-major: `model_view_projection[c][r]` is
/// column `c`, row `r`, matching WGSL `mat4x4<f32>` and the usual host-side
/// matrix libraries. `light` is a direction or position in model space.
///
/// The record is 80 bytes: the matrix, the light vector, and 4 bytes of
/// padding bringing it to a multiple of 16. The record is always overwritten
/// as a whole.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ConstantRecord {
    pub model_view_projection: [[f32; 4]; 4],
    pub light: [f32; 3],
    _pad: f32,
}

const _: () = {
    assert!(size_of::<ConstantRecord>() == 80);
    assert!(size_of::<ConstantRecord>() % 16 == 0);
    assert!(offset_of!(ConstantRecord, model_view_projection) == 0);
    assert!(offset_of!(ConstantRecord, light) == 64);
};

const CONSTANT_FIELDS: [FieldLayout; 2] = [
    FieldLayout::new(
        "model_view_projection",
        offset_of!(ConstantRecord, model_view_projection),
        FieldFormat::Float32x4x4,
    ),
    FieldLayout::new("light", offset_of!(ConstantRecord, light), FieldFormat::Float32x3),
];

const IDENTITY_MATRIX: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

impl ConstantRecord {
    /// Record size in bytes.
    pub const SIZE: usize = size_of::<Self>();

    pub const LAYOUT: RecordLayout = RecordLayout {
        name: "ConstantRecord",
        version: LAYOUT_VERSION,
        size: Self::SIZE as u64,
        fields: &CONSTANT_FIELDS,
    };

    /// Identity transform, zero light.
    pub const IDENTITY: Self = Self::new(IDENTITY_MATRIX, [0.0; 3]);

    #[inline]
    pub const fn new(model_view_projection: [[f32; 4]; 4], light: [f32; 3]) -> Self {
        Self { model_view_projection, light, _pad: 0.0 }
    }

    /// Builds a record from 16 column-major floats.
    #[inline]
    pub fn from_cols_array(cols: &[f32; 16], light: [f32; 3]) -> Self {
        Self::new(bytemuck::cast(*cols), light)
    }

    /// Returns the matrix as 16 column-major floats.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(self.model_view_projection)
    }

    /// Minimum binding size for a uniform binding holding one record.
    pub const fn min_binding_size() -> NonZeroU64 {
        match NonZeroU64::new(Self::SIZE as u64) {
            Some(size) => size,
            None => panic!("ConstantRecord has a non-zero size"),
        }
    }

    /// Bind group layout entry for a uniform buffer of constant records.
    ///
    /// Pass `has_dynamic_offset = true` when binding one slot of a
    /// [`ConstantRing`](crate::upload::ConstantRing).
    pub fn bind_group_layout_entry(
        binding: u32,
        visibility: wgpu::ShaderStages,
        has_dynamic_offset: bool,
    ) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset,
                min_binding_size: Some(Self::min_binding_size()),
            },
            count: None,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Decodes one record from exactly [`Self::SIZE`] bytes of any alignment.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LayoutError> {
        bytemuck::try_pod_read_unaligned(bytes).map_err(|_| LayoutError::ByteLength {
            record: Self::LAYOUT.name,
            expected: Self::SIZE,
            found: bytes.len(),
        })
    }
}

impl Default for ConstantRecord {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for ConstantRecord {
    fn eq(&self, other: &Self) -> bool {
        self.model_view_projection == other.model_view_projection && self.light == other.light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f32_at(bytes: &[u8], offset: usize) -> f32 {
        f32::from_ne_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
    }

    #[test]
    fn size_is_uniform_aligned() {
        assert_eq!(ConstantRecord::SIZE % 16, 0);
        assert_eq!(ConstantRecord::LAYOUT.size, 80);
        assert_eq!(ConstantRecord::LAYOUT.trailing_padding(1), 4);
    }

    #[test]
    fn identity_and_light_decode_unchanged() {
        let record = ConstantRecord::new(IDENTITY_MATRIX, [0.0, -1.0, 0.0]);
        let bytes = record.as_bytes();

        for col in 0..4 {
            for row in 0..4 {
                let expected = if col == row { 1.0 } else { 0.0 };
                assert_eq!(f32_at(bytes, (col * 4 + row) * 4), expected, "m[{col}][{row}]");
            }
        }
        assert_eq!([f32_at(bytes, 64), f32_at(bytes, 68), f32_at(bytes, 72)], [0.0, -1.0, 0.0]);

        let back = ConstantRecord::from_bytes(bytes).unwrap();
        assert_eq!(back.model_view_projection, IDENTITY_MATRIX);
        assert_eq!(back.light, [0.0, -1.0, 0.0]);
    }

    #[test]
    fn storage_is_column_major() {
        // Translation lives in the last column.
        let mut cols = [0.0f32; 16];
        cols[0] = 1.0;
        cols[5] = 1.0;
        cols[10] = 1.0;
        cols[12] = 7.0;
        cols[13] = 8.0;
        cols[14] = 9.0;
        cols[15] = 1.0;
        let record = ConstantRecord::from_cols_array(&cols, [0.0; 3]);

        assert_eq!(record.model_view_projection[3], [7.0, 8.0, 9.0, 1.0]);
        assert_eq!(f32_at(record.as_bytes(), 12 * 4), 7.0);
        assert_eq!(record.to_cols_array(), cols);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(ConstantRecord::default(), ConstantRecord::IDENTITY);
        assert_eq!(ConstantRecord::IDENTITY.light, [0.0; 3]);
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let err = ConstantRecord::from_bytes(&[0u8; 96]).unwrap_err();
        assert!(matches!(err, LayoutError::ByteLength { expected: 80, found: 96, .. }));
    }

    #[test]
    fn bind_entry_uses_record_size() {
        let entry = ConstantRecord::bind_group_layout_entry(0, wgpu::ShaderStages::VERTEX, true);
        match entry.ty {
            wgpu::BindingType::Buffer { ty, has_dynamic_offset, min_binding_size } => {
                assert_eq!(ty, wgpu::BufferBindingType::Uniform);
                assert!(has_dynamic_offset);
                assert_eq!(min_binding_size.map(NonZeroU64::get), Some(80));
            }
            other => panic!("unexpected binding type {other:?}"),
        }
    }
}
