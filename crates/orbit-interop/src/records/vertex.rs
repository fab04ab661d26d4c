use core::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::layout::{FieldFormat, FieldLayout, LAYOUT_VERSION, LayoutError, RecordLayout};

/// Per-vertex record as read by the vertex stage.
///
/// Layout (bytes):
///
/// | field        | offset | payload | padding |
/// |--------------|--------|---------|---------|
/// | `position`   | 0      | 12      | 4       |
/// | `normal`     | 16     | 12      | 4       |
/// | `tex_coord`  | 32     | 8       | 8       |
/// | `color`      | 48     | 16      | 0       |
/// | `draw_style` | 64     | 1       | 15      |
///
/// Three-component vectors occupy 16 bytes and the record rounds up to a
/// 16-byte multiple, so the stride is 80. Padding is explicit and zeroed by
/// every constructor.
///
/// No field is validated: unit normals, UV range, color range, and the set of
/// meaningful draw styles are owned by whoever fills the record.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
pub struct VertexRecord {
    /// Model-space position.
    pub position: [f32; 3],
    _pad0: f32,
    pub normal: [f32; 3],
    _pad1: f32,
    pub tex_coord: [f32; 2],
    _pad2: [f32; 2],
    /// Straight-alpha RGBA.
    pub color: [f32; 4],
    /// Shading mode tag interpreted by the shader.
    pub draw_style: u8,
    _pad3: [u8; 15],
}

const _: () = {
    assert!(size_of::<VertexRecord>() == 80);
    assert!(offset_of!(VertexRecord, position) == 0);
    assert!(offset_of!(VertexRecord, normal) == 16);
    assert!(offset_of!(VertexRecord, tex_coord) == 32);
    assert!(offset_of!(VertexRecord, color) == 48);
    assert!(offset_of!(VertexRecord, draw_style) == 64);
};

const VERTEX_FIELDS: [FieldLayout; 5] = [
    FieldLayout::new("position", offset_of!(VertexRecord, position), FieldFormat::Float32x3),
    FieldLayout::new("normal", offset_of!(VertexRecord, normal), FieldFormat::Float32x3),
    FieldLayout::new("tex_coord", offset_of!(VertexRecord, tex_coord), FieldFormat::Float32x2),
    FieldLayout::new("color", offset_of!(VertexRecord, color), FieldFormat::Float32x4),
    FieldLayout::new("draw_style", offset_of!(VertexRecord, draw_style), FieldFormat::Uint8),
];

impl VertexRecord {
    /// Record size and vertex buffer stride in bytes.
    pub const SIZE: usize = size_of::<Self>();

    pub const LAYOUT: RecordLayout = RecordLayout {
        name: "VertexRecord",
        version: LAYOUT_VERSION,
        size: Self::SIZE as u64,
        fields: &VERTEX_FIELDS,
    };

    // Shader locations follow field order.
    const ATTRS: [wgpu::VertexAttribute; 5] = [
        attribute(VERTEX_FIELDS[0], 0),
        attribute(VERTEX_FIELDS[1], 1),
        attribute(VERTEX_FIELDS[2], 2),
        attribute(VERTEX_FIELDS[3], 3),
        attribute(VERTEX_FIELDS[4], 4),
    ];

    /// Vertex at `position` with the given color; normal, tex coord, and draw
    /// style are zero.
    #[inline]
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color, ..Self::zeroed() }
    }

    #[inline]
    pub fn with_normal(mut self, normal: [f32; 3]) -> Self {
        self.normal = normal;
        self
    }

    #[inline]
    pub fn with_tex_coord(mut self, tex_coord: [f32; 2]) -> Self {
        self.tex_coord = tex_coord;
        self
    }

    #[inline]
    pub fn with_draw_style(mut self, draw_style: u8) -> Self {
        self.draw_style = draw_style;
        self
    }

    /// Vertex buffer layout for pipelines consuming this record at one slot.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::SIZE as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Raw bytes as uploaded to the GPU (native byte order).
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

/// Padding is not part of the value.
impl PartialEq for VertexRecord {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.normal == other.normal
            && self.tex_coord == other.tex_coord
            && self.color == other.color
            && self.draw_style == other.draw_style
    }
}

const fn attribute(field: FieldLayout, shader_location: u32) -> wgpu::VertexAttribute {
    let format = match field.format.vertex_format() {
        Some(format) => format,
        None => panic!("field format cannot be fetched as a vertex attribute"),
    };
    wgpu::VertexAttribute {
        format,
        offset: field.offset,
        shader_location,
    }
}
