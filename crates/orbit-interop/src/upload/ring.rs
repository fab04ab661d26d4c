use anyhow::{Context, Result};

use crate::records::ConstantRecord;

/// Uniform buffer holding one [`ConstantRecord`] per slot.
///
/// Slots are spaced by the device's `min_uniform_buffer_offset_alignment` so
/// each can be bound with a dynamic offset. Use one slot per frame in flight:
/// the CPU writes slot `frame % slots` while the GPU may still read the
/// others. The ring does not track GPU completion; choosing enough slots for
/// the frame latency is up to the caller.
#[derive(Debug)]
pub struct ConstantRing {
    buffer: wgpu::Buffer,
    slots: u32,
    stride: u64,
}

impl ConstantRing {
    pub fn new(device: &wgpu::Device, label: &str, slots: u32) -> Result<Self> {
        let alignment = u64::from(device.limits().min_uniform_buffer_offset_alignment);
        let stride = slot_stride(ConstantRecord::SIZE as u64, alignment)
            .with_context(|| format!("{label}: invalid uniform offset alignment {alignment}"))?;

        let size = ring_size(slots, stride).with_context(|| format!("{label}: bad ring size"))?;

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        log::debug!("{label}: {slots} constant slots, stride {stride} bytes");

        Ok(Self { buffer, slots, stride })
    }

    /// Writes `record` into `slot` (wrapping modulo the slot count) and
    /// returns the dynamic offset to bind it with.
    pub fn write(&self, queue: &wgpu::Queue, slot: u64, record: &ConstantRecord) -> u32 {
        let offset = self.slot_offset(slot);
        queue.write_buffer(&self.buffer, offset, record.as_bytes());
        // Bounded by the buffer size, which `ring_size` keeps within u32.
        offset as u32
    }

    /// Byte offset of `slot`, wrapping modulo the slot count.
    #[inline]
    pub fn slot_offset(&self, slot: u64) -> u64 {
        slot_offset(slot, self.slots, self.stride)
    }

    #[inline]
    pub fn slots(&self) -> u32 {
        self.slots
    }

    #[inline]
    pub fn stride(&self) -> u64 {
        self.stride
    }

    #[inline]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Binding covering exactly one slot; combine with the offset from
    /// [`write`](Self::write) and a layout entry with `has_dynamic_offset`.
    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        wgpu::BindingResource::Buffer(wgpu::BufferBinding {
            buffer: &self.buffer,
            offset: 0,
            size: Some(ConstantRecord::min_binding_size()),
        })
    }
}

/// Total buffer size for `slots` slots of `stride` bytes.
///
/// Fails for zero slots, and when the last slot's dynamic offset would not
/// fit the `u32` wgpu uses for dynamic offsets.
pub fn ring_size(slots: u32, stride: u64) -> Result<u64> {
    anyhow::ensure!(slots > 0, "constant ring needs at least one slot");
    let size = stride
        .checked_mul(u64::from(slots))
        .with_context(|| format!("{slots} slots of {stride} bytes overflow"))?;
    anyhow::ensure!(
        size <= u64::from(u32::MAX),
        "{slots} slots of {stride} bytes exceed the dynamic offset range"
    );
    Ok(size)
}

/// Byte offset of `slot`, wrapping modulo `slots`. `slots` must be non-zero,
/// as guaranteed by [`ring_size`].
#[inline]
pub fn slot_offset(slot: u64, slots: u32, stride: u64) -> u64 {
    (slot % u64::from(slots)) * stride
}

/// Distance between consecutive slots: `record_size` rounded up to
/// `alignment`. Returns `None` unless `alignment` is a power of two.
pub fn slot_stride(record_size: u64, alignment: u64) -> Option<u64> {
    if !alignment.is_power_of_two() {
        return None;
    }
    Some(record_size.next_multiple_of(alignment))
}
