use anyhow::{Context, Result};
use orbit_interop::layout::RecordUsage;
use orbit_interop::upload::slot_stride;
use orbit_interop::{ConstantRecord, VertexRecord};

/// Requests a GPU adapter (no surface) and checks both records against its
/// limits.
pub async fn check_adapter(frames_in_flight: u32) -> Result<()> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .context("failed to find a GPU adapter")?;

    let info = adapter.get_info();
    let limits = adapter.limits();
    log::info!("adapter: {} ({:?})", info.name, info.backend);

    VertexRecord::LAYOUT.check_limits(RecordUsage::Vertex, &limits)?;
    ConstantRecord::LAYOUT.check_limits(RecordUsage::Uniform, &limits)?;

    let alignment = u64::from(limits.min_uniform_buffer_offset_alignment);
    let stride = slot_stride(ConstantRecord::SIZE as u64, alignment)
        .with_context(|| format!("adapter reports invalid uniform alignment {alignment}"))?;

    println!("adapter            {} ({:?})", info.name, info.backend);
    println!(
        "vertex stride      {} / {} max",
        VertexRecord::SIZE,
        limits.max_vertex_buffer_array_stride
    );
    println!(
        "vertex attributes  {} / {} max",
        VertexRecord::LAYOUT.fields.len(),
        limits.max_vertex_attributes
    );
    println!("uniform alignment  {alignment}");
    println!(
        "constant ring      {frames_in_flight} slots x {stride} bytes = {} bytes",
        stride * u64::from(frames_in_flight)
    );
    println!("ok");

    Ok(())
}
