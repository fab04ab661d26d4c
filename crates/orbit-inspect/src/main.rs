mod adapter;
mod config;
mod report;

use anyhow::Result;
use clap::Parser;
use orbit_interop::logging::{LoggingConfig, init_logging};
use orbit_interop::shader::WGSL_DECLARATIONS;
use orbit_interop::{ConstantRecord, VertexRecord};

use config::{InspectConfig, Mode};

fn main() -> Result<()> {
    let config = InspectConfig::parse();

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        timestamps: config.timestamps,
        ..Default::default()
    });
    log::debug!("{config:?}");

    match config.mode() {
        Mode::Table => {
            print!("{}", report::layout_table(&VertexRecord::LAYOUT));
            println!();
            print!("{}", report::layout_table(&ConstantRecord::LAYOUT));
        }
        Mode::Wgsl => print!("{WGSL_DECLARATIONS}"),
        Mode::Adapter => {
            if let Err(e) = pollster::block_on(adapter::check_adapter(config.frames_in_flight)) {
                log::error!("adapter check failed: {e:#}");
                return Err(e);
            }
        }
    }

    Ok(())
}
