//! Logger setup shared by the library's tools.
//!
//! The library itself only emits through the `log` facade; binaries call
//! [`init_logging`] once to install the `env_logger` backend.

mod init;

pub use init::{LoggingConfig, init_logging};
