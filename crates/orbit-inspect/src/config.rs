use clap::Parser;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    Table,
    Wgsl,
    Adapter,
}

/// Inspects the orbit shader interop layouts.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "orbit-inspect", version)]
pub struct InspectConfig {
    /// Print the WGSL declarations of the records.
    #[arg(long, conflicts_with = "adapter")]
    pub wgsl: bool,

    /// Check the layouts against the limits of a real GPU adapter.
    #[arg(long)]
    pub adapter: bool,

    /// Frames in flight, i.e. constant ring slots assumed by --adapter.
    #[arg(
        long = "frames",
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub frames_in_flight: u32,

    /// env_logger filter, overrides RUST_LOG.
    #[arg(long = "log", value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Prefix log lines with a timestamp.
    #[arg(long)]
    pub timestamps: bool,
}

impl InspectConfig {
    pub fn mode(&self) -> Mode {
        if self.wgsl {
            Mode::Wgsl
        } else if self.adapter {
            Mode::Adapter
        } else {
            Mode::Table
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<InspectConfig, clap::Error> {
        let argv = std::iter::once("orbit-inspect").chain(args.iter().copied());
        InspectConfig::try_parse_from(argv)
    }

    #[test]
    fn no_args_prints_table() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.mode(), Mode::Table);
        assert_eq!(config.frames_in_flight, 2);
        assert_eq!(config.log_filter, None);
        assert!(!config.timestamps);
    }

    #[test]
    fn adapter_with_frames_and_filter() {
        let config = parse(&["--adapter", "--frames", "3", "--log", "debug"]).unwrap();
        assert_eq!(config.mode(), Mode::Adapter);
        assert_eq!(config.frames_in_flight, 3);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn wgsl_mode() {
        assert_eq!(parse(&["--wgsl"]).unwrap().mode(), Mode::Wgsl);
    }

    #[test]
    fn timestamps_flag() {
        assert!(parse(&["--timestamps"]).unwrap().timestamps);
    }

    #[test]
    fn help_is_reported_as_display_help() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn conflicting_modes_fail() {
        let err = parse(&["--wgsl", "--adapter"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn zero_frames_fail() {
        let err = parse(&["--frames", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn unknown_argument_fails() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
