//! CLI command modules
//!
//! Each binary has its own module with argument definitions and handlers.
//! Handlers write results to any `io::Write` so they can run against a mock
//! transport in tests.

pub mod nft;
pub mod token;

use clap::Args;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Flags shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl GlobalArgs {
    /// Log level for the verbosity count
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Install the stderr tracing subscriber
    pub fn init_logging(&self) {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(EnvFilter::new(self.log_filter()))
            .init();
    }
}
