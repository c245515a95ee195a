//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::{session::ExitBehavior, timer::SettingsPayload};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "station-timer")]
#[command(about = "An interval timer that sequences active and break phases across stations")]
#[command(version)]
pub struct Config {
    /// Port to bind the control server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Active phase length in seconds
    #[arg(short, long)]
    pub duration: Option<u64>,

    /// Break phase length in seconds
    #[arg(short, long)]
    pub break_duration: Option<u64>,

    /// Number of stations
    #[arg(short, long)]
    pub repeats: Option<u64>,

    /// What an exit request does
    #[arg(long, value_enum, default_value_t = ExitBehavior::Terminate)]
    pub exit_behavior: ExitBehavior,

    /// Milliseconds per countdown tick
    #[arg(long, default_value = "1000", hide = true)]
    pub tick_ms: u64,

    /// Do not echo the counter to the terminal
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Settings given on the command line, when all three are present
    pub fn initial_settings(&self) -> Option<SettingsPayload> {
        match (self.duration, self.break_duration, self.repeats) {
            (Some(duration), Some(break_duration), Some(repeats)) => {
                Some(SettingsPayload::new(duration, break_duration, repeats))
            }
            _ => None,
        }
    }
}
