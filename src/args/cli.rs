use std::time::Duration;

use clap::Parser;

use super::parsers::{parse_duration_value, parse_positive_u64};
use super::types::PositiveU64;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Randomized-payload HTTP load generator - builds random telemetry bodies and POSTs them in a fixed-count loop with per-request OK/ERR reporting."
)]
pub struct LoadArgs {
    /// Target endpoint URL to POST generated payloads to
    pub endpoint: Option<String>,

    /// Total number of requests to send (default: 3000)
    #[arg(long = "requests", short = 'n', value_parser = parse_positive_u64)]
    pub requests: Option<PositiveU64>,

    /// Fixed info tag to send instead of a randomly generated one
    #[arg(long = "tag")]
    pub tag: Option<String>,

    /// Seed for the payload random source (reproducible payload streams)
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Request timeout (supports ms/s/m/h, default: 10s)
    #[arg(long = "timeout", value_parser = parse_duration_value)]
    pub request_timeout: Option<Duration>,

    /// Timeout for establishing a new connection (supports ms/s/m/h, default: 5s)
    #[arg(long = "connect-timeout", value_parser = parse_duration_value)]
    pub connect_timeout: Option<Duration>,

    /// Path to config file (TOML/JSON). Defaults to ./logload.toml or ./logload.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by LOGLOAD_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
