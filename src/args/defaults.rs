use std::time::Duration;

/// Requests sent per run unless overridden by `--requests` or config.
pub const DEFAULT_REQUESTS: u64 = 3000;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
