mod cli;
mod defaults;
mod parsers;
mod types;


pub use cli::LoadArgs;
pub use defaults::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUESTS, DEFAULT_REQUEST_TIMEOUT};
pub(crate) use parsers::parse_duration_value;
pub use types::PositiveU64;
