mod client;
mod execution;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::build_client;
pub use execution::{RequestOutcome, post_payload};
