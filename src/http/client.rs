use std::time::Duration;

use reqwest::Client;

use crate::error::{AppError, AppResult, HttpError};

fn default_user_agent() -> String {
    format!("logload/{}", env!("CARGO_PKG_VERSION"))
}

/// Builds the HTTP client used for the whole run.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(request_timeout: Duration, connect_timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .user_agent(default_user_agent())
        .timeout(request_timeout)
        .connect_timeout(connect_timeout)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
