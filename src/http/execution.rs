use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::payload::Payload;

#[derive(Debug)]
pub struct RequestOutcome {
    pub status: Option<u16>,
    pub success: bool,
}

/// Sends one payload as a JSON POST body and classifies the result.
///
/// Timeouts, transport errors, non-2xx statuses, and body-read failures all
/// collapse into an unsuccessful outcome; nothing propagates past the
/// per-request boundary.
pub async fn post_payload(client: &Client, endpoint: &Url, payload: &Payload) -> RequestOutcome {
    match client.post(endpoint.clone()).json(payload).send().await {
        Ok(response) => {
            let status = response.status();
            match response.bytes().await {
                Ok(_) => RequestOutcome {
                    status: Some(status.as_u16()),
                    success: status.is_success(),
                },
                Err(err) => {
                    debug!("Failed to read response body: {}", err);
                    RequestOutcome {
                        status: Some(status.as_u16()),
                        success: false,
                    }
                }
            }
        }
        Err(err) => {
            if err.is_timeout() {
                debug!("Request timed out: {}", err);
            } else {
                debug!("Request failed: {}", err);
            }
            RequestOutcome {
                status: None,
                success: false,
            }
        }
    }
}
