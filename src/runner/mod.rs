
use std::io::Write;

use rand::Rng;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::AppResult;
use crate::http::post_payload;
use crate::payload::PayloadSpec;

/// Drives the generate-send-report loop: one payload per iteration, one
/// request in flight at a time, one status line per request. Failed requests
/// are reported as ERR and the loop keeps going.
///
/// # Errors
///
/// Returns an error only when writing to the output sink fails; request
/// failures never abort the loop.
pub async fn run_load<R, W>(
    client: &Client,
    endpoint: &Url,
    total: u64,
    spec: &PayloadSpec,
    rng: &mut R,
    out: &mut W,
) -> AppResult<()>
where
    R: Rng,
    W: Write,
{
    for index in 1..=total {
        write!(out, "Sending request {}/{}... ", index, total)?;
        out.flush()?;

        let payload = spec.generate(rng);
        let outcome = post_payload(client, endpoint, &payload).await;

        if outcome.success {
            writeln!(out, "OK")?;
        } else {
            match outcome.status {
                Some(status) => debug!("Request {} answered with status {}", index, status),
                None => debug!("Request {} got no response", index),
            }
            writeln!(out, "ERR")?;
        }
    }

    Ok(())
}
