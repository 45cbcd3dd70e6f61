use std::time::Duration;

use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;

use super::build_client;

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: std::future::Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

pub(crate) fn test_client() -> Result<Client, String> {
    build_client(Duration::from_secs(2), Duration::from_secs(1))
        .map_err(|err| format!("client build failed: {}", err))
}

/// URL of a port nothing listens on.
pub(crate) fn closed_port_url() -> Result<String, String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("local addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

pub(crate) async fn spawn_status_server(
    status_line: &'static str,
) -> Result<(String, watch::Sender<bool>), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                accept = listener.accept() => {
                    let (socket, _) = match accept {
                        Ok(result) => result,
                        Err(_) => break,
                    };
                    tokio::spawn(respond_after_drain(socket, status_line));
                }
            }
        }
    });

    Ok((format!("http://{}", addr), shutdown_tx))
}

async fn respond_after_drain(mut socket: TcpStream, status_line: &'static str) {
    if drain_request(&mut socket).await.is_none() {
        return;
    }
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        status_line
    );
    if socket.write_all(response.as_bytes()).await.is_err() {
        return;
    }
    let _shutdown_result = socket.shutdown().await;
}

/// Reads headers plus the Content-Length body so the client finishes its
/// upload before the response lands.
async fn drain_request(socket: &mut TcpStream) -> Option<()> {
    let mut buffer: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let read = socket.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
        if let Some(position) = find_blank_line(&buffer) {
            break position;
        }
        if buffer.len() > 65_536 {
            return None;
        }
    };

    let content_length = content_length(buffer.get(..header_end)?)?;
    let mut body_read = buffer.len().saturating_sub(header_end);
    while body_read < content_length {
        let read = socket.read(&mut chunk).await.ok()?;
        if read == 0 {
            break;
        }
        body_read = body_read.saturating_add(read);
    }
    Some(())
}

fn find_blank_line(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|position| position.saturating_add(4))
}

fn content_length(headers: &[u8]) -> Option<usize> {
    let text = std::str::from_utf8(headers).ok()?;
    for line in text.split("\r\n") {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        if name.trim().eq_ignore_ascii_case("content-length") {
            return value.trim().parse().ok();
        }
    }
    Some(0)
}
