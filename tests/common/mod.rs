//! Shared mock JSON-RPC endpoints for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

use rpc_failover::FailoverConfig;

/// Handle to a running mock endpoint.
pub struct MockEndpoint {
    pub addr: SocketAddr,
    hits: Arc<AtomicU32>,
}

impl MockEndpoint {
    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}/", self.addr)).unwrap()
    }

    /// Number of connections the endpoint has accepted.
    pub fn hit_count(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Start a mock endpoint answering `eth_chainId` with the given chain id,
/// after an artificial delay.
#[allow(dead_code)]
pub async fn start_chain_id_endpoint(chain_id: u64, delay: Duration) -> MockEndpoint {
    let body = format!(r#"{{"jsonrpc":"2.0","id":1,"result":"0x{:x}"}}"#, chain_id);
    start_raw_endpoint(200, body, delay).await
}

/// Start a mock endpoint answering every request with a fixed HTTP status.
#[allow(dead_code)]
pub async fn start_status_endpoint(status: u16) -> MockEndpoint {
    start_raw_endpoint(status, "{}".to_string(), Duration::ZERO).await
}

/// Start a mock endpoint answering 200 with an arbitrary body.
#[allow(dead_code)]
pub async fn start_body_endpoint(body: &str) -> MockEndpoint {
    start_raw_endpoint(200, body.to_string(), Duration::ZERO).await
}

/// Start a raw mock endpoint on an ephemeral port.
#[allow(dead_code)]
pub async fn start_raw_endpoint(status: u16, body: String, delay: Duration) -> MockEndpoint {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let hit_counter = hits.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            hit_counter.fetch_add(1, Ordering::SeqCst);
            let body = body.clone();
            tokio::spawn(async move {
                // Drain the request head before answering.
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;

                if delay > Duration::ZERO {
                    tokio::time::sleep(delay).await;
                }

                let status_text = match status {
                    200 => "200 OK",
                    429 => "429 Too Many Requests",
                    500 => "500 Internal Server Error",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    MockEndpoint { addr, hits }
}

/// A config pointing at the given endpoints, defaults otherwise.
#[allow(dead_code)]
pub fn test_config(endpoints: Vec<String>) -> FailoverConfig {
    FailoverConfig {
        endpoints,
        ..FailoverConfig::default()
    }
}
