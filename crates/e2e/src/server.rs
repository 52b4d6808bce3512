//! Readiness probing of the external EmojiHub server

use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::client::{EmojiClient, RANDOM};
use crate::error::{E2eError, E2eResult};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Poll `GET /random` until the server answers with a 2xx or `timeout` elapses
pub async fn wait_until_ready(client: &EmojiClient, timeout: Duration) -> E2eResult<()> {
    let start = Instant::now();
    let mut attempts = 0;

    loop {
        attempts += 1;

        match client.get(RANDOM).await {
            Ok(resp) if resp.status.is_success() => {
                info!("Server is ready at {}", client.base_url());
                return Ok(());
            }
            Ok(resp) => {
                warn!("Readiness probe returned {}", resp.status);
            }
            Err(e) if e.is_connectivity() => {
                // Connection refused is expected while the server is starting
                if attempts == 1 {
                    info!("Waiting for server at {}...", client.base_url());
                }
            }
            Err(e) => {
                warn!("Readiness probe error: {}", e);
            }
        }

        if start.elapsed() >= timeout {
            return Err(E2eError::ServerNotReady(attempts));
        }
        sleep(POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HarnessConfig;

    #[tokio::test]
    async fn test_gives_up_on_closed_port() {
        // Bind then drop to get a port nothing listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = HarnessConfig {
            base_url: format!("http://127.0.0.1:{}/api", port),
            ..Default::default()
        };
        let client = EmojiClient::new(&config).unwrap();

        let err = wait_until_ready(&client, Duration::from_millis(250))
            .await
            .unwrap_err();
        match err {
            E2eError::ServerNotReady(attempts) => assert!(attempts >= 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
