//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use api_relay::{HttpServer, RelayConfig, Shutdown};

/// Serve `app` as the mock upstream on an ephemeral port.
pub async fn start_upstream(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}

/// An address nothing is listening on.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Relay config pointing at `http://<upstream>/posts`.
pub fn relay_config(upstream: SocketAddr) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.upstream.resource_url = format!("http://{}/posts", upstream);
    config.upstream.use_env_proxy = false;
    config
}

/// A running relay; shut down when dropped.
pub struct RelayHandle {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl RelayHandle {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for RelayHandle {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Bind the relay on an ephemeral port and serve it in the background.
pub async fn start_relay(config: RelayConfig) -> RelayHandle {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).expect("relay should build");

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    RelayHandle { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
