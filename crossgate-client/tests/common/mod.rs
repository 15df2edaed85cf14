// crossgate-client/tests/common/mod.rs
// Shared stub-server plumbing for the integration tests.

use std::sync::Arc;

use axum::Router;
use crossgate_client::{ClientConfig, CrossgateClient, MemorySessionStore};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral port and return the base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn client(base_url: &str, session: Arc<MemorySessionStore>) -> CrossgateClient {
    CrossgateClient::new(&ClientConfig::new(base_url), session).unwrap()
}
