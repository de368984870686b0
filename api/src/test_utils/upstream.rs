//! Fake upstream services
//!
//! Serves an axum router on an ephemeral local port so HTTP clients can be
//! exercised end to end.

use axum::Router;
use tokio::net::TcpListener;

/// Serve `router` in the background and return its base URL
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{}", addr)
}
