#![allow(dead_code)]
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const V4: &str = "10.0.0.1";
pub const V6: &str = "fe80::50cc:d1ff:fe57:8cb6";

/// A name carrying URL syntax; only reachable when sent as a single segment.
pub const ODD_NAME: &str = "odd ?#/ name.org";

/// Lookup service double serving `/rest/v1/dns/{qtype}/{domain}`.
///
/// - `example.org`: both families
/// - `v4only.org`: A only
/// - `malformed.org`: 200 with a non-JSON body
/// - `badaddr.org`: 200 with an invalid IPv4 literal
/// - `odd ?#/ name.org` (after percent-decoding): A only
/// - anything else: 404
pub struct MockRestBackend {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockRestBackend {
    pub async fn start() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let app = Router::new().route("/rest/v1/dns/{qtype}/{domain}", get(lookup));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Base URL without the trailing slash, as a user would type it.
    pub fn base_url(&self) -> String {
        format!("http://{}/rest/v1/dns", self.addr)
    }
}

impl Drop for MockRestBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn lookup(Path((qtype, domain)): Path<(String, String)>) -> Response {
    if qtype != "A" && qtype != "AAAA" && qtype != "ALL" {
        return (StatusCode::BAD_REQUEST, "Only A and AAAA supported").into_response();
    }

    match domain.as_str() {
        "example.org" => Json(json!({ "a": [V4], "aaaa": [V6] })).into_response(),
        "v4only.org" => Json(json!({ "a": [V4], "aaaa": [] })).into_response(),
        "malformed.org" => (StatusCode::OK, "<html>oops</html>").into_response(),
        ODD_NAME => Json(json!({ "a": [V4], "aaaa": [] })).into_response(),
        "badaddr.org" => Json(json!({ "a": ["10.0.0.256"], "aaaa": [] })).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
