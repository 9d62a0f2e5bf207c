//! Minimal in-process HTTP stub used by adapter contract tests.
//!
//! A bare `tokio::net::TcpListener` loop rather than a mocking crate, so
//! adapter tests exercise a real request/response round trip without the
//! rest of the stack needing a new dependency.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Clone)]
struct StubResponse {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

/// A local HTTP server bound to an ephemeral port, serving canned bodies by
/// exact path match. Adapters under test point their `SourceConfig` /
/// endpoint URLs at `server.base_url()`.
pub struct StubServer {
    addr: std::net::SocketAddr,
    routes: Arc<Mutex<HashMap<String, StubResponse>>>,
}

impl StubServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("binding stub server");
        let addr = listener.local_addr().expect("local addr");
        let routes: Arc<Mutex<HashMap<String, StubResponse>>> = Arc::new(Mutex::new(HashMap::new()));

        let routes_for_task = routes.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let routes = routes_for_task.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let Ok(n) = socket.read(&mut buf).await else {
                        return;
                    };
                    let request = String::from_utf8_lossy(&buf[..n]);
                    let path = request
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();

                    let response = routes.lock().await.get(&path).cloned();
                    let bytes = match response {
                        Some(r) => format!(
                            "HTTP/1.1 {} OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                            r.status,
                            r.content_type,
                            r.body.len()
                        )
                        .into_bytes()
                        .into_iter()
                        .chain(r.body)
                        .collect::<Vec<u8>>(),
                        None => b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                            .to_vec(),
                    };
                    let _ = socket.write_all(&bytes).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { addr, routes }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    async fn serve(&self, path: &str, status: u16, content_type: &'static str, body: Vec<u8>) {
        self.routes.lock().await.insert(
            path.to_string(),
            StubResponse { status, content_type, body },
        );
    }

    pub async fn serve_json(&self, path: &str, value: serde_json::Value) {
        self.serve(path, 200, "application/json", value.to_string().into_bytes())
            .await;
    }

    pub async fn serve_text(&self, path: &str, body: impl Into<String>) {
        self.serve(path, 200, "text/plain; charset=utf-8", body.into().into_bytes())
            .await;
    }

    pub async fn serve_html(&self, path: &str, body: impl Into<String>) {
        self.serve(path, 200, "text/html; charset=utf-8", body.into().into_bytes())
            .await;
    }

    pub async fn serve_xml(&self, path: &str, body: impl Into<String>) {
        self.serve(path, 200, "application/xml; charset=utf-8", body.into().into_bytes())
            .await;
    }
}
