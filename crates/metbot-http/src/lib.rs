//! HTTP adapter (Met collection API).
//!
//! Implements the `metbot-core` JsonFetcher port over reqwest with rustls and the
//! bundled webpki root store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;

use metbot_core::{config::Config, errors::Error, ports::JsonFetcher, Result};

#[derive(Clone, Debug)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        Self::with_builder(reqwest::Client::builder(), user_agent, timeout)
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(&cfg.user_agent, cfg.http_timeout)
    }

    fn with_builder(
        builder: reqwest::ClientBuilder,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| Error::Config(format!("invalid user agent: {e}")))?,
        );

        let http = builder
            .use_rustls_tls()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::External(format!("http client build error: {e}")))?;

        Ok(Self { http })
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::External(format!("request error: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::External(format!("{url} returned {status}")));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| Error::External(format!("invalid json from {url}: {e}")))
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str, query: &[(&str, &str)]) -> Option<Value> {
        match self.get_json(url, query).await {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::error!("API request failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP/1.1 response and capture the raw request head.
    async fn serve_once(status_line: &str, body: &str) -> (String, Arc<Mutex<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let captured = Arc::new(Mutex::new(String::new()));

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let sink = captured.clone();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut head = Vec::new();
            loop {
                let n = sock.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            *sink.lock().unwrap() = String::from_utf8_lossy(&head).to_string();
            sock.write_all(response.as_bytes()).await.unwrap();
            let _ = sock.shutdown().await;
        });

        (format!("http://{addr}"), captured)
    }

    fn fetcher_with_timeout(timeout: Duration) -> HttpFetcher {
        // Local test servers must not be routed through an ambient HTTP_PROXY.
        HttpFetcher::with_builder(
            reqwest::Client::builder().no_proxy(),
            "MetArtTelegramBot/1.0",
            timeout,
        )
        .unwrap()
    }

    fn fetcher() -> HttpFetcher {
        fetcher_with_timeout(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn returns_json_and_sends_user_agent_and_query() {
        let (base, captured) = serve_once("200 OK", r#"{"total":2,"objectIDs":[101,202]}"#).await;

        let v = fetcher()
            .fetch_json(
                &format!("{base}/search"),
                &[("hasImages", "true"), ("isPublicDomain", "true"), ("q", "*")],
            )
            .await
            .unwrap();
        assert_eq!(v["objectIDs"], serde_json::json!([101, 202]));

        let head = captured.lock().unwrap().clone();
        let request_line = head.lines().next().unwrap_or_default().to_string();
        assert!(request_line.starts_with("GET /search?hasImages=true&isPublicDomain=true&q="));
        assert!(head
            .to_lowercase()
            .contains("user-agent: metarttelegrambot/1.0"));
    }

    #[tokio::test]
    async fn non_success_status_is_unavailable() {
        let (base, _) = serve_once("404 Not Found", r#"{"message":"Not a valid object"}"#).await;
        assert!(fetcher()
            .fetch_json(&format!("{base}/objects/1"), &[])
            .await
            .is_none());

        let (base, _) = serve_once("503 Service Unavailable", "").await;
        assert!(fetcher()
            .fetch_json(&format!("{base}/search"), &[])
            .await
            .is_none());
    }

    #[tokio::test]
    async fn undecodable_body_is_unavailable() {
        let (base, _) = serve_once("200 OK", "<html>maintenance</html>").await;
        assert!(fetcher()
            .fetch_json(&format!("{base}/search"), &[])
            .await
            .is_none());
    }

    #[tokio::test]
    async fn connection_refused_is_unavailable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert!(fetcher()
            .fetch_json(&format!("http://{addr}/search"), &[])
            .await
            .is_none());
    }

    #[tokio::test]
    async fn stalled_server_times_out_as_unavailable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (release, hold) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            // Accept and keep the socket open without ever answering.
            let (_sock, _) = listener.accept().await.unwrap();
            let _ = hold.await;
        });

        let started = std::time::Instant::now();
        let v = fetcher_with_timeout(Duration::from_millis(100))
            .fetch_json(&format!("http://{addr}/search"), &[])
            .await;
        assert!(v.is_none());
        assert!(started.elapsed() < Duration::from_secs(5));

        let _ = release.send(());
    }

    #[test]
    fn rejects_invalid_user_agent() {
        let err = HttpFetcher::new("bad\nagent", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
