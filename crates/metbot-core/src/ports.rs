use async_trait::async_trait;
use serde_json::Value;

/// Hexagonal port for outbound JSON requests.
///
/// Implementations swallow every failure (transport, non-2xx status, undecodable
/// body), log it, and return `None`. Callers only ever see "value or nothing".
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch_json(&self, url: &str, query: &[(&str, &str)]) -> Option<Value>;
}
