use std::sync::Arc;

use rand::seq::SliceRandom;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    artwork::record::{ArtworkRecord, SearchResult},
    ports::JsonFetcher,
};

/// Match-all search restricted to public-domain objects that have images.
const SEARCH_QUERY: [(&str, &str); 3] = [
    ("hasImages", "true"),
    ("isPublicDomain", "true"),
    ("q", "*"),
];

/// Search → random pick → detail lookup.
///
/// Every failure along the way collapses to `None`; the caller decides what the
/// user sees.
#[derive(Clone)]
pub struct ArtworkSelector {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: String,
}

impl ArtworkSelector {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    pub fn object_url(&self, object_id: u64) -> String {
        format!("{}/objects/{object_id}", self.base_url)
    }

    pub async fn random_artwork(&self) -> Option<ArtworkRecord> {
        let search: SearchResult = decode(
            "search",
            self.fetcher
                .fetch_json(&self.search_url(), &SEARCH_QUERY)
                .await?,
        )?;

        let Some(object_id) = pick_random(search.ids()) else {
            tracing::warn!(total = search.total, "search returned no object ids");
            return None;
        };
        tracing::debug!(object_id, candidates = search.ids().len(), "picked object");

        let record: ArtworkRecord = decode(
            "object",
            self.fetcher
                .fetch_json(&self.object_url(object_id), &[])
                .await?,
        )?;
        if record.is_blank() {
            tracing::warn!(object_id, "object has nothing to show");
            return None;
        }
        Some(record)
    }
}

fn pick_random(ids: &[u64]) -> Option<u64> {
    ids.choose(&mut rand::thread_rng()).copied()
}

fn decode<T: DeserializeOwned>(what: &str, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::error!("unexpected {what} payload: {e}");
            None
        }
    }
}
