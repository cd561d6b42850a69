//! Met collection records and the random-artwork pipeline.

pub mod record;
pub mod selector;

pub use record::{ArtworkRecord, SearchResult};
pub use selector::ArtworkSelector;
