/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type. Expected failures of
/// the artwork pipeline (API down, empty search) are not errors; they surface as
/// `None` from the fetcher and selector.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
