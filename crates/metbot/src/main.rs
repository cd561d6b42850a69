use std::sync::Arc;

use metbot_core::{config::Config, ports::JsonFetcher};
use metbot_http::HttpFetcher;

#[tokio::main]
async fn main() -> Result<(), metbot_core::Error> {
    metbot_core::logging::init("metbot")?;

    let cfg = Arc::new(Config::load()?);
    let fetcher: Arc<dyn JsonFetcher> = Arc::new(HttpFetcher::from_config(&cfg)?);

    metbot_telegram::router::run_polling(cfg, fetcher)
        .await
        .map_err(|e| metbot_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
