use std::sync::Arc;

use teloxide::{
    dispatching::Dispatcher, dptree, error_handlers::LoggingErrorHandler, prelude::*,
    types::BotCommand, update_listeners::Polling,
};

use metbot_core::{
    config::Config,
    dispatch::{ArtBot, ART_COMMAND},
    messaging::port::MessagingPort,
    ports::JsonFetcher,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub bot: ArtBot,
}

pub async fn run_polling(cfg: Arc<Config>, fetcher: Arc<dyn JsonFetcher>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    match bot.get_me().await {
        Ok(me) => tracing::info!("metbot started: @{}", me.username()),
        Err(e) => tracing::warn!("get_me failed: {e}"),
    }
    tracing::info!("Met API: {}", cfg.met_base_url);

    // Best-effort: only affects the command menu in Telegram clients.
    if let Err(e) = bot
        .set_my_commands(vec![BotCommand::new(
            ART_COMMAND,
            "Random public-domain artwork from the Met",
        )])
        .await
    {
        tracing::warn!("set_my_commands failed: {e}");
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState {
        bot: ArtBot::from_config(&cfg, fetcher, messenger),
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    let listener = Polling::builder(bot.clone())
        .drop_pending_updates()
        .build();

    tracing::info!("Bot is running...");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}
