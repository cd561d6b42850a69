//! Update handlers: `/art` and echo.
//!
//! Each update is handled independently; `ArtBot` holds no mutable state, so
//! concurrent handlers never contend.

use std::{sync::Arc, time::Duration};

use crate::{
    artwork::ArtworkSelector,
    config::Config,
    domain::MessageRef,
    formatting::{escape_html, render},
    messaging::{
        port::MessagingPort,
        types::{ChatAction, Command, IncomingUpdate, Sender, TextMessage},
    },
    ports::JsonFetcher,
    Result,
};

pub const ART_COMMAND: &str = "art";

pub const FETCH_FAILED_TEXT: &str = "🚫 Couldn't fetch artwork. Please try again later.";

#[derive(Clone)]
pub struct ArtBot {
    selector: ArtworkSelector,
    messenger: Arc<dyn MessagingPort>,
    echo_delay: Duration,
}

impl ArtBot {
    pub fn new(
        selector: ArtworkSelector,
        messenger: Arc<dyn MessagingPort>,
        echo_delay: Duration,
    ) -> Self {
        Self {
            selector,
            messenger,
            echo_delay,
        }
    }

    pub fn from_config(
        cfg: &Config,
        fetcher: Arc<dyn JsonFetcher>,
        messenger: Arc<dyn MessagingPort>,
    ) -> Self {
        Self::new(
            ArtworkSelector::new(fetcher, cfg.met_base_url.clone()),
            messenger,
            cfg.echo_delay,
        )
    }

    pub async fn handle(&self, update: IncomingUpdate) -> Result<()> {
        match update {
            IncomingUpdate::Command(cmd) if cmd.name == ART_COMMAND => self.handle_art(&cmd).await,
            IncomingUpdate::Command(cmd) => {
                tracing::debug!(command = %cmd.name, "ignoring unknown command");
                Ok(())
            }
            IncomingUpdate::Text(msg) => self.handle_echo(&msg).await,
        }
    }

    pub async fn handle_art(&self, cmd: &Command) -> Result<()> {
        let to = cmd.message;
        tracing::info!("Art request from {}", describe(cmd.from.as_ref()));

        self.chat_action(to, ChatAction::UploadPhoto).await;

        let Some(record) = self.selector.random_artwork().await else {
            self.messenger.reply_text(to, FETCH_FAILED_TEXT).await?;
            return Ok(());
        };

        let rendered = render(&record);
        let caption = rendered.caption_html;

        let Some(image_url) = rendered.image_url else {
            let html = format!("❌ No image available for this artwork\n\n{caption}");
            self.messenger.reply_html(to, &html).await?;
            return Ok(());
        };

        if let Err(e) = self.messenger.reply_photo(to, &image_url, &caption).await {
            tracing::error!(object_id = ?record.object_id, "Failed to send image: {e}");
            let html = format!(
                "🖼️ Image available at: {}\n\n{caption}",
                escape_html(&image_url)
            );
            self.messenger.reply_html(to, &html).await?;
        }

        Ok(())
    }

    pub async fn handle_echo(&self, msg: &TextMessage) -> Result<()> {
        self.chat_action(msg.message, ChatAction::Typing).await;
        tokio::time::sleep(self.echo_delay).await;
        self.messenger.reply_text(msg.message, &msg.text).await?;
        Ok(())
    }

    /// Presence indicators are cosmetic; a failure must not abort the handler.
    async fn chat_action(&self, to: MessageRef, action: ChatAction) {
        if let Err(e) = self.messenger.send_chat_action(to.chat_id, action).await {
            tracing::warn!("failed to send chat action {action:?}: {e}");
        }
    }
}

fn describe(sender: Option<&Sender>) -> String {
    match sender {
        Some(s) => format!("{} ({})", s.full_name, s.user_id.0),
        None => "unknown user".to_string(),
    }
}
