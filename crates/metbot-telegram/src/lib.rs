//! Telegram adapter (teloxide).
//!
//! This crate implements the `metbot-core` MessagingPort over Telegram Bot API.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InputFile, ParseMode},
};

pub mod handlers;
pub mod router;

use metbot_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::ChatAction},
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    fn sent(to: MessageRef, msg: &Message) -> MessageRef {
        MessageRef {
            chat_id: to.chat_id,
            message_id: MessageId(msg.id.0),
        }
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_chat_action(&self, chat_id: ChatId, action: ChatAction) -> Result<()> {
        let tg_action = match action {
            ChatAction::Typing => teloxide::types::ChatAction::Typing,
            ChatAction::UploadPhoto => teloxide::types::ChatAction::UploadPhoto,
        };
        self.bot
            .send_chat_action(Self::tg_chat(chat_id), tg_action)
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn reply_text(&self, to: MessageRef, text: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(to.chat_id), text.to_string())
            .reply_to_message_id(Self::tg_msg_id(to.message_id))
            .await
            .map_err(Self::map_err)?;
        Ok(Self::sent(to, &msg))
    }

    async fn reply_html(&self, to: MessageRef, html: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(to.chat_id), html.to_string())
            .parse_mode(ParseMode::Html)
            .reply_to_message_id(Self::tg_msg_id(to.message_id))
            .await
            .map_err(Self::map_err)?;
        Ok(Self::sent(to, &msg))
    }

    async fn reply_photo(
        &self,
        to: MessageRef,
        photo_url: &str,
        caption_html: &str,
    ) -> Result<MessageRef> {
        let url = reqwest::Url::parse(photo_url)
            .map_err(|e| Error::External(format!("invalid photo url {photo_url}: {e}")))?;

        let msg = self
            .bot
            .send_photo(Self::tg_chat(to.chat_id), InputFile::url(url))
            .caption(caption_html.to_string())
            .parse_mode(ParseMode::Html)
            .reply_to_message_id(Self::tg_msg_id(to.message_id))
            .await
            .map_err(Self::map_err)?;
        Ok(Self::sent(to, &msg))
    }
}
