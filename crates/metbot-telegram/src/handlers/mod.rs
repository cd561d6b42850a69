//! Telegram update handlers.
//!
//! Translate a teloxide `Message` into the messenger-agnostic `IncomingUpdate`
//! and hand it to the core `ArtBot`.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use metbot_core::{
    domain::{ChatId, MessageId, MessageRef, UserId},
    messaging::types::{IncomingUpdate, Sender},
};

use crate::router::AppState;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(update) = to_incoming(&msg) else {
        return Ok(());
    };

    if let Err(e) = state.bot.handle(update).await {
        tracing::error!(chat_id = msg.chat.id.0, "failed to handle message: {e}");
    }

    Ok(())
}

/// Only text messages are handled; everything else maps to `None`.
fn to_incoming(msg: &Message) -> Option<IncomingUpdate> {
    let text = msg.text()?;
    let from = msg.from().map(|u| Sender {
        user_id: UserId(u.id.0),
        full_name: u.full_name(),
    });
    let message = MessageRef {
        chat_id: ChatId(msg.chat.id.0),
        message_id: MessageId(msg.id.0),
    };
    Some(IncomingUpdate::from_text(message, from, text))
}
