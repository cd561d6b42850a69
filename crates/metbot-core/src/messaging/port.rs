use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::ChatAction,
    Result,
};

/// Outbound messaging port.
///
/// Every `reply_*` call answers the referenced incoming message.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_chat_action(&self, chat_id: ChatId, action: ChatAction) -> Result<()>;

    /// Plain text, no parse mode.
    async fn reply_text(&self, to: MessageRef, text: &str) -> Result<MessageRef>;

    async fn reply_html(&self, to: MessageRef, html: &str) -> Result<MessageRef>;

    /// Photo by remote URL with an HTML caption.
    async fn reply_photo(
        &self,
        to: MessageRef,
        photo_url: &str,
        caption_html: &str,
    ) -> Result<MessageRef>;
}
