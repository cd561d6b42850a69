use crate::domain::{MessageRef, UserId};

/// Messenger-agnostic incoming update model.
///
/// Telegram-specific fields live in the Telegram adapter.
#[derive(Clone, Debug)]
pub enum IncomingUpdate {
    Command(Command),
    Text(TextMessage),
}

#[derive(Clone, Debug)]
pub struct Sender {
    pub user_id: UserId,
    pub full_name: String,
}

#[derive(Clone, Debug)]
pub struct Command {
    pub message: MessageRef,
    pub from: Option<Sender>,
    /// Lowercased, without the leading `/` and any `@botname` suffix.
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct TextMessage {
    pub message: MessageRef,
    pub from: Option<Sender>,
    pub text: String,
}

impl IncomingUpdate {
    /// Classify a raw message text: `/cmd@bot ...` becomes a command, anything
    /// else is plain text. Command arguments are ignored.
    pub fn from_text(message: MessageRef, from: Option<Sender>, text: &str) -> Self {
        if text.starts_with('/') {
            return Self::Command(Command {
                message,
                from,
                name: command_name(text),
            });
        }
        Self::Text(TextMessage {
            message,
            from,
            text: text.to_string(),
        })
    }
}

fn command_name(text: &str) -> String {
    // Telegram may send `/cmd@botname arg1 ...`
    let first = text.split_whitespace().next().unwrap_or("");

    first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Outgoing "chat action" (presence indicator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
    UploadPhoto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatId, MessageId};

    fn msg() -> MessageRef {
        MessageRef {
            chat_id: ChatId(1),
            message_id: MessageId(7),
        }
    }

    #[test]
    fn parses_command_with_bot_suffix() {
        let IncomingUpdate::Command(cmd) = IncomingUpdate::from_text(msg(), None, "/Art@MetBot now")
        else {
            panic!("expected command");
        };
        assert_eq!(cmd.name, "art");
    }

    #[test]
    fn plain_text_is_not_a_command() {
        let IncomingUpdate::Text(t) = IncomingUpdate::from_text(msg(), None, "hello /art") else {
            panic!("expected text");
        };
        assert_eq!(t.text, "hello /art");
    }
}
