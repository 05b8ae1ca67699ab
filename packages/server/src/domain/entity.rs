//! Core domain models for the chat room.

use std::fmt;

use tokio::sync::mpsc;

/// Capacity of every participant mailbox
pub const MAILBOX_CAPACITY: usize = 1000;

/// Capacity of the room-wide inbound queue
pub const INBOUND_CAPACITY: usize = 1000;

/// Receiving half of a participant mailbox, read by the transport.
pub type Mailbox = mpsc::Receiver<Message>;

/// Sending half of a participant mailbox, held by the registry.
pub type MailboxSender = mpsc::Sender<Message>;

/// Kind of a message, which decides how it is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Authored by a participant
    Chat,
    /// Notice generated by the room itself
    Server,
}

/// Represents a message travelling through the room.
///
/// Immutable once built: fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    kind: MessageKind,
    content: String,
    author: Option<String>,
}

impl Message {
    /// Create a chat message authored by `author`.
    ///
    /// The author is a display string, not necessarily a registered name
    /// (whispers use `"{name} (whispering)"`).
    pub fn chat(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Chat,
            content: content.into(),
            author: Some(author.into()),
        }
    }

    /// Create a server notice
    pub fn server(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Server,
            content: content.into(),
            author: None,
        }
    }

    /// Create a whisper from `author`, delivered by the `tell` command
    pub fn whisper(author: &str, content: impl Into<String>) -> Self {
        Self::chat(format!("{author} (whispering)"), content)
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

/// Renders the message the way clients display it:
/// `# {content}` for server notices, `{author}: {content}` for chat.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MessageKind::Server => write!(f, "# {}", self.content),
            MessageKind::Chat => write!(
                f,
                "{}: {}",
                self.author.as_deref().unwrap_or_default(),
                self.content
            ),
        }
    }
}
