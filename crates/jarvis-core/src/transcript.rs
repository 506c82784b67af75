//! Append-only conversation transcript for a session.

use jarvis_protocol::Message;
use log::debug;
use parking_lot::RwLock;

/// Ordered, append-only message log held in memory for the session.
///
/// Messages are never mutated or removed; the log grows unbounded until the
/// session ends.
#[derive(Default)]
pub struct Transcript {
    messages: RwLock<Vec<Message>>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the log.
    pub fn append(&self, message: Message) {
        debug!(
            "appending message (role={}, content_len={})",
            message.role.as_str(),
            message.content.len()
        );
        self.messages.write().push(message);
    }

    /// Return a snapshot of all messages in insertion order.
    pub fn all(&self) -> Vec<Message> {
        self.messages.read().clone()
    }

    /// Number of messages appended so far.
    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    /// Whether no message has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}
