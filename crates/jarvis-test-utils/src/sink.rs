//! Message sink that records everything it receives.

use jarvis_protocol::{Message, MessageSink};
use parking_lot::Mutex;

/// Sink capturing emitted messages for assertions.
#[derive(Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<Message>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in order.
    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().clone()
    }
}

impl MessageSink for CollectingSink {
    fn emit(&self, message: Message) {
        self.messages.lock().push(message);
    }
}
