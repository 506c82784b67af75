//! Assistant session facade owning the transcript and wiring the
//! interpreter to the simulator.

use crate::config::AssistantConfig;
use crate::error::JarvisCoreError;
use crate::interpreter::Interpreter;
use crate::simulator::Simulator;
use crate::transcript::Transcript;
use jarvis_protocol::{Message, MessageSink, RandomSource, Scheduler};
use log::{info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;

/// Notice appended when listening is requested without a capture collaborator.
pub const CAPTURE_UNAVAILABLE_NOTICE: &str =
    "Speech capture not available. Type your commands instead.";
const LISTENING_STARTED_NOTICE: &str = "Listening... Say 'Hey Jarvis' followed by your command.";
const LISTENING_STOPPED_NOTICE: &str = "Listening stopped.";

/// Sink that appends to the owned transcript and fans messages out to
/// broadcast subscribers.
struct TranscriptSink {
    transcript: Arc<Transcript>,
    sender: broadcast::Sender<Message>,
}

impl MessageSink for TranscriptSink {
    fn emit(&self, message: Message) {
        self.transcript.append(message.clone());
        // Send failures just mean nobody is subscribed right now.
        let _ = self.sender.send(message);
    }
}

/// Top-level session controller for one conversation.
///
/// Utterances enter through [`Assistant::handle_utterance`] regardless of
/// whether they came from speech capture or typed input; appended messages
/// leave through the transcript and the broadcast subscription.
pub struct Assistant {
    config: AssistantConfig,
    interpreter: Interpreter,
    simulator: Simulator,
    sink: Arc<TranscriptSink>,
    listening: AtomicBool,
}

impl Assistant {
    /// Build a session and append the greeting system message.
    pub fn new(
        config: AssistantConfig,
        scheduler: Arc<dyn Scheduler>,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self, JarvisCoreError> {
        info!(
            "initializing assistant session (event_buffer={}, speech_capture={})",
            config.event_buffer, config.speech_capture
        );
        let interpreter = Interpreter::new()?;
        let simulator = Simulator::new(scheduler, random);
        let (sender, _) = broadcast::channel(config.event_buffer.max(1));
        let sink = Arc::new(TranscriptSink {
            transcript: Arc::new(Transcript::new()),
            sender,
        });
        sink.emit(Message::system(config.greeting.clone()));
        Ok(Self {
            config,
            interpreter,
            simulator,
            sink,
            listening: AtomicBool::new(false),
        })
    }

    /// Subscribe to messages as they are appended, delayed replies included.
    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.sink.sender.subscribe()
    }

    /// Handle on the session transcript.
    pub fn transcript(&self) -> Arc<Transcript> {
        self.sink.transcript.clone()
    }

    /// Process a finalized utterance from any input source.
    ///
    /// Empty input and utterances without the wake word are silently
    /// dropped; nothing is appended for them. On a match the user echo is
    /// appended first, then the simulator emits its two messages.
    pub fn handle_utterance(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        let Some(intent) = self.interpreter.classify(trimmed) else {
            return;
        };
        info!(
            "handling command (category={})",
            intent.category().as_str()
        );
        self.sink.emit(Message::user(trimmed));
        let sink: Arc<dyn MessageSink> = self.sink.clone();
        self.simulator.execute(intent, sink);
    }

    /// Request speech capture. Without a capture collaborator this appends
    /// one informational system message and reports failure; it is never an
    /// error.
    pub fn start_listening(&self) -> bool {
        if !self.config.speech_capture {
            warn!("speech capture requested but not configured");
            self.sink.emit(Message::system(CAPTURE_UNAVAILABLE_NOTICE));
            return false;
        }
        self.listening.store(true, Ordering::SeqCst);
        self.sink.emit(Message::system(LISTENING_STARTED_NOTICE));
        true
    }

    /// Stop speech capture if it was active.
    pub fn stop_listening(&self) {
        if self.listening.swap(false, Ordering::SeqCst) {
            self.sink.emit(Message::system(LISTENING_STOPPED_NOTICE));
        }
    }

    /// Whether capture is currently active.
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::{Assistant, CAPTURE_UNAVAILABLE_NOTICE};
    use crate::config::AssistantConfig;
    use jarvis_protocol::Role;
    use jarvis_test_utils::{ConstRandom, ManualScheduler};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn assistant(config: AssistantConfig) -> (Assistant, Arc<ManualScheduler>) {
        let scheduler = Arc::new(ManualScheduler::new());
        let assistant = Assistant::new(config, scheduler.clone(), Arc::new(ConstRandom::new(0.9)))
            .expect("assistant");
        (assistant, scheduler)
    }

    #[test]
    fn greeting_is_appended_on_start() {
        let (assistant, _scheduler) = assistant(AssistantConfig::default());
        let all = assistant.transcript().all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].role, Role::System);
        assert_eq!(
            all[0].content,
            "Jarvis AI Agent initialized. Say 'Hey Jarvis' to activate."
        );
        assert_eq!(all[0].action, None);
    }

    #[test]
    fn non_wake_word_input_appends_nothing() {
        let (assistant, _scheduler) = assistant(AssistantConfig::default());
        assistant.handle_utterance("remind me to buy groceries at 5 PM");
        assistant.handle_utterance("   ");
        assert_eq!(assistant.transcript().len(), 1);
    }

    #[test]
    fn user_echo_carries_no_action_tag() {
        let (assistant, _scheduler) = assistant(AssistantConfig::default());
        assistant.handle_utterance("Hey Jarvis, play smooth jazz");

        let all = assistant.transcript().all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].role, Role::User);
        assert_eq!(all[1].content, "Hey Jarvis, play smooth jazz");
        assert_eq!(all[1].action, None);
        assert_eq!(all[2].role, Role::Agent);
        assert!(all[2].action.is_some());
    }

    #[test]
    fn listening_without_capture_appends_single_notice() {
        let (assistant, _scheduler) = assistant(AssistantConfig::default());
        assert!(!assistant.start_listening());
        assert!(!assistant.is_listening());

        let all = assistant.transcript().all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].role, Role::System);
        assert_eq!(all[1].content, CAPTURE_UNAVAILABLE_NOTICE);

        // Stopping when never started appends nothing.
        assistant.stop_listening();
        assert_eq!(assistant.transcript().len(), 2);
    }

    #[test]
    fn listening_toggles_with_capture_configured() {
        let config = AssistantConfig {
            speech_capture: true,
            ..AssistantConfig::default()
        };
        let (assistant, _scheduler) = assistant(config);
        assert!(assistant.start_listening());
        assert!(assistant.is_listening());
        assistant.stop_listening();
        assert!(!assistant.is_listening());

        let all = assistant.transcript().all();
        assert_eq!(all.len(), 3);
        assert!(all[1].content.starts_with("Listening..."));
        assert_eq!(all[2].content, "Listening stopped.");
    }
}
