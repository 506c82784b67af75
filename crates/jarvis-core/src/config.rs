//! Configuration schema for the assistant session.

use crate::error::JarvisCoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Banner announced when a session starts.
pub const DEFAULT_GREETING: &str = "Jarvis AI Agent initialized. Say 'Hey Jarvis' to activate.";

fn default_event_buffer() -> usize {
    256
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

/// Session configuration with defaults for every field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantConfig {
    /// Buffer size for the message broadcast channel.
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
    /// Whether a speech-capture collaborator is attached. When false, a
    /// listen request produces a single informational system message.
    #[serde(default)]
    pub speech_capture: bool,
    /// System message appended when the session starts.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            event_buffer: default_event_buffer(),
            speech_capture: false,
            greeting: default_greeting(),
        }
    }
}

impl AssistantConfig {
    /// Load a config from a json5 file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, JarvisCoreError> {
        let raw = fs::read_to_string(path)?;
        Ok(json5::from_str(&raw)?)
    }
}
