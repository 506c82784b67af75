//! Shared message types and boundary traits for the Jarvis simulator.
//!
//! This crate owns the transcript message model, the action metadata carried
//! by agent replies, and the seams (`MessageSink`, `Scheduler`,
//! `RandomSource`) the core and frontends plug into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

/// Unique identifier for a transcript message.
pub type MessageId = Uuid;

/// Speaker role for a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System-generated notice.
    System,
    /// User-authored utterance echo.
    User,
    /// Agent-authored reply.
    Agent,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Agent => "agent",
        }
    }

    /// Parse a role from a lowercase string.
    pub fn parse(value: &str) -> Self {
        if value == "system" {
            Role::System
        } else if value == "agent" {
            Role::Agent
        } else {
            Role::User
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Role::parse(value))
    }
}

/// Command category an utterance classified into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    /// Place a call to a contact.
    Call,
    /// Open maps and navigate to a location.
    Navigation,
    /// Book an appointment slot.
    Appointment,
    /// Run a free-text search.
    Search,
    /// Report the weather.
    Weather,
    /// Set a reminder.
    Reminder,
    /// Send a text message.
    Message,
    /// Play music.
    Music,
    /// Catch-all conversational reply.
    General,
}

impl IntentCategory {
    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::Call => "call",
            IntentCategory::Navigation => "navigation",
            IntentCategory::Appointment => "appointment",
            IntentCategory::Search => "search",
            IntentCategory::Weather => "weather",
            IntentCategory::Reminder => "reminder",
            IntentCategory::Message => "message",
            IntentCategory::Music => "music",
            IntentCategory::General => "general",
        }
    }
}

/// Action metadata attached to agent messages produced by intent processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionTag {
    /// Category that produced the message.
    pub category: IntentCategory,
    /// Lifecycle status label, e.g. "connecting" or "confirmed".
    pub phase: String,
    /// Category-specific fields (contact, location, slot, ...).
    #[serde(default = "empty_json_object")]
    pub details: Value,
}

impl ActionTag {
    /// Build a tag for a category and phase with the given details.
    pub fn new(category: IntentCategory, phase: impl Into<String>, details: Value) -> Self {
        Self {
            category,
            phase: phase.into(),
            details,
        }
    }
}

fn empty_json_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Message stored in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique id for the message.
    pub id: MessageId,
    /// Role that produced the message.
    pub role: Role,
    /// Message content.
    pub content: String,
    /// Timestamp when the message was created.
    pub created_at: DateTime<Utc>,
    /// Action metadata, present only on simulator-produced agent replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionTag>,
}

impl Message {
    /// Build a system notice.
    pub fn system(content: impl Into<String>) -> Self {
        Self::build(Role::System, content.into(), None)
    }

    /// Build a user utterance echo.
    pub fn user(content: impl Into<String>) -> Self {
        Self::build(Role::User, content.into(), None)
    }

    /// Build an agent reply carrying an action tag.
    pub fn agent(content: impl Into<String>, action: ActionTag) -> Self {
        Self::build(Role::Agent, content.into(), Some(action))
    }

    fn build(role: Role, content: String, action: Option<ActionTag>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            created_at: Utc::now(),
            action,
        }
    }
}

/// Sink for fully formed messages crossing the output boundary.
///
/// The core never renders anything itself; frontends receive messages
/// through this trait and decide how to display them.
pub trait MessageSink: Send + Sync {
    /// Deliver a message to the presentation layer.
    fn emit(&self, message: Message);
}

/// Deferred task runner used for the delayed half of a simulated action.
///
/// Production schedulers fire after a wall-clock delay; test schedulers can
/// advance synchronously.
pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>);
}

/// Source of uniform randomness in `[0, 1)` for branching outcomes.
pub trait RandomSource: Send + Sync {
    /// Draw the next uniform value.
    fn next_unit(&self) -> f64;
}
