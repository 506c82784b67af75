//! Classified command types produced by the interpreter.

use jarvis_protocol::IntentCategory;

/// Contact dialed by the call intent.
pub const CALL_CONTACT: &str = "Daddy";

/// Extracted appointment parameters with their documented defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    /// Requested service, e.g. "hair salon" or "dentist".
    pub service: String,
    /// Requested date token, e.g. "4th November".
    pub date: String,
    /// Requested time token, e.g. "2 PM".
    pub time: String,
    /// Venue label; never extracted, always the default.
    pub location: String,
}

/// A classified command with its extracted parameters.
///
/// Produced by [`crate::Interpreter::classify`]; exactly one variant matches
/// any wake-word-bearing utterance, with `General` as the terminal fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Place a call to the fixed contact.
    Call { contact: String },
    /// Open maps and navigate to a location.
    Navigation { location: String },
    /// Book an appointment slot.
    Appointment(AppointmentRequest),
    /// Run a free-text search.
    Search { query: String },
    /// Report the weather.
    Weather,
    /// Set a reminder.
    Reminder { text: String, time: String },
    /// Send a text message.
    SendMessage { recipient: String, body: String },
    /// Play music.
    Music { song: String },
    /// Catch-all conversational reply carrying the raw command.
    General { query: String },
}

impl Intent {
    /// Map the intent onto its wire category.
    pub fn category(&self) -> IntentCategory {
        match self {
            Intent::Call { .. } => IntentCategory::Call,
            Intent::Navigation { .. } => IntentCategory::Navigation,
            Intent::Appointment(_) => IntentCategory::Appointment,
            Intent::Search { .. } => IntentCategory::Search,
            Intent::Weather => IntentCategory::Weather,
            Intent::Reminder { .. } => IntentCategory::Reminder,
            Intent::SendMessage { .. } => IntentCategory::Message,
            Intent::Music { .. } => IntentCategory::Music,
            Intent::General { .. } => IntentCategory::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppointmentRequest, Intent};
    use jarvis_protocol::IntentCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn intents_map_to_categories() {
        let appointment = Intent::Appointment(AppointmentRequest {
            service: "dentist".to_string(),
            date: "4th November".to_string(),
            time: "2 PM".to_string(),
            location: "Your preferred salon".to_string(),
        });
        assert_eq!(appointment.category(), IntentCategory::Appointment);
        assert_eq!(
            Intent::SendMessage {
                recipient: "contact".to_string(),
                body: "Hello".to_string(),
            }
            .category(),
            IntentCategory::Message
        );
        assert_eq!(Intent::Weather.category(), IntentCategory::Weather);
    }
}
