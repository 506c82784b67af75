//! Command interpreter: wake-word gating, intent classification, and
//! best-effort parameter extraction.
//!
//! Classification evaluates an ordered keyword rule list over the lowercased
//! utterance; the first matching rule wins, and `General` is the terminal
//! fallback. Extraction runs case-insensitive patterns over the raw command
//! and falls back to literal defaults, so it never fails.

use crate::error::JarvisCoreError;
use crate::types::{AppointmentRequest, CALL_CONTACT, Intent};
use log::debug;
use regex::Regex;

/// Substring that gates whether free text is processed as a command.
pub const WAKE_WORD: &str = "jarvis";

const DEFAULT_LOCATION: &str = "sadar bazaar chatgali";
const DEFAULT_SERVICE: &str = "hair salon";
const DEFAULT_DATE: &str = "4th November";
const DEFAULT_TIME: &str = "2 PM";
const DEFAULT_APPOINTMENT_VENUE: &str = "Your preferred salon";
const DEFAULT_RECIPIENT: &str = "contact";
const DEFAULT_MESSAGE_BODY: &str = "Hello";
const DEFAULT_REMINDER_TIME: &str = "later";
const DEFAULT_SONG: &str = "music";

/// Classifies utterances into intents and extracts their parameters.
pub struct Interpreter {
    location: Regex,
    date: Regex,
    time: Regex,
    service: Regex,
    search: Regex,
    reminder: Regex,
    recipient: Regex,
    body: Regex,
    song: Regex,
}

fn compile(pattern: &str) -> Result<Regex, JarvisCoreError> {
    Regex::new(pattern).map_err(|err| JarvisCoreError::Pattern(err.to_string()))
}

impl Interpreter {
    /// Compile the extraction patterns.
    pub fn new() -> Result<Self, JarvisCoreError> {
        Ok(Self {
            location: compile(r"(?i)(?:search|to|for)\s+(.+?)(?:\s+and|$)")?,
            date: compile(
                r"(?i)(\d{1,2}(?:st|nd|rd|th)?\s+(?:january|february|march|april|may|june|july|august|september|october|november|december|\d{1,2}))",
            )?,
            time: compile(r"(?i)(\d{1,2}(?::\d{2})?\s*(?:am|pm))")?,
            service: compile(r"(?i)(?:hair\s*salon|haircut|dentist|doctor|massage)")?,
            search: compile(r"(?i)(?:search|find)\s+(?:for\s+)?(.+)")?,
            reminder: compile(r"(?i)remind\s+me\s+(?:to\s+)?(.+?)(?:\s+(?:at|on|in)\s+(.+))?$")?,
            recipient: compile(r"(?i)(?:send|text)\s+(?:message\s+)?(?:to\s+)?(\w+)")?,
            body: compile(r"(?i)(?:saying|that)\s+(.+)")?,
            song: compile(r"(?i)play\s+(.+)")?,
        })
    }

    /// Classify an utterance, returning `None` when the wake word is absent.
    ///
    /// Total for any wake-word-bearing string: exactly one intent is
    /// produced, with `General` as the catch-all.
    pub fn classify(&self, text: &str) -> Option<Intent> {
        let lower = text.to_lowercase();
        if !lower.contains(WAKE_WORD) {
            debug!("dropping utterance without wake word (len={})", text.len());
            return None;
        }
        Some(self.route(text, &lower))
    }

    /// Evaluate the ordered rule list. Rules overlap, so order is part of
    /// the contract.
    fn route(&self, command: &str, lower: &str) -> Intent {
        if lower.contains("call") && lower.contains("daddy") {
            Intent::Call {
                contact: CALL_CONTACT.to_string(),
            }
        } else if lower.contains("open") && lower.contains("google map") {
            Intent::Navigation {
                location: self.extract_location(command),
            }
        } else if lower.contains("appointment") || lower.contains("schedule") {
            Intent::Appointment(self.extract_appointment(command))
        } else if lower.contains("search") || lower.contains("find") {
            Intent::Search {
                query: self.extract_search_query(command),
            }
        } else if lower.contains("weather") {
            Intent::Weather
        } else if lower.contains("remind me") || lower.contains("reminder") {
            let (text, time) = self.extract_reminder(command);
            Intent::Reminder { text, time }
        } else if lower.contains("send message") || lower.contains("text") {
            let (recipient, body) = self.extract_message(command);
            Intent::SendMessage { recipient, body }
        } else if lower.contains("play") || lower.contains("music") {
            Intent::Music {
                song: self.extract_song(command),
            }
        } else {
            Intent::General {
                query: command.to_string(),
            }
        }
    }

    /// Text following "search", "to", or "for" up to " and" or end of input.
    fn extract_location(&self, command: &str) -> String {
        self.location
            .captures(command)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string())
    }

    fn extract_appointment(&self, command: &str) -> AppointmentRequest {
        let service = self
            .service
            .find(command)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_SERVICE.to_string());
        let date = self
            .date
            .captures(command)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_DATE.to_string());
        let time = self
            .time
            .captures(command)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_TIME.to_string());
        AppointmentRequest {
            service,
            date,
            time,
            location: DEFAULT_APPOINTMENT_VENUE.to_string(),
        }
    }

    /// Text after "search"/"find", skipping an optional "for"; the whole
    /// command when nothing matches.
    fn extract_search_query(&self, command: &str) -> String {
        self.search
            .captures(command)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| command.to_string())
    }

    /// Reminder text and optional trailing "at/on/in <time>" clause.
    fn extract_reminder(&self, command: &str) -> (String, String) {
        match self.reminder.captures(command) {
            Some(caps) => {
                let text = caps
                    .get(1)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_else(|| command.to_string());
                let time = caps
                    .get(2)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_else(|| DEFAULT_REMINDER_TIME.to_string());
                (text, time)
            }
            None => (command.to_string(), DEFAULT_REMINDER_TIME.to_string()),
        }
    }

    /// Recipient word after "send"/"text" and body after "saying"/"that".
    fn extract_message(&self, command: &str) -> (String, String) {
        let recipient = self
            .recipient
            .captures(command)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string());
        let body = self
            .body
            .captures(command)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| DEFAULT_MESSAGE_BODY.to_string());
        (recipient, body)
    }

    fn extract_song(&self, command: &str) -> String {
        self.song
            .captures(command)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| DEFAULT_SONG.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Interpreter;
    use crate::types::{AppointmentRequest, Intent};
    use pretty_assertions::assert_eq;

    fn interpreter() -> Interpreter {
        Interpreter::new().expect("patterns compile")
    }

    #[test]
    fn drops_utterances_without_wake_word() {
        let interpreter = interpreter();
        assert_eq!(
            interpreter.classify("remind me to buy groceries at 5 PM"),
            None
        );
        assert_eq!(interpreter.classify("call daddy"), None);
        assert_eq!(interpreter.classify(""), None);
    }

    #[test]
    fn wake_word_matches_anywhere_case_insensitive() {
        let interpreter = interpreter();
        assert!(interpreter.classify("HEY JARVIS, what's up").is_some());
        assert!(interpreter.classify("ok jarvis do nothing").is_some());
    }

    #[test]
    fn unrecognized_commands_fall_back_to_general() {
        let interpreter = interpreter();
        let intent = interpreter.classify("Hey Jarvis, how are you?");
        assert_eq!(
            intent,
            Some(Intent::General {
                query: "Hey Jarvis, how are you?".to_string(),
            })
        );
    }

    #[test]
    fn call_rule_precedes_appointment_rule() {
        let interpreter = interpreter();
        let intent = interpreter.classify("jarvis call daddy and schedule appointment");
        assert_eq!(
            intent,
            Some(Intent::Call {
                contact: "Daddy".to_string(),
            })
        );
    }

    #[test]
    fn navigation_extracts_location_before_trailing_and() {
        let interpreter = interpreter();
        let intent =
            interpreter.classify("Hey Jarvis, open google map and search sadar bazaar chatgali");
        assert_eq!(
            intent,
            Some(Intent::Navigation {
                location: "sadar bazaar chatgali".to_string(),
            })
        );
    }

    #[test]
    fn navigation_defaults_location_when_nothing_follows() {
        let interpreter = interpreter();
        // "open google map" alone carries no search/to/for clause.
        let intent = interpreter.classify("jarvis open google map");
        assert_eq!(
            intent,
            Some(Intent::Navigation {
                location: "sadar bazaar chatgali".to_string(),
            })
        );
    }

    #[test]
    fn appointment_extracts_slot_and_service() {
        let interpreter = interpreter();
        let intent = interpreter
            .classify("Hey Jarvis, make an appointment to my hair salon on 4th november at 2 pm");
        assert_eq!(
            intent,
            Some(Intent::Appointment(AppointmentRequest {
                service: "hair salon".to_string(),
                date: "4th november".to_string(),
                time: "2 pm".to_string(),
                location: "Your preferred salon".to_string(),
            }))
        );
    }

    #[test]
    fn appointment_defaults_every_missing_field() {
        let interpreter = interpreter();
        let intent = interpreter.classify("jarvis schedule something");
        assert_eq!(
            intent,
            Some(Intent::Appointment(AppointmentRequest {
                service: "hair salon".to_string(),
                date: "4th November".to_string(),
                time: "2 PM".to_string(),
                location: "Your preferred salon".to_string(),
            }))
        );
    }

    #[test]
    fn search_strips_optional_for() {
        let interpreter = interpreter();
        let intent = interpreter.classify("jarvis search for rust tutorials");
        assert_eq!(
            intent,
            Some(Intent::Search {
                query: "rust tutorials".to_string(),
            })
        );
    }

    #[test]
    fn weather_rule_matches() {
        let interpreter = interpreter();
        let intent = interpreter.classify("Hey Jarvis, what's the weather like today?");
        assert_eq!(intent, Some(Intent::Weather));
    }

    #[test]
    fn reminder_splits_text_and_time_clause() {
        let interpreter = interpreter();
        let intent = interpreter.classify("Hey Jarvis, remind me to buy groceries at 5 PM");
        assert_eq!(
            intent,
            Some(Intent::Reminder {
                text: "buy groceries".to_string(),
                time: "5 PM".to_string(),
            })
        );
    }

    #[test]
    fn reminder_defaults_time_to_later() {
        let interpreter = interpreter();
        let intent = interpreter.classify("jarvis remind me to stretch");
        assert_eq!(
            intent,
            Some(Intent::Reminder {
                text: "stretch".to_string(),
                time: "later".to_string(),
            })
        );
    }

    #[test]
    fn message_extracts_recipient_and_body() {
        let interpreter = interpreter();
        let intent = interpreter.classify("jarvis send message to John saying running late");
        assert_eq!(
            intent,
            Some(Intent::SendMessage {
                recipient: "John".to_string(),
                body: "running late".to_string(),
            })
        );
    }

    #[test]
    fn message_defaults_recipient_and_body() {
        let interpreter = interpreter();
        // "text" alone triggers the rule with neither pattern matching.
        let intent = interpreter.classify("jarvis text");
        assert_eq!(
            intent,
            Some(Intent::SendMessage {
                recipient: "contact".to_string(),
                body: "Hello".to_string(),
            })
        );
    }

    #[test]
    fn message_rule_shadows_later_rules() {
        // "text" keeps its slot in the rule order even in convoluted
        // utterances; the ordering is part of the contract.
        let interpreter = interpreter();
        let intent = interpreter.classify("jarvis text me some music");
        assert!(matches!(intent, Some(Intent::SendMessage { .. })));
    }

    #[test]
    fn music_extracts_song_after_play() {
        let interpreter = interpreter();
        let intent = interpreter.classify("Hey Jarvis, play smooth jazz");
        assert_eq!(
            intent,
            Some(Intent::Music {
                song: "smooth jazz".to_string(),
            })
        );
    }

    #[test]
    fn music_defaults_song_when_only_keyword_present() {
        let interpreter = interpreter();
        let intent = interpreter.classify("jarvis music");
        assert_eq!(
            intent,
            Some(Intent::Music {
                song: "music".to_string(),
            })
        );
    }
}
