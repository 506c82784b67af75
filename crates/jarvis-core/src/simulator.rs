//! Action simulator: canned in-progress and delayed terminal replies.
//!
//! Every execution emits one agent message immediately and schedules exactly
//! one follow-up through the injected [`Scheduler`]. Nothing is retried or
//! cancelled; a scheduled follow-up always fires. Appointment is the only
//! category with a branching outcome, drawn from the injected
//! [`RandomSource`] when the deferred task runs.

use crate::types::{AppointmentRequest, Intent};
use jarvis_protocol::{ActionTag, IntentCategory, Message, MessageSink, RandomSource, Scheduler};
use log::info;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const CALL_DELAY: Duration = Duration::from_millis(2000);
const NAVIGATION_DELAY: Duration = Duration::from_millis(1500);
const APPOINTMENT_DELAY: Duration = Duration::from_millis(2000);
const SEARCH_DELAY: Duration = Duration::from_millis(1500);
const WEATHER_DELAY: Duration = Duration::from_millis(1500);
const REMINDER_DELAY: Duration = Duration::from_millis(1000);
const MESSAGE_DELAY: Duration = Duration::from_millis(1500);
const MUSIC_DELAY: Duration = Duration::from_millis(1000);
const GENERAL_DELAY: Duration = Duration::from_millis(1500);

/// Draws at or above this value count as an available slot.
const AVAILABILITY_THRESHOLD: f64 = 0.3;
const ALTERNATIVE_SLOTS: &str = "1:00 PM, 3:00 PM, 4:30 PM";

/// Executes classified intents as scripted two-message exchanges.
pub struct Simulator {
    scheduler: Arc<dyn Scheduler>,
    random: Arc<dyn RandomSource>,
}

impl Simulator {
    /// Create a simulator over the given scheduling and randomness seams.
    pub fn new(scheduler: Arc<dyn Scheduler>, random: Arc<dyn RandomSource>) -> Self {
        Self { scheduler, random }
    }

    /// Run an intent: emit the in-progress message now and schedule the
    /// terminal message after the category's fixed delay. Fire-and-forget.
    pub fn execute(&self, intent: Intent, sink: Arc<dyn MessageSink>) {
        info!("executing intent (category={})", intent.category().as_str());
        match intent {
            Intent::Call { contact } => self.run_call(contact, sink),
            Intent::Navigation { location } => self.run_navigation(location, sink),
            Intent::Appointment(request) => self.run_appointment(request, sink),
            Intent::Search { query } => self.run_search(query, sink),
            Intent::Weather => self.run_weather(sink),
            Intent::Reminder { text, time } => self.run_reminder(text, time, sink),
            Intent::SendMessage { recipient, body } => self.run_message(recipient, body, sink),
            Intent::Music { song } => self.run_music(song, sink),
            Intent::General { query } => self.run_general(query, sink),
        }
    }

    fn defer(&self, delay: Duration, task: impl FnOnce() + Send + 'static) {
        self.scheduler.schedule(delay, Box::new(task));
    }

    fn run_call(&self, contact: String, sink: Arc<dyn MessageSink>) {
        sink.emit(Message::agent(
            format!("Initiating call to {contact}..."),
            ActionTag::new(
                IntentCategory::Call,
                "connecting",
                json!({ "contact": contact }),
            ),
        ));
        self.defer(CALL_DELAY, move || {
            sink.emit(Message::agent(
                format!("Call connected to {contact}. Duration: simulated mode (no actual call made)."),
                ActionTag::new(
                    IntentCategory::Call,
                    "connected",
                    json!({ "contact": contact }),
                ),
            ));
        });
    }

    fn run_navigation(&self, location: String, sink: Arc<dyn MessageSink>) {
        sink.emit(Message::agent(
            format!("Opening Google Maps for \"{location}\" and starting navigation..."),
            ActionTag::new(
                IntentCategory::Navigation,
                "opening",
                json!({ "location": location }),
            ),
        ));
        self.defer(NAVIGATION_DELAY, move || {
            // The URL is surfaced in text only, never opened or fetched.
            let url = format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                urlencoding::encode(&location)
            );
            sink.emit(Message::agent(
                format!(
                    "Navigation started to {location}. In a real implementation, this would open: {url}"
                ),
                ActionTag::new(
                    IntentCategory::Navigation,
                    "active",
                    json!({ "location": location, "url": url }),
                ),
            ));
        });
    }

    fn run_appointment(&self, request: AppointmentRequest, sink: Arc<dyn MessageSink>) {
        let details = json!({
            "service": request.service,
            "date": request.date,
            "time": request.time,
            "location": request.location,
        });
        sink.emit(Message::agent(
            format!(
                "Checking availability for {} on {} at {}...",
                request.service, request.date, request.time
            ),
            ActionTag::new(IntentCategory::Appointment, "checking", details.clone()),
        ));

        // The availability draw happens when the deferred task fires, not at
        // schedule time.
        let random = self.random.clone();
        self.defer(APPOINTMENT_DELAY, move || {
            let available = random.next_unit() >= AVAILABILITY_THRESHOLD;
            if available {
                sink.emit(Message::agent(
                    format!(
                        "Great! I found an available slot at {} on {} at {}. Appointment confirmed!",
                        request.location, request.date, request.time
                    ),
                    ActionTag::new(IntentCategory::Appointment, "confirmed", details),
                ));
            } else {
                sink.emit(Message::agent(
                    format!(
                        "Sorry, {} is not available. Alternative slots: {ALTERNATIVE_SLOTS}. Which would you prefer?",
                        request.time
                    ),
                    ActionTag::new(IntentCategory::Appointment, "alternatives", details),
                ));
            }
        });
    }

    fn run_search(&self, query: String, sink: Arc<dyn MessageSink>) {
        sink.emit(Message::agent(
            format!("Searching for \"{query}\"..."),
            ActionTag::new(
                IntentCategory::Search,
                "searching",
                json!({ "query": query }),
            ),
        ));
        self.defer(SEARCH_DELAY, move || {
            sink.emit(Message::agent(
                format!(
                    "Here are the top results for \"{query}\": [Simulated search results would appear here]"
                ),
                ActionTag::new(
                    IntentCategory::Search,
                    "completed",
                    json!({ "query": query }),
                ),
            ));
        });
    }

    fn run_weather(&self, sink: Arc<dyn MessageSink>) {
        sink.emit(Message::agent(
            "Checking current weather...",
            ActionTag::new(IntentCategory::Weather, "fetching", json!({})),
        ));
        self.defer(WEATHER_DELAY, move || {
            sink.emit(Message::agent(
                "Current weather: 72°F, Partly Cloudy. High: 78°F, Low: 65°F. Good day ahead!",
                ActionTag::new(IntentCategory::Weather, "completed", json!({})),
            ));
        });
    }

    fn run_reminder(&self, text: String, time: String, sink: Arc<dyn MessageSink>) {
        sink.emit(Message::agent(
            format!("Setting reminder: \"{text}\" for {time}"),
            ActionTag::new(
                IntentCategory::Reminder,
                "setting",
                json!({ "text": text, "time": time }),
            ),
        ));
        self.defer(REMINDER_DELAY, move || {
            sink.emit(Message::agent(
                format!("Reminder set successfully! I'll notify you {time}."),
                ActionTag::new(
                    IntentCategory::Reminder,
                    "confirmed",
                    json!({ "text": text, "time": time }),
                ),
            ));
        });
    }

    fn run_message(&self, recipient: String, body: String, sink: Arc<dyn MessageSink>) {
        sink.emit(Message::agent(
            format!("Sending message to {recipient}: \"{body}\""),
            ActionTag::new(
                IntentCategory::Message,
                "sending",
                json!({ "recipient": recipient, "message": body }),
            ),
        ));
        self.defer(MESSAGE_DELAY, move || {
            sink.emit(Message::agent(
                format!("Message sent successfully to {recipient}."),
                ActionTag::new(
                    IntentCategory::Message,
                    "sent",
                    json!({ "recipient": recipient, "message": body }),
                ),
            ));
        });
    }

    fn run_music(&self, song: String, sink: Arc<dyn MessageSink>) {
        sink.emit(Message::agent(
            format!("Playing \"{song}\"..."),
            ActionTag::new(IntentCategory::Music, "playing", json!({ "song": song })),
        ));
        self.defer(MUSIC_DELAY, move || {
            sink.emit(Message::agent(
                format!("Now playing: {song}. Enjoy your music!"),
                ActionTag::new(IntentCategory::Music, "active", json!({ "song": song })),
            ));
        });
    }

    fn run_general(&self, query: String, sink: Arc<dyn MessageSink>) {
        sink.emit(Message::agent(
            "Processing your request...",
            ActionTag::new(IntentCategory::General, "thinking", json!({})),
        ));
        self.defer(GENERAL_DELAY, move || {
            sink.emit(Message::agent(
                format!(
                    "I understand you said: \"{query}\". I'm an AI agent capable of making calls, navigating maps, scheduling appointments, and much more. How can I help you specifically?"
                ),
                ActionTag::new(IntentCategory::General, "completed", json!({})),
            ));
        });
    }
}
