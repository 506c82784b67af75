//! Core logic for the Jarvis voice-assistant simulator.
//!
//! This crate owns the command interpreter, the action simulator, the
//! conversation transcript, and the assistant session facade used by
//! frontends.

pub mod config;
pub mod error;
pub mod interpreter;
pub mod scheduler;
pub mod session;
pub mod simulator;
pub mod transcript;
pub mod types;

pub use config::AssistantConfig;
pub use error::JarvisCoreError;
pub use interpreter::Interpreter;
pub use scheduler::{ThreadRandom, TokioScheduler};
pub use session::Assistant;
pub use simulator::Simulator;
pub use transcript::Transcript;
pub use types::{AppointmentRequest, Intent};
