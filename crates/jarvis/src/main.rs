//! Line-oriented frontend for the Jarvis assistant simulator.
//!
//! Reads utterances from stdin (or a single `--command`), dispatches them to
//! the assistant core, and prints appended messages as they land, delayed
//! replies included. Rendering is plain text on purpose.

use anyhow::Result;
use clap::Parser;
use jarvis_core::{Assistant, AssistantConfig, ThreadRandom, TokioScheduler};
use jarvis_protocol::Message;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;

/// Command-line options for the frontend.
#[derive(Parser)]
#[command(name = "jarvis", version)]
struct Cli {
    /// Optional path to a jarvis.json5 config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Dispatch a single utterance, wait for its replies, and exit
    #[arg(long)]
    command: Option<String>,
}

/// Supported slash commands in the input loop.
enum SlashCommand {
    Listen,
    Stop,
    Transcript,
    Quit,
}

fn parse_slash(line: &str) -> Option<SlashCommand> {
    match line {
        "/listen" => Some(SlashCommand::Listen),
        "/stop" => Some(SlashCommand::Stop),
        "/transcript" => Some(SlashCommand::Transcript),
        "/quit" | "/exit" => Some(SlashCommand::Quit),
        _ => None,
    }
}

fn render(message: &Message) -> String {
    match &message.action {
        Some(tag) => format!(
            "[{}] {} - {}\n  {}",
            message.role.as_str(),
            tag.category.as_str().to_uppercase(),
            tag.phase,
            message.content
        ),
        None => format!("[{}] {}", message.role.as_str(), message.content),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AssistantConfig::load(path)?,
        None => AssistantConfig::default(),
    };
    let assistant = Arc::new(Assistant::new(
        config,
        Arc::new(TokioScheduler),
        Arc::new(ThreadRandom),
    )?);
    info!("assistant session ready");

    let mut receiver = assistant.subscribe();
    for message in assistant.transcript().all() {
        println!("{}", render(&message));
    }
    let printer = tokio::spawn(async move {
        while let Ok(message) = receiver.recv().await {
            println!("{}", render(&message));
        }
    });

    if let Some(command) = cli.command {
        assistant.handle_utterance(&command);
        // Longest category delay is 2000 ms; give the terminal reply time
        // to land before exiting.
        tokio::time::sleep(Duration::from_millis(2200)).await;
        printer.abort();
        return Ok(());
    }

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_slash(line.trim()) {
            Some(SlashCommand::Quit) => break,
            Some(SlashCommand::Listen) => {
                assistant.start_listening();
            }
            Some(SlashCommand::Stop) => assistant.stop_listening(),
            Some(SlashCommand::Transcript) => {
                for message in assistant.transcript().all() {
                    println!("{}", render(&message));
                }
            }
            None => assistant.handle_utterance(&line),
        }
    }
    printer.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_slash, render, SlashCommand};
    use jarvis_protocol::{ActionTag, IntentCategory, Message};
    use pretty_assertions::assert_eq;

    #[test]
    fn slash_commands_parse() {
        assert!(matches!(parse_slash("/listen"), Some(SlashCommand::Listen)));
        assert!(matches!(parse_slash("/quit"), Some(SlashCommand::Quit)));
        assert!(matches!(parse_slash("/exit"), Some(SlashCommand::Quit)));
        assert!(parse_slash("hey jarvis").is_none());
    }

    #[test]
    fn render_includes_action_header() {
        let tag = ActionTag::new(
            IntentCategory::Call,
            "connecting",
            serde_json::json!({"contact": "Daddy"}),
        );
        let rendered = render(&Message::agent("Initiating call to Daddy...", tag));
        assert_eq!(
            rendered,
            "[agent] CALL - connecting\n  Initiating call to Daddy..."
        );

        let rendered = render(&Message::system("ready"));
        assert_eq!(rendered, "[system] ready");
    }
}
