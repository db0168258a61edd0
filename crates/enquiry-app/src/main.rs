//! Enquiry bot binary - composition root.
//!
//! Ties the enquiry crates together into a terminal client:
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Load and validate the dataset (built-in unless a file is given)
//! 3. Build the voice announcer and the chat session
//! 4. Answer a single `--ask` query, or run welcome -> awakening -> chat on stdin

mod cli;
mod ui;

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use enquiry_chat::{
    Announcer, ChatError, CommandAnnouncer, EnquirySession, LogAnnouncer, VoiceInterface,
    QUICK_ACTIONS,
};
use enquiry_core::config::{EnquiryConfig, VoiceConfig};
use enquiry_core::error::EnquiryError;
use enquiry_core::types::Dataset;

use cli::CliArgs;
use ui::{CollegeSearch, View, ViewState};

type InputLines = Lines<BufReader<Stdin>>;

const AWAKENING_STEPS: u64 = 10;

fn build_voice(config: &VoiceConfig) -> VoiceInterface {
    let announcer: Box<dyn Announcer> = match &config.command {
        Some(program) => {
            tracing::info!(program = %program, "Spoken replies via external command");
            Box::new(CommandAnnouncer::new(program.clone(), config.rate, config.pitch))
        }
        None => Box::new(LogAnnouncer),
    };
    VoiceInterface::new(announcer, config.enabled)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn print_help() {
    println!("Commands:");
    for (command, what) in ui::HELP {
        println!("  {:<16} {}", command, what);
    }
    let labels: Vec<&str> = QUICK_ACTIONS.iter().map(|(label, _)| *label).collect();
    println!("Quick actions: {}", labels.join(", "));
}

/// Handle `/campus`, `/docs` and `/back`. Returns false for anything else.
fn view_command(command: &str, view: &mut ViewState, dataset: &Dataset) -> bool {
    let outcome = match command {
        "/campus" => view.transition(View::Campus).map(|_| ui::render_campus(dataset)),
        "/docs" => view.transition(View::Docs).map(|_| ui::render_docs(dataset)),
        "/back" => view.back().map(|v| vec![format!("Back to {}.", v)]),
        _ => return false,
    };
    match outcome {
        Ok(lines) => print_lines(&lines),
        Err(e) => {
            tracing::debug!(error = %e, "View command refused");
            println!("{} is not available right now.", command);
        }
    }
    true
}

/// Welcome screen: search for the college, then start the enquiry.
///
/// Returns false if the user quit or input ended.
async fn run_welcome(
    input: &mut InputLines,
    view: &mut ViewState,
    search: &CollegeSearch,
    dataset: &Dataset,
) -> std::io::Result<bool> {
    println!("Welcome to the {} enquiry bot.", dataset.organization.name);
    println!("Search for your college to begin (/docs for the overview, /quit to exit).");

    while let Some(line) = input.next_line().await? {
        let line = line.trim();
        if line == "/quit" {
            return Ok(false);
        }
        if view_command(line, view, dataset) {
            continue;
        }
        if view.current().is_overlay() {
            println!("Type /back to return.");
            continue;
        }

        if line.is_empty() && view.college_selected() {
            if let Err(e) = view.transition(View::Awakening) {
                tracing::warn!(error = %e, "Could not start enquiry");
                continue;
            }
            return Ok(true);
        }
        if search.matches(line) {
            view.select_college();
            println!("College selected: {}", dataset.organization.name);
            println!("Press Enter to start the enquiry (or /campus, /docs).");
        } else if !line.is_empty() {
            println!("No college found for '{}'.", line);
        }
    }
    Ok(false)
}

/// Scripted start-up sequence shown before the chat opens.
async fn run_awakening(view: &mut ViewState, duration_ms: u64) -> Result<(), EnquiryError> {
    println!("Awakening the enquiry assistant...");
    let step = Duration::from_millis(duration_ms / AWAKENING_STEPS);
    for i in 1..=AWAKENING_STEPS {
        tokio::time::sleep(step).await;
        println!("  {:>3}%", i * 100 / AWAKENING_STEPS);
    }
    view.transition(View::Chat)
}

async fn run_chat(
    input: &mut InputLines,
    view: &mut ViewState,
    session: &mut EnquirySession,
    dataset: &Dataset,
    reply_delay: Duration,
) -> std::io::Result<()> {
    for message in session.messages() {
        print_lines(&ui::render_message(message));
    }
    println!("Type /help for commands.");
    session.greet();

    while let Some(line) = input.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "/quit" {
            break;
        }
        if view_command(trimmed, view, dataset) {
            continue;
        }
        if view.current().is_overlay() {
            println!("Type /back to return to the chat.");
            continue;
        }

        let reply = if trimmed == "/help" {
            print_help();
            continue;
        } else if trimmed == "/clear" {
            session.clear();
            for message in session.messages() {
                print_lines(&ui::render_message(message));
            }
            continue;
        } else if trimmed == "/voice" {
            let on = session.toggle_voice();
            println!("Voice {}.", if on { "on" } else { "muted" });
            continue;
        } else if let Some(label) = trimmed.strip_prefix("/quick") {
            tokio::time::sleep(reply_delay).await;
            session.submit_quick_action(label.trim())
        } else if trimmed.starts_with('/') {
            println!("Unknown command {}. Type /help for commands.", trimmed);
            continue;
        } else {
            tokio::time::sleep(reply_delay).await;
            session.submit(&line)
        };

        match reply {
            Ok(message) => print_lines(&ui::render_message(&message)),
            Err(ChatError::EmptyMessage) => {}
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing starts so the file can set the log level.
    let config_file = args.resolve_config_path();
    let (mut config, config_error) = match EnquiryConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(e) => (EnquiryConfig::default(), Some(e)),
    };
    let log_level = args.resolve_log_level(&config);
    args.apply_overrides(&mut config);

    // Tracing. Stdout carries replies, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting enquiry bot v{}", env!("CARGO_PKG_VERSION"));
    match config_error {
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(EnquiryError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %config_file.display(), "No configuration file, using defaults")
        }
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load configuration, using defaults"
        ),
    }

    // Dataset.
    let dataset = Dataset::load_or_builtin(config.general.dataset_path.as_deref().map(Path::new))?;
    let issues = dataset.validate();
    if !issues.is_empty() {
        tracing::warn!(count = issues.len(), "Dataset has anomalies");
    }

    if let Some(path) = &args.export_dataset {
        dataset.save(path)?;
        println!("Dataset written to {}", path.display());
        return Ok(());
    }

    let dataset = Arc::new(dataset);

    let voice = build_voice(&config.voice);
    let mut session = EnquirySession::new(Arc::clone(&dataset), config.chat.clone(), voice);

    // One-shot mode. Nothing is spoken or logged to the conversation.
    if let Some(query) = &args.ask {
        let (result, _) = session.resolver().resolve(query, session.cursor());
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            for line in result.lines() {
                println!("{}", line);
            }
            if let Some(url) = &result.image {
                println!("[image] {}", url);
            }
        }
        return Ok(());
    }

    let mut view = ViewState::new();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    if args.skip_intro {
        view.select_college();
        view.transition(View::Awakening)?;
        view.transition(View::Chat)?;
    } else {
        let search = CollegeSearch::new(&config.general.search_aliases);
        if !run_welcome(&mut input, &mut view, &search, &dataset).await? {
            tracing::info!("Exited from the welcome screen");
            return Ok(());
        }
        run_awakening(&mut view, config.awakening.duration_ms).await?;
    }

    let reply_delay = Duration::from_millis(config.chat.reply_delay_ms);
    run_chat(&mut input, &mut view, &mut session, &dataset, reply_delay).await?;

    tracing::info!(messages = session.messages().len(), "Session ended");
    Ok(())
}
