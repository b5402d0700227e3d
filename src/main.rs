//! Interactive driver: one input per line on stdin, JSON on stdout.
//!
//! Lines starting with `:` are commands (`:state`, `:metrics`, `:reset`,
//! `:quit`); anything else is submitted as career input.

use std::error::Error;
use std::sync::Arc;

use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use career_navigator::adapters::SimulatedClassifier;
use career_navigator::application::{
    GetSessionSnapshotHandler, ProcessInputHandler, ResetSessionHandler, SessionHandle,
    SubmitInputCommand, SubmitInputHandler, SubmitOutcome,
};
use career_navigator::config::AppConfig;
use career_navigator::domain::catalog::ResponseCatalog;
use career_navigator::ports::IntentClassifier;
use career_navigator::telemetry;

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    State,
    Metrics,
    Reset,
    Quit,
    Unknown(&'a str),
    Submit(&'a str),
}

fn parse(line: &str) -> Command<'_> {
    match line.trim_end() {
        ":state" => Command::State,
        ":metrics" => Command::Metrics,
        ":reset" => Command::Reset,
        ":quit" | ":q" => Command::Quit,
        other if other.starts_with(':') => Command::Unknown(other),
        _ => Command::Submit(line),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.telemetry);

    // A malformed catalog is fatal.
    let catalog = ResponseCatalog::standard()?;
    let classifier = SimulatedClassifier::new(catalog).with_delay(config.classifier.latency());
    let info = classifier.classifier_info();
    info!(
        classifier = %info.name,
        entries = info.entries,
        latency_ms = config.classifier.latency_ms,
        "Career navigator ready"
    );

    let session = SessionHandle::new();
    let submit = SubmitInputHandler::new(
        ProcessInputHandler::new(Arc::new(classifier), config.classifier.timeout()),
        session.clone(),
    );
    let reset = ResetSessionHandler::new(session.clone());
    let snapshot = GetSessionSnapshotHandler::new(session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.is_empty() {
            continue;
        }

        let output = match parse(&line) {
            Command::Quit => break,
            Command::State => serde_json::to_value(snapshot.handle().await)?,
            Command::Metrics => serde_json::to_value(snapshot.handle().await.metrics)?,
            Command::Reset => {
                let result = reset.handle().await;
                json!({ "epoch": result.epoch, "metrics": result.metrics })
            }
            Command::Unknown(command) => {
                eprintln!("Unknown command {command}. Try :state, :metrics, :reset or :quit.");
                continue;
            }
            Command::Submit(text) => match submit.handle(SubmitInputCommand::new(text)).await {
                Ok(SubmitOutcome::Applied(turn)) => json!({
                    "intent": turn.intent,
                    "actions": turn.actions,
                    "state": turn.state,
                    "metrics": turn.metrics,
                }),
                Ok(SubmitOutcome::Superseded { .. }) => {
                    eprintln!("The session was reset before this answer arrived.");
                    continue;
                }
                Err(err) => {
                    eprintln!("{}", err.notice());
                    continue;
                }
            },
        };

        let mut rendered = serde_json::to_string(&output)?;
        rendered.push('\n');
        stdout.write_all(rendered.as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}
