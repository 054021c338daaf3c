pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod openai;
pub mod reply;
pub mod types;

use log::{debug, info, warn};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use config::Config;
use error::Result;
use event::Event;
use reply::ReplyStrategy;

pub use handler::handle_event;

/// Read one event document from stdin and write the response document to stdout.
pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let strategy = ReplyStrategy::from_config(&config);

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    debug!("Read {} bytes of event input", input.len());

    let event = parse_event(&input);
    let response = handle_event(&event, &strategy).await;
    info!("Responding with status {}", response.status_code);

    let mut output = serde_json::to_vec(&response)?;
    output.push(b'\n');

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await?;

    Ok(())
}

/// Decode an event, falling back to an empty one when the input is unusable.
pub fn parse_event(input: &str) -> Event {
    if input.trim().is_empty() {
        return Event::default();
    }
    serde_json::from_str(input).unwrap_or_else(|e| {
        warn!("Failed to decode event, treating it as empty: {e}");
        Event::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_empty_post_event() {
        let event = parse_event("  \n");
        assert_eq!(event.method(), "POST");
        assert!(event.body.is_none());
    }

    #[test]
    fn garbage_input_is_empty_event() {
        let event = parse_event("<html>");
        assert_eq!(event.method(), "POST");
    }

    #[test]
    fn event_document_is_decoded() {
        let event = parse_event(r#"{"httpMethod":"OPTIONS","body":""}"#);
        assert_eq!(event.method(), "OPTIONS");
    }
}
