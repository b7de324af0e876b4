mod assemble;
mod config;
mod entries;
mod events;
mod models;
mod naming;
mod page;
mod submit;
mod surface;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::page::{build_resume_page, Notice, PageController};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing FORM_ACTION)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));
    info!("Form action: {}", config.form_action);

    let mut controller = PageController::new(build_resume_page(&config.form_action));

    // The page event loop: one JSON event per stdin line, handled to
    // completion in arrival order. Only a submission's network round-trip
    // suspends; the stream keeps the form usable after any failure.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let event = match events::parse_event(&line) {
            Ok(event) => event,
            Err(e) => {
                warn!("Ignoring unparseable event line: {e}");
                continue;
            }
        };
        if let Some(notice) = controller.handle_event(event).await {
            report(&notice);
        }
    }

    info!("Event stream closed, shutting down");
    Ok(())
}

fn report(notice: &Notice) {
    match notice {
        Notice::Navigate(url) => info!("Navigating to {url}"),
        Notice::Success(text) => info!("{text}"),
        Notice::Failure(text) => error!("{text}"),
    }
}
