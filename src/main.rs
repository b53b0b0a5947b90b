//! Command line client for the URL shortening service.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL, show its analytics and copy it
//! url-shortener-client shorten https://example.com --alias promo --copy
//!
//! # Expire the link after an hour
//! url-shortener-client shorten https://example.com --expiry 60
//!
//! # Click analytics for an existing code
//! url-shortener-client stats promo
//!
//! # Check the service is up
//! url-shortener-client health
//!
//! # Prompt for links until you stop
//! url-shortener-client interactive
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTENER_API_URL` (optional): service address, default `http://127.0.0.1:8000`
//! - `RUST_LOG`, `LOG_FORMAT` (optional): logging, written to stderr
//!
//! Exits with a non-zero status when the requested operation failed.

use url_shortener_client::config::{self, Config};
use url_shortener_client::prelude::*;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::io::Stdout;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

type Terminal = TerminalView<Stdout>;

/// Client for a URL shortening service.
#[derive(Parser)]
#[command(name = "url-shortener-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service address (overrides SHORTENER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL and show its analytics
    Shorten {
        /// URL to shorten
        url: String,

        /// Minutes until the short link expires
        #[arg(short, long)]
        expiry: Option<String>,

        /// Custom short code instead of a generated one
        #[arg(short, long)]
        alias: Option<String>,

        /// Copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Show click analytics for a short code
    Stats {
        /// Short code (last segment of the short URL)
        code: String,
    },

    /// Check that the service is reachable
    Health,

    /// Shorten links from interactive prompts
    Interactive,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env(cli.api_url)?;
    init_tracing(&config);
    config.print_summary();

    let api = Arc::new(HttpShortenerClient::new(&config.api_base_url)?);
    let view = Arc::new(TerminalView::stdout());
    let clipboard = Arc::new(SystemClipboard::new());

    let shorten = ShortenService::new(api.clone(), view.clone());
    let copier = ClipboardService::new(clipboard, view.clone());

    let succeeded = match cli.command {
        Commands::Shorten {
            url,
            expiry,
            alias,
            copy,
        } => {
            let form = ShortenForm::new(url, expiry.unwrap_or_default(), alias.unwrap_or_default());
            handle_shorten(&shorten, &copier, form, copy).await
        }
        Commands::Stats { code } => handle_stats(&shorten, &code).await,
        Commands::Health => handle_health(api.as_ref(), view.as_ref()).await,
        Commands::Interactive => run_interactive(&shorten, &copier).await?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout only carries results.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.is_json_logging() {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Shortens one URL, optionally copying the result.
async fn handle_shorten(
    shorten: &ShortenService<HttpShortenerClient, Terminal>,
    copier: &ClipboardService<SystemClipboard, Terminal>,
    form: ShortenForm,
    copy: bool,
) -> bool {
    let mut state = SessionState::new();

    if shorten.submit(&form, &mut state).await.is_err() {
        return false;
    }

    if copy {
        return copier.copy(&state).await != CopyOutcome::Failed;
    }

    true
}

/// Renders analytics for an existing short code.
async fn handle_stats(shorten: &ShortenService<HttpShortenerClient, Terminal>, code: &str) -> bool {
    let panel = shorten.analytics().fetch(code).await;
    matches!(panel, AnalyticsPanel::Ready(_))
}

/// Probes `GET /` and reports the result.
async fn handle_health(api: &HttpShortenerClient, view: &Terminal) -> bool {
    match api.health().await {
        Ok(health) if health.is_ok() => {
            let message = health.message.unwrap_or_else(|| "Backend is running".to_string());
            view.alert(&Notice::success(message));
            true
        }
        Ok(health) => {
            view.alert(&Notice::error(format!(
                "Backend reported status '{}'",
                health.status
            )));
            false
        }
        Err(e) => {
            view.alert(&Notice::error(e.user_message()));
            false
        }
    }
}

/// Prompt loop around the shorten and copy flows.
///
/// # Flow
///
/// 1. Prompt for URL, expiry and alias (the last two may be left empty)
/// 2. Submit; on success offer to copy the short URL
/// 3. Repeat until the user declines
///
/// The session state survives across iterations.
async fn run_interactive(
    shorten: &ShortenService<HttpShortenerClient, Terminal>,
    copier: &ClipboardService<SystemClipboard, Terminal>,
) -> Result<bool> {
    println!("{}", "🔗 URL Shortener".bright_blue().bold());
    println!();

    let mut state = SessionState::new();

    loop {
        let long_url: String = Input::new()
            .with_prompt("Long URL")
            .allow_empty(true)
            .interact_text()?;
        let expiry: String = Input::new()
            .with_prompt("Expiry in minutes (optional)")
            .allow_empty(true)
            .interact_text()?;
        let alias: String = Input::new()
            .with_prompt("Custom alias (optional)")
            .allow_empty(true)
            .interact_text()?;

        let form = ShortenForm::new(long_url, expiry, alias);
        if shorten.submit(&form, &mut state).await.is_ok() {
            let copy = Confirm::new()
                .with_prompt("Copy short URL to clipboard?")
                .default(true)
                .interact()?;
            if copy {
                copier.copy(&state).await;
            }
        }

        println!();
        let again = Confirm::new()
            .with_prompt("Shorten another URL?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    println!("{}", "👋 Bye".bright_black());
    Ok(true)
}
