//! Contact Book - Main entry point
//!
//! Runs the assistant bot over stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{bot, Bot, Config};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // stderr only, stdout belongs to the REPL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        birthday_window_days = config.birthday_window_days,
        "Starting contact book"
    );

    let mut bot = Bot::new(&config);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    if let Err(e) = bot::run(&mut bot, stdin, stdout).await {
        error!("I/O error: {}", e);
        return Err(e.into());
    }

    info!("Contact book shutdown complete");
    Ok(())
}
