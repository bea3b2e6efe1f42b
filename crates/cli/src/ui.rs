//! Terminal UI helpers for consistent colored output.

use std::future::Future;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use shared::api::QuoteResponse;

/// Print an error message with red X.
fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a hint/suggestion (dimmed, indented).
fn hint(msg: &str) {
    eprintln!("  {} {}", "→".dimmed(), msg.dimmed());
}

/// Print a quote: text, then the author and id dimmed.
pub fn print_quote(quote: &QuoteResponse) {
    println!("{}", quote.text);
    println!(
        "  {} {}",
        format!("— {}", quote.author).dimmed(),
        format!("#{}", quote.id).dimmed()
    );
}

/// Run an async operation with a spinner showing the given message.
/// Returns the result of the operation.
pub async fn spin<T, F: Future<Output = T>>(msg: &str, fut: F) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.dim} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let result = fut.await;

    spinner.finish_and_clear();
    result
}

/// Display an error with contextual hints based on the error message.
pub fn print_error(err: &anyhow::Error) {
    let msg = err.to_string();
    error(&msg);

    if let Some(h) = hint_for(&msg) {
        hint(h);
    }
}

fn hint_for(msg: &str) -> Option<&'static str> {
    // More specific checks first
    if msg.contains("Quote not found") {
        Some("Check the id. `qotd random` prints ids next to each quote.")
    } else if msg.contains("No quote found") {
        Some("The category may be empty. Try again without --category.")
    } else if msg.contains("Internal server error") {
        Some("The server hit an error. Try again in a moment.")
    } else if msg.contains("lang") || msg.contains("category_id") {
        Some("Languages are 2-10 ASCII characters (e.g. de, pt-BR); categories start at 1.")
    } else if msg.contains("connection")
        || msg.contains("Connection")
        || msg.contains("dns")
        || msg.contains("timeout")
        || msg.contains("Timeout")
        || msg.contains("error sending request")
    {
        Some("Is the server running? Set QOTD_API_URL to point at it.")
    } else {
        None
    }
}
