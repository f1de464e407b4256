//! Terminal output helpers — console styling + indicatif spinner.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a request is in flight.
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn header(text: &str) {
    println!("{}", style(text).bold().cyan());
}

pub fn success(text: &str) {
    println!("{} {}", style("✓").green(), text);
}

pub fn error(text: &str) {
    eprintln!("{} {}", style("error:").red().bold(), text);
}
