// Progress indicators and spinners

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::logging::VerbosityLevel;

/// Create a spinner for long-running operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|e| {
            eprintln!("Failed to create spinner template: {}", e);
            ProgressStyle::default_spinner()
        });
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Spinner shown while requests are in flight; hidden in quiet mode
pub fn loading_indicator(message: &str) -> ProgressBar {
    if VerbosityLevel::Normal.should_output() {
        create_spinner(message)
    } else {
        ProgressBar::hidden()
    }
}
