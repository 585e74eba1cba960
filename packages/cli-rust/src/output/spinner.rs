//! Spinner for capture-mode gcloud calls

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Spinner around a single fetch
///
/// Hidden when quiet or when stderr is not a terminal. Must not be running
/// while gcloud owns the terminal.
pub struct CommandSpinner {
    bar: ProgressBar,
}

impl CommandSpinner {
    pub fn new_maybe(message: &str, quiet: bool) -> Self {
        let bar = if quiet || !std::io::stderr().is_terminal() {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")
            {
                bar.set_style(template);
            }
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// Remove the spinner line without leaving a message
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for CommandSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// Run `fetch` behind a spinner and clear it afterwards
pub fn with_spinner<T>(message: &str, quiet: bool, fetch: impl FnOnce() -> T) -> T {
    let spinner = CommandSpinner::new_maybe(message, quiet);
    let value = fetch();
    spinner.clear();
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_spinner_is_hidden() {
        let spinner = CommandSpinner::new_maybe("Fetching...", true);
        assert!(spinner.bar.is_hidden());
        spinner.clear();
        assert!(spinner.bar.is_finished());
    }

    #[test]
    fn with_spinner_returns_value() {
        assert_eq!(with_spinner("Working...", true, || 42), 42);
    }
}
