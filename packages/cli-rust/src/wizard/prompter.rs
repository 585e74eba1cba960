//! Prompt backends
//!
//! [`Prompter`] is the seam between the resolver and the terminal. The
//! production implementation drives dialoguer; tests script the answers.

use anyhow::{Result, anyhow};
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use gcpilot_core::Interrupted;
use gcpilot_core::validation::Validator;

/// Source of interactive answers
pub trait Prompter {
    /// Pick one item; returns its index
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Free text, repeated until `validator` accepts it
    fn input(&self, prompt: &str, validator: Validator) -> Result<String>;

    /// Yes/no question
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Pick any number of items; returns their indices
    fn multi_select(&self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;
}

/// dialoguer-backed prompter for real terminals
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(handle_interrupt)
    }

    fn input(&self, prompt: &str, validator: Validator) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(move |value: &String| validator(value.trim()))
            .interact_text()
            .map(|value| value.trim().to_string())
            .map_err(handle_interrupt)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(handle_interrupt)
    }

    fn multi_select(&self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact()
            .map_err(handle_interrupt)
    }
}

/// Restore the cursor and classify a prompt failure
///
/// Ctrl+C while a prompt owns the terminal surfaces as an interrupted read.
fn handle_interrupt(err: dialoguer::Error) -> anyhow::Error {
    let _ = Term::stdout().show_cursor();
    let io: std::io::Error = err.into();
    if io.kind() == std::io::ErrorKind::Interrupted {
        Interrupted.into()
    } else {
        anyhow!("Prompt failed: {io}")
    }
}
