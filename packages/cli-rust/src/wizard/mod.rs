//! Interactive option resolution
//!
//! Every command declares the parameters it needs as [`ParamSpec`]s. The
//! [`Resolver`] returns a flag value untouched when one was supplied and
//! otherwise prompts for it: a single select over fetched or fixed choices,
//! or validated text input. Mutating commands pass through a confirmation
//! [`Gate`] before anything changes.

pub mod params;
mod prompter;

pub use prompter::{Prompter, TerminalPrompter};

use crate::output::{Display, report, with_spinner};
use anyhow::Result;
use gcpilot_core::ServiceResult;
use gcpilot_core::validation::Validator;

/// Question asked by every confirmation gate
pub const CONFIRM_PROMPT: &str = "Are you sure you want to continue?";

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// A choice whose label is its value
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Extra "type your own" entry appended to a choice list
#[derive(Debug, Clone, Copy)]
pub struct CustomEntry {
    pub label: &'static str,
    pub prompt: &'static str,
    pub validator: Validator,
}

type Fetch<'a> = Box<dyn FnOnce() -> ServiceResult<Vec<Choice>> + 'a>;

/// How to obtain one parameter when no flag supplied it
pub enum ParamSpec<'a> {
    /// Select from a list fetched from gcloud; an empty list fails the
    /// command with `empty_message`
    Choices {
        prompt: String,
        loading: &'static str,
        fetch: Fetch<'a>,
        empty_message: String,
        custom: Option<CustomEntry>,
    },
    /// Validated free text
    Text {
        prompt: &'static str,
        validator: Validator,
    },
    /// Select from a static list
    Fixed {
        prompt: &'static str,
        choices: Vec<Choice>,
        custom: Option<CustomEntry>,
    },
}

/// Outcome of a confirmation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    Declined,
}

/// Stateless resolver over a prompter and a display
pub struct Resolver<'a> {
    prompter: &'a dyn Prompter,
    display: &'a Display,
    quiet: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(prompter: &'a dyn Prompter, display: &'a Display, quiet: bool) -> Self {
        Self {
            prompter,
            display,
            quiet,
        }
    }

    /// Return `supplied` or obtain the value as `spec` describes
    pub fn resolve(&self, supplied: Option<String>, spec: ParamSpec<'_>) -> Result<String> {
        if let Some(value) = supplied {
            return Ok(value);
        }

        match spec {
            ParamSpec::Choices {
                prompt,
                loading,
                fetch,
                empty_message,
                custom,
            } => {
                let choices = with_spinner(loading, self.quiet, fetch)?;
                if choices.is_empty() {
                    return Err(report(self.display, empty_message));
                }
                self.select(&prompt, &choices, custom)
            }
            ParamSpec::Text { prompt, validator } => self.prompter.input(prompt, validator),
            ParamSpec::Fixed {
                prompt,
                choices,
                custom,
            } => self.select(prompt, &choices, custom),
        }
    }

    fn select(&self, prompt: &str, choices: &[Choice], custom: Option<CustomEntry>) -> Result<String> {
        let mut labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
        if let Some(custom) = &custom {
            labels.push(custom.label.to_string());
        }

        let index = self.prompter.select(prompt, &labels)?;
        match (choices.get(index), custom) {
            (Some(choice), _) => Ok(choice.value.clone()),
            (None, Some(custom)) => self.prompter.input(custom.prompt, custom.validator),
            (None, None) => anyhow::bail!("Selection {index} is out of range"),
        }
    }

    /// Show `warning`, then ask for confirmation (default no)
    pub fn gate(&self, warning: &str) -> Result<Gate> {
        self.display.warning(warning);
        if self.prompter.confirm(CONFIRM_PROMPT, false)? {
            Ok(Gate::Proceed)
        } else {
            Ok(Gate::Declined)
        }
    }

    /// Plain yes/no question
    pub fn ask(&self, prompt: &str, default: bool) -> Result<bool> {
        self.prompter.confirm(prompt, default)
    }

    /// Select at least one of `choices`, repeating until something is picked
    pub fn multi_select(&self, prompt: &str, choices: &[Choice]) -> Result<Vec<String>> {
        let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
        loop {
            let picked = self.prompter.multi_select(prompt, &labels)?;
            let values: Vec<String> = picked
                .into_iter()
                .filter_map(|index| choices.get(index))
                .map(|choice| choice.value.clone())
                .collect();
            if !values.is_empty() {
                return Ok(values);
            }
            self.display.warning("Please select at least one item");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Reported;
    use gcpilot_core::Interrupted;
    use gcpilot_core::validation::validate_role;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Answers from a queue; counts prompts
    #[derive(Default)]
    struct Queue {
        selects: RefCell<VecDeque<usize>>,
        inputs: RefCell<VecDeque<String>>,
        confirms: RefCell<VecDeque<bool>>,
        multi: RefCell<VecDeque<Vec<usize>>>,
        prompts: Cell<usize>,
    }

    impl Queue {
        fn bump(&self) {
            self.prompts.set(self.prompts.get() + 1);
        }
    }

    impl Prompter for Queue {
        fn select(&self, _: &str, _: &[String]) -> Result<usize> {
            self.bump();
            Ok(self.selects.borrow_mut().pop_front().unwrap())
        }

        fn input(&self, _: &str, validator: Validator) -> Result<String> {
            self.bump();
            loop {
                let answer = self.inputs.borrow_mut().pop_front().unwrap();
                if validator(&answer).is_ok() {
                    return Ok(answer);
                }
            }
        }

        fn confirm(&self, _: &str, _: bool) -> Result<bool> {
            self.bump();
            Ok(self.confirms.borrow_mut().pop_front().unwrap())
        }

        fn multi_select(&self, _: &str, _: &[String]) -> Result<Vec<usize>> {
            self.bump();
            Ok(self.multi.borrow_mut().pop_front().unwrap())
        }
    }

    fn fetched(values: &[&str]) -> ParamSpec<'static> {
        let choices: Vec<Choice> = values.iter().map(|v| Choice::plain(*v)).collect();
        ParamSpec::Choices {
            prompt: "Select a project:".to_string(),
            loading: "Fetching projects...",
            fetch: Box::new(move || Ok(choices)),
            empty_message: "No projects found".to_string(),
            custom: None,
        }
    }

    #[test]
    fn supplied_value_skips_prompting() {
        let queue = Queue::default();
        let (display, _) = Display::buffered();
        let resolver = Resolver::new(&queue, &display, true);

        let value = resolver
            .resolve(Some("given".to_string()), fetched(&["a", "b"]))
            .unwrap();
        assert_eq!(value, "given");
        assert_eq!(queue.prompts.get(), 0);
    }

    #[test]
    fn fetched_choice_is_selected() {
        let queue = Queue::default();
        queue.selects.borrow_mut().push_back(1);
        let (display, _) = Display::buffered();
        let resolver = Resolver::new(&queue, &display, true);

        assert_eq!(resolver.resolve(None, fetched(&["a", "b"])).unwrap(), "b");
    }

    #[test]
    fn empty_fetch_reports_without_prompting() {
        let queue = Queue::default();
        let (display, buffer) = Display::buffered();
        let resolver = Resolver::new(&queue, &display, true);

        let err = resolver.resolve(None, fetched(&[])).unwrap_err();
        assert!(err.downcast_ref::<Reported>().is_some());
        assert!(buffer.contents().contains("No projects found"));
        assert_eq!(queue.prompts.get(), 0);
    }

    #[test]
    fn interrupted_fetch_propagates() {
        let queue = Queue::default();
        let (display, _) = Display::buffered();
        let resolver = Resolver::new(&queue, &display, true);

        let spec = ParamSpec::Choices {
            prompt: "Select a bucket:".to_string(),
            loading: "Fetching buckets...",
            fetch: Box::new(|| Err(Interrupted)),
            empty_message: "No buckets found".to_string(),
            custom: None,
        };
        let err = resolver.resolve(None, spec).unwrap_err();
        assert!(err.downcast_ref::<Interrupted>().is_some());
    }

    #[test]
    fn custom_entry_prompts_for_text() {
        let queue = Queue::default();
        queue.selects.borrow_mut().push_back(1);
        queue
            .inputs
            .borrow_mut()
            .extend(["viewer".to_string(), "roles/custom.thing".to_string()]);
        let (display, _) = Display::buffered();
        let resolver = Resolver::new(&queue, &display, true);

        let spec = ParamSpec::Fixed {
            prompt: "Select role:",
            choices: vec![Choice::plain("roles/owner")],
            custom: Some(CustomEntry {
                label: "Enter custom role",
                prompt: "Enter custom role (format: roles/...):",
                validator: validate_role,
            }),
        };
        assert_eq!(resolver.resolve(None, spec).unwrap(), "roles/custom.thing");
    }

    #[test]
    fn gate_defaults_to_declined_answer() {
        let queue = Queue::default();
        queue.confirms.borrow_mut().extend([false, true]);
        let (display, buffer) = Display::buffered();
        let resolver = Resolver::new(&queue, &display, true);

        assert_eq!(resolver.gate("This costs money").unwrap(), Gate::Declined);
        assert_eq!(resolver.gate("This costs money").unwrap(), Gate::Proceed);
        assert!(buffer.contents().contains("⚠ This costs money"));
    }

    #[test]
    fn multi_select_repeats_until_non_empty() {
        let queue = Queue::default();
        queue.multi.borrow_mut().extend([vec![], vec![0, 2]]);
        let (display, buffer) = Display::buffered();
        let resolver = Resolver::new(&queue, &display, true);

        let choices = vec![Choice::plain("a"), Choice::plain("b"), Choice::plain("c")];
        let picked = resolver.multi_select("Pick:", &choices).unwrap();
        assert_eq!(picked, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(queue.prompts.get(), 2);
        assert!(buffer.contents().contains("at least one"));
    }
}
