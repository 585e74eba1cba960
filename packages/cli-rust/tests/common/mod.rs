//! Shared harness for CLI scenarios
//!
//! Commands run through [`gcpilot::dispatch`] with a recording gcloud
//! runner, a prompter that replays scripted answers, and a buffered display.

#![allow(dead_code)]

use anyhow::Result;
use clap::Parser;
use gcpilot::output::Display;
use gcpilot::wizard::Prompter;
use gcpilot::{Cli, Context, dispatch, finish};
use gcpilot_core::testing::RecordingRunner;
use gcpilot_core::validation::Validator;
use gcpilot_core::{Config, Interrupted};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Replays answers in order and counts every prompt shown
#[derive(Default)]
pub struct ScriptedPrompter {
    selects: RefCell<VecDeque<usize>>,
    inputs: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    multi: RefCell<VecDeque<Vec<usize>>>,
    interrupt: bool,
    prompts: Cell<usize>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every prompt behaves as if the user pressed Ctrl+C
    pub fn interrupted() -> Self {
        Self {
            interrupt: true,
            ..Self::default()
        }
    }

    pub fn select(self, index: usize) -> Self {
        self.selects.borrow_mut().push_back(index);
        self
    }

    pub fn input(self, answer: &str) -> Self {
        self.inputs.borrow_mut().push_back(answer.to_string());
        self
    }

    pub fn confirm(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    pub fn multi(self, indices: &[usize]) -> Self {
        self.multi.borrow_mut().push_back(indices.to_vec());
        self
    }

    pub fn prompts(&self) -> usize {
        self.prompts.get()
    }

    fn next<T>(&self, queue: &RefCell<VecDeque<T>>, prompt: &str) -> Result<T> {
        self.prompts.set(self.prompts.get() + 1);
        if self.interrupt {
            return Err(Interrupted.into());
        }
        match queue.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => panic!("unscripted prompt: {prompt}"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, _items: &[String]) -> Result<usize> {
        self.next(&self.selects, prompt)
    }

    fn input(&self, prompt: &str, validator: Validator) -> Result<String> {
        let answer = self.next(&self.inputs, prompt)?;
        if let Err(message) = validator(&answer) {
            panic!("scripted answer {answer:?} rejected: {message}");
        }
        Ok(answer)
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.next(&self.confirms, prompt)
    }

    fn multi_select(&self, prompt: &str, _items: &[String]) -> Result<Vec<usize>> {
        self.next(&self.multi, prompt)
    }
}

/// Outcome of one command run
pub struct Outcome {
    pub code: i32,
    pub output: String,
}

/// Parse `args` as a gcpilot command line and run it
pub fn run(args: &[&str], gcloud: &RecordingRunner, prompter: &ScriptedPrompter) -> Outcome {
    let cli = Cli::try_parse_from(std::iter::once("gcpilot").chain(args.iter().copied()))
        .expect("command line should parse");
    let (display, buffer) = Display::buffered();
    let config = Config::default();
    let ctx = Context {
        gcloud,
        prompter,
        display: &display,
        config: &config,
        quiet: true,
    };

    let code = finish(dispatch(cli.command, &ctx), &display);
    Outcome {
        code,
        output: buffer.contents(),
    }
}
