//! Gathering one choice per axis, interactively or from a preset
//!
//! All prompting goes through the [`Prompter`] trait so the selection logic can
//! be driven by the cliclack front end, by a script, or by tests.

use crate::catalog::{
    CatalogOption, ErrorHandlingLibrary, Framework, PackageManager, Runtime, StateLibrary,
    TestingLibrary, UiLibrary, ValidationLibrary,
};
use crate::config::{Configuration, Preset};
use crate::error::{Result, ScaffoldError};
use std::collections::VecDeque;

/// One item of a selection prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: String,
    pub label: String,
    pub hint: String,
}

impl Choice {
    pub fn new(id: impl Into<String>, label: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            hint: hint.into(),
        }
    }

    fn of<T: CatalogOption>(option: &T) -> Self {
        Self::new(option.id(), option.label(), option.hint())
    }
}

/// Front end the collector and workflow talk to.
///
/// Aborting a prompt must surface as [`ScaffoldError::Cancelled`].
pub trait Prompter {
    /// Ask the user to pick one of `items`; returns its index
    fn choose(&mut self, prompt: &str, items: &[Choice]) -> Result<usize>;

    fn confirm(&mut self, prompt: &str, initial: bool) -> Result<bool>;

    fn info(&mut self, message: &str) -> Result<()>;

    fn warning(&mut self, message: &str) -> Result<()>;
}

/// Result of the mode prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetChoice {
    Preset(Configuration),
    Custom,
}

const CUSTOM_ID: &str = "custom";

/// Offer every preset plus a custom setup
pub fn select_preset<P: Prompter + ?Sized>(prompter: &mut P, presets: &[Preset]) -> Result<PresetChoice> {
    let mut items: Vec<Choice> = presets
        .iter()
        .map(|p| Choice::new(p.id.as_str(), p.name.as_str(), p.description.as_str()))
        .collect();
    items.push(Choice::new(CUSTOM_ID, "Custom", "Pick every option yourself"));

    let index = prompter.choose("How would you like to start?", &items)?;
    match presets.get(index) {
        Some(preset) => Ok(PresetChoice::Preset(preset.config)),
        None if index == presets.len() => Ok(PresetChoice::Custom),
        None => Err(out_of_range(index)),
    }
}

/// Ask every axis in order. State and UI lists depend on the chosen framework.
pub fn collect_custom<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Configuration> {
    let framework = choose_option(prompter, "Select a framework", Framework::ALL)?;
    let runtime = choose_option(prompter, "Select a runtime", Runtime::ALL)?;
    let package_manager = choose_option(prompter, "Select a package manager", PackageManager::ALL)?;
    let validation = choose_option(prompter, "Select a validation library", ValidationLibrary::ALL)?;
    let error_handling = choose_option(
        prompter,
        "Select an error handling library",
        ErrorHandlingLibrary::ALL,
    )?;
    let testing = choose_option(prompter, "Select a testing library", TestingLibrary::ALL)?;
    let state = choose_option(
        prompter,
        "Select a state management library",
        StateLibrary::options_for(framework),
    )?;
    let ui = choose_option(prompter, "Select a UI library", UiLibrary::options_for(framework))?;

    let config = Configuration::builder()
        .framework(framework)
        .runtime(runtime)
        .package_manager(package_manager)
        .validation(validation)
        .error_handling(error_handling)
        .testing(testing)
        .state(state)
        .ui(ui)
        .build()?;
    Ok(config)
}

/// Single-select over the values of one axis
pub fn choose_option<P, T>(prompter: &mut P, prompt: &str, options: &[T]) -> Result<T>
where
    P: Prompter + ?Sized,
    T: CatalogOption,
{
    let items: Vec<Choice> = options.iter().map(Choice::of).collect();
    let index = prompter.choose(prompt, &items)?;
    options.get(index).copied().ok_or_else(|| out_of_range(index))
}

fn out_of_range(index: usize) -> ScaffoldError {
    ScaffoldError::Prompt(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        format!("selection {} is out of range", index),
    ))
}

/// Answer for a [`ScriptedPrompter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Pick the item with this id
    Pick(String),
    Confirm(bool),
    /// Abort the prompt as if the user pressed Esc
    Cancel,
}

impl Answer {
    pub fn pick(id: impl Into<String>) -> Self {
        Answer::Pick(id.into())
    }
}

/// Prompter that replays a fixed list of answers, for headless runs and tests.
/// Notices are recorded instead of printed.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub prompts: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(ScaffoldError::Cancelled)
    }
}

impl Prompter for ScriptedPrompter {
    fn choose(&mut self, prompt: &str, items: &[Choice]) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Pick(id) => items
                .iter()
                .position(|item| item.id == id)
                .ok_or_else(|| {
                    ScaffoldError::Prompt(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("'{}' is not offered by \"{}\"", id, prompt),
                    ))
                }),
            Answer::Cancel => Err(ScaffoldError::Cancelled),
            Answer::Confirm(_) => Err(ScaffoldError::Prompt(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("expected a selection for \"{}\"", prompt),
            ))),
        }
    }

    fn confirm(&mut self, prompt: &str, _initial: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            Answer::Cancel => Err(ScaffoldError::Cancelled),
            Answer::Pick(_) => Err(ScaffoldError::Prompt(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("expected a confirmation for \"{}\"", prompt),
            ))),
        }
    }

    fn info(&mut self, message: &str) -> Result<()> {
        self.notices.push(message.to_string());
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.notices.push(format!("warning: {}", message));
        Ok(())
    }
}
