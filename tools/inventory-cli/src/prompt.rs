//! Interactive prompts.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use inventory_console::{Level, Notice, Prompter, SelectOption};

use crate::output::Output;

/// Prints controller notices and asks confirmations on the terminal.
pub struct TerminalPrompter {
    output: Output,
    assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(output: Output, assume_yes: bool) -> Self {
        Self { output, assume_yes }
    }
}

impl Prompter for TerminalPrompter {
    fn notify(&self, notice: Notice) {
        match notice.level {
            Level::Success => self.output.success(&notice.message),
            Level::Error => self.output.error(&notice.message),
        }
    }

    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        // A closed terminal counts as "no".
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Use `preset` when given, otherwise ask with `current` as the default.
pub fn text(label: &str, preset: Option<&str>, current: &str) -> Result<String> {
    if let Some(value) = preset {
        return Ok(value.to_string());
    }
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}

pub fn yes_no(question: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(question)
        .default(default)
        .interact()?)
}

/// Pick one of `options`, or type a value when the list is empty or the
/// user chooses "Other". `current` is preselected when it matches.
pub fn choose(label: &str, preset: Option<&str>, options: &[SelectOption], current: &str) -> Result<String> {
    if let Some(value) = preset {
        return Ok(value.to_string());
    }
    if options.is_empty() {
        return text(label, None, current);
    }

    let mut items: Vec<String> = options
        .iter()
        .map(|o| {
            if o.text == o.value {
                o.text.clone()
            } else {
                format!("{} [{}]", o.text, o.value)
            }
        })
        .collect();
    items.push("Other...".to_string());

    let default = options
        .iter()
        .position(|o| o.value == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(label)
        .items(&items)
        .default(default)
        .interact()?;

    match options.get(selection) {
        Some(option) => Ok(option.value.clone()),
        None => text(label, None, current),
    }
}

/// Plain strings as options whose text is their value.
pub fn plain_options(values: &[String]) -> Vec<SelectOption> {
    values
        .iter()
        .map(|v| SelectOption {
            value: v.clone(),
            text: v.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_skip_prompts() {
        assert_eq!(text("SKU", Some("A1"), "").unwrap(), "A1");
        assert_eq!(
            choose("Status", Some("custom"), &plain_options(&["pending".into()]), "").unwrap(),
            "custom"
        );
    }

    #[test]
    fn test_assume_yes_confirms() {
        let prompter = TerminalPrompter::new(Output::new(false, true), true);
        assert!(prompter.confirm("Delete this product?"));
    }
}
